//! Banner entity - a promotional image attached to one site page

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{BannerId, ImageRef, PageSlug};

/// Visibility status of a banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BannerStatus {
    /// Shown on the public site
    #[default]
    Active,
    /// Hidden from the public site but kept for the admin panel
    Inactive,
}

/// Error when parsing a [`BannerStatus`] from a string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown banner status: {0}")]
pub struct BannerStatusParseError(pub String);

impl BannerStatus {
    /// Get the wire/database representation
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Parse from the wire/database representation
    pub fn parse(value: &str) -> Result<Self, BannerStatusParseError> {
        match value {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(BannerStatusParseError(other.to_string())),
        }
    }
}

impl std::fmt::Display for BannerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BannerStatus {
    type Err = BannerStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Banner entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: BannerId,
    pub page_slug: PageSlug,
    pub image_ref: ImageRef,
    pub status: BannerStatus,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Banner {
    /// Create a new banner with a fresh identifier and timestamps
    #[must_use]
    pub fn new(page_slug: PageSlug, image_ref: ImageRef, status: BannerStatus) -> Self {
        let now = Utc::now();
        Self {
            id: BannerId::generate(),
            page_slug,
            image_ref,
            status,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the banner is shown on the public site
    #[inline]
    #[must_use]
    pub fn is_publicly_visible(&self) -> bool {
        self.status == BannerStatus::Active && !self.is_deleted
    }

    /// Move the banner to another page
    pub fn set_page_slug(&mut self, page_slug: PageSlug) {
        self.page_slug = page_slug;
        self.updated_at = Utc::now();
    }

    /// Change visibility status
    pub fn set_status(&mut self, status: BannerStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Point the banner at a newly stored image, dropping the old reference
    pub fn replace_image(&mut self, image_ref: ImageRef) {
        self.image_ref = image_ref;
        self.updated_at = Utc::now();
    }

    /// Mark the banner soft-deleted; there is no way back
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
        self.updated_at = Utc::now();
    }
}
