//! Page slug - identifies the site page a banner belongs to

use std::fmt;

use serde::{Deserialize, Serialize};

/// Pages the marketing site is known to render banners on.
///
/// Membership is advisory only; any non-empty slug is accepted so new pages
/// can ship banners without a schema change.
pub const WELL_KNOWN_PAGES: [&str; 5] = ["home", "about", "contact", "packages", "tariff"];

/// Error when constructing a [`PageSlug`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageSlugError {
    #[error("page slug must not be empty")]
    Empty,
}

/// Trimmed, non-empty identifier of a site page
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PageSlug(String);

impl PageSlug {
    /// Create a slug from raw input, trimming surrounding whitespace
    pub fn new(raw: impl Into<String>) -> Result<Self, PageSlugError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(PageSlugError::Empty);
        }
        Ok(Self(trimmed))
    }

    /// Get the slug as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether this slug names one of the known site pages
    #[must_use]
    pub fn is_well_known(&self) -> bool {
        WELL_KNOWN_PAGES.contains(&self.0.as_str())
    }
}

impl fmt::Display for PageSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PageSlug {
    type Error = PageSlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSlug> for String {
    fn from(slug: PageSlug) -> Self {
        slug.0
    }
}

impl std::str::FromStr for PageSlug {
    type Err = PageSlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
