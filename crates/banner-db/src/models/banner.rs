//! Banner database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for banners table
#[derive(Debug, Clone, FromRow)]
pub struct BannerModel {
    pub id: Uuid,
    pub page_slug: String,
    pub image: String,
    /// Banner status: 'active' or 'inactive' (stored as PostgreSQL enum)
    pub status: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BannerModel {
    /// Check if the banner is publicly visible
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}
