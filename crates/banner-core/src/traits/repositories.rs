//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Admin, Banner};
use crate::error::DomainError;
use crate::value_objects::{AdminId, BannerId, PageSlug};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Criteria for listing banners.
///
/// Soft-deleted records are excluded unconditionally; the fields here only
/// narrow the visible set further.
#[derive(Debug, Clone, Default)]
pub struct BannerFilter {
    /// Restrict to banners of one site page
    pub page_slug: Option<PageSlug>,
    /// Include `inactive` banners (admin view); the public view never does
    pub include_inactive: bool,
}

impl BannerFilter {
    /// The filter the public site queries with: active banners only
    #[must_use]
    pub fn public(page_slug: Option<PageSlug>) -> Self {
        Self {
            page_slug,
            include_inactive: false,
        }
    }

    /// The filter an authenticated admin queries with: both statuses
    #[must_use]
    pub fn admin(page_slug: Option<PageSlug>) -> Self {
        Self {
            page_slug,
            include_inactive: true,
        }
    }
}

// ============================================================================
// Banner Repository
// ============================================================================

#[async_trait]
pub trait BannerRepository: Send + Sync {
    /// Find a non-deleted banner by ID
    async fn find_by_id(&self, id: BannerId) -> RepoResult<Option<Banner>>;

    /// List non-deleted banners matching the filter, newest first
    async fn list(&self, filter: &BannerFilter) -> RepoResult<Vec<Banner>>;

    /// Insert a new banner
    async fn create(&self, banner: &Banner) -> RepoResult<()>;

    /// Update an existing non-deleted banner; not-found if the id does not
    /// resolve to one
    async fn update(&self, banner: &Banner) -> RepoResult<()>;

    /// Mark a banner deleted; returns whether a live record was affected
    async fn soft_delete(&self, id: BannerId) -> RepoResult<bool>;
}

// ============================================================================
// Admin Repository
// ============================================================================

#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Find admin by ID
    async fn find_by_id(&self, id: AdminId) -> RepoResult<Option<Admin>>;

    /// Find admin by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Admin>>;

    /// Create a new admin account
    async fn create(&self, admin: &Admin, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: AdminId) -> RepoResult<Option<String>>;
}
