//! Service context - dependency container for services
//!
//! Holds the repositories, image store, and auth utilities needed by services.

use std::sync::Arc;

use banner_common::auth::JwtService;
use banner_core::traits::{AdminRepository, BannerRepository};
use banner_storage::ImageStore;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The image store backend
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    banner_repo: Arc<dyn BannerRepository>,
    admin_repo: Arc<dyn AdminRepository>,

    // Storage
    image_store: Arc<dyn ImageStore>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        banner_repo: Arc<dyn BannerRepository>,
        admin_repo: Arc<dyn AdminRepository>,
        image_store: Arc<dyn ImageStore>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            banner_repo,
            admin_repo,
            image_store,
            jwt_service,
        }
    }

    // === Repositories ===

    /// Get the banner repository
    pub fn banner_repo(&self) -> &dyn BannerRepository {
        self.banner_repo.as_ref()
    }

    /// Get the admin repository
    pub fn admin_repo(&self) -> &dyn AdminRepository {
        self.admin_repo.as_ref()
    }

    // === Storage ===

    /// Get the image store
    pub fn image_store(&self) -> &dyn ImageStore {
        self.image_store.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("image_store", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    banner_repo: Option<Arc<dyn BannerRepository>>,
    admin_repo: Option<Arc<dyn AdminRepository>>,
    image_store: Option<Arc<dyn ImageStore>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            banner_repo: None,
            admin_repo: None,
            image_store: None,
            jwt_service: None,
        }
    }

    pub fn banner_repo(mut self, repo: Arc<dyn BannerRepository>) -> Self {
        self.banner_repo = Some(repo);
        self
    }

    pub fn admin_repo(mut self, repo: Arc<dyn AdminRepository>) -> Self {
        self.admin_repo = Some(repo);
        self
    }

    pub fn image_store(mut self, store: Arc<dyn ImageStore>) -> Self {
        self.image_store = Some(store);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.banner_repo
                .ok_or_else(|| super::error::ServiceError::validation("banner_repo is required"))?,
            self.admin_repo
                .ok_or_else(|| super::error::ServiceError::validation("admin_repo is required"))?,
            self.image_store
                .ok_or_else(|| super::error::ServiceError::validation("image_store is required"))?,
            self.jwt_service
                .ok_or_else(|| super::error::ServiceError::validation("jwt_service is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
