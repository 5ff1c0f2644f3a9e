//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod banner;
pub mod context;
pub mod error;

// Re-export all services for convenience
pub use auth::AuthService;
pub use banner::BannerService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
