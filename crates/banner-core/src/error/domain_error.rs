//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::BannerStatusParseError;
use crate::value_objects::{AdminId, BannerId, ImageRefError, PageSlugError};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Banner not found: {0}")]
    BannerNotFound(BannerId),

    #[error("Admin not found: {0}")]
    AdminNotFound(AdminId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::BannerNotFound(_) => "UNKNOWN_BANNER",
            Self::AdminNotFound(_) => "UNKNOWN_ADMIN",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BannerNotFound(_) | Self::AdminNotFound(_))
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }
}

impl From<PageSlugError> for DomainError {
    fn from(err: PageSlugError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<ImageRefError> for DomainError {
    fn from(err: ImageRefError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<BannerStatusParseError> for DomainError {
    fn from(err: BannerStatusParseError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
