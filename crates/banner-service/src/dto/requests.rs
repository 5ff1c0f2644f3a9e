//! Request DTOs for API endpoints
//!
//! `LoginRequest` arrives as JSON and implements `Deserialize` and `Validate`.
//! The banner requests are assembled from multipart form data by the API
//! layer, so required-field checks happen there and the payloads here are
//! plain structs.

use banner_storage::ImageUpload;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Admin login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// Banner Requests
// ============================================================================

/// Create a banner from an uploaded image
#[derive(Debug, Clone)]
pub struct CreateBannerRequest {
    /// Page the banner belongs to
    pub page_slug: String,
    /// Visibility status; defaults to `active` when absent or blank
    pub status: Option<String>,
    /// Image to store
    pub file: ImageUpload,
}

/// Update a banner's page, status, or image
#[derive(Debug, Clone)]
pub struct UpdateBannerRequest {
    /// Page the banner belongs to
    pub page_slug: String,
    /// Visibility status; the current value is kept when absent or blank
    pub status: Option<String>,
    /// Replacement image; the current image is kept when absent
    pub file: Option<ImageUpload>,
}
