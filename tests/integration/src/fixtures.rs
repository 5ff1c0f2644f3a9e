//! Test fixtures and data generators
//!
//! Provides reusable test data and wire-format mirrors for integration tests.

use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a suffix unique across test runs sharing a database
pub fn unique_suffix() -> String {
    format!(
        "{}-{}",
        Utc::now().timestamp_millis(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    )
}

/// Generate a page slug no other test uses
pub fn unique_page_slug() -> String {
    format!("page-{}", unique_suffix())
}

/// Bytes of a minimal PNG payload (signature plus filler)
pub fn png_bytes() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
        0x44, 0x52,
    ]
}

/// Multipart form creating a banner for `page_slug`
pub fn banner_form(page_slug: &str) -> Form {
    Form::new()
        .text("pageSlug", page_slug.to_string())
        .part("file", image_part())
}

/// Multipart form creating a banner with an explicit status
pub fn banner_form_with_status(page_slug: &str, status: &str) -> Form {
    Form::new()
        .text("pageSlug", page_slug.to_string())
        .text("status", status.to_string())
        .part("file", image_part())
}

/// Multipart form missing the file field
pub fn form_without_file(page_slug: &str) -> Form {
    Form::new().text("pageSlug", page_slug.to_string())
}

/// Multipart form missing the pageSlug field
pub fn form_without_slug() -> Form {
    Form::new().part("file", image_part())
}

/// A file part with a unique name so parallel tests never collide on disk
fn image_part() -> Part {
    let suffix = unique_suffix();
    Part::bytes(png_bytes())
        .file_name(format!("banner-{suffix}.png"))
        .mime_str("image/png")
        .expect("valid mime type")
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Response envelope every endpoint answers with
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Banner response
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerResponse {
    pub id: String,
    pub page_slug: String,
    pub image: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Auth response
#[derive(Debug, Default, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub admin: AdminResponse,
}

/// Admin response
#[derive(Debug, Default, Deserialize)]
pub struct AdminResponse {
    pub id: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
}

/// Error response body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
}
