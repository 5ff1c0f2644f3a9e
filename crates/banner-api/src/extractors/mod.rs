//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and multipart forms.

mod auth;
mod multipart;
mod validated;

pub use auth::{AdminAuth, OptionalAdminAuth};
pub use multipart::{read_banner_form, BannerForm};
pub use validated::ValidatedJson;
