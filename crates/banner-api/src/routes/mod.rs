//! Route definitions
//!
//! All API routes organized by audience: public banner reads and the
//! admin management surface.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{auth, banners, health};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health probes)
pub fn create_router() -> Router<AppState> {
    Router::new().merge(banner_routes()).merge(admin_routes())
}

/// Health and readiness probe routes, merged in at app assembly
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Banner read routes
fn banner_routes() -> Router<AppState> {
    Router::new()
        .route("/banners", get(banners::list_banners))
        .route("/banners/:banner_id", get(banners::get_banner))
        .route("/public/banner", get(banners::public_banners))
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/auth/login", post(auth::login))
        .route("/admin/banners", post(banners::create_banner))
        .route("/admin/banners/:banner_id", put(banners::update_banner))
        .route("/admin/banners/:banner_id", delete(banners::delete_banner))
}
