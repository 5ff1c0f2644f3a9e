//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Banner payloads
//! use camelCase field names to match the contract the marketing site
//! consumes; auth and health payloads keep conventional snake_case.

use banner_common::auth::IssuedToken;
use banner_core::entities::{Admin, Banner};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Banner Responses
// ============================================================================

/// Banner as served to both the public site and the admin panel
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerResponse {
    pub id: String,
    pub page_slug: String,
    pub image: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Banner> for BannerResponse {
    fn from(banner: &Banner) -> Self {
        Self {
            id: banner.id.to_string(),
            page_slug: banner.page_slug.as_str().to_string(),
            image: banner.image_ref.as_str().to_string(),
            status: banner.status.as_str().to_string(),
            created_at: banner.created_at,
            updated_at: banner.updated_at,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Admin profile returned after login
#[derive(Debug, Clone, Serialize)]
pub struct AdminResponse {
    pub id: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Admin> for AdminResponse {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id.to_string(),
            email: admin.email.clone(),
            role: admin.role.clone(),
            created_at: admin.created_at,
        }
    }
}

/// Authentication response with the signed bearer token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub admin: AdminResponse,
}

impl AuthResponse {
    #[must_use]
    pub fn new(issued: IssuedToken, admin: AdminResponse) -> Self {
        Self {
            token: issued.token,
            token_type: issued.token_type,
            expires_in: issued.expires_in,
            admin,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
