//! Authentication extractors
//!
//! Extract and verify admin bearer tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use banner_core::AdminId;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated admin extracted from a bearer token
#[derive(Debug, Clone)]
pub struct AdminAuth {
    /// Admin ID from the token subject
    pub admin_id: AdminId,
}

impl AdminAuth {
    /// Create a new AdminAuth
    pub fn new(admin_id: AdminId) -> Self {
        Self { admin_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access JWT service
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .verify_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid bearer token");
                ApiError::InvalidAuthFormat
            })?;

        // Extract admin ID from claims
        let admin_id = claims.admin_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid admin ID in token");
            ApiError::InvalidAuthFormat
        })?;

        Ok(AdminAuth::new(admin_id))
    }
}

/// Optional admin authentication
///
/// The banner list endpoint widens its visibility when a valid token is
/// present. A missing, malformed, or expired token falls back to the public
/// view instead of rejecting the request.
#[derive(Debug, Clone)]
pub struct OptionalAdminAuth(pub Option<AdminAuth>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAdminAuth
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AdminAuth::from_request_parts(parts, state).await {
            Ok(auth) => Ok(OptionalAdminAuth(Some(auth))),
            Err(_) => Ok(OptionalAdminAuth(None)),
        }
    }
}
