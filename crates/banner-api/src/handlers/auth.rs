//! Authentication handlers
//!
//! Endpoint for admin login.

use axum::extract::State;
use banner_service::{AuthResponse, AuthService, LoginRequest};

use crate::extractors::ValidatedJson;
use crate::response::{ApiJson, ApiResult, Envelope};
use crate::state::AppState;

/// Login with email and password
///
/// POST /admin/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<ApiJson<Envelope<AuthResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(ApiJson(Envelope::data(response)))
}
