//! Authentication service
//!
//! Verifies admin credentials and issues bearer tokens for the admin panel.

use banner_common::auth::verify_password;
use banner_common::AppError;
use tracing::{info, instrument, warn};

use crate::dto::{AdminResponse, AuthResponse, LoginRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        // Find admin by email
        let admin = self
            .ctx
            .admin_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: admin not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Get password hash
        let password_hash = self
            .ctx
            .admin_repo()
            .get_password_hash(admin.id)
            .await?
            .ok_or_else(|| {
                warn!(admin_id = %admin.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(admin_id = %admin.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(admin_id = %admin.id, "Admin logged in");

        // Sign a bearer token
        let issued = self
            .ctx
            .jwt_service()
            .issue_token(&admin)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(issued, AdminResponse::from(&admin)))
    }
}
