//! JWT utilities for admin authentication
//!
//! Provides token encoding, decoding, and validation using the `jsonwebtoken` crate.
//! Tokens are single-purpose bearer credentials: one signed admin identity per
//! token, no refresh flow.

use banner_core::{Admin, AdminId};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims carried by an admin bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Subject (admin ID)
    pub sub: String,
    /// Admin email
    pub email: String,
    /// Admin role
    pub role: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AdminClaims {
    /// Get the admin ID from the subject claim
    ///
    /// # Errors
    /// Returns an error if the subject is not a valid identifier
    pub fn admin_id(&self) -> Result<AdminId, AppError> {
        AdminId::parse(&self.sub).map_err(|_| AppError::InvalidToken)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// A freshly signed bearer token plus its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
}

/// JWT service for encoding and decoding admin tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and expiry in seconds
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Sign a bearer token for an admin account
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_token(&self, admin: &Admin) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let claims = AdminClaims {
            sub: admin.id.to_string(),
            email: admin.email.clone(),
            role: admin.role.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))?;

        Ok(IssuedToken {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_expiry,
        })
    }

    /// Decode and validate a bearer token
    ///
    /// # Errors
    /// Returns `TokenExpired` for expired tokens and `InvalidToken` for any
    /// other verification failure
    pub fn verify_token(&self, token: &str) -> Result<AdminClaims, AppError> {
        let validation = Validation::default();

        let token_data =
            decode::<AdminClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::InvalidToken,
                }
            })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry", &self.token_expiry)
            .finish_non_exhaustive()
    }
}
