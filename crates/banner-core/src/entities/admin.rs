//! Admin entity - an account allowed to mutate banners
//!
//! The password hash is deliberately not part of the entity; it is passed to
//! and read from the repository separately so it never travels with profile
//! data.

use chrono::{DateTime, Utc};

use crate::value_objects::AdminId;

/// Default role claim for admin accounts
pub const DEFAULT_ROLE: &str = "admin";

/// Admin account entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    pub id: AdminId,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Admin {
    /// Create a new admin account with the default role
    #[must_use]
    pub fn new(email: String) -> Self {
        let now = Utc::now();
        Self {
            id: AdminId::generate(),
            email,
            role: DEFAULT_ROLE.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new admin account with an explicit role
    #[must_use]
    pub fn with_role(email: String, role: String) -> Self {
        let mut admin = Self::new(email);
        admin.role = role;
        admin
    }
}
