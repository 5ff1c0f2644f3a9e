//! Typed record identifiers backed by v4 UUIDs
//!
//! Each persistent entity gets its own identifier type so a banner id can
//! never be passed where an admin id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error when parsing an identifier from a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("invalid identifier format")]
    InvalidFormat,
}

/// Unique identifier of a banner record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BannerId(Uuid);

impl BannerId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    #[inline]
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the inner UUID
    #[inline]
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| IdParseError::InvalidFormat)
    }
}

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for BannerId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<BannerId> for Uuid {
    fn from(id: BannerId) -> Self {
        id.0
    }
}

impl std::str::FromStr for BannerId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BannerId::parse(s)
    }
}

/// Unique identifier of an admin account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminId(Uuid);

impl AdminId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    #[inline]
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the inner UUID
    #[inline]
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| IdParseError::InvalidFormat)
    }
}

impl fmt::Display for AdminId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for AdminId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<AdminId> for Uuid {
    fn from(id: AdminId) -> Self {
        id.0
    }
}

impl std::str::FromStr for AdminId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AdminId::parse(s)
    }
}
