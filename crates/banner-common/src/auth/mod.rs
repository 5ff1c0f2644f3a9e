//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{AdminClaims, IssuedToken, JwtService};
pub use password::{hash_password, verify_password};
