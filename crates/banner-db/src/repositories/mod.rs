//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in banner-core.
//! Each repository handles database operations for a specific domain entity.

mod admin;
mod banner;
mod error;

pub use admin::PgAdminRepository;
pub use banner::PgBannerRepository;
