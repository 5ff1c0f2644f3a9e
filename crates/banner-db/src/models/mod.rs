//! Database models - SQLx-compatible structs for PostgreSQL tables

mod admin;
mod banner;

pub use admin::AdminModel;
pub use banner::BannerModel;
