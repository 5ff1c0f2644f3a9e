//! Domain entities - core business objects

mod admin;
mod banner;

pub use admin::Admin;
pub use banner::{Banner, BannerStatus, BannerStatusParseError};
