//! # banner-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Admin, Banner, BannerStatus, BannerStatusParseError};
pub use error::DomainError;
pub use traits::{AdminRepository, BannerFilter, BannerRepository, RepoResult};
pub use value_objects::{
    AdminId, BannerId, IdParseError, ImageRef, ImageRefError, PageSlug, PageSlugError,
    WELL_KNOWN_PAGES,
};
