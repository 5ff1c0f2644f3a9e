//! Value objects - immutable types that represent domain concepts

mod ids;
mod image_ref;
mod page_slug;

pub use ids::{AdminId, BannerId, IdParseError};
pub use image_ref::{ImageRef, ImageRefError};
pub use page_slug::{PageSlug, PageSlugError, WELL_KNOWN_PAGES};
