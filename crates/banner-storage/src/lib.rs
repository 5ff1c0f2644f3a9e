//! # banner-storage
//!
//! Image persistence behind the [`ImageStore`] trait. Two backends:
//!
//! - **Local disk**: files under a configured upload directory, referenced by
//!   root-relative paths a static file layer serves back.
//! - **S3-compatible object storage**: objects referenced by absolute URLs,
//!   with optional custom endpoint for MinIO-style deployments.
//!
//! Each backend only removes references it produced; anything else is left
//! alone so switching backends never destroys the other backend's files.

pub mod error;
pub mod store;
pub mod upload;

pub use error::StorageError;
pub use store::{ImageStore, LocalImageStore, S3ImageStore, S3StoreConfig};
pub use upload::ImageUpload;
