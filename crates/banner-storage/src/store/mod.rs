//! The image store port and its backends

mod local;
mod s3;

use async_trait::async_trait;
use banner_core::ImageRef;

use crate::error::StorageError;
use crate::upload::ImageUpload;

pub use local::LocalImageStore;
pub use s3::{S3ImageStore, S3StoreConfig};

/// Persists uploaded images and hands back stable references.
///
/// `store` must complete before any database write that records the returned
/// reference; a failure here aborts the surrounding operation.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist the upload under a logical namespace (e.g. `banners`) and
    /// return the reference to record
    async fn store(&self, namespace: &str, upload: &ImageUpload)
        -> Result<ImageRef, StorageError>;

    /// Remove a previously stored image. References this backend does not
    /// own are ignored.
    async fn remove(&self, image_ref: &ImageRef) -> Result<(), StorageError>;
}
