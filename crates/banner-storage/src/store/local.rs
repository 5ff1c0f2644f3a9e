//! Local disk image store
//!
//! Writes uploads under `<root>/<namespace>/` and returns root-relative
//! references (`/uploads/banners/<file>`) for the static file layer to serve.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use banner_core::ImageRef;
use chrono::Utc;
use tokio::fs;
use tracing::debug;

use crate::error::StorageError;
use crate::store::ImageStore;
use crate::upload::{sanitize_path_component, storage_filename, ImageUpload};

/// Image store backed by the local filesystem
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    root: PathBuf,
    public_prefix: String,
}

impl LocalImageStore {
    /// Create a store rooted at `root`, returning references under
    /// `public_prefix`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        let public_prefix = public_prefix.into().trim_end_matches('/').to_string();
        Self {
            root: root.into(),
            public_prefix,
        }
    }

    /// The directory uploads are written under
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map an owned reference back to its on-disk path.
    ///
    /// Returns `None` for remote references, references under another prefix,
    /// and anything containing traversal components.
    fn disk_path_for(&self, image_ref: &ImageRef) -> Option<PathBuf> {
        if !image_ref.is_local() {
            return None;
        }

        let prefix = format!("{}/", self.public_prefix);
        let relative = image_ref.as_str().strip_prefix(&prefix)?;

        if relative.is_empty()
            || relative
                .split('/')
                .any(|part| part.is_empty() || part == "." || part == "..")
        {
            return None;
        }

        Some(self.root.join(relative))
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn store(
        &self,
        namespace: &str,
        upload: &ImageUpload,
    ) -> Result<ImageRef, StorageError> {
        let namespace = sanitize_path_component(namespace);
        let dir = self.root.join(&namespace);
        fs::create_dir_all(&dir).await?;

        let filename = storage_filename(Utc::now().timestamp_millis(), &upload.filename);
        let path = dir.join(&filename);
        fs::write(&path, &upload.bytes).await?;

        debug!(
            path = %path.display(),
            size_bytes = upload.bytes.len(),
            "Image written to disk"
        );

        let reference = format!("{}/{}/{}", self.public_prefix, namespace, filename);
        ImageRef::new(reference).map_err(|e| StorageError::InvalidReference(e.to_string()))
    }

    async fn remove(&self, image_ref: &ImageRef) -> Result<(), StorageError> {
        let Some(path) = self.disk_path_for(image_ref) else {
            debug!(reference = %image_ref, "Reference not owned by local store, skipping removal");
            return Ok(());
        };

        fs::remove_file(&path).await?;
        debug!(path = %path.display(), "Image removed from disk");
        Ok(())
    }
}
