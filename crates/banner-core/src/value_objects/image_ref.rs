//! Image reference - the stable string locating a banner's stored image
//!
//! A reference is either a root-relative path under the public static-serving
//! root (`/uploads/banners/<file>`) or a fully-qualified URL on an external
//! image host. Which one a record carries depends on the storage backend that
//! handled the upload.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error when constructing an [`ImageRef`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ImageRefError {
    #[error("image reference must not be empty")]
    Empty,
}

/// Reference to a stored banner image
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageRef(String);

impl ImageRef {
    /// Create a reference from raw input
    pub fn new(raw: impl Into<String>) -> Result<Self, ImageRefError> {
        let value = raw.into();
        if value.trim().is_empty() {
            return Err(ImageRefError::Empty);
        }
        Ok(Self(value))
    }

    /// Get the reference as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether the reference points at an external image host
    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }

    /// Whether the reference is a root-relative path served by this process
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.0.starts_with('/') && !self.is_remote()
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ImageRef {
    type Error = ImageRefError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageRef> for String {
    fn from(image_ref: ImageRef) -> Self {
        image_ref.0
    }
}
