//! S3-compatible image store
//!
//! Works against AWS S3 as well as MinIO/LocalStack via a custom endpoint
//! with path-style access.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Builder as S3ConfigBuilder;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use banner_core::ImageRef;
use chrono::Utc;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::store::ImageStore;
use crate::upload::{sanitize_path_component, storage_filename, ImageUpload};

const DEFAULT_REGION: &str = "us-east-1";

/// Connection settings for [`S3ImageStore`]
#[derive(Debug, Clone)]
pub struct S3StoreConfig {
    pub bucket: String,
    pub region: Option<String>,
    /// Custom endpoint for MinIO/LocalStack
    pub endpoint_url: Option<String>,
    /// Path-style access for MinIO compatibility
    pub force_path_style: bool,
    /// Base URL stored references resolve under; derived from bucket and
    /// region when absent
    pub public_base_url: Option<String>,
}

/// Image store backed by an S3 bucket
pub struct S3ImageStore {
    client: S3Client,
    bucket: String,
    public_base_url: String,
}

impl S3ImageStore {
    /// Create a store from credentials in the ambient AWS environment
    pub async fn new(config: S3StoreConfig) -> Self {
        let region = config
            .region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(region.clone()))
            .load()
            .await;

        let mut s3_config_builder = S3ConfigBuilder::from(&aws_config);

        if let Some(ref endpoint_url) = config.endpoint_url {
            s3_config_builder = s3_config_builder.endpoint_url(endpoint_url);
        }

        if config.force_path_style {
            s3_config_builder = s3_config_builder.force_path_style(true);
        }

        let client = S3Client::from_conf(s3_config_builder.build());

        let public_base_url = public_base_url(&config, &region);

        info!(
            bucket = %config.bucket,
            region = %region,
            base_url = %public_base_url,
            "S3 image store initialized"
        );

        Self {
            client,
            bucket: config.bucket,
            public_base_url,
        }
    }

    /// Map an owned reference back to its bucket key.
    ///
    /// Returns `None` for references under another base URL.
    fn key_for(&self, image_ref: &ImageRef) -> Option<String> {
        let prefix = format!("{}/", self.public_base_url);
        let key = image_ref.as_str().strip_prefix(&prefix)?;

        if key.is_empty() {
            return None;
        }

        Some(key.to_string())
    }
}

fn public_base_url(config: &S3StoreConfig, region: &str) -> String {
    if let Some(ref base) = config.public_base_url {
        return base.trim_end_matches('/').to_string();
    }

    if let Some(ref endpoint) = config.endpoint_url {
        let endpoint = endpoint.trim_end_matches('/');
        if config.force_path_style {
            return format!("{endpoint}/{bucket}", bucket = config.bucket);
        }
    }

    format!(
        "https://{bucket}.s3.{region}.amazonaws.com",
        bucket = config.bucket
    )
}

#[async_trait]
impl ImageStore for S3ImageStore {
    async fn store(
        &self,
        namespace: &str,
        upload: &ImageUpload,
    ) -> Result<ImageRef, StorageError> {
        let key = format!(
            "{}/{}",
            sanitize_path_component(namespace),
            storage_filename(Utc::now().timestamp_millis(), &upload.filename)
        );

        debug!(
            key = %key,
            size_bytes = upload.bytes.len(),
            "Uploading image to S3"
        );

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(upload.bytes.clone()))
            .content_type(upload.content_type_or_guess())
            .send()
            .await
            .map_err(|e| StorageError::ObjectStore(e.to_string()))?;

        let reference = format!("{}/{}", self.public_base_url, key);
        ImageRef::new(reference).map_err(|e| StorageError::InvalidReference(e.to_string()))
    }

    async fn remove(&self, image_ref: &ImageRef) -> Result<(), StorageError> {
        let Some(key) = self.key_for(image_ref) else {
            debug!(reference = %image_ref, "Reference not owned by S3 store, skipping removal");
            return Ok(());
        };

        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(&key)
            .send()
            .await
            .map_err(|e| StorageError::ObjectStore(e.to_string()))?;

        debug!(key = %key, "Image deleted from S3");
        Ok(())
    }
}
