//! Banner service
//!
//! Handles banner listing, creation, updates, and soft deletion, including
//! orchestration of the image store.

use banner_core::entities::{Banner, BannerStatus};
use banner_core::traits::BannerFilter;
use banner_core::value_objects::{BannerId, PageSlug};
use tracing::{info, instrument, warn};

use crate::dto::{BannerResponse, CreateBannerRequest, UpdateBannerRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Namespace banner images are stored under
const IMAGE_NAMESPACE: &str = "banners";

/// Banner service
pub struct BannerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BannerService<'a> {
    /// Create a new BannerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List banners matching the filter, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, filter: BannerFilter) -> ServiceResult<Vec<BannerResponse>> {
        let banners = self.ctx.banner_repo().list(&filter).await?;
        Ok(banners.iter().map(BannerResponse::from).collect())
    }

    /// Get a banner by ID
    #[instrument(skip(self))]
    pub async fn get(&self, banner_id: BannerId) -> ServiceResult<BannerResponse> {
        let banner = self
            .ctx
            .banner_repo()
            .find_by_id(banner_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Banner", banner_id.to_string()))?;

        Ok(BannerResponse::from(&banner))
    }

    /// Create a banner from an uploaded image
    ///
    /// The image is stored before the record is inserted; a storage failure
    /// aborts the operation without touching the database.
    #[instrument(skip(self, request), fields(page_slug = %request.page_slug))]
    pub async fn create(&self, request: CreateBannerRequest) -> ServiceResult<BannerResponse> {
        let page_slug = PageSlug::new(request.page_slug)
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        let status = parse_status(request.status.as_deref())?.unwrap_or_default();

        if !page_slug.is_well_known() {
            warn!(page_slug = %page_slug, "Creating banner for a page outside the known set");
        }

        if request.file.is_empty() {
            return Err(ServiceError::validation("Uploaded file is empty"));
        }

        let image_ref = self
            .ctx
            .image_store()
            .store(IMAGE_NAMESPACE, &request.file)
            .await?;

        let banner = Banner::new(page_slug, image_ref, status);
        self.ctx.banner_repo().create(&banner).await?;

        info!(banner_id = %banner.id, page_slug = %banner.page_slug, "Banner created");

        Ok(BannerResponse::from(&banner))
    }

    /// Update a banner's page, status, or image
    #[instrument(skip(self, request), fields(page_slug = %request.page_slug))]
    pub async fn update(
        &self,
        banner_id: BannerId,
        request: UpdateBannerRequest,
    ) -> ServiceResult<BannerResponse> {
        let mut banner = self
            .ctx
            .banner_repo()
            .find_by_id(banner_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Banner", banner_id.to_string()))?;

        let page_slug = PageSlug::new(request.page_slug)
            .map_err(|e| ServiceError::validation(e.to_string()))?;
        banner.set_page_slug(page_slug);

        if let Some(status) = parse_status(request.status.as_deref())? {
            banner.set_status(status);
        }

        // Store the replacement image before mutating the record so a
        // storage failure leaves the old reference in place
        let old_image = if let Some(file) = &request.file {
            if file.is_empty() {
                return Err(ServiceError::validation("Uploaded file is empty"));
            }
            let new_image = self.ctx.image_store().store(IMAGE_NAMESPACE, file).await?;
            let old = banner.image_ref.clone();
            banner.replace_image(new_image);
            Some(old)
        } else {
            None
        };

        self.ctx.banner_repo().update(&banner).await?;

        // The old image is unreferenced now; a removal failure only leaks a file
        if let Some(old_image) = old_image {
            if let Err(e) = self.ctx.image_store().remove(&old_image).await {
                warn!(banner_id = %banner.id, error = %e, "Failed to remove replaced banner image");
            }
        }

        info!(banner_id = %banner.id, "Banner updated");

        Ok(BannerResponse::from(&banner))
    }

    /// Soft-delete a banner and remove its stored image
    ///
    /// Deletion is idempotent: deleting an unknown or already-deleted banner
    /// succeeds without touching anything.
    #[instrument(skip(self))]
    pub async fn delete(&self, banner_id: BannerId) -> ServiceResult<()> {
        let Some(banner) = self.ctx.banner_repo().find_by_id(banner_id).await? else {
            info!(banner_id = %banner_id, "Delete requested for unknown banner");
            return Ok(());
        };

        self.ctx.banner_repo().soft_delete(banner_id).await?;

        if let Err(e) = self.ctx.image_store().remove(&banner.image_ref).await {
            warn!(banner_id = %banner_id, error = %e, "Failed to remove deleted banner image");
        }

        info!(banner_id = %banner_id, "Banner deleted");

        Ok(())
    }
}

/// Parse an optional status field; blank values count as absent
fn parse_status(raw: Option<&str>) -> ServiceResult<Option<BannerStatus>> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => BannerStatus::parse(s.trim())
            .map(Some)
            .map_err(|e| ServiceError::validation(e.to_string())),
    }
}
