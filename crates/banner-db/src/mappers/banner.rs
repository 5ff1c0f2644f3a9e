//! Banner model -> entity mapper

use banner_core::{Banner, BannerId, BannerStatus, DomainError, ImageRef, PageSlug};

use crate::models::BannerModel;

/// Convert database status string to BannerStatus enum
fn parse_status(status: &str) -> BannerStatus {
    // The banner_status enum constrains values; fall back rather than fail
    BannerStatus::parse(status).unwrap_or_default()
}

/// Convert BannerModel to Banner entity
impl TryFrom<BannerModel> for Banner {
    type Error = DomainError;

    fn try_from(model: BannerModel) -> Result<Self, Self::Error> {
        let page_slug = PageSlug::new(model.page_slug)
            .map_err(|e| DomainError::DatabaseError(format!("banners.page_slug: {e}")))?;
        let image_ref = ImageRef::new(model.image)
            .map_err(|e| DomainError::DatabaseError(format!("banners.image: {e}")))?;

        Ok(Banner {
            id: BannerId::from_uuid(model.id),
            page_slug,
            image_ref,
            status: parse_status(&model.status),
            is_deleted: model.is_deleted,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
