//! Multipart form extraction for banner uploads
//!
//! The banner create and update endpoints accept `multipart/form-data` with
//! `pageSlug`, `status`, and `file` parts. Field presence rules differ
//! between the two, so the form is read into an intermediate struct first.

use axum::extract::Multipart;
use banner_service::{CreateBannerRequest, UpdateBannerRequest};
use banner_storage::ImageUpload;

use crate::response::ApiError;

/// Fields read from a banner multipart form
#[derive(Debug, Default)]
pub struct BannerForm {
    pub page_slug: Option<String>,
    pub status: Option<String>,
    pub file: Option<ImageUpload>,
}

impl BannerForm {
    /// Convert into a create request; `pageSlug` and `file` are required
    pub fn into_create_request(self) -> Result<CreateBannerRequest, ApiError> {
        let (Some(page_slug), Some(file)) = (self.page_slug, self.file) else {
            return Err(ApiError::bad_multipart("Missing required fields"));
        };

        Ok(CreateBannerRequest {
            page_slug,
            status: self.status,
            file,
        })
    }

    /// Convert into an update request; only `pageSlug` is required
    pub fn into_update_request(self) -> Result<UpdateBannerRequest, ApiError> {
        let Some(page_slug) = self.page_slug else {
            return Err(ApiError::bad_multipart("pageSlug is required"));
        };

        Ok(UpdateBannerRequest {
            page_slug,
            status: self.status,
            file: self.file,
        })
    }
}

/// Read the multipart fields the banner endpoints accept
///
/// Unknown parts are skipped. A file part with no content counts as absent.
pub async fn read_banner_form(mut multipart: Multipart) -> Result<BannerForm, ApiError> {
    let mut form = BannerForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_multipart(e.to_string()))?
    {
        let name = field.name().map(ToString::to_string);

        match name.as_deref() {
            Some("pageSlug") => {
                form.page_slug = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::bad_multipart(e.to_string()))?,
                );
            }
            Some("status") => {
                form.status = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::bad_multipart(e.to_string()))?,
                );
            }
            Some("file") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(ToString::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_multipart(e.to_string()))?;

                if !bytes.is_empty() {
                    form.file = Some(ImageUpload::new(filename, content_type, bytes.to_vec()));
                }
            }
            _ => {}
        }
    }

    Ok(form)
}
