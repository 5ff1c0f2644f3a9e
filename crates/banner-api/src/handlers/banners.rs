//! Banner handlers
//!
//! Public banner queries and admin banner management endpoints.

use axum::extract::{Multipart, Path, Query, State};
use banner_core::{BannerFilter, BannerId, PageSlug};
use banner_service::{BannerResponse, BannerService};
use serde::Deserialize;

use crate::extractors::{read_banner_form, AdminAuth, OptionalAdminAuth};
use crate::response::{ApiError, ApiJson, ApiResult, Created, Envelope};
use crate::state::AppState;

/// Query parameters for the banner list endpoints
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerListQuery {
    pub page_slug: Option<String>,
}

impl BannerListQuery {
    /// Parse the optional page filter; blank values count as absent
    fn page_filter(&self) -> ApiResult<Option<PageSlug>> {
        self.page_slug
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(PageSlug::new)
            .transpose()
            .map_err(|e| ApiError::invalid_query(e.to_string()))
    }
}

/// List banners
///
/// GET /banners
///
/// Anonymous callers see active banners only. A valid bearer token widens
/// the result to include inactive banners; an invalid one is ignored.
pub async fn list_banners(
    State(state): State<AppState>,
    auth: OptionalAdminAuth,
    Query(query): Query<BannerListQuery>,
) -> ApiResult<ApiJson<Envelope<Vec<BannerResponse>>>> {
    let page_slug = query.page_filter()?;
    let filter = if auth.0.is_some() {
        BannerFilter::admin(page_slug)
    } else {
        BannerFilter::public(page_slug)
    };

    let service = BannerService::new(state.service_context());
    let banners = service.list(filter).await?;
    Ok(ApiJson(Envelope::data(banners)))
}

/// Get a single banner
///
/// GET /banners/{id}
pub async fn get_banner(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ApiJson<Envelope<BannerResponse>>> {
    let banner_id = parse_banner_id(&id)?;

    let service = BannerService::new(state.service_context());
    let banner = service.get(banner_id).await?;
    Ok(ApiJson(Envelope::data(banner)))
}

/// List active banners for the public site
///
/// GET /public/banner
pub async fn public_banners(
    State(state): State<AppState>,
    Query(query): Query<BannerListQuery>,
) -> ApiResult<ApiJson<Envelope<Vec<BannerResponse>>>> {
    let filter = BannerFilter::public(query.page_filter()?);

    let service = BannerService::new(state.service_context());
    let banners = service.list(filter).await?;
    Ok(ApiJson(Envelope::data(banners)))
}

/// Create a banner
///
/// POST /admin/banners
pub async fn create_banner(
    State(state): State<AppState>,
    _auth: AdminAuth,
    multipart: Multipart,
) -> ApiResult<Created<ApiJson<Envelope<BannerResponse>>>> {
    let request = read_banner_form(multipart).await?.into_create_request()?;

    let service = BannerService::new(state.service_context());
    let banner = service.create(request).await?;
    Ok(Created(ApiJson(Envelope::with_message(
        "Banner created successfully",
        banner,
    ))))
}

/// Update a banner
///
/// PUT /admin/banners/{id}
pub async fn update_banner(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(id): Path<String>,
    multipart: Multipart,
) -> ApiResult<ApiJson<Envelope<BannerResponse>>> {
    let banner_id = parse_banner_id(&id)?;
    let request = read_banner_form(multipart).await?.into_update_request()?;

    let service = BannerService::new(state.service_context());
    let banner = service.update(banner_id, request).await?;
    Ok(ApiJson(Envelope::with_message(
        "Banner updated successfully",
        banner,
    )))
}

/// Delete a banner
///
/// DELETE /admin/banners/{id}
///
/// Succeeds whether or not the banner exists.
pub async fn delete_banner(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Path(id): Path<String>,
) -> ApiResult<ApiJson<Envelope<()>>> {
    // A malformed id cannot name a live banner, so there is nothing to do
    let Ok(banner_id) = BannerId::parse(&id) else {
        return Ok(ApiJson(Envelope::message("Banner deleted successfully")));
    };

    let service = BannerService::new(state.service_context());
    service.delete(banner_id).await?;
    Ok(ApiJson(Envelope::message("Banner deleted successfully")))
}

/// Parse a banner id path segment; malformed values read as unknown banners
fn parse_banner_id(id: &str) -> ApiResult<BannerId> {
    BannerId::parse(id).map_err(|_| ApiError::not_found("Banner", id))
}
