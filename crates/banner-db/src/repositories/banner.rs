//! PostgreSQL implementation of BannerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use banner_core::{Banner, BannerFilter, BannerId, BannerRepository, RepoResult};

use crate::models::BannerModel;

use super::error::{banner_not_found, map_db_error};

/// PostgreSQL implementation of BannerRepository
#[derive(Clone)]
pub struct PgBannerRepository {
    pool: PgPool,
}

impl PgBannerRepository {
    /// Create a new PgBannerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BannerRepository for PgBannerRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: BannerId) -> RepoResult<Option<Banner>> {
        let result = sqlx::query_as::<_, BannerModel>(
            r"
            SELECT id, page_slug, image, status::TEXT as status, is_deleted,
                   created_at, updated_at
            FROM banners
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Banner::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self, filter: &BannerFilter) -> RepoResult<Vec<Banner>> {
        let mut sql = String::from(
            "SELECT id, page_slug, image, status::TEXT as status, is_deleted, \
                    created_at, updated_at \
             FROM banners \
             WHERE is_deleted = FALSE",
        );
        if filter.page_slug.is_some() {
            sql.push_str(" AND page_slug = $1");
        }
        if !filter.include_inactive {
            sql.push_str(" AND status = 'active'");
        }
        sql.push_str(" ORDER BY created_at DESC");

        let mut query = sqlx::query_as::<_, BannerModel>(&sql);
        if let Some(ref page_slug) = filter.page_slug {
            query = query.bind(page_slug.as_str());
        }

        let results = query.fetch_all(&self.pool).await.map_err(map_db_error)?;

        results.into_iter().map(Banner::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, banner: &Banner) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO banners (id, page_slug, image, status, is_deleted, created_at, updated_at)
            VALUES ($1, $2, $3, $4::banner_status, $5, $6, $7)
            ",
        )
        .bind(banner.id.into_inner())
        .bind(banner.page_slug.as_str())
        .bind(banner.image_ref.as_str())
        .bind(banner.status.as_str())
        .bind(banner.is_deleted)
        .bind(banner.created_at)
        .bind(banner.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, banner: &Banner) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE banners
            SET page_slug = $2, image = $3, status = $4::banner_status, updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(banner.id.into_inner())
        .bind(banner.page_slug.as_str())
        .bind(banner.image_ref.as_str())
        .bind(banner.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(banner_not_found(banner.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: BannerId) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE banners
            SET is_deleted = TRUE, updated_at = NOW()
            WHERE id = $1 AND is_deleted = FALSE
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
