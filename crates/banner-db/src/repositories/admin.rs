//! PostgreSQL implementation of AdminRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use banner_core::{Admin, AdminId, AdminRepository, DomainError, RepoResult};

use crate::models::AdminModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of AdminRepository
#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    /// Create a new PgAdminRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: AdminId) -> RepoResult<Option<Admin>> {
        let result = sqlx::query_as::<_, AdminModel>(
            r"
            SELECT id, email, password_hash, role, created_at, updated_at
            FROM admins
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Admin::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Admin>> {
        let result = sqlx::query_as::<_, AdminModel>(
            r"
            SELECT id, email, password_hash, role, created_at, updated_at
            FROM admins
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Admin::from))
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, admin: &Admin, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO admins (id, email, password_hash, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(admin.id.into_inner())
        .bind(&admin.email)
        .bind(password_hash)
        .bind(&admin.role)
        .bind(admin.created_at)
        .bind(admin.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::ValidationError("Email already registered".to_string())
            })
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: AdminId) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM admins WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }
}
