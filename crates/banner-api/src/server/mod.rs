//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use banner_common::{AppConfig, AppError, JwtService, StorageBackend};
use banner_db::{create_pool, run_migrations, PgAdminRepository, PgBannerRepository};
use banner_service::ServiceContextBuilder;
use banner_storage::{ImageStore, LocalImageStore, S3ImageStore, S3StoreConfig};
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());

    // Local uploads are served back as static files under the public prefix
    let router = match state.config().storage.backend {
        StorageBackend::Local => {
            let prefix = upload_route_prefix(&state.config().storage.public_prefix);
            let dir = state.config().storage.upload_dir.clone();
            router.nest_service(&prefix, ServeDir::new(dir))
        }
        StorageBackend::S3 => router,
    };

    let router = apply_middleware(router, state.config());
    router.with_state(state)
}

/// Normalize the configured public prefix into a mountable route path
fn upload_route_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = banner_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply pending migrations
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry));

    // Create image store
    let image_store: Arc<dyn ImageStore> = match config.storage.backend {
        StorageBackend::Local => {
            info!(dir = %config.storage.upload_dir, "Using local image storage");
            Arc::new(LocalImageStore::new(
                config.storage.upload_dir.clone(),
                config.storage.public_prefix.clone(),
            ))
        }
        StorageBackend::S3 => {
            let bucket = config.storage.s3_bucket.clone().ok_or_else(|| {
                AppError::Config("S3_BUCKET is required for the s3 storage backend".to_string())
            })?;
            info!(bucket = %bucket, "Using S3 image storage");
            Arc::new(
                S3ImageStore::new(S3StoreConfig {
                    bucket,
                    region: config.storage.s3_region.clone(),
                    endpoint_url: config.storage.s3_endpoint_url.clone(),
                    force_path_style: config.storage.s3_force_path_style,
                    public_base_url: config.storage.s3_public_base_url.clone(),
                })
                .await,
            )
        }
    };

    // Create repositories
    let banner_repo = Arc::new(PgBannerRepository::new(pool.clone()));
    let admin_repo = Arc::new(PgAdminRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .banner_repo(banner_repo)
        .admin_repo(admin_repo)
        .image_store(image_store)
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, pool))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .server
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid server address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
