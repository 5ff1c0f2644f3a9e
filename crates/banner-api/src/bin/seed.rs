//! Development seed data
//!
//! Run with:
//! ```bash
//! cargo run -p banner-api --bin banner-seed
//! ```
//!
//! Inserts one sample banner per marketing page and, when
//! `SEED_ADMIN_EMAIL` and `SEED_ADMIN_PASSWORD` are set, a first admin
//! account. Existing data is left untouched.

use banner_common::{hash_password, try_init_tracing, AppConfig};
use banner_core::{
    Admin, AdminRepository, Banner, BannerFilter, BannerRepository, BannerStatus, ImageRef,
    PageSlug,
};
use banner_db::{create_pool, run_migrations, PgAdminRepository, PgBannerRepository};
use tracing::{error, info};

/// One banner per marketing page, pointing at images shipped with the site
const SAMPLE_BANNERS: &[(&str, &str)] = &[
    ("home", "/kodaikanal-hill-station.png"),
    ("packages", "/bryant-park-kodaikanal.png"),
    ("tariff", "/luxury-taxi-service-in-tamil-nadu.png"),
    ("contact", "/madurai-meenakshi-temple.png"),
    ("about", "/modern-taxi-fleet-in-tamil-nadu.png"),
];

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    if let Err(e) = run().await {
        error!(error = %e, "Seeding failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    let db_config = banner_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    seed_banners(&PgBannerRepository::new(pool.clone())).await?;
    seed_admin(&PgAdminRepository::new(pool)).await?;

    info!("Seeding complete");
    Ok(())
}

async fn seed_banners(repo: &PgBannerRepository) -> Result<(), Box<dyn std::error::Error>> {
    let existing = repo.list(&BannerFilter::admin(None)).await?;
    if !existing.is_empty() {
        info!(
            count = existing.len(),
            "Banners already present, skipping banner seed"
        );
        return Ok(());
    }

    for &(slug, image) in SAMPLE_BANNERS {
        let banner = Banner::new(
            PageSlug::new(slug)?,
            ImageRef::new(image)?,
            BannerStatus::Active,
        );
        repo.create(&banner).await?;
        info!(page = slug, image = image, "Seeded banner");
    }

    Ok(())
}

async fn seed_admin(repo: &PgAdminRepository) -> Result<(), Box<dyn std::error::Error>> {
    let (Ok(email), Ok(password)) = (
        std::env::var("SEED_ADMIN_EMAIL"),
        std::env::var("SEED_ADMIN_PASSWORD"),
    ) else {
        info!("SEED_ADMIN_EMAIL / SEED_ADMIN_PASSWORD not set, skipping admin seed");
        return Ok(());
    };

    if repo.find_by_email(&email).await?.is_some() {
        info!(email = %email, "Admin already exists, skipping admin seed");
        return Ok(());
    }

    let password_hash = hash_password(&password)?;
    let admin = Admin::new(email.clone());
    repo.create(&admin, &password_hash).await?;
    info!(email = %email, "Seeded admin account");

    Ok(())
}
