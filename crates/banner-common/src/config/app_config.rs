//! Application configuration structs
//!
//! Loads configuration from environment variables (with `.env` support).

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub storage: StorageConfig,
    pub cors: CorsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_token_expiry")]
    pub token_expiry: i64,
}

/// Which backend stores uploaded banner images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Local disk under `upload_dir`, served back at `public_prefix`
    #[default]
    Local,
    /// S3-compatible object storage
    S3,
}

/// Image storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size_mb: u32,
    /// Required when `backend` is `s3`
    #[serde(default)]
    pub s3_bucket: Option<String>,
    #[serde(default)]
    pub s3_region: Option<String>,
    /// Custom endpoint for MinIO-compatible deployments
    #[serde(default)]
    pub s3_endpoint_url: Option<String>,
    #[serde(default)]
    pub s3_force_path_style: bool,
    /// Base URL prepended to object keys in returned references
    #[serde(default)]
    pub s3_public_base_url: Option<String>,
}

impl StorageConfig {
    /// Maximum upload size in bytes
    #[must_use]
    pub fn max_upload_size_bytes(&self) -> usize {
        self.max_upload_size_mb as usize * 1024 * 1024
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_app_name() -> String {
    "banner-service".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_token_expiry() -> i64 {
    86400 // 24 hours
}

fn default_upload_dir() -> String {
    "./uploads".to_string()
}

fn default_public_prefix() -> String {
    "/uploads".to_string()
}

fn default_max_upload_size() -> u32 {
    10
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage = StorageConfig {
            backend: match env::var("STORAGE_BACKEND") {
                Ok(s) => match s.to_lowercase().as_str() {
                    "local" => StorageBackend::Local,
                    "s3" => StorageBackend::S3,
                    other => {
                        return Err(ConfigError::InvalidValue(
                            "STORAGE_BACKEND",
                            other.to_string(),
                        ))
                    }
                },
                Err(_) => StorageBackend::default(),
            },
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| default_upload_dir()),
            public_prefix: env::var("PUBLIC_UPLOAD_PREFIX")
                .unwrap_or_else(|_| default_public_prefix()),
            max_upload_size_mb: env::var("MAX_UPLOAD_SIZE_MB")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_max_upload_size),
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION").ok(),
            s3_endpoint_url: env::var("S3_ENDPOINT_URL").ok(),
            s3_force_path_style: env::var("S3_FORCE_PATH_STYLE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false),
            s3_public_base_url: env::var("S3_PUBLIC_BASE_URL").ok(),
        };

        if storage.backend == StorageBackend::S3 && storage.s3_bucket.is_none() {
            return Err(ConfigError::MissingVar("S3_BUCKET"));
        }

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: env::var("API_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_port),
                request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_request_timeout),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?,
                token_expiry: env::var("JWT_TOKEN_EXPIRY")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_token_expiry),
            },
            storage,
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_environment_is_development() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Staging.is_development());
        assert!(!Environment::Production.is_development());
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            request_timeout_secs: 30,
        };
        assert_eq!(config.address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_max_upload_size_bytes() {
        let config = StorageConfig {
            backend: StorageBackend::Local,
            upload_dir: default_upload_dir(),
            public_prefix: default_public_prefix(),
            max_upload_size_mb: 10,
            s3_bucket: None,
            s3_region: None,
            s3_endpoint_url: None,
            s3_force_path_style: false,
            s3_public_base_url: None,
        };
        assert_eq!(config.max_upload_size_bytes(), 10 * 1024 * 1024);
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_app_name(), "banner-service");
        assert_eq!(default_host(), "0.0.0.0");
        assert_eq!(default_port(), 3000);
        assert_eq!(default_max_connections(), 20);
        assert_eq!(default_token_expiry(), 86400);
        assert_eq!(default_upload_dir(), "./uploads");
        assert_eq!(default_public_prefix(), "/uploads");
    }
}
