//! Configuration module
//!
//! The configuration is read once at process start and handed to the rest of
//! the application by reference. `Config::from_lookup` builds it from any
//! key lookup so tests never have to touch the process environment.

use std::collections::HashMap;
use std::env;

use crate::models::MediaCategory;
use crate::storage_types::UrlStyle;

// Common constants
const SERVER_PORT: u16 = 4000;
const DEFAULT_REGION: &str = "us-east-005";
const MAX_VIDEO_SIZE_MB: usize = 500;
const MAX_AUDIO_SIZE_MB: usize = 100;

/// HTTP server settings
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
}

/// Object storage settings.
///
/// Connection fields are optional: a server with incomplete storage settings
/// still starts, and uploads fail until the settings are provided.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub endpoint: Option<String>,
    pub region: String,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub bucket: Option<String>,
    pub url_style: UrlStyle,
    pub public_base_url: Option<String>,
}

impl StorageConfig {
    /// Names of the settings the S3 client needs but does not have.
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.endpoint.is_none() {
            missing.push("S3_ENDPOINT");
        }
        if self.access_key_id.is_none() {
            missing.push("S3_ACCESS_KEY_ID");
        }
        if self.secret_access_key.is_none() {
            missing.push("S3_SECRET_ACCESS_KEY");
        }
        if self.bucket.is_none() {
            missing.push("S3_BUCKET");
        }
        if self.url_style == UrlStyle::PublicBase && self.public_base_url.is_none() {
            missing.push("STORAGE_PUBLIC_BASE_URL");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_settings().is_empty()
    }
}

/// Per-category upload size limits in bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_video_bytes: usize,
    pub max_audio_bytes: usize,
}

impl UploadLimits {
    pub fn max_bytes_for(&self, category: MediaCategory) -> usize {
        match category {
            MediaCategory::Video => self.max_video_bytes,
            MediaCategory::Audio => self.max_audio_bytes,
        }
    }

    /// Largest limit across categories, used for the request body limit.
    pub fn max_bytes(&self) -> usize {
        self.max_video_bytes.max(self.max_audio_bytes)
    }
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_video_bytes: MAX_VIDEO_SIZE_MB * 1024 * 1024,
            max_audio_bytes: MAX_AUDIO_SIZE_MB * 1024 * 1024,
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub limits: UploadLimits,
}

impl Config {
    /// Load configuration from the process environment (and `.env` if present).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from a fixed set of key/value pairs.
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset.
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        // Each storage setting has a generic S3 name and a Backblaze B2 alias.
        let var_or = |key: &str, alias: &str| var(key).or_else(|| var(alias));

        let environment = var("ENVIRONMENT")
            .or_else(|| var("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins_str = var("CORS_ORIGINS").unwrap_or_else(|| "*".to_string());
        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let server = ServerConfig {
            port: var("PORT")
                .unwrap_or_else(|| SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
        };

        let url_style = match var("STORAGE_URL_STYLE") {
            Some(value) => value.parse()?,
            None => UrlStyle::default(),
        };

        let storage = StorageConfig {
            endpoint: var_or("S3_ENDPOINT", "B2_ENDPOINT"),
            region: var_or("S3_REGION", "B2_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            access_key_id: var_or("S3_ACCESS_KEY_ID", "B2_KEY_ID"),
            secret_access_key: var_or("S3_SECRET_ACCESS_KEY", "B2_APP_KEY"),
            bucket: var_or("S3_BUCKET", "B2_BUCKET_NAME"),
            url_style,
            public_base_url: var("STORAGE_PUBLIC_BASE_URL"),
        };

        let max_video_mb = var("MAX_VIDEO_SIZE_MB")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(MAX_VIDEO_SIZE_MB);
        let max_audio_mb = var("MAX_AUDIO_SIZE_MB")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(MAX_AUDIO_SIZE_MB);

        let config = Config {
            server,
            storage,
            limits: UploadLimits {
                max_video_bytes: max_video_mb * 1024 * 1024,
                max_audio_bytes: max_audio_mb * 1024 * 1024,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.server.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Reject configurations that cannot work at all.
    ///
    /// Missing storage credentials are not an error here; see
    /// [`StorageConfig::missing_settings`].
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.is_production() && self.server.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.limits.max_video_bytes == 0 || self.limits.max_audio_bytes == 0 {
            return Err(anyhow::anyhow!("Upload size limits must be greater than 0"));
        }

        Ok(())
    }
}
