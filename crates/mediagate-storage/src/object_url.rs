//! Public URL construction for stored objects.

use mediagate_core::{StorageConfig, UrlStyle};
use url::Url;

use crate::traits::{StorageError, StorageResult};

/// Builds the URL returned to clients for a stored key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectUrlBuilder {
    /// `{endpoint}/{bucket}/{key}`
    Path { endpoint: String, bucket: String },
    /// `{scheme}://{bucket}.{host}/{key}`
    VirtualHost { origin: String },
    /// `{base}/{key}`
    PublicBase { base: String },
}

impl ObjectUrlBuilder {
    pub fn path(endpoint: &str, bucket: &str) -> Self {
        ObjectUrlBuilder::Path {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            bucket: bucket.to_string(),
        }
    }

    pub fn virtual_host(endpoint: &str, bucket: &str) -> StorageResult<Self> {
        let parsed = Url::parse(endpoint).map_err(|e| {
            StorageError::ConfigError(format!("Invalid storage endpoint {}: {}", endpoint, e))
        })?;
        let host = parsed.host_str().ok_or_else(|| {
            StorageError::ConfigError(format!("Storage endpoint {} has no host", endpoint))
        })?;
        let port = parsed.port().map(|p| format!(":{}", p)).unwrap_or_default();

        Ok(ObjectUrlBuilder::VirtualHost {
            origin: format!("{}://{}.{}{}", parsed.scheme(), bucket, host, port),
        })
    }

    pub fn public_base(base: &str) -> Self {
        ObjectUrlBuilder::PublicBase {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Pick the builder matching the configured URL style.
    pub fn from_config(config: &StorageConfig) -> StorageResult<Self> {
        let endpoint = config.endpoint.as_deref().ok_or_else(|| {
            StorageError::ConfigError("S3_ENDPOINT not configured".to_string())
        })?;
        let bucket = config
            .bucket
            .as_deref()
            .ok_or_else(|| StorageError::ConfigError("S3_BUCKET not configured".to_string()))?;

        match config.url_style {
            UrlStyle::Path => Ok(Self::path(endpoint, bucket)),
            UrlStyle::VirtualHost => Self::virtual_host(endpoint, bucket),
            UrlStyle::PublicBase => {
                let base = config.public_base_url.as_deref().ok_or_else(|| {
                    StorageError::ConfigError(
                        "STORAGE_PUBLIC_BASE_URL not configured".to_string(),
                    )
                })?;
                Ok(Self::public_base(base))
            }
        }
    }

    pub fn object_url(&self, key: &str) -> String {
        match self {
            ObjectUrlBuilder::Path { endpoint, bucket } => {
                format!("{}/{}/{}", endpoint, bucket, key)
            }
            ObjectUrlBuilder::VirtualHost { origin } => format!("{}/{}", origin, key),
            ObjectUrlBuilder::PublicBase { base } => format!("{}/{}", base, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_config(style: UrlStyle) -> StorageConfig {
        StorageConfig {
            endpoint: Some("https://s3.us-east-005.backblazeb2.com/".to_string()),
            region: "us-east-005".to_string(),
            access_key_id: Some("key".to_string()),
            secret_access_key: Some("secret".to_string()),
            bucket: Some("media".to_string()),
            url_style: style,
            public_base_url: None,
        }
    }

    #[test]
    fn test_path_style() {
        let urls = ObjectUrlBuilder::from_config(&storage_config(UrlStyle::Path)).unwrap();
        assert_eq!(
            urls.object_url("1700000000000-clip.mp4"),
            "https://s3.us-east-005.backblazeb2.com/media/1700000000000-clip.mp4"
        );
    }

    #[test]
    fn test_virtual_host_style_keeps_port() {
        let urls = ObjectUrlBuilder::virtual_host("http://localhost:9000", "media").unwrap();
        assert_eq!(urls.object_url("1-a.wav"), "http://media.localhost:9000/1-a.wav");

        let urls = ObjectUrlBuilder::from_config(&storage_config(UrlStyle::VirtualHost)).unwrap();
        assert_eq!(
            urls.object_url("1-a.wav"),
            "https://media.s3.us-east-005.backblazeb2.com/1-a.wav"
        );
    }

    #[test]
    fn test_public_base_style() {
        let mut config = storage_config(UrlStyle::PublicBase);
        assert!(ObjectUrlBuilder::from_config(&config).is_err());

        config.public_base_url = Some("https://cdn.example.com/files/".to_string());
        let urls = ObjectUrlBuilder::from_config(&config).unwrap();
        assert_eq!(urls.object_url("1-a.mp3"), "https://cdn.example.com/files/1-a.mp3");
    }

    #[test]
    fn test_invalid_endpoint_for_virtual_host() {
        assert!(ObjectUrlBuilder::virtual_host("not a url", "media").is_err());
    }
}
