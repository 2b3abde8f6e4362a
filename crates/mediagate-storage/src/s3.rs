use crate::keys::KeyGenerator;
use crate::traits::{Storage, StorageError, StorageResult, StoredObject};
use crate::object_url::ObjectUrlBuilder;
use async_trait::async_trait;
use bytes::Bytes;
use mediagate_core::StorageConfig;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path;
use object_store::{
    Attribute, Attributes, ObjectStore, PutOptions, PutPayload, Result as ObjectResult,
    RetryConfig,
};
use std::sync::Arc;

/// Shared by every storage instance in the process.
static KEYS: KeyGenerator = KeyGenerator::new();

#[derive(Clone)]
struct Target {
    store: Arc<dyn ObjectStore>,
    bucket: String,
    urls: ObjectUrlBuilder,
}

/// S3-compatible storage implementation
///
/// Incomplete settings do not stop the server from starting: the storage is
/// created unavailable and every upload fails with a configuration error.
#[derive(Clone)]
pub struct S3Storage {
    target: Result<Target, String>,
}

impl S3Storage {
    /// Create a new S3Storage from the storage settings.
    ///
    /// Works with any S3-compatible provider given its endpoint
    /// (e.g. "https://s3.us-east-005.backblazeb2.com" for Backblaze B2,
    /// "http://localhost:9000" for MinIO).
    pub fn new(config: &StorageConfig) -> Self {
        let target = Self::connect(config).map_err(|e| e.to_string());
        if let Err(reason) = &target {
            tracing::warn!(reason = %reason, "S3 storage unavailable, uploads will fail");
        }

        S3Storage { target }
    }

    /// Use an existing object store, e.g. an in-memory one.
    pub fn with_store(
        store: Arc<dyn ObjectStore>,
        bucket: impl Into<String>,
        urls: ObjectUrlBuilder,
    ) -> Self {
        S3Storage {
            target: Ok(Target {
                store,
                bucket: bucket.into(),
                urls,
            }),
        }
    }

    fn connect(config: &StorageConfig) -> StorageResult<Target> {
        let missing = config.missing_settings();
        if !missing.is_empty() {
            return Err(StorageError::ConfigError(format!(
                "missing settings: {}",
                missing.join(", ")
            )));
        }

        let urls = ObjectUrlBuilder::from_config(config)?;
        let (Some(endpoint), Some(bucket), Some(key_id), Some(secret)) = (
            config.endpoint.as_deref(),
            config.bucket.as_deref(),
            config.access_key_id.as_deref(),
            config.secret_access_key.as_deref(),
        ) else {
            return Err(StorageError::ConfigError(
                "incomplete storage settings".to_string(),
            ));
        };

        // One attempt per upload; failures go straight back to the client.
        let retry = RetryConfig {
            max_retries: 0,
            ..Default::default()
        };

        let store = AmazonS3Builder::new()
            .with_endpoint(endpoint)
            .with_allow_http(endpoint.starts_with("http://"))
            .with_region(config.region.as_str())
            .with_bucket_name(bucket)
            .with_access_key_id(key_id)
            .with_secret_access_key(secret)
            .with_retry(retry)
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(Target {
            store: Arc::new(store),
            bucket: bucket.to_string(),
            urls,
        })
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn put_object(
        &self,
        display_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> StorageResult<StoredObject> {
        let target = self
            .target
            .as_ref()
            .map_err(|reason| StorageError::ConfigError(reason.clone()))?;

        let key = KEYS.generate(display_name);
        let size = data.len();
        let location = Path::parse(&key).map_err(|e| StorageError::InvalidKey(e.to_string()))?;

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        let start = std::time::Instant::now();

        let result: ObjectResult<_> = target
            .store
            .put_opts(&location, PutPayload::from(data), options)
            .await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %target.bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 upload failed"
            );
            StorageError::UploadFailed(e.to_string())
        })?;

        let url = target.urls.object_url(&key);

        tracing::info!(
            bucket = %target.bucket,
            key = %key,
            content_type = %content_type,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 upload successful"
        );

        Ok(StoredObject {
            key,
            url,
            size_bytes: size,
        })
    }

    fn is_available(&self) -> bool {
        self.target.is_ok()
    }
}
