//! Storage fakes for integration tests.

use async_trait::async_trait;
use bytes::Bytes;
use mediagate_core::{StorageConfig, UrlStyle};
use mediagate_storage::{
    ObjectUrlBuilder, S3Storage, Storage, StorageError, StorageResult, StoredObject,
};
use object_store::memory::InMemory;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::{TEST_BUCKET, TEST_ENDPOINT};

/// One recorded `put_object` call.
#[derive(Debug, Clone)]
pub struct RecordedPut {
    pub display_name: String,
    pub content_type: String,
    pub size_bytes: usize,
}

/// Real S3 storage code over an in-memory object store, recording every put.
pub struct RecordingStorage {
    inner: S3Storage,
    puts: Mutex<Vec<RecordedPut>>,
}

impl RecordingStorage {
    pub fn new() -> Arc<Self> {
        let inner = S3Storage::with_store(
            Arc::new(InMemory::new()),
            TEST_BUCKET,
            ObjectUrlBuilder::path(TEST_ENDPOINT, TEST_BUCKET),
        );
        Arc::new(Self {
            inner,
            puts: Mutex::new(Vec::new()),
        })
    }

    pub fn put_count(&self) -> usize {
        self.puts.lock().unwrap().len()
    }

    pub fn puts(&self) -> Vec<RecordedPut> {
        self.puts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Storage for RecordingStorage {
    async fn put_object(
        &self,
        display_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> StorageResult<StoredObject> {
        self.puts.lock().unwrap().push(RecordedPut {
            display_name: display_name.to_string(),
            content_type: content_type.to_string(),
            size_bytes: data.len(),
        });
        self.inner.put_object(display_name, content_type, data).await
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Storage whose every put fails, as if the endpoint were unreachable.
#[derive(Default)]
pub struct FailingStorage {
    attempts: Mutex<usize>,
}

impl FailingStorage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Storage for FailingStorage {
    async fn put_object(
        &self,
        _display_name: &str,
        _content_type: &str,
        _data: Bytes,
    ) -> StorageResult<StoredObject> {
        *self.attempts.lock().unwrap() += 1;
        Err(StorageError::UploadFailed(
            "error sending request: connection refused".to_string(),
        ))
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Real S3 storage built from settings with no endpoint or credentials.
pub fn unconfigured_storage() -> Arc<S3Storage> {
    Arc::new(S3Storage::new(&StorageConfig {
        endpoint: None,
        region: "us-east-005".to_string(),
        access_key_id: None,
        secret_access_key: None,
        bucket: None,
        url_style: UrlStyle::Path,
        public_base_url: None,
    }))
}

/// Recording storage that takes `delay` before every put completes.
pub struct SlowStorage {
    inner: Arc<RecordingStorage>,
    delay: Duration,
}

impl SlowStorage {
    pub fn new(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            inner: RecordingStorage::new(),
            delay,
        })
    }

    pub fn put_count(&self) -> usize {
        self.inner.put_count()
    }
}

#[async_trait]
impl Storage for SlowStorage {
    async fn put_object(
        &self,
        display_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> StorageResult<StoredObject> {
        tokio::time::sleep(self.delay).await;
        self.inner.put_object(display_name, content_type, data).await
    }

    fn is_available(&self) -> bool {
        true
    }
}
