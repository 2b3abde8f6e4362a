//! Storage abstraction trait
//!
//! This module defines the Storage trait that the upload service writes through.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// An object written by a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    pub url: String,
    pub size_bytes: usize,
}

/// Storage abstraction trait
///
/// Implementations write each object once, under a key no earlier upload from
/// this process has used, and never retry.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write `data` under a fresh key derived from `display_name` and return
    /// where it can be fetched.
    async fn put_object(
        &self,
        display_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> StorageResult<StoredObject>;

    /// Whether the backend has everything it needs to accept uploads.
    fn is_available(&self) -> bool;
}
