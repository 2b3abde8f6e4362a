//! Mediagate Storage Library
//!
//! This crate provides the upload gateway: the `Storage` trait and its
//! S3-compatible implementation on top of `object_store`.
//!
//! # Storage key format
//!
//! Every object is written under `{timestamp_ms}-{sanitized_name}` at the root
//! of the bucket. Key generation lives in the `keys` module and URL building in
//! the `object_url` module so both stay independent of the transport.

pub mod factory;
pub mod keys;
pub mod s3;
pub mod traits;
pub mod object_url;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::{sanitize_filename, KeyGenerator};
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult, StoredObject};
pub use object_url::ObjectUrlBuilder;
