//! Mediagate Core Library
//!
//! This crate provides the domain models, error metadata and configuration
//! shared by the storage, processing and API crates.

pub mod config;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::{Config, ServerConfig, StorageConfig, UploadLimits};
pub use error::{ErrorMetadata, LogLevel, RejectionReason};
pub use models::{
    CategoryPolicy, CategoryPolicyResponse, DetectedType, MediaCategory, UploadRequest,
    UploadResponse, ValidationResult,
};
pub use storage_types::UrlStyle;
