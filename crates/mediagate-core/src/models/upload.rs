use bytes::Bytes;
use serde::Serialize;

use super::category::MediaCategory;
use crate::error::RejectionReason;

/// File type derived from content alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetectedType {
    pub extension: &'static str,
    pub mime_type: &'static str,
}

impl DetectedType {
    pub const fn new(extension: &'static str, mime_type: &'static str) -> Self {
        Self {
            extension,
            mime_type,
        }
    }
}

/// One submitted file.
///
/// `original_filename` and `declared_content_type` come from the client and
/// are only used for display, key naming and the stored object's content type.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub category: MediaCategory,
    pub data: Bytes,
    pub original_filename: String,
    pub declared_content_type: Option<String>,
}

impl UploadRequest {
    pub fn new(
        category: MediaCategory,
        data: impl Into<Bytes>,
        original_filename: impl Into<String>,
        declared_content_type: Option<String>,
    ) -> Self {
        Self {
            category,
            data: data.into(),
            original_filename: original_filename.into(),
            declared_content_type,
        }
    }

    /// Content type to store the object with.
    ///
    /// Uses the declared type when the client sent a meaningful one, otherwise
    /// the sniffed MIME type.
    pub fn storage_content_type(&self, detected: &DetectedType) -> String {
        match self.declared_content_type.as_deref().map(str::trim) {
            Some(declared) if !declared.is_empty() && declared != "application/octet-stream" => {
                declared.to_string()
            }
            _ => detected.mime_type.to_string(),
        }
    }
}

/// Outcome of one validation request. Exactly one variant is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Accepted {
        detected_type: DetectedType,
        storage_url: String,
    },
    Rejected {
        reason: RejectionReason,
    },
}

impl From<RejectionReason> for ValidationResult {
    fn from(reason: RejectionReason) -> Self {
        ValidationResult::Rejected { reason }
    }
}
