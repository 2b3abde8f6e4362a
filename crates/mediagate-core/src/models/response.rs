use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::category::MediaCategory;
use super::upload::{DetectedType, ValidationResult};
use crate::config::UploadLimits;
use crate::error::RejectionReason;

/// Body returned by every upload endpoint, whatever the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    /// Sniffed extension, present on success
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub detected_type: Option<String>,
    /// Public URL of the stored object, present on success
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl UploadResponse {
    pub fn accepted(category: MediaCategory, detected: &DetectedType, url: String) -> Self {
        Self {
            success: true,
            message: format!("Valid {} file uploaded successfully", category.label()),
            detected_type: Some(detected.extension.to_string()),
            url: Some(url),
        }
    }

    pub fn rejected(reason: &RejectionReason) -> Self {
        Self {
            success: false,
            message: reason.to_string(),
            detected_type: None,
            url: None,
        }
    }

    pub fn from_result(category: MediaCategory, result: &ValidationResult) -> Self {
        match result {
            ValidationResult::Accepted {
                detected_type,
                storage_url,
            } => Self::accepted(category, detected_type, storage_url.clone()),
            ValidationResult::Rejected { reason } => Self::rejected(reason),
        }
    }
}

/// Public description of a category's acceptance policy.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryPolicyResponse {
    pub category: MediaCategory,
    pub label: String,
    pub allowed_extensions: Vec<String>,
    /// MIME types a file picker may offer; not used for validation
    pub accept: Vec<String>,
    pub max_size_mb: usize,
}

impl CategoryPolicyResponse {
    pub fn new(category: MediaCategory, limits: &UploadLimits) -> Self {
        let policy = category.policy();
        Self {
            category,
            label: policy.label.to_string(),
            allowed_extensions: policy
                .allowed_extensions
                .iter()
                .map(|e| e.to_string())
                .collect(),
            accept: policy
                .accept_mime_hints
                .iter()
                .map(|m| m.to_string())
                .collect(),
            max_size_mb: limits.max_bytes_for(category) / 1024 / 1024,
        }
    }
}
