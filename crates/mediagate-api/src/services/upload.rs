//! Upload pipeline: validate, then store.

use mediagate_core::{RejectionReason, UploadLimits, UploadRequest, ValidationResult};
use mediagate_processing::MediaValidator;
use mediagate_storage::Storage;
use std::sync::Arc;

/// Runs one upload request through validation and, if accepted, storage.
///
/// Storage is never called for a rejected file.
#[derive(Clone)]
pub struct UploadService {
    validator: MediaValidator,
    storage: Arc<dyn Storage>,
}

impl UploadService {
    pub fn new(limits: UploadLimits, storage: Arc<dyn Storage>) -> Self {
        Self {
            validator: MediaValidator::new(limits),
            storage,
        }
    }

    pub async fn process(&self, request: UploadRequest) -> ValidationResult {
        let category = request.category;

        let detected = match self.validator.validate(&request) {
            Ok(detected) => detected,
            Err(reason) => return reason.into(),
        };

        let content_type = request.storage_content_type(&detected);
        let stored = self
            .storage
            .put_object(&request.original_filename, &content_type, request.data)
            .await;

        match stored {
            Ok(object) => {
                tracing::info!(
                    category = %category,
                    detected = %detected.extension,
                    key = %object.key,
                    size_bytes = object.size_bytes,
                    "Upload accepted"
                );
                ValidationResult::Accepted {
                    detected_type: detected,
                    storage_url: object.url,
                }
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    category = %category,
                    detected = %detected.extension,
                    "Storage upload failed after validation"
                );
                RejectionReason::UploadFailed.into()
            }
        }
    }
}
