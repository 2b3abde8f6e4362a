use mediagate_core::{DetectedType, MediaCategory, RejectionReason, UploadLimits, UploadRequest};

use crate::sniffer::sniff;

/// Media file validator
///
/// Decides from content alone whether a submitted file belongs to its
/// category. Filename and declared content type are never consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaValidator {
    limits: UploadLimits,
}

impl MediaValidator {
    pub fn new(limits: UploadLimits) -> Self {
        Self { limits }
    }

    /// Validate one upload request against its category.
    ///
    /// Checks run in order: presence, size, sniffing, allow-list.
    pub fn validate(&self, request: &UploadRequest) -> Result<DetectedType, RejectionReason> {
        let category = request.category;
        let size = request.data.len();

        if size == 0 {
            return Err(RejectionReason::NoFile);
        }

        let max = self.limits.max_bytes_for(category);
        if size > max {
            return Err(RejectionReason::FileTooLarge { size, max });
        }

        let detected = sniff(&request.data).ok_or(RejectionReason::UnknownType)?;
        Self::validate_detected(category, detected)?;

        tracing::debug!(
            category = %category,
            detected = %detected.extension,
            size_bytes = size,
            "File type accepted"
        );

        Ok(detected)
    }

    /// Check a sniffed type against the category allow-list.
    pub fn validate_detected(
        category: MediaCategory,
        detected: DetectedType,
    ) -> Result<(), RejectionReason> {
        if category.allows(detected.extension) {
            Ok(())
        } else {
            Err(RejectionReason::DisallowedType {
                category,
                detected: detected.extension.to_string(),
            })
        }
    }
}
