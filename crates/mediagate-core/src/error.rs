//! Error types module
//!
//! `RejectionReason` is the single error type a validation request can end
//! with. Every variant is a user-recoverable condition: the API renders it as
//! a `{success: false, message}` body and the process carries on.

use crate::models::MediaCategory;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like resource limits
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "UNKNOWN_FILE_TYPE")
    fn error_code(&self) -> &'static str;

    /// Whether retrying the same request may succeed
    fn is_recoverable(&self) -> bool;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectionReason {
    #[error("No file provided")]
    NoFile,

    #[error("File too large. Maximum size: {} MB", .max / 1024 / 1024)]
    FileTooLarge { size: usize, max: usize },

    #[error("Could not determine file type")]
    UnknownType,

    #[error(
        "Invalid {} format. Allowed: {}. Detected: {detected}",
        .category.label(),
        .category.allowed_list()
    )]
    DisallowedType {
        category: MediaCategory,
        detected: String,
    },

    /// The file passed validation but the storage put failed. The cause is
    /// logged where it happens and never carried here.
    #[error("Validation successful but upload failed")]
    UploadFailed,
}

impl ErrorMetadata for RejectionReason {
    fn http_status_code(&self) -> u16 {
        match self {
            RejectionReason::NoFile => 400,
            RejectionReason::FileTooLarge { .. } => 413,
            RejectionReason::UnknownType => 415,
            RejectionReason::DisallowedType { .. } => 415,
            RejectionReason::UploadFailed => 502,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RejectionReason::NoFile => "NO_FILE",
            RejectionReason::FileTooLarge { .. } => "PAYLOAD_TOO_LARGE",
            RejectionReason::UnknownType => "UNKNOWN_FILE_TYPE",
            RejectionReason::DisallowedType { .. } => "DISALLOWED_FILE_TYPE",
            RejectionReason::UploadFailed => "UPLOAD_FAILED",
        }
    }

    fn is_recoverable(&self) -> bool {
        matches!(self, RejectionReason::UploadFailed)
    }

    fn client_message(&self) -> String {
        self.to_string()
    }

    fn log_level(&self) -> LogLevel {
        match self {
            RejectionReason::UploadFailed => LogLevel::Error,
            RejectionReason::FileTooLarge { .. } => LogLevel::Warn,
            _ => LogLevel::Debug,
        }
    }
}
