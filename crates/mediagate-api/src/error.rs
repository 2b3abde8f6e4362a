//! HTTP rendering of upload rejections
//!
//! Handlers return `Result<Json<UploadResponse>, HttpRejection>`. Every
//! rejection is rendered with the same `{success, message}` body as a success,
//! using the status code and log level declared by `ErrorMetadata`.

use axum::{
    extract::multipart::MultipartRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mediagate_core::{ErrorMetadata, LogLevel, RejectionReason, UploadResponse};

/// Wrapper type for RejectionReason to implement IntoResponse
#[derive(Debug)]
pub struct HttpRejection(pub RejectionReason);

impl From<RejectionReason> for HttpRejection {
    fn from(reason: RejectionReason) -> Self {
        HttpRejection(reason)
    }
}

/// A body that is not a readable multipart form counts as a missing file.
impl From<MultipartRejection> for HttpRejection {
    fn from(rejection: MultipartRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Request is not a multipart form");
        HttpRejection(RejectionReason::NoFile)
    }
}

fn log_rejection(reason: &RejectionReason) {
    let code = reason.error_code();
    match reason.log_level() {
        LogLevel::Debug => {
            tracing::debug!(rejection = %reason, code = code, "Upload rejected");
        }
        LogLevel::Warn => {
            tracing::warn!(rejection = %reason, code = code, "Upload rejected");
        }
        LogLevel::Error => {
            tracing::error!(rejection = %reason, code = code, "Upload rejected");
        }
    }
}

impl IntoResponse for HttpRejection {
    fn into_response(self) -> Response {
        let reason = &self.0;
        let status =
            StatusCode::from_u16(reason.http_status_code()).unwrap_or(StatusCode::BAD_REQUEST);

        log_rejection(reason);

        (status, Json(UploadResponse::rejected(reason))).into_response()
    }
}
