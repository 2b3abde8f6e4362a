//! Multipart extraction for upload handlers

use crate::constants::FILE_FIELD;
use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::BytesMut;
use mediagate_core::{MediaCategory, RejectionReason, UploadRequest};

const UNKNOWN_FILENAME: &str = "unknown";

/// Read the `file` field of a multipart form into an upload request.
///
/// Only the first `file` field is used; other fields are skipped. The field is
/// read chunk by chunk and abandoned as soon as it exceeds `max_bytes`. A
/// missing field or unreadable form is `NoFile`; an empty field is passed on
/// and rejected by validation.
pub async fn extract_multipart_file(
    mut multipart: Multipart,
    category: MediaCategory,
    max_bytes: usize,
) -> Result<UploadRequest, RejectionReason> {
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| read_error(e, 0, max_bytes))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| UNKNOWN_FILENAME.to_string());
        let content_type = field.content_type().map(|s| s.to_string());

        let mut data = BytesMut::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| read_error(e, data.len(), max_bytes))?
        {
            let size = data.len() + chunk.len();
            if size > max_bytes {
                return Err(RejectionReason::FileTooLarge {
                    size,
                    max: max_bytes,
                });
            }
            data.extend_from_slice(&chunk);
        }

        return Ok(UploadRequest::new(
            category,
            data.freeze(),
            filename,
            content_type,
        ));
    }

    Err(RejectionReason::NoFile)
}

fn read_error(error: MultipartError, read_so_far: usize, max_bytes: usize) -> RejectionReason {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return RejectionReason::FileTooLarge {
            size: read_so_far,
            max: max_bytes,
        };
    }

    tracing::debug!(error = %error.body_text(), "Failed to read multipart form");
    RejectionReason::NoFile
}
