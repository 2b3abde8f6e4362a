use crate::error::HttpRejection;
use crate::state::AppState;
use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        State,
    },
    Json,
};
use mediagate_core::{MediaCategory, UploadResponse};
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/api/v0/uploads/video",
    tag = "uploads",
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "Form with one field named `file`"),
    responses(
        (status = 200, description = "Video accepted and stored", body = UploadResponse),
        (status = 400, description = "No file provided", body = UploadResponse),
        (status = 413, description = "File too large", body = UploadResponse),
        (status = 415, description = "Unknown or disallowed file type", body = UploadResponse),
        (status = 502, description = "Validation successful but upload failed", body = UploadResponse)
    )
)]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpRejection> {
    super::upload_for_category(&state, MediaCategory::Video, multipart).await
}
