pub mod audio_upload;
pub mod categories;
pub mod health;
pub mod video_upload;

use crate::error::HttpRejection;
use crate::state::AppState;
use crate::utils::upload::extract_multipart_file;
use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::Json;
use mediagate_core::{MediaCategory, UploadResponse, ValidationResult};

/// Shared body of the per-category upload handlers.
pub(crate) async fn upload_for_category(
    state: &AppState,
    category: MediaCategory,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, HttpRejection> {
    let multipart = multipart?;
    let max_bytes = state.config.limits.max_bytes_for(category);
    let request = extract_multipart_file(multipart, category, max_bytes).await?;

    tracing::debug!(
        category = %category,
        filename = %request.original_filename,
        size_bytes = request.data.len(),
        "Upload received"
    );

    let result = state.uploads.process(request).await;
    match result {
        ValidationResult::Rejected { reason } => Err(HttpRejection(reason)),
        accepted => Ok(Json(UploadResponse::from_result(category, &accepted))),
    }
}
