//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers;
use mediagate_core::{CategoryPolicyResponse, MediaCategory, UploadResponse};

/// Returns the OpenAPI spec served at `/api/openapi.json`.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mediagate API",
        version = "0.1.0",
        description = "Media upload validation API (v0). Files are identified from their content, checked against the allow-list of the chosen category (video: mp4, mkv, mov; audio: mp3, wav, m4a) and stored in S3-compatible object storage only when accepted."
    ),
    paths(
        handlers::video_upload::upload_video,
        handlers::audio_upload::upload_audio,
        handlers::categories::list_categories,
        handlers::health::health_check,
        handlers::health::readiness_check,
    ),
    components(
        schemas(
            UploadResponse,
            CategoryPolicyResponse,
            MediaCategory,
            handlers::health::HealthResponse,
        )
    ),
    tags(
        (name = "uploads", description = "Validate and store media files"),
        (name = "categories", description = "Upload category policies"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
