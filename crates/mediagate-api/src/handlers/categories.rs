use crate::state::AppState;
use axum::{extract::State, Json};
use mediagate_core::{CategoryPolicyResponse, MediaCategory};
use std::sync::Arc;

/// List the acceptance policy of every upload category.
#[utoipa::path(
    get,
    path = "/api/v0/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Category policies", body = Vec<CategoryPolicyResponse>)
    )
)]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<CategoryPolicyResponse>> {
    let policies = MediaCategory::ALL
        .iter()
        .map(|category| CategoryPolicyResponse::new(*category, &state.config.limits))
        .collect();
    Json(policies)
}
