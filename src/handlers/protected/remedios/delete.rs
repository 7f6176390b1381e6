use axum::{
    extract::{rejection::PathRejection, Path, State},
    Extension,
};

use super::path_id;
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// DELETE /remedios/{id} - permanent removal
#[utoipa::path(
    delete,
    path = "/remedios/{id}",
    tag = "Remedios",
    params(("id" = i64, Path, description = "Medication id")),
    responses(
        (status = 204, description = "Medication deleted"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Medication not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<()> {
    let id = path_id(path)?;

    if !state.remedios.delete_by_id(id).await? {
        tracing::debug!(id, "Remedio not found");
        return Err(ApiError::remedio_not_found(id));
    }

    tracing::info!(id, user = %user.login, "Remedio deleted");
    Ok(ApiResponse::no_content())
}
