use axum::{
    extract::{rejection::PathRejection, Path, State},
    Extension,
};

use super::path_id;
use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// DELETE /remedios/inativar/{id} - hide from listings without deleting
#[utoipa::path(
    delete,
    path = "/remedios/inativar/{id}",
    tag = "Remedios",
    params(("id" = i64, Path, description = "Medication id")),
    responses(
        (status = 204, description = "Medication deactivated"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Medication not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn deactivate(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<()> {
    let id = path_id(path)?;
    if !state.remedios.set_active(id, false).await? {
        tracing::debug!(id, "Remedio not found");
        return Err(ApiError::remedio_not_found(id));
    }
    tracing::info!(id, user = %user.login, "Remedio deactivated");
    Ok(ApiResponse::no_content())
}

/// PUT /remedios/ativar/{id} - make an inactive medication listable again
#[utoipa::path(
    put,
    path = "/remedios/ativar/{id}",
    tag = "Remedios",
    params(("id" = i64, Path, description = "Medication id")),
    responses(
        (status = 204, description = "Medication activated"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Medication not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn activate(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<()> {
    let id = path_id(path)?;
    if !state.remedios.set_active(id, true).await? {
        tracing::debug!(id, "Remedio not found");
        return Err(ApiError::remedio_not_found(id));
    }
    tracing::info!(id, user = %user.login, "Remedio activated");
    Ok(ApiResponse::no_content())
}
