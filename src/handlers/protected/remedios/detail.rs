use axum::extract::{rejection::PathRejection, Path, State};

use super::{load, path_id};
use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};
use crate::remedio::DetalheRemedio;

/// GET /remedios/{id} - works for inactive records too
#[utoipa::path(
    get,
    path = "/remedios/{id}",
    tag = "Remedios",
    params(("id" = i64, Path, description = "Medication id")),
    responses(
        (status = 200, description = "Medication details", body = DetalheRemedio),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Medication not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn detail(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<DetalheRemedio> {
    let id = path_id(path)?;
    let remedio = load(&state, id).await?;
    Ok(ApiResponse::success(DetalheRemedio::from(&remedio)))
}
