use axum::extract::State;

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};
use crate::remedio::ResumoRemedio;

/// GET /remedios - active medications in insertion order
#[utoipa::path(
    get,
    path = "/remedios",
    tag = "Remedios",
    responses(
        (status = 200, description = "Active medications", body = [ResumoRemedio]),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<ResumoRemedio>> {
    let remedios = state.remedios.find_all_active().await?;
    Ok(ApiResponse::success(remedios.iter().map(ResumoRemedio::from).collect()))
}
