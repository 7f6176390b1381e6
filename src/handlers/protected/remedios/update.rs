use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde_json::Value;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::remedio::{AtualizacaoRemedio, DetalheRemedio};

/// PUT /remedios - partial update, id in the body
///
/// Only `name`, `route` and `laboratory` can change, and only when present.
#[utoipa::path(
    put,
    path = "/remedios",
    tag = "Remedios",
    request_body = AtualizacaoRemedio,
    responses(
        (status = 200, description = "Medication updated", body = DetalheRemedio),
        (status = 400, description = "Invalid data"),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "Medication not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<DetalheRemedio> {
    let Json(body) = body?;
    let dados = AtualizacaoRemedio::from_json(&body)?;

    let Some(remedio) = state.remedios.update(&dados).await? else {
        tracing::debug!(id = dados.id, "Remedio not found");
        return Err(ApiError::remedio_not_found(dados.id));
    };
    tracing::info!(id = remedio.id(), user = %user.login, "Remedio updated");

    Ok(ApiResponse::success(DetalheRemedio::from(&remedio)))
}
