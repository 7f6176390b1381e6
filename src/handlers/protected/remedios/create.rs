use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde_json::Value;

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::remedio::{DetalheRemedio, NovoRemedio};

/// POST /remedios - register a new medication
///
/// The body is validated field by field so that every problem is reported
/// in a single 400 response. Nothing is stored unless all fields pass.
#[utoipa::path(
    post,
    path = "/remedios",
    tag = "Remedios",
    request_body = NovoRemedio,
    responses(
        (status = 201, description = "Medication registered", body = DetalheRemedio,
            headers(("Location" = String, description = "Path of the new medication"))),
        (status = 400, description = "Invalid data"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<DetalheRemedio> {
    let Json(body) = body?;
    let dados = NovoRemedio::from_json(&body)?;

    let remedio = state.remedios.insert(dados).await?;
    tracing::info!(id = remedio.id(), user = %user.login, "Remedio created");

    let location = format!("/remedios/{}", remedio.id());
    Ok(ApiResponse::created(DetalheRemedio::from(&remedio), location))
}
