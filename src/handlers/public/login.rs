// handlers/public/login.rs - POST /login handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::app::AppState;
use crate::auth::verify_password;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize, ToSchema)]
pub struct DadosAutenticacao {
    #[schema(example = "admin")]
    pub login: String,
    #[serde(alias = "senha")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub expires_in: i64,
}

/// POST /login - exchange credentials for a bearer token
///
/// Unknown logins and wrong passwords get the same 401 so callers can't
/// probe which logins exist.
#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = DadosAutenticacao,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 400, description = "Malformed credentials"),
        (status = 401, description = "Invalid login or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<DadosAutenticacao>, JsonRejection>,
) -> ApiResult<TokenResponse> {
    let Json(dados) = body?;

    let usuario = state.usuarios.find_by_login(&dados.login).await?;
    let authenticated = usuario
        .as_ref()
        .map(|u| verify_password(&dados.password, &u.password_hash))
        .unwrap_or(false);

    if !authenticated {
        tracing::warn!(login = %dados.login, "Failed login attempt");
        return Err(ApiError::unauthorized("Invalid login or password"));
    }

    let token = state.tokens.issue(&dados.login)?;
    tracing::info!(login = %dados.login, "Token issued");

    Ok(ApiResponse::success(TokenResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.tokens.expires_in_secs(),
    }))
}
