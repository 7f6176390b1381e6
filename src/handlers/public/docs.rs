use axum::{
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
    Json,
};
use utoipa::OpenApi;

use crate::api::docs::ApiDoc;
use crate::error::ApiError;

/// GET /v3/api-docs
pub async fn api_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// GET /v3/api-docs.yaml
pub async fn api_docs_yaml() -> Result<Response, ApiError> {
    let yaml = serde_yaml::to_string(&ApiDoc::openapi()).map_err(|e| {
        tracing::error!("Failed to render OpenAPI YAML: {}", e);
        ApiError::internal_server_error("Failed to render API documentation")
    })?;
    Ok(([(CONTENT_TYPE, "application/yaml")], yaml).into_response())
}
