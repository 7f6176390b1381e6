// handlers/protected/remedios - the /remedios collection
//
// Every handler here sits behind jwt_auth_middleware, so an AuthUser is
// always present in request extensions.

use axum::extract::{rejection::PathRejection, Path};

use crate::app::AppState;
use crate::error::ApiError;
use crate::remedio::Remedio;

pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod status;
pub mod update;

pub use create::create;
pub use delete::delete;
pub use detail::detail;
pub use list::list;
pub use status::{activate, deactivate};
pub use update::update;

/// Numeric `{id}` path segment; anything else is a 400
pub(crate) fn path_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    let Path(id) = path?;
    Ok(id)
}

/// Load a record regardless of its active flag, or 404
pub(crate) async fn load(state: &AppState, id: i64) -> Result<Remedio, ApiError> {
    match state.remedios.find_by_id(id).await? {
        Some(remedio) => Ok(remedio),
        None => {
            tracing::debug!(id, "Remedio not found");
            Err(ApiError::remedio_not_found(id))
        }
    }
}
