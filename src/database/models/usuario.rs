use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Usuario {
    pub id: i64,
    pub login: String,
    #[serde(skip_serializing)]
    #[sqlx(rename = "senha")]
    pub password_hash: String,
}
