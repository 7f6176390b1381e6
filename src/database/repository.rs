use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::Usuario;
use crate::remedio::{AtualizacaoRemedio, NovoRemedio, Remedio};

/// Storage for medication records.
///
/// Handlers only talk to this trait, so the backend (Postgres, in-memory)
/// can be swapped without touching them.
#[async_trait]
pub trait RemedioRepository: Send + Sync {
    /// Store a new record. The backend assigns the id and the record starts active.
    async fn insert(&self, dados: NovoRemedio) -> Result<Remedio, DatabaseError>;

    /// Look up a record regardless of its active flag
    async fn find_by_id(&self, id: i64) -> Result<Option<Remedio>, DatabaseError>;

    /// Active records in insertion (id) order
    async fn find_all_active(&self) -> Result<Vec<Remedio>, DatabaseError>;

    /// Merge the present fields of `dados` into the stored record in one step.
    /// Touches only name, route and laboratory; `None` if the id is unknown.
    async fn update(&self, dados: &AtualizacaoRemedio) -> Result<Option<Remedio>, DatabaseError>;

    /// Flip the active flag and nothing else. Returns false if the id is unknown.
    async fn set_active(&self, id: i64, active: bool) -> Result<bool, DatabaseError>;

    /// Permanently remove a record. Returns false if there was nothing to remove.
    async fn delete_by_id(&self, id: i64) -> Result<bool, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

/// Storage for API users, consulted by the login endpoint
#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    async fn find_by_login(&self, login: &str) -> Result<Option<Usuario>, DatabaseError>;

    /// Fails with `DatabaseError::Conflict` if the login is taken
    async fn insert(&self, login: &str, password_hash: &str) -> Result<Usuario, DatabaseError>;
}
