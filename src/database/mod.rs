pub mod manager;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod repository;

pub use manager::{DatabaseError, DatabaseManager};
pub use memory::{InMemoryRemedioRepository, InMemoryUsuarioRepository};
pub use postgres::{PgRemedioRepository, PgUsuarioRepository};
pub use repository::{RemedioRepository, UsuarioRepository};
