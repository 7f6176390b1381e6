use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::database::manager::DatabaseError;
use crate::database::models::Usuario;
use crate::database::repository::{RemedioRepository, UsuarioRepository};
use crate::remedio::{AtualizacaoRemedio, NovoRemedio, Remedio};

#[derive(Debug)]
struct Table<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { next_id: 1, rows: BTreeMap::new() }
    }
}

impl<T> Table<T> {
    // Ids keep growing after deletes, like a database sequence
    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

/// Process-local medication store, used by tests and when no database is configured
#[derive(Debug, Default)]
pub struct InMemoryRemedioRepository {
    table: RwLock<Table<Remedio>>,
}

impl InMemoryRemedioRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RemedioRepository for InMemoryRemedioRepository {
    async fn insert(&self, dados: NovoRemedio) -> Result<Remedio, DatabaseError> {
        let mut table = self.table.write().await;
        let id = table.allocate_id();
        let remedio = Remedio::new(id, dados);
        table.rows.insert(id, remedio.clone());
        Ok(remedio)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Remedio>, DatabaseError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all_active(&self) -> Result<Vec<Remedio>, DatabaseError> {
        let table = self.table.read().await;
        Ok(table.rows.values().filter(|r| r.is_active()).cloned().collect())
    }

    async fn update(&self, dados: &AtualizacaoRemedio) -> Result<Option<Remedio>, DatabaseError> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&dados.id).map(|stored| {
            stored.apply_update(dados);
            stored.clone()
        }))
    }

    async fn set_active(&self, id: i64, active: bool) -> Result<bool, DatabaseError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id) {
            Some(stored) if active => stored.activate(),
            Some(stored) => stored.deactivate(),
            None => return Ok(false),
        }
        Ok(true)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUsuarioRepository {
    table: RwLock<Table<Usuario>>,
}

impl InMemoryUsuarioRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UsuarioRepository for InMemoryUsuarioRepository {
    async fn find_by_login(&self, login: &str) -> Result<Option<Usuario>, DatabaseError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|u| u.login == login).cloned())
    }

    async fn insert(&self, login: &str, password_hash: &str) -> Result<Usuario, DatabaseError> {
        let mut table = self.table.write().await;
        if table.rows.values().any(|u| u.login == login) {
            return Err(DatabaseError::Conflict(format!("login '{}' already exists", login)));
        }
        let id = table.allocate_id();
        let usuario = Usuario {
            id,
            login: login.to_string(),
            password_hash: password_hash.to_string(),
        };
        table.rows.insert(id, usuario.clone());
        Ok(usuario)
    }
}
