use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{RemedioRow, Usuario};
use crate::database::repository::{RemedioRepository, UsuarioRepository};
use crate::remedio::{AtualizacaoRemedio, NovoRemedio, Remedio};

const REMEDIO_COLUMNS: &str = "id, nome, via, lote, quantidade, validade, laboratorio, ativo";

/// `remedios` table
#[derive(Clone)]
pub struct PgRemedioRepository {
    pool: PgPool,
}

impl PgRemedioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RemedioRepository for PgRemedioRepository {
    async fn insert(&self, dados: NovoRemedio) -> Result<Remedio, DatabaseError> {
        let sql = format!(
            "INSERT INTO remedios (nome, via, lote, quantidade, validade, laboratorio, ativo)
             VALUES ($1, $2, $3, $4, $5, $6, TRUE)
             RETURNING {}",
            REMEDIO_COLUMNS
        );
        let row = sqlx::query_as::<_, RemedioRow>(&sql)
            .bind(&dados.name)
            .bind(dados.route.map(|v| v.as_str()))
            .bind(&dados.batch)
            .bind(dados.quantity)
            .bind(dados.expiration)
            .bind(dados.laboratory.as_str())
            .fetch_one(&self.pool)
            .await?;
        Remedio::try_from(row)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Remedio>, DatabaseError> {
        let sql = format!("SELECT {} FROM remedios WHERE id = $1", REMEDIO_COLUMNS);
        sqlx::query_as::<_, RemedioRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Remedio::try_from)
            .transpose()
    }

    async fn find_all_active(&self) -> Result<Vec<Remedio>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM remedios WHERE ativo = TRUE ORDER BY id",
            REMEDIO_COLUMNS
        );
        sqlx::query_as::<_, RemedioRow>(&sql)
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .map(Remedio::try_from)
            .collect()
    }

    async fn update(&self, dados: &AtualizacaoRemedio) -> Result<Option<Remedio>, DatabaseError> {
        // Lot-tracking columns (lote, quantidade, validade) and ativo are never rewritten
        let sql = format!(
            "UPDATE remedios
             SET nome = COALESCE($2, nome),
                 via = COALESCE($3, via),
                 laboratorio = COALESCE($4, laboratorio)
             WHERE id = $1
             RETURNING {}",
            REMEDIO_COLUMNS
        );
        sqlx::query_as::<_, RemedioRow>(&sql)
            .bind(dados.id)
            .bind(dados.name.as_deref())
            .bind(dados.route.map(|v| v.as_str()))
            .bind(dados.laboratory.map(|l| l.as_str()))
            .fetch_optional(&self.pool)
            .await?
            .map(Remedio::try_from)
            .transpose()
    }

    async fn set_active(&self, id: i64, active: bool) -> Result<bool, DatabaseError> {
        let result = sqlx::query("UPDATE remedios SET ativo = $2 WHERE id = $1")
            .bind(id)
            .bind(active)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM remedios WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}

/// `usuarios` table
#[derive(Clone)]
pub struct PgUsuarioRepository {
    pool: PgPool,
}

impl PgUsuarioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsuarioRepository for PgUsuarioRepository {
    async fn find_by_login(&self, login: &str) -> Result<Option<Usuario>, DatabaseError> {
        let usuario = sqlx::query_as::<_, Usuario>(
            "SELECT id, login, senha FROM usuarios WHERE login = $1",
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;
        Ok(usuario)
    }

    async fn insert(&self, login: &str, password_hash: &str) -> Result<Usuario, DatabaseError> {
        let usuario = sqlx::query_as::<_, Usuario>(
            "INSERT INTO usuarios (login, senha) VALUES ($1, $2)
             ON CONFLICT (login) DO NOTHING
             RETURNING id, login, senha",
        )
        .bind(login)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await?;
        usuario.ok_or_else(|| DatabaseError::Conflict(format!("login '{}' already exists", login)))
    }
}
