use chrono::NaiveDate;
use sqlx::FromRow;

use crate::database::manager::DatabaseError;
use crate::remedio::{Laboratorio, Remedio, Via};

/// Raw `remedios` row; enums are stored as text
#[derive(Debug, Clone, FromRow)]
pub struct RemedioRow {
    pub id: i64,
    pub nome: String,
    pub via: Option<String>,
    pub lote: String,
    pub quantidade: i32,
    pub validade: NaiveDate,
    pub laboratorio: String,
    pub ativo: bool,
}

impl TryFrom<RemedioRow> for Remedio {
    type Error = DatabaseError;

    fn try_from(row: RemedioRow) -> Result<Self, Self::Error> {
        let via = row
            .via
            .as_deref()
            .map(str::parse::<Via>)
            .transpose()
            .map_err(|e| DatabaseError::CorruptRow(format!("remedio {}: {}", row.id, e)))?;
        let laboratorio = row
            .laboratorio
            .parse::<Laboratorio>()
            .map_err(|e| DatabaseError::CorruptRow(format!("remedio {}: {}", row.id, e)))?;

        Ok(Remedio::from_parts(
            row.id,
            row.nome,
            via,
            row.lote,
            row.quantidade,
            row.validade,
            laboratorio,
            row.ativo,
        ))
    }
}
