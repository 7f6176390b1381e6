//! The medication record and its lifecycle.
//!
//! A `Remedio` is only ever built by a repository (which owns id assignment)
//! and only changes through the named mutations below.

pub mod dto;
pub mod validation;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

pub use dto::{AtualizacaoRemedio, DetalheRemedio, NovoRemedio, ResumoRemedio};
pub use validation::ValidationErrors;

/// Administration route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Via {
    Oral,
    Nasal,
    Intravenous,
    Intramuscular,
    Subcutaneous,
    Topical,
    Rectal,
}

/// Manufacturer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Laboratorio {
    Acme,
    Ache,
    Ems,
    Eurofarma,
    Medley,
    NeoQuimica,
}

/// Error for enum text that is not a known member (e.g. a corrupt DB column)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl Via {
    pub const ALL: [Via; 7] = [
        Via::Oral,
        Via::Nasal,
        Via::Intravenous,
        Via::Intramuscular,
        Via::Subcutaneous,
        Via::Topical,
        Via::Rectal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Via::Oral => "ORAL",
            Via::Nasal => "NASAL",
            Via::Intravenous => "INTRAVENOUS",
            Via::Intramuscular => "INTRAMUSCULAR",
            Via::Subcutaneous => "SUBCUTANEOUS",
            Via::Topical => "TOPICAL",
            Via::Rectal => "RECTAL",
        }
    }
}

impl Laboratorio {
    pub const ALL: [Laboratorio; 6] = [
        Laboratorio::Acme,
        Laboratorio::Ache,
        Laboratorio::Ems,
        Laboratorio::Eurofarma,
        Laboratorio::Medley,
        Laboratorio::NeoQuimica,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Laboratorio::Acme => "ACME",
            Laboratorio::Ache => "ACHE",
            Laboratorio::Ems => "EMS",
            Laboratorio::Eurofarma => "EUROFARMA",
            Laboratorio::Medley => "MEDLEY",
            Laboratorio::NeoQuimica => "NEO_QUIMICA",
        }
    }
}

impl FromStr for Via {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Via::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVariant { kind: "via", value: s.to_string() })
    }
}

impl FromStr for Laboratorio {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Laboratorio::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| UnknownVariant { kind: "laboratorio", value: s.to_string() })
    }
}

impl fmt::Display for Via {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Laboratorio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored medication record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remedio {
    id: i64,
    nome: String,
    via: Option<Via>,
    lote: String,
    quantidade: i32,
    validade: NaiveDate,
    laboratorio: Laboratorio,
    ativo: bool,
}

impl Remedio {
    /// Builds a freshly created record. Only repositories call this, with the id they assigned.
    pub fn new(id: i64, dados: NovoRemedio) -> Self {
        Self {
            id,
            nome: dados.name,
            via: dados.route,
            lote: dados.batch,
            quantidade: dados.quantity,
            validade: dados.expiration,
            laboratorio: dados.laboratory,
            ativo: true,
        }
    }

    /// Rebuilds a record read back from storage.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: i64,
        nome: String,
        via: Option<Via>,
        lote: String,
        quantidade: i32,
        validade: NaiveDate,
        laboratorio: Laboratorio,
        ativo: bool,
    ) -> Self {
        Self { id, nome, via, lote, quantidade, validade, laboratorio, ativo }
    }

    /// Merges an update: only `name`, `route` and `laboratory` are touched,
    /// and only when present.
    pub fn apply_update(&mut self, dados: &AtualizacaoRemedio) {
        if let Some(nome) = &dados.name {
            self.nome = nome.clone();
        }
        if let Some(via) = dados.route {
            self.via = Some(via);
        }
        if let Some(laboratorio) = dados.laboratory {
            self.laboratorio = laboratorio;
        }
    }

    pub fn deactivate(&mut self) {
        self.ativo = false;
    }

    pub fn activate(&mut self) {
        self.ativo = true;
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn via(&self) -> Option<Via> {
        self.via
    }

    pub fn lote(&self) -> &str {
        &self.lote
    }

    pub fn quantidade(&self) -> i32 {
        self.quantidade
    }

    pub fn validade(&self) -> NaiveDate {
        self.validade
    }

    pub fn laboratorio(&self) -> Laboratorio {
        self.laboratorio
    }

    pub fn is_active(&self) -> bool {
        self.ativo
    }
}
