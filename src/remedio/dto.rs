//! Wire representations of a medication.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::validation::{expect_object, FieldReader, ValidationErrors};
use super::{Laboratorio, Remedio, Via};

/// Create request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NovoRemedio {
    #[serde(alias = "nome")]
    #[schema(example = "Dipirona")]
    pub name: String,
    #[serde(alias = "via", default)]
    pub route: Option<Via>,
    #[serde(alias = "lote")]
    #[schema(example = "L1")]
    pub batch: String,
    #[serde(alias = "quantidade", default)]
    #[schema(minimum = 0, example = 10)]
    pub quantity: i32,
    #[serde(alias = "validade")]
    #[schema(value_type = String, format = Date, example = "2026-01-01")]
    pub expiration: NaiveDate,
    #[serde(alias = "laboratorio")]
    pub laboratory: Laboratorio,
}

impl NovoRemedio {
    /// Validates a raw create body, reporting every bad field at once.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let object = expect_object(body)?;
        let mut reader = FieldReader::new(object);

        let name = reader.required_text("name", &["nome"]);
        let route = reader.optional::<Via>("route", &["via"]);
        let batch = reader.required_text("batch", &["lote"]);
        let quantity = reader.optional::<i32>("quantity", &["quantidade"]).unwrap_or(0);
        if quantity < 0 {
            reader.error("quantity", "must be greater than or equal to 0");
        }
        let expiration = reader.required::<NaiveDate>("expiration", &["validade"]);
        let laboratory = reader.required::<Laboratorio>("laboratory", &["laboratorio"]);

        reader.finish()?;

        // finish() succeeded, so every required field was read
        match (name, batch, expiration, laboratory) {
            (Some(name), Some(batch), Some(expiration), Some(laboratory)) => Ok(Self {
                name,
                route,
                batch,
                quantity,
                expiration,
                laboratory,
            }),
            _ => Err(ValidationErrors::new()),
        }
    }
}

/// Update request. Only the three optional fields can change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AtualizacaoRemedio {
    pub id: i64,
    #[serde(alias = "nome", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(alias = "via", default, skip_serializing_if = "Option::is_none")]
    pub route: Option<Via>,
    #[serde(alias = "laboratorio", default, skip_serializing_if = "Option::is_none")]
    pub laboratory: Option<Laboratorio>,
}

impl AtualizacaoRemedio {
    /// Validates a raw update body. Fields outside the update set are ignored.
    pub fn from_json(body: &Value) -> Result<Self, ValidationErrors> {
        let object = expect_object(body)?;
        let mut reader = FieldReader::new(object);

        let id = reader.required::<i64>("id", &[]);
        let name = reader.optional_text("name", &["nome"]);
        let route = reader.optional::<Via>("route", &["via"]);
        let laboratory = reader.optional::<Laboratorio>("laboratory", &["laboratorio"]);

        reader.finish()?;

        let id = id.ok_or_else(ValidationErrors::new)?;
        Ok(Self { id, name, route, laboratory })
    }
}

/// Full representation of one medication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DetalheRemedio {
    pub id: i64,
    pub name: String,
    pub route: Option<Via>,
    pub batch: String,
    pub quantity: i32,
    #[schema(value_type = String, format = Date)]
    pub expiration: NaiveDate,
    pub laboratory: Laboratorio,
    pub active: bool,
}

impl From<&Remedio> for DetalheRemedio {
    fn from(remedio: &Remedio) -> Self {
        Self {
            id: remedio.id(),
            name: remedio.nome().to_string(),
            route: remedio.via(),
            batch: remedio.lote().to_string(),
            quantity: remedio.quantidade(),
            expiration: remedio.validade(),
            laboratory: remedio.laboratorio(),
            active: remedio.is_active(),
        }
    }
}

/// List entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ResumoRemedio {
    pub id: i64,
    pub name: String,
    pub route: Option<Via>,
    pub batch: String,
    #[schema(value_type = String, format = Date)]
    pub expiration: NaiveDate,
    pub laboratory: Laboratorio,
}

impl From<&Remedio> for ResumoRemedio {
    fn from(remedio: &Remedio) -> Self {
        Self {
            id: remedio.id(),
            name: remedio.nome().to_string(),
            route: remedio.via(),
            batch: remedio.lote().to_string(),
            expiration: remedio.validade(),
            laboratory: remedio.laboratorio(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> Value {
        json!({
            "name": "Dipirona",
            "route": "ORAL",
            "batch": "L1",
            "quantity": 10,
            "expiration": "2026-01-01",
            "laboratory": "ACME"
        })
    }

    #[test]
    fn parses_complete_create_body() {
        let novo = NovoRemedio::from_json(&valid_body()).unwrap();
        assert_eq!(novo.name, "Dipirona");
        assert_eq!(novo.route, Some(Via::Oral));
        assert_eq!(novo.quantity, 10);
        assert_eq!(novo.expiration, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(novo.laboratory, Laboratorio::Acme);
    }

    #[test]
    fn accepts_portuguese_field_names() {
        let body = json!({
            "nome": "Amoxicilina",
            "via": "ORAL",
            "lote": "A-22",
            "quantidade": 3,
            "validade": "2027-05-10",
            "laboratorio": "EMS"
        });
        let novo = NovoRemedio::from_json(&body).unwrap();
        assert_eq!(novo.name, "Amoxicilina");
        assert_eq!(novo.batch, "A-22");
        assert_eq!(novo.laboratory, Laboratorio::Ems);
    }

    #[test]
    fn route_and_quantity_are_optional() {
        let body = json!({
            "name": "Soro",
            "batch": "S1",
            "expiration": "2026-03-01",
            "laboratory": "ACHE"
        });
        let novo = NovoRemedio::from_json(&body).unwrap();
        assert_eq!(novo.route, None);
        assert_eq!(novo.quantity, 0);
    }

    #[test]
    fn reports_every_missing_required_field() {
        let errors = NovoRemedio::from_json(&json!({})).unwrap_err();
        for field in ["name", "batch", "expiration", "laboratory"] {
            assert!(errors.get(field).is_some(), "missing error for {field}");
        }
        assert!(errors.get("route").is_none());
        assert!(errors.get("quantity").is_none());
    }

    #[test]
    fn rejects_bad_values_per_field() {
        let mut body = valid_body();
        body["route"] = json!("TELEPATHIC");
        body["quantity"] = json!(-1);
        body["expiration"] = json!("01/01/2026");
        let errors = NovoRemedio::from_json(&body).unwrap_err().into_map();
        assert_eq!(errors.len(), 3);
        assert!(errors["route"].contains("unknown variant"));
        assert!(errors.contains_key("quantity"));
        assert!(errors.contains_key("expiration"));
    }

    #[test]
    fn update_requires_id() {
        let errors = AtualizacaoRemedio::from_json(&json!({ "name": "X" })).unwrap_err();
        assert_eq!(errors.get("id"), Some("must not be null"));
    }

    #[test]
    fn update_ignores_immutable_fields() {
        let body = json!({ "id": 4, "batch": "other", "quantity": 99, "active": false });
        let update = AtualizacaoRemedio::from_json(&body).unwrap();
        assert_eq!(update, AtualizacaoRemedio { id: 4, name: None, route: None, laboratory: None });
    }

    #[test]
    fn update_rejects_blank_name() {
        let errors = AtualizacaoRemedio::from_json(&json!({ "id": 1, "name": "" })).unwrap_err();
        assert_eq!(errors.get("name"), Some("must not be blank"));
    }

    #[test]
    fn summary_omits_quantity_and_active() {
        let remedio = Remedio::new(1, NovoRemedio::from_json(&valid_body()).unwrap());
        let value = serde_json::to_value(ResumoRemedio::from(&remedio)).unwrap();
        assert!(value.get("quantity").is_none());
        assert!(value.get("active").is_none());
        assert_eq!(value["expiration"], "2026-01-01");

        let detail = serde_json::to_value(DetalheRemedio::from(&remedio)).unwrap();
        assert_eq!(detail["active"], true);
        assert_eq!(detail["quantity"], 10);
    }
}
