use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Field-level validation failures, keyed by wire field name
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("invalid request: {} field error(s)", .0.len())]
pub struct ValidationErrors(HashMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        // First error per field wins
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.0
    }
}

/// Reads typed fields out of a JSON object, accumulating errors instead of
/// stopping at the first one.
pub struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    errors: ValidationErrors,
}

impl<'a> FieldReader<'a> {
    pub fn new(object: &'a Map<String, Value>) -> Self {
        Self { object, errors: ValidationErrors::new() }
    }

    /// First non-null value under `name` or one of its aliases
    fn lookup(&self, name: &str, aliases: &[&str]) -> Option<&'a Value> {
        std::iter::once(name)
            .chain(aliases.iter().copied())
            .filter_map(|key| self.object.get(key))
            .find(|v| !v.is_null())
    }

    pub fn optional<T: DeserializeOwned>(&mut self, name: &str, aliases: &[&str]) -> Option<T> {
        let value = self.lookup(name, aliases)?;
        match serde_json::from_value::<T>(value.clone()) {
            Ok(v) => Some(v),
            Err(e) => {
                self.errors.add(name, describe(&e));
                None
            }
        }
    }

    pub fn required<T: DeserializeOwned>(&mut self, name: &str, aliases: &[&str]) -> Option<T> {
        if self.lookup(name, aliases).is_none() {
            self.errors.add(name, "must not be null");
            return None;
        }
        self.optional(name, aliases)
    }

    /// Required string that must contain something other than whitespace
    pub fn required_text(&mut self, name: &str, aliases: &[&str]) -> Option<String> {
        let text: String = self.required(name, aliases)?;
        if text.trim().is_empty() {
            self.errors.add(name, "must not be blank");
            return None;
        }
        Some(text)
    }

    /// Optional string; when present it must not be blank
    pub fn optional_text(&mut self, name: &str, aliases: &[&str]) -> Option<String> {
        let text: String = self.optional(name, aliases)?;
        if text.trim().is_empty() {
            self.errors.add(name, "must not be blank");
            return None;
        }
        Some(text)
    }

    pub fn error(&mut self, name: &str, message: impl Into<String>) {
        self.errors.add(name, message);
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Strips serde_json's position suffix, which is meaningless for a single value
fn describe(err: &serde_json::Error) -> String {
    let msg = err.to_string();
    match msg.find(" at line ") {
        Some(idx) => msg[..idx].to_string(),
        None => msg,
    }
}

/// Top-level body must be an object
pub fn expect_object(value: &Value) -> Result<&Map<String, Value>, ValidationErrors> {
    value.as_object().ok_or_else(|| {
        let mut errors = ValidationErrors::new();
        errors.add("body", "must be a JSON object");
        errors
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn aliases_are_consulted_in_order() {
        let body = json!({ "nome": "Dipirona" });
        let mut reader = FieldReader::new(body.as_object().unwrap());
        let name: Option<String> = reader.required("name", &["nome"]);
        assert_eq!(name.as_deref(), Some("Dipirona"));
        assert!(reader.finish().is_ok());
    }

    #[test]
    fn null_counts_as_missing() {
        let body = json!({ "name": null });
        let mut reader = FieldReader::new(body.as_object().unwrap());
        assert!(reader.required::<String>("name", &[]).is_none());
        let errors = reader.finish().unwrap_err();
        assert_eq!(errors.get("name"), Some("must not be null"));
    }

    #[test]
    fn type_errors_are_reported_without_position() {
        let body = json!({ "quantity": "ten" });
        let mut reader = FieldReader::new(body.as_object().unwrap());
        assert!(reader.optional::<i32>("quantity", &[]).is_none());
        let errors = reader.finish().unwrap_err();
        let msg = errors.get("quantity").unwrap();
        assert!(msg.starts_with("invalid type"), "{msg}");
        assert!(!msg.contains(" at line "));
    }

    #[test]
    fn blank_text_is_rejected() {
        let body = json!({ "batch": "   " });
        let mut reader = FieldReader::new(body.as_object().unwrap());
        assert!(reader.required_text("batch", &[]).is_none());
        assert_eq!(reader.finish().unwrap_err().get("batch"), Some("must not be blank"));
    }

    #[test]
    fn non_object_body_is_rejected() {
        let errors = expect_object(&json!([1, 2])).unwrap_err();
        assert!(errors.get("body").is_some());
    }
}
