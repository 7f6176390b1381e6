use serde_json::{json, Value};
use std::io::Read;

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(output_format: OutputFormat, message: &str, data: Option<Value>) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });
            if let Some(data_value) = data {
                response["data"] = data_value;
            }
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
            if let Some(data_value) = data {
                println!("{}", serde_json::to_string_pretty(&data_value)?);
            }
        }
    }
    Ok(())
}

/// Print active medications as a table (text) or array (json)
pub fn output_remedio_list(output_format: OutputFormat, remedios: &Value) -> anyhow::Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(remedios)?);
        return Ok(());
    }

    let rows = remedios.as_array().map(Vec::as_slice).unwrap_or_default();
    if rows.is_empty() {
        println!("No active medications");
        return Ok(());
    }

    println!("{:<6} {:<30} {:<14} {:<12} {:<12} {}", "ID", "NAME", "ROUTE", "BATCH", "EXPIRES", "LABORATORY");
    for row in rows {
        println!(
            "{:<6} {:<30} {:<14} {:<12} {:<12} {}",
            row["id"],
            text(&row["name"]),
            text(&row["route"]),
            text(&row["batch"]),
            text(&row["expiration"]),
            text(&row["laboratory"]),
        );
    }
    Ok(())
}

fn text(value: &Value) -> &str {
    value.as_str().unwrap_or("-")
}

/// Read a JSON object from stdin
pub fn read_json_stdin() -> anyhow::Result<Value> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    parse_json_object(&input)
}

pub fn parse_json_object(input: &str) -> anyhow::Result<Value> {
    let value: Value = serde_json::from_str(input.trim())
        .map_err(|e| anyhow::anyhow!("stdin is not valid JSON: {}", e))?;
    if !value.is_object() {
        anyhow::bail!("stdin must contain a JSON object");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_objects_only() {
        assert!(parse_json_object(r#"{ "name": "Dipirona" }"#).is_ok());
        assert!(parse_json_object("[1]").is_err());
        assert!(parse_json_object("{").is_err());
    }
}
