use serde_json::{json, Value};

use crate::cli::OutputFormat;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let (Some(target), Some(Value::Object(extra))) = (response.as_object_mut(), data) {
                target.extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output a server reply: pretty JSON, or one line per record in text mode
pub fn output_value(output_format: &OutputFormat, value: &Value) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => match value {
            Value::Array(rows) if rows.is_empty() => println!("(none)"),
            Value::Array(rows) => {
                for row in rows {
                    println!("{}", format_record(row));
                }
            }
            Value::String(text) => println!("{}", text),
            other => println!("{}", format_record(other)),
        },
    }
    Ok(())
}

/// Output a dashboard-shaped object: one section per collection
pub fn output_sections(output_format: &OutputFormat, value: &Value) -> anyhow::Result<()> {
    let sections = match (output_format, value.as_object()) {
        (OutputFormat::Text, Some(sections)) => sections,
        _ => return output_value(output_format, value),
    };

    for (name, section) in sections {
        match section {
            Value::Array(_) | Value::Object(_) => {
                println!("{}:", name);
                match section {
                    Value::Array(rows) if rows.is_empty() => println!("  (none)"),
                    Value::Array(rows) => {
                        for row in rows {
                            println!("  {}", format_record(row));
                        }
                    }
                    other => println!("  {}", format_record(other)),
                }
            }
            scalar => println!("{}: {}", name, plain(scalar)),
        }
    }
    Ok(())
}

/// `key=value` pairs in field order, with `user_id` left out
pub fn format_record(value: &Value) -> String {
    match value {
        Value::Object(fields) => fields
            .iter()
            .filter(|(key, _)| key.as_str() != "user_id")
            .map(|(key, value)| format!("{}={}", key, plain(value)))
            .collect::<Vec<_>>()
            .join("  "),
        other => plain(other),
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_record_without_owner() {
        let row = json!({
            "id": "abc",
            "user_id": "owner",
            "amount": "12.50",
            "notes": null
        });
        let line = format_record(&row);
        assert!(line.contains("id=abc"));
        assert!(line.contains("amount=12.50"));
        assert!(line.contains("notes=-"));
        assert!(!line.contains("owner"));
    }

    #[test]
    fn formats_scalars_plainly() {
        assert_eq!(format_record(&json!("done")), "done");
        assert_eq!(format_record(&json!(true)), "true");
    }
}
