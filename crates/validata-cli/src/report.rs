use std::fmt::Write as _;

use validata_core::{Record, ValidationResult, Value};

use crate::CliError;
use crate::settings::OutputFormat;

/// Render a validation outcome for the terminal.
pub fn render(result: &ValidationResult<Record>, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => {
            let erased = ValidationResult {
                success: result.success,
                data: result.data.clone().map(Value::from),
                errors: result.errors.clone(),
            };
            Ok(serde_json::to_string_pretty(&erased)?)
        }
        OutputFormat::Text => render_text(result),
    }
}

fn render_text(result: &ValidationResult<Record>) -> Result<String, CliError> {
    let mut out = String::new();
    if result.success {
        let data = serde_json::Value::from(Value::from(result.data.clone()));
        let _ = writeln!(out, "✔ valid");
        out.push_str(&serde_json::to_string_pretty(&data)?);
        return Ok(out);
    }

    let _ = write!(out, "✘ invalid ({} error", result.errors.len());
    if result.errors.len() != 1 {
        out.push('s');
    }
    out.push(')');
    for (index, error) in result.errors.iter().enumerate() {
        let path = if error.path.is_empty() {
            "<root>"
        } else {
            error.path.as_str()
        };
        let _ = write!(out, "\n{}. {}: {}", index + 1, path, error.message);
    }
    Ok(out)
}
