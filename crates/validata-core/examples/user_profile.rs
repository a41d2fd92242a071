use std::env;
use std::path::PathBuf;

use regex::Regex;
use validata_core::{Schema, ValidationError, Validator, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let schema = Schema::object()
        .field("id", Schema::string().min_length(1).with_message("User ID is required"))
        .field(
            "username",
            Schema::string()
                .min_length(3)
                .max_length(20)
                .pattern(Regex::new(r"^[a-zA-Z0-9_]+$")?)
                .with_message("Username must be 3-20 characters, alphanumeric and underscores only"),
        )
        .field(
            "email",
            Schema::string()
                .pattern(Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")?)
                .with_message("Invalid email format"),
        )
        .field("age", Schema::number().min(13.0).max(120.0).integer().optional())
        .field("isActive", Schema::boolean())
        .field("tags", Schema::array(Schema::string()).min_length(1).max_length(10));

    let input = match env::args().nth(1).map(PathBuf::from) {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => serde_json::json!({
            "id": "",
            "username": "jo",
            "email": "invalid-email",
            "age": 12,
            "isActive": "yes",
            "tags": []
        }),
    };

    let result = schema.validate(&Value::from(input));
    if result.success {
        let data = serde_json::Value::from(Value::from(result.data));
        println!("valid: {}", serde_json::to_string_pretty(&data)?);
    } else {
        eprintln!("validation failed with {} error(s)", result.errors.len());
        print_errors(&result.errors);
    }

    Ok(())
}

fn print_errors(errors: &[ValidationError]) {
    for (index, error) in errors.iter().enumerate() {
        eprintln!("{}. {}: {}", index + 1, error.path, error.message);
    }
}
