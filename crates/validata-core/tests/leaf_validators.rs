use chrono::{TimeZone, Utc};
use regex::Regex;
use serde_json::json;
use validata_core::{DynValidator, REQUIRED_MESSAGE, Schema, Validator, Value};

fn value(json: serde_json::Value) -> Value {
    Value::from(json)
}

#[test]
fn string_accepts_and_returns_input() {
    let result = Schema::string().validate(&value(json!("hello")));
    assert!(result.success);
    assert_eq!(result.data.as_deref(), Some("hello"));
    assert!(result.errors.is_empty());
}

#[test]
fn string_rejects_other_kinds() {
    let result = Schema::string().validate(&value(json!(123)));
    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "Expected string");
    assert_eq!(result.errors[0].value, Some(Value::Number(123.0)));
    assert!(result.data.is_none());
}

#[test]
fn string_length_bounds() {
    let short = Schema::string().min_length(5).validate(&value(json!("ab")));
    assert_eq!(short.errors.len(), 1);
    assert_eq!(short.errors[0].message, "String must be at least 5 characters");

    let long = Schema::string().max_length(5).validate(&value(json!("hello world")));
    assert_eq!(long.errors.len(), 1);
    assert_eq!(long.errors[0].message, "String must be at most 5 characters");

    assert!(Schema::string().min_length(5).max_length(5).validate(&value(json!("hello"))).success);
}

#[test]
fn string_pattern() {
    let email = Schema::string().pattern(Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
    assert!(email.validate(&value(json!("test@example.com"))).success);

    let result = email.validate(&value(json!("invalid email")));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "String does not match required pattern");
}

#[test]
fn unanchored_pattern_matches_substring() {
    let validator = Schema::string().pattern(Regex::new(r"\d").unwrap());
    assert!(validator.validate(&value(json!("abc1"))).success);
}

#[test]
fn custom_message_replaces_every_error() {
    let validator = Schema::string().min_length(3).with_message("Custom error");
    let wrong_kind = validator.validate(&value(json!(123)));
    assert_eq!(wrong_kind.errors[0].message, "Custom error");
    let too_short = validator.validate(&value(json!("a")));
    assert_eq!(too_short.errors[0].message, "Custom error");
    let missing = validator.validate_missing();
    assert_eq!(missing.errors[0].message, "Custom error");
}

#[test]
fn presence_rules_apply_to_every_kind() {
    let required: Vec<Box<dyn DynValidator>> = vec![
        Box::new(Schema::string()),
        Box::new(Schema::number()),
        Box::new(Schema::boolean()),
        Box::new(Schema::date()),
        Box::new(Schema::array(Schema::string())),
        Box::new(Schema::object()),
    ];
    for validator in &required {
        for input in [None, Some(&Value::Null)] {
            let result = validator.validate_value(input, "field");
            assert!(!result.success);
            assert_eq!(result.errors.len(), 1);
            assert_eq!(result.errors[0].path, "field");
            assert_eq!(result.errors[0].message, REQUIRED_MESSAGE);
        }
    }

    let optional: Vec<Box<dyn DynValidator>> = vec![
        Box::new(Schema::string().min_length(3).optional()),
        Box::new(Schema::number().min(1.0).optional()),
        Box::new(Schema::boolean().optional()),
        Box::new(Schema::date().optional()),
        Box::new(Schema::array(Schema::string()).min_length(1).optional()),
        Box::new(Schema::object().field("x", Schema::string()).optional()),
    ];
    for validator in &optional {
        for input in [None, Some(&Value::Null)] {
            let result = validator.validate_value(input, "field");
            assert!(result.success);
            assert!(result.data.is_none());
            assert!(result.errors.is_empty());
        }
    }
}

#[test]
fn number_type_checks() {
    let result = Schema::number().validate(&value(json!("abc")));
    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "Expected number");

    assert_eq!(Schema::number().validate(&value(json!(42))).data, Some(42.0));
}

#[test]
fn number_reports_only_violated_bounds() {
    let validator = Schema::number().min(0.0).max(10.0);
    let result = validator.validate(&value(json!(-5)));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "Number must be at least 0");

    let result = Schema::number().min(0.0).max(100.0).integer().validate(&value(json!(-5.5)));
    let messages: Vec<_> = result.errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["Number must be at least 0", "Number must be an integer"]);
}

#[test]
fn number_integer_constraint() {
    let validator = Schema::number().integer();
    assert_eq!(validator.validate(&value(json!(3.14))).errors.len(), 1);
    assert!(validator.validate(&value(json!(42))).success);
}

#[test]
fn boolean_accepts_only_booleans() {
    assert_eq!(Schema::boolean().validate(&value(json!(true))).data, Some(true));
    assert_eq!(Schema::boolean().validate(&value(json!(false))).data, Some(false));
    let result = Schema::boolean().validate(&value(json!("true")));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].message, "Expected boolean");
}

#[test]
fn date_coerces_strings_and_instances() {
    let date = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(Schema::date().validate(&Value::Date(date)).data, Some(date));
    assert_eq!(Schema::date().validate(&value(json!("2023-01-01"))).data, Some(date));

    let invalid = Schema::date().validate(&value(json!("invalid date")));
    assert_eq!(invalid.errors.len(), 1);
    assert_eq!(invalid.errors[0].message, "Invalid date");

    let wrong_kind = Schema::date().validate(&value(json!(true)));
    assert_eq!(wrong_kind.errors[0].message, "Expected Date, string, or number");
}

#[test]
fn date_accepts_partial_and_offset_strings() {
    let cases = [
        ("2023", Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()),
        ("2023-06", Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap()),
        ("2023-06-01T10:00Z", Utc.with_ymd_and_hms(2023, 6, 1, 10, 0, 0).unwrap()),
        ("2023-06-01T10:00+02:00", Utc.with_ymd_and_hms(2023, 6, 1, 8, 0, 0).unwrap()),
        ("2023-06-01 10:00", Utc.with_ymd_and_hms(2023, 6, 1, 10, 0, 0).unwrap()),
    ];
    for (input, expected) in cases {
        assert_eq!(Schema::date().validate(&value(json!(input))).data, Some(expected), "{input}");
    }
    let result = Schema::date().validate(&value(json!("2023-13")));
    assert_eq!(result.errors[0].message, "Invalid date");
}

#[test]
fn date_bounds_are_exclusive() {
    let cutoff = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();

    let before = Schema::date().before(cutoff);
    assert!(before.validate(&value(json!("2022-12-31"))).success);
    assert_eq!(before.validate(&value(json!("2023-01-02"))).errors.len(), 1);
    assert!(!before.validate(&Value::Date(cutoff)).success);

    let after = Schema::date().after(cutoff);
    assert!(after.validate(&value(json!("2023-01-02"))).success);
    assert_eq!(after.validate(&value(json!("2022-12-31"))).errors.len(), 1);
    let boundary = after.validate(&Value::Date(cutoff));
    assert!(!boundary.success);
    assert_eq!(
        boundary.errors[0].message,
        "Date must be after 2023-01-01T00:00:00.000Z"
    );
}
