use crate::array::ArrayValidator;
use crate::boolean::BooleanValidator;
use crate::date::DateValidator;
use crate::number::NumberValidator;
use crate::object::ObjectValidator;
use crate::string::StringValidator;
use crate::validator::{DynValidator, Validator};

/// Entry point for building schemas.
///
/// Every constructor returns a fresh, independently configurable validator.
///
/// ```
/// use validata_core::{Schema, Validator, Value};
///
/// let schema = Schema::object()
///     .field("name", Schema::string().min_length(2))
///     .field("age", Schema::number().min(0.0).optional());
///
/// let result = schema.validate(&Value::from(serde_json::json!({"name": "Jo"})));
/// assert!(result.success);
/// ```
pub struct Schema;

impl Schema {
    pub fn string() -> StringValidator {
        StringValidator::new()
    }

    pub fn number() -> NumberValidator {
        NumberValidator::new()
    }

    pub fn boolean() -> BooleanValidator {
        BooleanValidator::new()
    }

    pub fn date() -> DateValidator {
        DateValidator::new()
    }

    /// Array whose items are all checked by `item`.
    pub fn array<V: Validator>(item: V) -> ArrayValidator<V> {
        ArrayValidator::new(item)
    }

    /// Object without fields; declare them with [`ObjectValidator::field`].
    pub fn object() -> ObjectValidator {
        ObjectValidator::new()
    }

    /// Object from an ordered list of erased field validators.
    pub fn object_from<I, K>(fields: I) -> ObjectValidator
    where
        I: IntoIterator<Item = (K, Box<dyn DynValidator>)>,
        K: Into<String>,
    {
        ObjectValidator::from_fields(fields)
    }
}
