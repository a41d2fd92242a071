use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::path::field_path;
use crate::result::ValidationResult;
use crate::validator::{DynValidator, Presence, Validator};
use crate::value::{Record, Value};

/// Validates objects field by field in declaration order.
///
/// The output is a projection: it contains only declared fields whose
/// validated data is present. Input fields missing from the schema are
/// ignored rather than rejected.
#[derive(Default)]
pub struct ObjectValidator {
    presence: Presence,
    fields: Vec<(String, Box<dyn DynValidator>)>,
}

impl ObjectValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from pre-erased field validators, keeping iteration order.
    pub fn from_fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Box<dyn DynValidator>)>,
        K: Into<String>,
    {
        fields
            .into_iter()
            .fold(Self::new(), |object, (name, validator)| {
                object.insert(name.into(), validator)
            })
    }

    /// Declare field `name`. Declaring a name twice replaces its validator
    /// while keeping the original position.
    pub fn field<V>(self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validator + Send + Sync + 'static,
    {
        self.insert(name.into(), Box::new(validator))
    }

    fn insert(mut self, name: String, validator: Box<dyn DynValidator>) -> Self {
        match self.fields.iter_mut().find(|entry| entry.0 == name) {
            Some(entry) => entry.1 = validator,
            None => self.fields.push((name, validator)),
        }
        self
    }

    /// Declared field names in validation order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Validate `value` and deserialize the projected record into `T`.
    ///
    /// An absent optional object deserializes from `null`.
    pub fn parse<T: DeserializeOwned>(&self, value: &Value) -> Result<T> {
        let record = self.validate(value).into_result()?;
        let json = serde_json::Value::from(Value::from(record));
        serde_json::from_value(json).map_err(Error::from)
    }
}

impl fmt::Debug for ObjectValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValidator")
            .field("presence", &self.presence)
            .field("fields", &self.field_names().collect::<Vec<_>>())
            .finish()
    }
}

impl Validator for ObjectValidator {
    type Output = Record;

    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<Record> {
        let value = match self.presence.require(value, path) {
            Ok(value) => value,
            Err(result) => return result,
        };

        let Value::Object(input) = value else {
            return self.presence.reject("Expected object", Some(value), path);
        };

        let mut errors = Vec::new();
        let mut projected = Record::new();
        let mut failed_fields = 0usize;

        for (name, validator) in &self.fields {
            let result = validator.validate_value(input.get(name), &field_path(path, name));
            if !result.success {
                failed_fields += 1;
                errors.extend(result.errors);
            } else if let Some(data) = result.data {
                projected.insert(name.clone(), data);
            }
        }

        if failed_fields > 0 {
            tracing::debug!(
                path = %path,
                fields = self.fields.len(),
                failed_fields,
                "object fields failed validation"
            );
        }

        ValidationResult::from_parts(projected, errors)
    }

    fn presence(&self) -> &Presence {
        &self.presence
    }

    fn presence_mut(&mut self) -> &mut Presence {
        &mut self.presence
    }
}
