use crate::result::ValidationResult;
use crate::validator::{Presence, Validator};
use crate::value::Value;

/// Validates boolean values.
#[derive(Debug, Clone, Default)]
pub struct BooleanValidator {
    presence: Presence,
}

impl BooleanValidator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Validator for BooleanValidator {
    type Output = bool;

    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<bool> {
        let value = match self.presence.require(value, path) {
            Ok(value) => value,
            Err(result) => return result,
        };

        match value {
            Value::Bool(flag) => ValidationResult::valid(Some(*flag)),
            _ => self.presence.reject("Expected boolean", Some(value), path),
        }
    }

    fn presence(&self) -> &Presence {
        &self.presence
    }

    fn presence_mut(&mut self) -> &mut Presence {
        &mut self.presence
    }
}
