use crate::result::ValidationResult;
use crate::validator::{Presence, Validator};
use crate::value::{Value, format_number};

/// Validates numeric values against range and integer constraints.
#[derive(Debug, Clone, Default)]
pub struct NumberValidator {
    presence: Presence,
    min: Option<f64>,
    max: Option<f64>,
    integer: bool,
}

impl NumberValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inclusive lower bound.
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Inclusive upper bound.
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Require a whole number.
    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }
}

fn is_whole(number: f64) -> bool {
    number.is_finite() && number.fract() == 0.0
}

impl Validator for NumberValidator {
    type Output = f64;

    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<f64> {
        let value = match self.presence.require(value, path) {
            Ok(value) => value,
            Err(result) => return result,
        };

        let number = match value {
            Value::Number(number) if !number.is_nan() => *number,
            _ => return self.presence.reject("Expected number", Some(value), path),
        };

        let mut errors = Vec::new();

        if let Some(min) = self.min {
            if number < min {
                errors.push(self.presence.error(
                    format!("Number must be at least {}", format_number(min)),
                    Some(value),
                    path,
                ));
            }
        }

        if let Some(max) = self.max {
            if number > max {
                errors.push(self.presence.error(
                    format!("Number must be at most {}", format_number(max)),
                    Some(value),
                    path,
                ));
            }
        }

        if self.integer && !is_whole(number) {
            errors.push(self.presence.error("Number must be an integer", Some(value), path));
        }

        ValidationResult::from_parts(number, errors)
    }

    fn presence(&self) -> &Presence {
        &self.presence
    }

    fn presence_mut(&mut self) -> &mut Presence {
        &mut self.presence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_not_a_number() {
        let result = NumberValidator::new().validate(&Value::Number(f64::NAN));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].message, "Expected number");
    }

    #[test]
    fn bound_messages_use_plain_formatting() {
        let validator = NumberValidator::new().min(0.0).max(2.5);
        assert_eq!(
            validator.validate(&Value::from(-1)).errors[0].message,
            "Number must be at least 0"
        );
        assert_eq!(
            validator.validate(&Value::from(3)).errors[0].message,
            "Number must be at most 2.5"
        );
    }

    #[test]
    fn large_bounds_use_exponent_notation() {
        let result = NumberValidator::new().max(1e21).validate(&Value::Number(2e21));
        assert_eq!(result.errors[0].message, "Number must be at most 1e+21");
        let result = NumberValidator::new().min(1e-7).validate(&Value::Number(0.0));
        assert_eq!(result.errors[0].message, "Number must be at least 1e-7");
    }

    #[test]
    fn infinity_is_a_number_but_not_an_integer() {
        assert!(NumberValidator::new().validate(&Value::Number(f64::INFINITY)).success);
        let result = NumberValidator::new()
            .integer()
            .validate(&Value::Number(f64::INFINITY));
        assert_eq!(result.errors[0].message, "Number must be an integer");
    }
}
