use regex::Regex;

use crate::error::Result;
use crate::result::ValidationResult;
use crate::validator::{Presence, Validator};
use crate::value::Value;

/// Validates string values against length and pattern constraints.
#[derive(Debug, Clone, Default)]
pub struct StringValidator {
    presence: Presence,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<Regex>,
}

impl StringValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require at least `length` characters.
    ///
    /// Length counts Unicode scalar values, not UTF-16 code units, so an
    /// astral character such as an emoji counts once.
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Allow at most `length` characters, counted as for
    /// [`min_length`](Self::min_length).
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Require a match of `pattern` somewhere in the string.
    ///
    /// The expression is not implicitly anchored; use `^...$` to constrain
    /// the whole value.
    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Compile `pattern` and require a match, see [`StringValidator::pattern`].
    pub fn try_pattern(self, pattern: &str) -> Result<Self> {
        let compiled = Regex::new(pattern)?;
        Ok(self.pattern(compiled))
    }
}

impl Validator for StringValidator {
    type Output = String;

    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<String> {
        let value = match self.presence.require(value, path) {
            Ok(value) => value,
            Err(result) => return result,
        };

        let Value::String(text) = value else {
            return self.presence.reject("Expected string", Some(value), path);
        };

        let length = text.chars().count();
        let mut errors = Vec::new();

        if let Some(min) = self.min_length {
            if length < min {
                errors.push(self.presence.error(
                    format!("String must be at least {min} characters"),
                    Some(value),
                    path,
                ));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                errors.push(self.presence.error(
                    format!("String must be at most {max} characters"),
                    Some(value),
                    path,
                ));
            }
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(text) {
                errors.push(self.presence.error(
                    "String does not match required pattern",
                    Some(value),
                    path,
                ));
            }
        }

        ValidationResult::from_parts(text.clone(), errors)
    }

    fn presence(&self) -> &Presence {
        &self.presence
    }

    fn presence_mut(&mut self) -> &mut Presence {
        &mut self.presence
    }
}
