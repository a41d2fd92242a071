use serde::Serialize;

use crate::error::{Error, Result};
use crate::value::Value;

/// Single validation failure with its location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Address of the offending value from the validation root.
    pub path: String,
    pub message: String,
    /// The offending input; `None` when the value was absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl ValidationError {
    /// Create a new validation error.
    pub fn new(path: impl Into<String>, message: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            value,
        }
    }
}

/// Outcome of validating one input.
///
/// `success` is true exactly when `errors` is empty. `data` is only ever set
/// on success; it is `None` on success only when an optional validator
/// received an absent value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub errors: Vec<ValidationError>,
}

impl<T> ValidationResult<T> {
    /// Successful result carrying `data`.
    pub fn valid(data: Option<T>) -> Self {
        Self {
            success: true,
            data,
            errors: Vec::new(),
        }
    }

    /// Failed result with the given errors.
    pub fn invalid(errors: Vec<ValidationError>) -> Self {
        Self {
            success: errors.is_empty(),
            data: None,
            errors,
        }
    }

    /// Result from accumulated constraint errors: `data` is kept only when
    /// no error was collected.
    pub fn from_parts(data: T, errors: Vec<ValidationError>) -> Self {
        if errors.is_empty() {
            Self::valid(Some(data))
        } else {
            Self::invalid(errors)
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Transform the validated data, keeping errors untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ValidationResult<U> {
        ValidationResult {
            success: self.success,
            data: self.data.map(f),
            errors: self.errors,
        }
    }

    /// Convert into a standard `Result`, failing with [`Error::Invalid`].
    pub fn into_result(self) -> Result<Option<T>> {
        if self.success {
            Ok(self.data)
        } else {
            Err(Error::Invalid(self.errors))
        }
    }
}
