use crate::path::index_path;
use crate::result::ValidationResult;
use crate::validator::{Presence, Validator};
use crate::value::Value;

/// Validates arrays whose items all match one item validator.
///
/// Every item is checked, so a single pass reports all failing indexes. On
/// success the output holds the validated items in order; items whose
/// validated data is absent (an optional item receiving null) are dropped, so
/// output indexes only line up with input indexes when the item validator is
/// required.
#[derive(Debug, Clone)]
pub struct ArrayValidator<V> {
    presence: Presence,
    item: V,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl<V: Validator> ArrayValidator<V> {
    pub fn new(item: V) -> Self {
        Self {
            presence: Presence::default(),
            item,
            min_length: None,
            max_length: None,
        }
    }

    /// Require at least `length` items.
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Allow at most `length` items.
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    /// The validator applied to each item.
    pub fn item(&self) -> &V {
        &self.item
    }
}

impl<V: Validator> Validator for ArrayValidator<V> {
    type Output = Vec<V::Output>;

    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<Self::Output> {
        let value = match self.presence.require(value, path) {
            Ok(value) => value,
            Err(result) => return result,
        };

        let Value::Array(items) = value else {
            return self.presence.reject("Expected array", Some(value), path);
        };

        let mut errors = Vec::new();

        if let Some(min) = self.min_length {
            if items.len() < min {
                errors.push(self.presence.error(
                    format!("Array must have at least {min} items"),
                    Some(value),
                    path,
                ));
            }
        }

        if let Some(max) = self.max_length {
            if items.len() > max {
                errors.push(self.presence.error(
                    format!("Array must have at most {max} items"),
                    Some(value),
                    path,
                ));
            }
        }

        let mut validated = Vec::with_capacity(items.len());
        let mut failed_items = 0usize;
        for (index, item) in items.iter().enumerate() {
            let result = self.item.validate_at(Some(item), &index_path(path, index));
            if !result.success {
                failed_items += 1;
                errors.extend(result.errors);
            } else if let Some(data) = result.data {
                validated.push(data);
            }
        }

        if failed_items > 0 {
            tracing::debug!(
                path = %path,
                items = items.len(),
                failed_items,
                "array items failed validation"
            );
        }

        ValidationResult::from_parts(validated, errors)
    }

    fn presence(&self) -> &Presence {
        &self.presence
    }

    fn presence_mut(&mut self) -> &mut Presence {
        &mut self.presence
    }
}
