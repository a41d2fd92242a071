use crate::REQUIRED_MESSAGE;
use crate::result::{ValidationError, ValidationResult};
use crate::value::Value;

/// Configuration shared by every validator node: the optional flag and the
/// custom message. It applies to the owning node only, never to children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presence {
    pub optional: bool,
    pub message: Option<String>,
}

impl Presence {
    /// Build an error for this node, substituting the custom message if set.
    pub(crate) fn error(
        &self,
        message: impl Into<String>,
        value: Option<&Value>,
        path: &str,
    ) -> ValidationError {
        let message = match &self.message {
            Some(custom) => custom.clone(),
            None => message.into(),
        };
        ValidationError::new(path, message, value.cloned())
    }

    /// Single-error failure for this node.
    pub(crate) fn reject<T>(
        &self,
        message: impl Into<String>,
        value: Option<&Value>,
        path: &str,
    ) -> ValidationResult<T> {
        let message = message.into();
        tracing::trace!(
            path = %path,
            kind = value.map_or("absent", crate::value::Value::kind),
            message = %message,
            "value rejected"
        );
        ValidationResult::invalid(vec![self.error(message, value, path)])
    }

    /// Gate absent and null values before any kind check.
    ///
    /// Returns the present value, or the finished result: success without
    /// data for optional nodes, a required error otherwise.
    pub(crate) fn require<'v, T>(
        &self,
        value: Option<&'v Value>,
        path: &str,
    ) -> Result<&'v Value, ValidationResult<T>> {
        match value {
            Some(value) if !value.is_null() => Ok(value),
            _ if self.optional => Err(ValidationResult::valid(None)),
            missing => Err(self.reject(REQUIRED_MESSAGE, missing, path)),
        }
    }
}

/// A node of a schema tree.
///
/// Configuration calls consume and return the validator, so a schema reads as
/// one chained expression. Once built, a validator keeps no per-call state and
/// can validate any number of inputs.
pub trait Validator {
    /// Sanitized output produced on success.
    type Output: Into<Value>;

    /// Validate `value` located at `path`. `None` means the value is absent.
    fn validate_at(&self, value: Option<&Value>, path: &str) -> ValidationResult<Self::Output>;

    fn presence(&self) -> &Presence;

    fn presence_mut(&mut self) -> &mut Presence;

    /// Validate a root value.
    fn validate(&self, value: &Value) -> ValidationResult<Self::Output> {
        self.validate_at(Some(value), "")
    }

    /// Validate an absent root value.
    fn validate_missing(&self) -> ValidationResult<Self::Output> {
        self.validate_at(None, "")
    }

    /// Accept absent and null values as success without data.
    fn optional(mut self) -> Self
    where
        Self: Sized,
    {
        self.presence_mut().optional = true;
        self
    }

    /// Replace the message of every error this node generates.
    fn with_message(mut self, message: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.presence_mut().message = Some(message.into());
        self
    }

    fn is_optional(&self) -> bool {
        self.presence().optional
    }
}

/// Object-safe view of a [`Validator`] with its output erased to [`Value`].
pub trait DynValidator: Send + Sync {
    fn validate_value(&self, value: Option<&Value>, path: &str) -> ValidationResult<Value>;
}

impl<V> DynValidator for V
where
    V: Validator + Send + Sync,
{
    fn validate_value(&self, value: Option<&Value>, path: &str) -> ValidationResult<Value> {
        self.validate_at(value, path).map(Into::into)
    }
}
