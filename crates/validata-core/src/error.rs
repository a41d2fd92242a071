use thiserror::Error;

use crate::result::ValidationError;

/// Error type for the Validata engine.
///
/// Malformed input data never surfaces here during `validate`; it is reported
/// through [`crate::ValidationResult`]. These variants cover conversions out of
/// a result and misuse of the schema construction API.
#[derive(Debug, Error)]
pub enum Error {
    /// The input failed validation.
    #[error("validation failed with {} error(s)", .0.len())]
    Invalid(Vec<ValidationError>),
    /// A string pattern could not be compiled.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// Projected data could not be converted into the requested type.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results returned by Validata crates.
pub type Result<T> = std::result::Result<T, Error>;
