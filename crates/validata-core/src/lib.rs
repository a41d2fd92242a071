//! Composable validation engine for Validata.
//!
//! Schemas are trees of validators built through the [`Schema`] factory and
//! chained configuration calls. Validating an input walks the tree once and
//! produces either the sanitized output or every path-qualified error found.

pub mod array;
pub mod boolean;
pub mod date;
pub mod error;
pub mod number;
pub mod object;
pub mod path;
pub mod result;
pub mod schema;
pub mod string;
pub mod validator;
pub mod value;

pub use array::ArrayValidator;
pub use boolean::BooleanValidator;
pub use date::DateValidator;
pub use error::{Error, Result};
pub use number::NumberValidator;
pub use object::ObjectValidator;
pub use path::{field_path, index_path};
pub use result::{ValidationError, ValidationResult};
pub use schema::Schema;
pub use string::StringValidator;
pub use validator::{DynValidator, Presence, Validator};
pub use value::{Record, Value};

/// Message reported when a required value is missing or null.
pub const REQUIRED_MESSAGE: &str = "Value is required";
