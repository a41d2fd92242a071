//! Error path construction.
//!
//! Paths address a value from the validation root: the root itself is the
//! empty string, object fields are joined with `.`, array items use `[i]`.

/// Path of field `name` inside the value at `parent`.
pub fn field_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

/// Path of item `index` inside the array at `parent`.
pub fn index_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}
