//! Definition reference (`#/Name`) utilities.
//!
//! Contract documents point at their named definitions with reference
//! strings of the form `#/<DefinitionName>`. This crate implements the
//! helpers for moving between the pointer form and the bare definition
//! name.
//!
//! # Example
//!
//! ```
//! use contract_rows_pointer::{strip_reference_prefix, make_reference, is_reference};
//!
//! // Strip the pointer prefix to get the bare definition name
//! assert_eq!(strip_reference_prefix("#/Guid"), "Guid");
//!
//! // Attach the prefix to a bare name
//! assert_eq!(make_reference("Guid"), "#/Guid");
//!
//! // Check whether a string is reference-shaped
//! assert!(is_reference("#/Guid"));
//! assert!(!is_reference("Guid"));
//! ```

use thiserror::Error;

/// The pointer prefix that introduces a definition reference.
pub const REFERENCE_PREFIX: &str = "#/";

/// Strips the leading `#/` from a reference string, returning the bare
/// definition name.
///
/// A string without the prefix is returned unchanged, so the function
/// is safe to apply to values that may already be bare names.
///
/// # Example
///
/// ```
/// use contract_rows_pointer::strip_reference_prefix;
///
/// assert_eq!(strip_reference_prefix("#/Guid"), "Guid");
/// assert_eq!(strip_reference_prefix("Guid"), "Guid");
/// assert_eq!(strip_reference_prefix("#/"), "");
/// ```
pub fn strip_reference_prefix(reference: &str) -> &str {
    reference.strip_prefix(REFERENCE_PREFIX).unwrap_or(reference)
}

/// Formats a bare definition name as a reference string.
///
/// # Example
///
/// ```
/// use contract_rows_pointer::make_reference;
///
/// assert_eq!(make_reference("Guid"), "#/Guid");
/// ```
pub fn make_reference(name: &str) -> String {
    let mut out = String::with_capacity(REFERENCE_PREFIX.len() + name.len());
    out.push_str(REFERENCE_PREFIX);
    out.push_str(name);
    out
}

/// Returns true when the string carries the `#/` pointer prefix.
pub fn is_reference(value: &str) -> bool {
    value.starts_with(REFERENCE_PREFIX)
}

/// Validates a reference string.
///
/// A valid reference is `#/` followed by a non-empty definition name
/// that contains no further `/` separators (references always target a
/// sibling top-level definition, never a nested path).
///
/// # Errors
///
/// - [`ReferenceError::MissingPrefix`] - the string does not start with `#/`
/// - [`ReferenceError::EmptyName`] - nothing follows the prefix
/// - [`ReferenceError::NestedPath`] - the name contains a `/`
///
/// # Example
///
/// ```
/// use contract_rows_pointer::{validate_reference, ReferenceError};
///
/// assert!(validate_reference("#/Guid").is_ok());
/// assert_eq!(validate_reference("Guid"), Err(ReferenceError::MissingPrefix));
/// assert_eq!(validate_reference("#/"), Err(ReferenceError::EmptyName));
/// assert_eq!(validate_reference("#/a/b"), Err(ReferenceError::NestedPath));
/// ```
pub fn validate_reference(value: &str) -> Result<(), ReferenceError> {
    let Some(name) = value.strip_prefix(REFERENCE_PREFIX) else {
        return Err(ReferenceError::MissingPrefix);
    };
    if name.is_empty() {
        return Err(ReferenceError::EmptyName);
    }
    if name.contains('/') {
        return Err(ReferenceError::NestedPath);
    }
    Ok(())
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReferenceError {
    #[error("MISSING_PREFIX")]
    MissingPrefix,
    #[error("EMPTY_NAME")]
    EmptyName,
    #[error("NESTED_PATH")]
    NestedPath,
}
