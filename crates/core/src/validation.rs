//! Validation result types.
//!
//! Required-field checks are expressed as plain functions per entity type
//! (see the model modules in `inventory-db`) that return a list of
//! [`FieldViolation`]s. Keeping the result type here lets callers validate
//! a payload without pulling in the HTTP layer.

use serde::Serialize;

/// A single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// The standard "must not be null" violation for a missing required field.
    pub fn required(field: &'static str) -> Self {
        Self::new(field, "must not be null")
    }
}

/// Push a [`FieldViolation::required`] when a required field is absent.
pub fn check_required<T>(field: &'static str, value: &Option<T>, out: &mut Vec<FieldViolation>) {
    if value.is_none() {
        out.push(FieldViolation::required(field));
    }
}
