//! Bound field references and validation state.
//!
//! A [`FieldBinding`] is an owned snapshot of the model metadata a helper
//! needs for one field: its name, display label, and required flag. The
//! host's model-binding step produces these; helpers only read them.
//!
//! [`ValidationState`] carries the per-field error messages recorded by
//! the host's validation step before rendering began.

use std::collections::HashMap;

/// A named reference to a field on the page's data model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    /// The field's name, used for validation lookup and `for` attributes.
    pub name: String,
    /// Human-readable display label.
    pub label: String,
    /// Whether the field's metadata marks it required.
    pub required: bool,
}

impl FieldBinding {
    /// Creates a binding with the given name and display label.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            required: false,
        }
    }

    /// Marks the field as required.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Returns the auto-generated HTML `id` for this field.
    pub fn auto_id(&self) -> String {
        format!("id_{}", self.name)
    }
}

/// Per-field validation errors recorded before rendering.
///
/// Lookup is by exact field name. Helpers surface at most the first
/// error per field.
///
/// # Examples
///
/// ```
/// use tachi_rs_helpers::ValidationState;
///
/// let mut state = ValidationState::new();
/// state.add_error("email", "Enter a valid email address.");
/// state.add_error("email", "This field is required.");
///
/// assert_eq!(state.first_error("email"), Some("Enter a valid email address."));
/// assert!(state.first_error("name").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationState {
    errors: HashMap<String, Vec<String>>,
}

impl ValidationState {
    /// Creates an empty (valid) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error message for a field.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_default().push(message.into());
    }

    /// Returns all error messages for a field, in recorded order.
    pub fn errors_for(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Returns the first error message for a field, if any.
    pub fn first_error(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|errors| errors.first())
            .map(String::as_str)
    }

    /// Returns `true` if the field has at least one recorded error.
    pub fn has_errors(&self, field: &str) -> bool {
        self.errors.get(field).is_some_and(|e| !e.is_empty())
    }

    /// Returns `true` if no field has errors.
    pub fn is_valid(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }
}
