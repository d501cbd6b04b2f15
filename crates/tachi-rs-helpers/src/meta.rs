//! Required-field annotator.
//!
//! Marks the output element with a boolean `data-required` attribute
//! when the bound field's metadata says the field is required, so
//! client-side code can discover the constraint without re-reading the
//! model.

use tachi_rs_html::TagHelperOutput;

use crate::binding::FieldBinding;

/// The boolean presence attribute set on required fields.
pub const META_REQUIRED_ATTRIBUTE: &str = "data-required";

/// Annotates an element with its field's required constraint.
///
/// Pure and idempotent: processing the same field twice leaves a single
/// attribute, and optional fields are left untouched.
///
/// # Examples
///
/// ```
/// use tachi_rs_helpers::{FieldBinding, MetaTagHelper};
/// use tachi_rs_html::TagHelperOutput;
///
/// let helper = MetaTagHelper::new(FieldBinding::new("name", "Name").required(true));
/// let mut output = TagHelperOutput::new("input");
/// helper.process(&mut output);
/// assert_eq!(output.render(), "<input data-required />");
/// ```
#[derive(Debug, Clone)]
pub struct MetaTagHelper {
    field: FieldBinding,
}

impl MetaTagHelper {
    /// Creates an annotator for the given field binding.
    pub const fn new(field: FieldBinding) -> Self {
        Self { field }
    }

    /// Sets the required attribute if the field's metadata calls for it.
    pub fn process(&self, output: &mut TagHelperOutput) {
        if self.field.required {
            tracing::trace!(field = %self.field.name, "marking field required");
            output.attributes.set_boolean(META_REQUIRED_ATTRIBUTE);
        }
    }
}
