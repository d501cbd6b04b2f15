//! Per-request view context and the host rendering seam.
//!
//! [`ViewContext`] bundles the read-only state a helper may consult
//! during one render pass: the current request and the model validation
//! state. It is created fresh per request and discarded afterwards.
//!
//! [`HtmlGenerator`] is the capability the host injects for producing
//! label and validation-message markup. Modeling it as an explicit trait
//! keeps the helpers testable without a live host framework.

use tachi_rs_html::escape::escape_html;
use tachi_rs_html::TagBuilder;
use tachi_rs_http::RequestView;

use crate::binding::{FieldBinding, ValidationState};

/// Host-injected generation of label and validation-message markup.
///
/// Implementations must be `Send + Sync`; helpers hold them across
/// invocations but never mutate through them.
pub trait HtmlGenerator: Send + Sync {
    /// Generates a `<label>` element for the field, with an optional CSS
    /// class.
    fn generate_label(&self, field: &FieldBinding, css_class: Option<&str>) -> String;

    /// Generates a validation-message element carrying `message` for the
    /// field, using the given tag name and CSS class.
    fn generate_validation_message(
        &self,
        field: &FieldBinding,
        message: &str,
        tag: &str,
        css_class: &str,
    ) -> String;
}

/// A plain [`HtmlGenerator`] with no host framework behind it.
///
/// Labels point at the field's auto id; validation messages carry a
/// `data-valmsg-for` attribute so client-side code can find them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleHtmlGenerator;

impl HtmlGenerator for SimpleHtmlGenerator {
    fn generate_label(&self, field: &FieldBinding, css_class: Option<&str>) -> String {
        let mut label = TagBuilder::new("label");
        if let Some(class) = css_class {
            label.add_css_class(class);
        }
        label.set_attribute("for", field.auto_id());
        label.set_inner_html(escape_html(&field.label));
        label.render()
    }

    fn generate_validation_message(
        &self,
        field: &FieldBinding,
        message: &str,
        tag: &str,
        css_class: &str,
    ) -> String {
        let mut element = TagBuilder::new(tag);
        element.add_css_class(css_class);
        element.set_attribute("data-valmsg-for", &field.name);
        element.set_inner_html(escape_html(message));
        element.render()
    }
}

/// The read-only per-request context handed to each helper invocation.
#[derive(Debug, Clone, Default)]
pub struct ViewContext {
    request: RequestView,
    model_state: ValidationState,
}

impl ViewContext {
    /// Creates a context from the current request and validation state.
    pub const fn new(request: RequestView, model_state: ValidationState) -> Self {
        Self {
            request,
            model_state,
        }
    }

    /// Returns the current request view.
    pub const fn request(&self) -> &RequestView {
        &self.request
    }

    /// Returns the model validation state.
    pub const fn model_state(&self) -> &ValidationState {
        &self.model_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_generator_label() {
        let field = FieldBinding::new("email", "Email address");
        let html = SimpleHtmlGenerator.generate_label(&field, None);
        assert_eq!(html, r#"<label for="id_email">Email address</label>"#);
    }

    #[test]
    fn test_simple_generator_label_with_class() {
        let field = FieldBinding::new("email", "Email");
        let html = SimpleHtmlGenerator.generate_label(&field, Some("control-label"));
        assert_eq!(
            html,
            r#"<label class="control-label" for="id_email">Email</label>"#
        );
    }

    #[test]
    fn test_simple_generator_validation_message_escapes() {
        let field = FieldBinding::new("age", "Age");
        let html = SimpleHtmlGenerator.generate_validation_message(
            &field,
            "must be < 100",
            "span",
            "ui basic red pointing label",
        );
        assert_eq!(
            html,
            r#"<span class="ui basic red pointing label" data-valmsg-for="age">must be &lt; 100</span>"#
        );
    }

    #[test]
    fn test_view_context_accessors() {
        let request = RequestView::builder().path("/items/").build();
        let mut state = ValidationState::new();
        state.add_error("name", "required");

        let ctx = ViewContext::new(request, state);
        assert_eq!(ctx.request().path(), "/items/");
        assert!(ctx.model_state().has_errors("name"));
    }
}
