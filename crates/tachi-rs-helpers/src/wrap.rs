//! Field wrapper tag helper.
//!
//! Wraps a bound form field in a container element: base CSS class, an
//! optional extra class, a `required` marker class, a label, and
//! validation-error decoration when the model state holds errors for the
//! field. The container opens in the output's pre-element buffer and
//! closes in its post-element buffer, leaving the field's own markup
//! untouched in between.

use std::sync::Arc;

use tachi_rs_core::{TachiError, TachiResult};
use tachi_rs_html::{TagBuilder, TagHelperOutput, TagRenderMode};

use crate::binding::FieldBinding;
use crate::context::{HtmlGenerator, ViewContext};

/// Behavior flags for [`WrapTagHelper`], one per named option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WrapFlags {
    /// Suppress the generated `<label>` element.
    pub no_label: bool,
}

/// How a field's first validation error is surfaced.
///
/// Both strategies appeared across the original helper variants; the
/// choice is explicit per [`WrapStyle`] rather than hardcoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorRender {
    /// Set the message as the input element's `title` attribute.
    TitleAttribute,
    /// Emit a separate message element after the field.
    MessageElement {
        /// Tag name of the message element (e.g. `span`).
        tag: String,
        /// CSS class of the message element.
        css_class: String,
    },
}

/// CSS vocabulary and error strategy for one wrap flavor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapStyle {
    /// Base class of the container element.
    pub container_class: String,
    /// Class added to the generated label, if any.
    pub label_class: Option<String>,
    /// Input-styling class merged into the field's own `class` attribute.
    pub input_class: Option<String>,
    /// Class added to the container when the field has errors.
    pub error_class: String,
    /// How the first error message is surfaced.
    pub error_render: ErrorRender,
}

impl WrapStyle {
    /// The Bootstrap flavor: `form-group` container, `control-label`
    /// labels, `form-control` inputs, `has-error` marker, error message
    /// as a `title` attribute.
    pub fn bootstrap() -> Self {
        Self {
            container_class: "form-group".to_string(),
            label_class: Some("control-label".to_string()),
            input_class: Some("form-control".to_string()),
            error_class: "has-error".to_string(),
            error_render: ErrorRender::TitleAttribute,
        }
    }

    /// The Semantic UI flavor: `field` container, unstyled labels,
    /// `error` marker, error message as a trailing labeled `<span>`.
    pub fn semantic() -> Self {
        Self {
            container_class: "field".to_string(),
            label_class: None,
            input_class: None,
            error_class: "error".to_string(),
            error_render: ErrorRender::MessageElement {
                tag: "span".to_string(),
                css_class: "ui basic red pointing label".to_string(),
            },
        }
    }
}

/// Wraps one bound form field in a decorated container element.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use tachi_rs_helpers::{
///     FieldBinding, SimpleHtmlGenerator, ViewContext, WrapStyle, WrapTagHelper,
/// };
/// use tachi_rs_html::TagHelperOutput;
///
/// let field = FieldBinding::new("name", "Name").required(true);
/// let helper = WrapTagHelper::new(field, Arc::new(SimpleHtmlGenerator))
///     .unwrap()
///     .style(WrapStyle::semantic());
///
/// let ctx = ViewContext::default();
/// let mut output = TagHelperOutput::new("input");
/// helper.process(&ctx, &mut output).unwrap();
/// assert!(output.render().starts_with(r#"<div class="field required">"#));
/// ```
pub struct WrapTagHelper {
    field: FieldBinding,
    generator: Arc<dyn HtmlGenerator>,
    class: Option<String>,
    flags: WrapFlags,
    style: WrapStyle,
}

impl WrapTagHelper {
    /// Creates a wrap helper for the given field binding.
    ///
    /// Defaults to the Bootstrap [`WrapStyle`], no extra class, and no
    /// flags.
    ///
    /// # Errors
    ///
    /// Returns [`TachiError::InvalidArgument`] if the binding has an
    /// empty field name; nothing would be able to associate the label or
    /// validation lookup with the field.
    pub fn new(field: FieldBinding, generator: Arc<dyn HtmlGenerator>) -> TachiResult<Self> {
        if field.name.is_empty() {
            return Err(TachiError::invalid_argument(
                "wrap helper requires a named field binding",
            ));
        }
        Ok(Self {
            field,
            generator,
            class: None,
            flags: WrapFlags::default(),
            style: WrapStyle::bootstrap(),
        })
    }

    /// Sets an extra CSS class for the container element.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the behavior flags.
    #[must_use]
    pub const fn flags(mut self, flags: WrapFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the wrap style.
    #[must_use]
    pub fn style(mut self, style: WrapStyle) -> Self {
        self.style = style;
        self
    }

    /// Emits the wrapper markup around the field's output.
    ///
    /// Mutates only `output`; the validation state and request in `ctx`
    /// are read-only.
    pub fn process(&self, ctx: &ViewContext, output: &mut TagHelperOutput) -> TachiResult<()> {
        let first_error = ctx.model_state().first_error(&self.field.name);
        tracing::debug!(
            field = %self.field.name,
            has_error = first_error.is_some(),
            "wrapping field"
        );

        // open wrapper
        let mut open_wrap = TagBuilder::new("div");
        open_wrap.add_css_class(&self.style.container_class);
        if let Some(class) = self.class.as_deref().filter(|c| !c.is_empty()) {
            open_wrap.add_css_class(class);
        }
        if self.field.required {
            open_wrap.add_css_class("required");
        }
        if first_error.is_some() {
            open_wrap.add_css_class(&self.style.error_class);
        }
        open_wrap.set_render_mode(TagRenderMode::StartTag);
        output.append_pre_element(&open_wrap.render());

        // append label
        if !self.flags.no_label {
            let label = self
                .generator
                .generate_label(&self.field, self.style.label_class.as_deref());
            output.append_pre_element(&label);
        }

        // update the input element
        if let Some(input_class) = &self.style.input_class {
            output.attributes.append_class(input_class);
        }

        // surface the first error
        if let Some(message) = first_error {
            match &self.style.error_render {
                ErrorRender::TitleAttribute => {
                    output.attributes.set("title", message);
                }
                ErrorRender::MessageElement { tag, css_class } => {
                    let element = self.generator.generate_validation_message(
                        &self.field,
                        message,
                        tag,
                        css_class,
                    );
                    output.append_post_element(&element);
                }
            }
        }

        // close wrapper
        let mut close_wrap = TagBuilder::new("div");
        close_wrap.set_render_mode(TagRenderMode::EndTag);
        output.append_post_element(&close_wrap.render());

        Ok(())
    }
}
