//! Client-side template marker.
//!
//! Rewrites a designated element into an inert `<script>` block with a
//! template content type, so client-side code can extract its raw markup
//! without the browser executing or rendering it.

use tachi_rs_html::TagHelperOutput;

/// The default template content type.
pub const TEMPLATE_CONTENT_TYPE: &str = "text/x-handlebars-template";

/// Rewrites an element into an inert client-side template container.
///
/// # Examples
///
/// ```
/// use tachi_rs_helpers::TemplateTagHelper;
/// use tachi_rs_html::TagHelperOutput;
///
/// let mut output = TagHelperOutput::new("template");
/// output.content = "<p>{{name}}</p>".to_string();
/// TemplateTagHelper::new().process(&mut output);
/// assert_eq!(
///     output.render(),
///     r#"<script type="text/x-handlebars-template"><p>{{name}}</p></script>"#
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TemplateTagHelper {
    content_type: String,
}

impl Default for TemplateTagHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateTagHelper {
    /// Creates a marker with the default Handlebars content type.
    pub fn new() -> Self {
        Self {
            content_type: TEMPLATE_CONTENT_TYPE.to_string(),
        }
    }

    /// Creates a marker with a custom template content type.
    pub fn with_content_type(content_type: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
        }
    }

    /// Rewrites the output element into a script container.
    pub fn process(&self, output: &mut TagHelperOutput) {
        output.set_tag_name("script");
        output.attributes.set("type", self.content_type.clone());
    }
}
