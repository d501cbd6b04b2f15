//! The tag helper output accumulator.
//!
//! While the host templating engine renders an element, each tag helper
//! targeting it receives a [`TagHelperOutput`] and appends or sets markup
//! fragments on it. Helpers only write; the host assembles the final
//! HTML, here exposed as [`TagHelperOutput::render`].

use crate::attrs::AttributeList;

// Elements with no closing tag in HTML.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Accumulates the markup for one rendered element.
///
/// Layout of the assembled fragment:
///
/// ```text
/// {pre_element}<{tag_name}{attributes}>{pre_content}{content}{post_content}</{tag_name}>{post_element}
/// ```
///
/// A `tag_name` of `None` suppresses the element itself (attributes
/// included) while still rendering the surrounding and inner fragments.
///
/// # Examples
///
/// ```
/// use tachi_rs_html::TagHelperOutput;
///
/// let mut output = TagHelperOutput::new("a");
/// output.content = "Name".to_string();
/// output.attributes.set("href", "/items/?sort=name");
/// assert_eq!(output.render(), r#"<a href="/items/?sort=name">Name</a>"#);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TagHelperOutput {
    /// The element's tag name; `None` suppresses the element.
    pub tag_name: Option<String>,
    /// The element's attributes.
    pub attributes: AttributeList,
    /// Markup emitted before the element's start tag.
    pub pre_element: String,
    /// Markup emitted inside the element, before its content.
    pub pre_content: String,
    /// The element's own content.
    pub content: String,
    /// Markup emitted inside the element, after its content.
    pub post_content: String,
    /// Markup emitted after the element's end tag.
    pub post_element: String,
}

impl TagHelperOutput {
    /// Creates an output accumulator for the given element.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: Some(tag_name.into()),
            ..Self::default()
        }
    }

    /// Replaces the element's tag name.
    pub fn set_tag_name(&mut self, tag_name: impl Into<String>) {
        self.tag_name = Some(tag_name.into());
    }

    /// Appends markup before the start tag.
    pub fn append_pre_element(&mut self, html: &str) {
        self.pre_element.push_str(html);
    }

    /// Appends markup inside the element, before its content.
    pub fn append_pre_content(&mut self, html: &str) {
        self.pre_content.push_str(html);
    }

    /// Appends markup inside the element, after its content.
    pub fn append_post_content(&mut self, html: &str) {
        self.post_content.push_str(html);
    }

    /// Appends markup after the end tag.
    pub fn append_post_element(&mut self, html: &str) {
        self.post_element.push_str(html);
    }

    fn inner(&self) -> String {
        format!("{}{}{}", self.pre_content, self.content, self.post_content)
    }

    /// Assembles the final HTML fragment.
    ///
    /// Void elements (`<input>`, `<br>`, …) render self-closing when the
    /// inner buffers are empty.
    pub fn render(&self) -> String {
        let inner = self.inner();
        let Some(tag_name) = &self.tag_name else {
            return format!("{}{inner}{}", self.pre_element, self.post_element);
        };

        let attrs = self.attributes.render();
        let is_void = VOID_ELEMENTS.contains(&tag_name.as_str());
        let element = if is_void && inner.is_empty() {
            format!("<{tag_name}{attrs} />")
        } else {
            format!("<{tag_name}{attrs}>{inner}</{tag_name}>")
        };
        format!("{}{element}{}", self.pre_element, self.post_element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_element() {
        let mut output = TagHelperOutput::new("span");
        output.content = "hello".to_string();
        assert_eq!(output.render(), "<span>hello</span>");
    }

    #[test]
    fn test_render_with_surrounding_fragments() {
        let mut output = TagHelperOutput::new("input");
        output.attributes.set("type", "text");
        output.append_pre_element("<div>");
        output.append_post_element("</div>");
        assert_eq!(output.render(), r#"<div><input type="text" /></div>"#);
    }

    #[test]
    fn test_render_pre_and_post_content() {
        let mut output = TagHelperOutput::new("a");
        output.content = "Name".to_string();
        output.append_post_content(r#"<i class="icon caret up"></i>"#);
        assert_eq!(
            output.render(),
            r#"<a>Name<i class="icon caret up"></i></a>"#
        );
    }

    #[test]
    fn test_render_suppressed_element() {
        let mut output = TagHelperOutput::new("div");
        output.content = "inner".to_string();
        output.attributes.set("id", "ignored");
        output.tag_name = None;
        assert_eq!(output.render(), "inner");
    }

    #[test]
    fn test_void_element_with_content_gets_closing_tag() {
        // A rewritten tag name can turn a void element into a container.
        let mut output = TagHelperOutput::new("input");
        output.set_tag_name("script");
        output.content = "<p>{{name}}</p>".to_string();
        assert_eq!(output.render(), "<script><p>{{name}}</p></script>");
    }
}
