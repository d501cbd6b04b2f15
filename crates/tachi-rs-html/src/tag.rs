//! Single-element tag builder.
//!
//! [`TagBuilder`] assembles one HTML element: a tag name, a CSS class
//! list, an attribute list, and optional inner HTML. It can render as a
//! complete element or as just the start or end tag, which is how the
//! wrap helper emits its container around a field's own markup.

use crate::attrs::AttributeList;
use crate::escape::escape_attr;

/// How a [`TagBuilder`] renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagRenderMode {
    /// `<tag attrs>inner</tag>`.
    #[default]
    Normal,
    /// `<tag attrs>` only.
    StartTag,
    /// `</tag>` only.
    EndTag,
    /// `<tag attrs />`.
    SelfClosing,
}

/// Builds a single HTML element.
///
/// # Examples
///
/// ```
/// use tachi_rs_html::{TagBuilder, TagRenderMode};
///
/// let mut div = TagBuilder::new("div");
/// div.add_css_class("field");
/// div.add_css_class("required");
/// div.set_render_mode(TagRenderMode::StartTag);
/// assert_eq!(div.render(), r#"<div class="field required">"#);
/// ```
#[derive(Debug, Clone)]
pub struct TagBuilder {
    tag_name: String,
    css_classes: Vec<String>,
    attrs: AttributeList,
    inner_html: String,
    render_mode: TagRenderMode,
}

impl TagBuilder {
    /// Creates a builder for the given tag name.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            css_classes: Vec::new(),
            attrs: AttributeList::new(),
            inner_html: String::new(),
            render_mode: TagRenderMode::Normal,
        }
    }

    /// Returns the tag name.
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Adds a CSS class. Classes render in the order they were added, as
    /// a single `class` attribute ahead of the other attributes.
    pub fn add_css_class(&mut self, class: impl Into<String>) {
        self.css_classes.push(class.into());
    }

    /// Sets an attribute on the element.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.set(name, value);
    }

    /// Sets the inner HTML. The caller is responsible for escaping; pass
    /// text through [`crate::escape::escape_html`] first if it is not
    /// already markup.
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.inner_html = html.into();
    }

    /// Sets the render mode.
    pub fn set_render_mode(&mut self, mode: TagRenderMode) {
        self.render_mode = mode;
    }

    fn render_class_attr(&self) -> String {
        if self.css_classes.is_empty() {
            return String::new();
        }
        let joined = self.css_classes.join(" ");
        format!(r#" class="{}""#, escape_attr(&joined))
    }

    /// Renders the element according to its render mode.
    pub fn render(&self) -> String {
        let open = format!(
            "<{}{}{}",
            self.tag_name,
            self.render_class_attr(),
            self.attrs.render()
        );
        match self.render_mode {
            TagRenderMode::Normal => format!(
                "{open}>{}</{}>",
                self.inner_html, self.tag_name
            ),
            TagRenderMode::StartTag => format!("{open}>"),
            TagRenderMode::EndTag => format!("</{}>", self.tag_name),
            TagRenderMode::SelfClosing => format!("{open} />"),
        }
    }
}
