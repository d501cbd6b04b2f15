//! # tachi-rs-helpers
//!
//! Presentation-layer tag helpers invoked by a host templating engine
//! while it renders an HTML page. Four independent, stateless components:
//!
//! - [`WrapTagHelper`] wraps a bound form field in a container element
//!   with a label, a required marker, and validation-error decoration.
//! - [`MetaTagHelper`] sets a boolean attribute on the output element
//!   when the field's metadata marks it required.
//! - [`TemplateTagHelper`] rewrites an element into an inert script block
//!   used as a client-side template container.
//! - [`SortTagHelper`] builds a query-string-preserving toggled sort URL
//!   and appends a directional indicator icon.
//!
//! Each helper receives a read-only [`ViewContext`] for the current
//! request and mutates only the [`TagHelperOutput`] it is handed; no
//! state survives a render pass.
//!
//! [`TagHelperOutput`]: tachi_rs_html::TagHelperOutput

pub mod binding;
pub mod context;
pub mod meta;
pub mod sort;
pub mod template;
pub mod wrap;

pub use binding::{FieldBinding, ValidationState};
pub use context::{HtmlGenerator, SimpleHtmlGenerator, ViewContext};
pub use meta::MetaTagHelper;
pub use sort::{SortFlags, SortTagHelper};
pub use template::TemplateTagHelper;
pub use wrap::{ErrorRender, WrapFlags, WrapStyle, WrapTagHelper};
