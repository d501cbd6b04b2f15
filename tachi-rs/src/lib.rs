//! # tachi-rs
//!
//! Tag helpers for server-rendered HTML.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access. You can depend on `tachi-rs` to get everything, or depend on
//! individual crates for finer-grained control.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use tachi_rs::prelude::*;
//!
//! let request = RequestView::builder()
//!     .path("/people/")
//!     .query_string("page=3")
//!     .build();
//! let mut state = ValidationState::new();
//! state.add_error("name", "This field is required.");
//! let ctx = ViewContext::new(request, state);
//!
//! let field = FieldBinding::new("name", "Name").required(true);
//! let helper = WrapTagHelper::new(field, Arc::new(SimpleHtmlGenerator)).unwrap();
//!
//! let mut output = TagHelperOutput::new("input");
//! helper.process(&ctx, &mut output).unwrap();
//! assert!(output.render().contains("has-error"));
//! ```

/// Core error types and logging integration.
pub use tachi_rs_core as core;

/// HTML building blocks: tag builder, attribute list, output accumulator.
#[cfg(feature = "html")]
pub use tachi_rs_html as html;

/// Read-only request view: path and ordered query string.
#[cfg(feature = "http")]
pub use tachi_rs_http as http;

/// The tag helpers: wrap, meta, template marker, and sort link.
#[cfg(feature = "helpers")]
pub use tachi_rs_helpers as helpers;

/// Commonly used types, re-exported in one place.
pub mod prelude {
    pub use tachi_rs_core::{TachiError, TachiResult};

    #[cfg(feature = "html")]
    pub use tachi_rs_html::{AttributeList, TagBuilder, TagHelperOutput, TagRenderMode};

    #[cfg(feature = "http")]
    pub use tachi_rs_http::{QueryString, RequestView};

    #[cfg(feature = "helpers")]
    pub use tachi_rs_helpers::{
        ErrorRender, FieldBinding, HtmlGenerator, MetaTagHelper, SimpleHtmlGenerator,
        SortFlags, SortTagHelper, TemplateTagHelper, ValidationState, ViewContext, WrapFlags,
        WrapStyle, WrapTagHelper,
    };
}
