//! # tachi-rs-html
//!
//! HTML building blocks for the tachi-rs tag helpers: an attribute list,
//! a tag builder, and the [`TagHelperOutput`] accumulator that helpers
//! mutate while the host renders a page.
//!
//! ## Modules
//!
//! - [`attrs`] - Order-preserving, case-insensitive HTML attribute list
//! - [`escape`] - Minimal HTML escaping helpers
//! - [`tag`] - [`TagBuilder`] for assembling single elements
//! - [`output`] - [`TagHelperOutput`], the render-output accumulator

pub mod attrs;
pub mod escape;
pub mod output;
pub mod tag;

pub use attrs::AttributeList;
pub use output::TagHelperOutput;
pub use tag::{TagBuilder, TagRenderMode};
