//! # tachi-rs-http
//!
//! The read-only view of the current HTTP request that the tachi-rs tag
//! helpers consume: the request path (with any mount prefix) and its
//! query string as an ordered list of key/value pairs. The host
//! framework owns the real request; this crate only models what the
//! helpers need to read.
//!
//! ## Modules
//!
//! - [`query`] - [`QueryString`], an ordered multi-pair query parser/encoder
//! - [`request`] - [`RequestView`] and its builder

pub mod query;
pub mod request;

pub use query::QueryString;
pub use request::RequestView;
