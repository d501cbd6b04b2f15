//! # tachi-rs-core
//!
//! Core error types and logging integration for the tachi-rs tag helpers.
//! This crate has zero framework dependencies and provides the foundation
//! for the other crates in the workspace.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result alias
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;

// Re-export the most commonly used types at the crate root.
pub use error::{TachiError, TachiResult};
