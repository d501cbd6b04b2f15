//! Core error types for tachi-rs.
//!
//! Tag helpers run inside a host's rendering call, so the error surface is
//! small: helpers fail fast when their required context is missing or
//! unusable, and otherwise treat absent data as "nothing to render".

use thiserror::Error;

/// The primary error type for tachi-rs.
///
/// Helpers validate their inputs at the start of processing and return
/// [`TachiError::InvalidArgument`] before any output is written; a helper
/// never leaves a partially rendered fragment behind an error.
#[derive(Error, Debug)]
pub enum TachiError {
    /// Required context was absent or unusable at the start of processing.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Markup could not be produced for an otherwise valid input.
    #[error("Render error: {0}")]
    RenderError(String),
}

impl TachiError {
    /// Shorthand for an [`TachiError::InvalidArgument`] with the given message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// A convenience type alias for `Result<T, TachiError>`.
pub type TachiResult<T> = Result<T, TachiError>;
