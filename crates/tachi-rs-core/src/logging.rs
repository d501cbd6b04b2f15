//! Logging integration for tachi-rs.
//!
//! Provides a helper for configuring [`tracing`]-based logging and for
//! creating per-render spans so that every event emitted while a helper
//! runs carries the render pass it belongs to.

/// Sets up the global tracing subscriber.
///
/// `level` is an env-filter directive (e.g. "debug", "info",
/// "tachi_rs_helpers=trace"). When `debug` is set a pretty, human-readable
/// format is used; otherwise a structured JSON format is used.
///
/// Installation is best-effort: if a subscriber is already installed this
/// is a no-op.
pub fn setup_logging(level: &str, debug: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    if debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one render pass.
///
/// Enter this span around the host's rendering call so that all helper
/// events include the request path being rendered.
///
/// # Examples
///
/// ```
/// use tachi_rs_core::logging::render_span;
///
/// let span = render_span("/articles/");
/// let _guard = span.enter();
/// tracing::debug!("rendering page");
/// ```
pub fn render_span(path: &str) -> tracing::Span {
    tracing::debug_span!("render", path = path)
}
