//! Read-only request view.
//!
//! [`RequestView`] captures the slice of the current HTTP request that
//! tag helpers are allowed to read: the mount prefix, the path, and the
//! parsed query string. It is built once per request by the host and
//! never mutated afterwards.

use crate::query::QueryString;

/// The helpers' read-only view of the current request.
///
/// # Examples
///
/// ```
/// use tachi_rs_http::RequestView;
///
/// let request = RequestView::builder()
///     .path_prefix("/app")
///     .path("/articles/")
///     .query_string("page=1")
///     .build();
///
/// assert_eq!(request.full_path(), "/app/articles/?page=1");
/// assert_eq!(request.query().get("page"), Some("1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestView {
    path_prefix: String,
    path: String,
    query: QueryString,
}

impl RequestView {
    /// Creates a new [`RequestViewBuilder`].
    pub fn builder() -> RequestViewBuilder {
        RequestViewBuilder::default()
    }

    /// Returns the mount prefix under which the application is served
    /// (empty when mounted at the root).
    pub fn path_prefix(&self) -> &str {
        &self.path_prefix
    }

    /// Returns the request path, without prefix or query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the parsed query string.
    pub fn query(&self) -> &QueryString {
        &self.query
    }

    /// Returns the full path including prefix and query string.
    pub fn full_path(&self) -> String {
        if self.query.is_empty() {
            format!("{}{}", self.path_prefix, self.path)
        } else {
            format!("{}{}?{}", self.path_prefix, self.path, self.query)
        }
    }
}

/// Builder for [`RequestView`].
#[derive(Debug, Clone, Default)]
pub struct RequestViewBuilder {
    path_prefix: String,
    path: String,
    query: QueryString,
}

impl RequestViewBuilder {
    /// Sets the mount prefix (e.g. `"/app"`).
    #[must_use]
    pub fn path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.path_prefix = prefix.into();
        self
    }

    /// Sets the request path (e.g. `"/articles/"`).
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Parses and sets the query string (without leading `?`).
    #[must_use]
    pub fn query_string(mut self, query_string: &str) -> Self {
        self.query = QueryString::parse(query_string);
        self
    }

    /// Builds the immutable [`RequestView`].
    pub fn build(self) -> RequestView {
        RequestView {
            path_prefix: self.path_prefix,
            path: self.path,
            query: self.query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let request = RequestView::builder().path("/items/").build();
        assert_eq!(request.path_prefix(), "");
        assert_eq!(request.path(), "/items/");
        assert!(request.query().is_empty());
        assert_eq!(request.full_path(), "/items/");
    }

    #[test]
    fn test_full_path_with_prefix_and_query() {
        let request = RequestView::builder()
            .path_prefix("/admin")
            .path("/users/")
            .query_string("page=2&sort=name")
            .build();
        assert_eq!(request.full_path(), "/admin/users/?page=2&sort=name");
    }

    #[test]
    fn test_query_lookup() {
        let request = RequestView::builder()
            .path("/items/")
            .query_string("sort=age%E2%96%BC")
            .build();
        assert_eq!(request.query().get("sort"), Some("age▼"));
    }
}
