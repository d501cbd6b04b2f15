//! Sortable column link builder.
//!
//! Given the current request's query string and a column name, computes
//! the URL that toggles the column's sort direction and, for the active
//! column, appends a directional indicator icon. Every other query
//! parameter is preserved in its original position.
//!
//! The sort direction rides on the parameter value itself: an ascending
//! sort is the bare column name, a descending sort carries the [`DOWN`]
//! marker as its last character. The marker is written verbatim into the
//! URL, never percent-encoded.

use tachi_rs_core::{TachiError, TachiResult};
use tachi_rs_html::{TagBuilder, TagHelperOutput};
use tachi_rs_http::{QueryString, RequestView};

use crate::context::ViewContext;

/// Marker for an ascending sort, as shown in the indicator.
pub const UP: char = '▲';

/// Marker appended to a sort value to request descending order.
pub const DOWN: char = '▼';

/// The default query parameter carrying the sort value.
pub const DEFAULT_SORT_KEY: &str = "sort";

/// Behavior flags for [`SortTagHelper`], one per named option.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortFlags {
    /// Suppress the directional indicator icon on the active column.
    pub no_indicator: bool,
}

/// Builds a sort-toggling link for one column.
///
/// # Examples
///
/// ```
/// use tachi_rs_helpers::{SortTagHelper, ViewContext, ValidationState};
/// use tachi_rs_html::TagHelperOutput;
/// use tachi_rs_http::RequestView;
///
/// let request = RequestView::builder()
///     .path("/items/")
///     .query_string("a=1&sort=name&b=2")
///     .build();
/// let ctx = ViewContext::new(request, ValidationState::new());
///
/// let mut output = TagHelperOutput::new("a");
/// output.content = "Name".to_string();
/// SortTagHelper::new("name").unwrap().process(&ctx, &mut output).unwrap();
///
/// assert_eq!(
///     output.attributes.get("href"),
///     Some("/items/?a=1&sort=name▼&b=2")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SortTagHelper {
    name: String,
    key: String,
    flags: SortFlags,
}

impl SortTagHelper {
    /// Creates a sort link builder for the given column name.
    ///
    /// The sort parameter key defaults to [`DEFAULT_SORT_KEY`].
    ///
    /// # Errors
    ///
    /// Returns [`TachiError::InvalidArgument`] if the column name is
    /// empty; an empty sort value could never round-trip.
    pub fn new(name: impl Into<String>) -> TachiResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(TachiError::invalid_argument(
                "sort helper requires a column name",
            ));
        }
        Ok(Self {
            name,
            key: DEFAULT_SORT_KEY.to_string(),
            flags: SortFlags::default(),
        })
    }

    /// Sets the query parameter key carrying the sort value.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Sets the behavior flags.
    #[must_use]
    pub const fn flags(mut self, flags: SortFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Rebuilds the request URL with the sort parameter set to this
    /// column, descending when requested.
    ///
    /// Every other pair keeps its original position. Multiple occurrences
    /// of the sort key collapse to one at the first occurrence's
    /// position; an absent key is appended at the end.
    fn build_url(&self, request: &RequestView, descending: bool) -> String {
        let mut value = self.name.clone();
        if descending {
            value.push(DOWN);
        }

        let mut query = QueryString::new();
        let mut handled = false;
        for (key, other_value) in request.query().pairs() {
            if key.eq_ignore_ascii_case(&self.key) {
                if !handled {
                    query.append(self.key.clone(), value.clone());
                    handled = true;
                }
            } else {
                query.append(key.clone(), other_value.clone());
            }
        }

        if !handled {
            query.append(self.key.clone(), value);
        }

        format!("{}{}?{query}", request.path_prefix(), request.path())
    }

    /// Sets the toggled `href` and, for the active column, appends the
    /// directional indicator matching the current (pre-toggle) direction.
    pub fn process(&self, ctx: &ViewContext, output: &mut TagHelperOutput) -> TachiResult<()> {
        let current = ctx.request().query().get(&self.key);

        // A trailing marker encodes the current direction; an explicit
        // ascending marker is tolerated on read but never written.
        let (current, is_descending) = match current {
            Some(value) => match value.strip_suffix(DOWN) {
                Some(stripped) => (Some(stripped), true),
                None => (Some(value.strip_suffix(UP).unwrap_or(value)), false),
            },
            None => (None, false),
        };

        let is_current =
            current.is_some_and(|value| value.to_lowercase() == self.name.to_lowercase());

        tracing::debug!(
            column = %self.name,
            is_current,
            is_descending,
            "building sort link"
        );

        // append indicator
        if !self.flags.no_indicator && is_current {
            let mut icon = TagBuilder::new("i");
            icon.add_css_class("icon caret");
            icon.add_css_class(if is_descending { "down" } else { "up" });
            output.append_post_content(&icon.render());
        }

        let href = self.build_url(ctx.request(), is_current && !is_descending);
        output.attributes.set("href", href);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::ValidationState;

    fn ctx(path: &str, query_string: &str) -> ViewContext {
        let request = RequestView::builder()
            .path(path)
            .query_string(query_string)
            .build();
        ViewContext::new(request, ValidationState::new())
    }

    fn process(helper: &SortTagHelper, ctx: &ViewContext) -> TagHelperOutput {
        let mut output = TagHelperOutput::new("a");
        output.content = "Column".to_string();
        helper.process(ctx, &mut output).unwrap();
        output
    }

    #[test]
    fn test_rejects_empty_column_name() {
        assert!(SortTagHelper::new("").is_err());
    }

    #[test]
    fn test_current_ascending_toggles_to_descending() {
        let helper = SortTagHelper::new("name").unwrap();
        let output = process(&helper, &ctx("/items/", "a=1&sort=name&b=2"));
        assert_eq!(
            output.attributes.get("href"),
            Some("/items/?a=1&sort=name▼&b=2")
        );
    }

    #[test]
    fn test_current_descending_toggles_to_ascending() {
        let helper = SortTagHelper::new("name").unwrap();
        let output = process(&helper, &ctx("/items/", "sort=name▼"));
        assert_eq!(output.attributes.get("href"), Some("/items/?sort=name"));
    }

    #[test]
    fn test_other_column_defaults_to_ascending() {
        let helper = SortTagHelper::new("age").unwrap();
        let output = process(&helper, &ctx("/items/", "a=1&sort=name&b=2"));
        assert_eq!(
            output.attributes.get("href"),
            Some("/items/?a=1&sort=age&b=2")
        );
        // Not the active column, so no indicator.
        assert!(output.post_content.is_empty());
    }

    #[test]
    fn test_absent_sort_key_is_appended() {
        let helper = SortTagHelper::new("x").unwrap();
        let output = process(&helper, &ctx("/items/", "page=2"));
        assert_eq!(output.attributes.get("href"), Some("/items/?page=2&sort=x"));
    }

    #[test]
    fn test_empty_query_string() {
        let helper = SortTagHelper::new("x").unwrap();
        let output = process(&helper, &ctx("/items/", ""));
        assert_eq!(output.attributes.get("href"), Some("/items/?sort=x"));
    }

    #[test]
    fn test_duplicate_sort_keys_collapse_first_position_wins() {
        let helper = SortTagHelper::new("name").unwrap();
        let output = process(&helper, &ctx("/items/", "sort=name&a=1&sort=age"));
        assert_eq!(
            output.attributes.get("href"),
            Some("/items/?sort=name▼&a=1")
        );
    }

    #[test]
    fn test_key_match_is_case_insensitive() {
        let helper = SortTagHelper::new("name").unwrap();
        let output = process(&helper, &ctx("/items/", "Sort=name"));
        assert_eq!(output.attributes.get("href"), Some("/items/?sort=name▼"));
    }

    #[test]
    fn test_column_match_is_case_insensitive() {
        let helper = SortTagHelper::new("name").unwrap();
        let output = process(&helper, &ctx("/items/", "sort=Name▲"));
        // Current and ascending: indicator up, next click descending.
        assert!(output.post_content.contains(r#"<i class="icon caret up"></i>"#));
        assert_eq!(output.attributes.get("href"), Some("/items/?sort=name▼"));
    }

    #[test]
    fn test_indicator_up_for_current_ascending() {
        let helper = SortTagHelper::new("name").unwrap();
        let output = process(&helper, &ctx("/items/", "sort=name"));
        assert_eq!(
            output.post_content,
            r#"<i class="icon caret up"></i>"#
        );
    }

    #[test]
    fn test_indicator_down_for_current_descending() {
        let helper = SortTagHelper::new("name").unwrap();
        let output = process(&helper, &ctx("/items/", "sort=name▼"));
        assert_eq!(
            output.post_content,
            r#"<i class="icon caret down"></i>"#
        );
    }

    #[test]
    fn test_no_indicator_flag_suppresses_icon() {
        let helper = SortTagHelper::new("name")
            .unwrap()
            .flags(SortFlags { no_indicator: true });
        let output = process(&helper, &ctx("/items/", "sort=name"));
        assert!(output.post_content.is_empty());
        // The href still toggles.
        assert_eq!(output.attributes.get("href"), Some("/items/?sort=name▼"));
    }

    #[test]
    fn test_custom_sort_key() {
        let helper = SortTagHelper::new("title").unwrap().key("order");
        let output = process(&helper, &ctx("/items/", "order=title&sort=other"));
        assert_eq!(
            output.attributes.get("href"),
            Some("/items/?order=title▼&sort=other")
        );
    }

    #[test]
    fn test_path_prefix_is_preserved() {
        let request = RequestView::builder()
            .path_prefix("/app")
            .path("/items/")
            .query_string("sort=name")
            .build();
        let ctx = ViewContext::new(request, ValidationState::new());
        let output = process(&SortTagHelper::new("name").unwrap(), &ctx);
        assert_eq!(output.attributes.get("href"), Some("/app/items/?sort=name▼"));
    }

    #[test]
    fn test_marker_survives_percent_encoded_round_trip() {
        // A marker arriving percent-encoded decodes, then re-emits verbatim.
        let helper = SortTagHelper::new("name").unwrap();
        let output = process(&helper, &ctx("/items/", "sort=name%E2%96%BC"));
        assert_eq!(output.attributes.get("href"), Some("/items/?sort=name"));
    }

    #[test]
    fn test_full_markup() {
        let helper = SortTagHelper::new("name").unwrap();
        let mut output = TagHelperOutput::new("a");
        output.content = "Name".to_string();
        helper
            .process(&ctx("/items/", "sort=name"), &mut output)
            .unwrap();
        assert_eq!(
            output.render(),
            r#"<a href="/items/?sort=name▼">Name<i class="icon caret up"></i></a>"#
        );
    }
}
