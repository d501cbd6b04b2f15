//! Ordered query string parsing and encoding.
//!
//! [`QueryString`] keeps every key/value pair of the raw query string in
//! its original order, keys not necessarily unique. Pair order is part of
//! the contract: rebuilding a sort link must leave every unrelated
//! parameter exactly where it was.

use std::fmt;

/// An ordered list of decoded query string key/value pairs.
///
/// Lookup by key is case-insensitive and returns the **first**
/// occurrence, matching how the sort helper reads its parameter.
///
/// # Examples
///
/// ```
/// use tachi_rs_http::QueryString;
///
/// let qs = QueryString::parse("a=1&sort=name&a=2");
/// assert_eq!(qs.get("Sort"), Some("name"));
/// assert_eq!(qs.get("a"), Some("1"));
/// assert_eq!(qs.to_string(), "a=1&sort=name&a=2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    pairs: Vec<(String, String)>,
}

impl QueryString {
    /// Creates an empty `QueryString`.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Parses a raw query string (e.g. `"key1=val1&key2=val2"`).
    ///
    /// Handles percent-encoding, `+` as space, valueless keys, and empty
    /// pairs. Pair order is preserved.
    pub fn parse(query_string: &str) -> Self {
        let mut pairs = Vec::new();

        for pair in query_string.split('&') {
            if pair.is_empty() {
                continue;
            }

            let (key, value) = pair
                .find('=')
                .map_or((pair, ""), |eq_pos| (&pair[..eq_pos], &pair[eq_pos + 1..]));

            pairs.push((percent_decode(key), percent_decode(value)));
        }

        Self { pairs }
    }

    /// Returns the **first** value for the given key (case-insensitive),
    /// or `None` if the key is not present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Returns all values for the given key (case-insensitive), in order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Returns `true` if the key is present (case-insensitive).
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k.eq_ignore_ascii_case(key))
    }

    /// Appends a pair at the end.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Returns the pairs in order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns the number of pairs (not distinct keys).
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for QueryString {
    /// Encodes the pairs back into a query string, in order.
    ///
    /// Only reserved ASCII characters are escaped; non-ASCII text (such
    /// as the sort direction markers) is written verbatim rather than
    /// percent-encoded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", query_escape(key), query_escape(value))?;
        }
        Ok(())
    }
}

/// Decodes a percent-encoded query component.
fn percent_decode(input: &str) -> String {
    // Replace + with space (form encoding), then decode percent sequences.
    let plus_decoded = input.replace('+', " ");
    percent_encoding::percent_decode_str(&plus_decoded)
        .decode_utf8_lossy()
        .into_owned()
}

/// Escapes a decoded component for use in a query string.
///
/// Escapes only the ASCII characters that are structurally significant
/// in a query string or invalid in a URL. Non-ASCII characters must
/// survive a parse/encode round trip byte-for-byte, so they are never
/// re-encoded here.
fn query_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' | '=' | '#' | '%' | '+' | '"' | '<' | '>' => {
                out.push_str(&format!("%{:02X}", c as u32));
            }
            ' ' => out.push_str("%20"),
            c if c.is_ascii_control() => {
                out.push_str(&format!("%{:02X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let qs = QueryString::parse("key=value");
        assert_eq!(qs.get("key"), Some("value"));
        assert_eq!(qs.len(), 1);
    }

    #[test]
    fn test_parse_preserves_order() {
        let qs = QueryString::parse("b=2&a=1&c=3");
        let keys: Vec<&str> = qs.pairs().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_get_returns_first_occurrence() {
        let qs = QueryString::parse("color=red&color=blue");
        assert_eq!(qs.get("color"), Some("red"));
        assert_eq!(qs.get_all("color"), vec!["red", "blue"]);
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let qs = QueryString::parse("Sort=name");
        assert_eq!(qs.get("sort"), Some("name"));
        assert!(qs.contains_key("SORT"));
    }

    #[test]
    fn test_parse_empty_string() {
        let qs = QueryString::parse("");
        assert!(qs.is_empty());
    }

    #[test]
    fn test_parse_no_value_and_empty_value() {
        let qs = QueryString::parse("flag&key=");
        assert_eq!(qs.get("flag"), Some(""));
        assert_eq!(qs.get("key"), Some(""));
    }

    #[test]
    fn test_parse_skips_empty_pairs() {
        let qs = QueryString::parse("a=1&&b=2&");
        assert_eq!(qs.len(), 2);
    }

    #[test]
    fn test_parse_percent_encoded() {
        let qs = QueryString::parse("name=hello%20world&plus=a+b");
        assert_eq!(qs.get("name"), Some("hello world"));
        assert_eq!(qs.get("plus"), Some("a b"));
    }

    #[test]
    fn test_display_round_trips_in_order() {
        let qs = QueryString::parse("a=1&sort=name&b=2");
        assert_eq!(qs.to_string(), "a=1&sort=name&b=2");
    }

    #[test]
    fn test_display_escapes_reserved_ascii() {
        let mut qs = QueryString::new();
        qs.append("q", "a&b=c d");
        assert_eq!(qs.to_string(), "q=a%26b%3Dc%20d");
    }

    #[test]
    fn test_display_preserves_unicode_markers() {
        let mut qs = QueryString::new();
        qs.append("sort", "name▼");
        assert_eq!(qs.to_string(), "sort=name▼");
    }

    #[test]
    fn test_append() {
        let mut qs = QueryString::parse("a=1");
        qs.append("sort", "age");
        assert_eq!(qs.to_string(), "a=1&sort=age");
    }

    #[test]
    fn test_get_missing_key() {
        let qs = QueryString::new();
        assert_eq!(qs.get("missing"), None);
        assert!(qs.get_all("missing").is_empty());
    }
}
