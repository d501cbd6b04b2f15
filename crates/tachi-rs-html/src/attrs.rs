//! Order-preserving HTML attribute list.
//!
//! [`AttributeList`] stores element attributes in insertion order with
//! case-insensitive name lookup, matching how attributes behave in HTML.
//! Attribute order is part of the observable output, so this is a `Vec`
//! of pairs rather than a hash map.

use crate::escape::escape_attr;

/// A single HTML attribute: a name and an optional value.
///
/// An attribute with no value renders as a boolean presence attribute
/// (e.g. `disabled`, `data-required`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// The attribute name, as given on first insertion.
    pub name: String,
    /// The attribute value; `None` for boolean attributes.
    pub value: Option<String>,
}

/// An insertion-ordered, case-insensitive HTML attribute list.
///
/// Setting an attribute whose name is already present (ignoring ASCII
/// case) replaces the existing entry in place, so repeated sets are
/// idempotent and never produce duplicate attributes.
///
/// # Examples
///
/// ```
/// use tachi_rs_html::AttributeList;
///
/// let mut attrs = AttributeList::new();
/// attrs.set("class", "form-control");
/// attrs.set_boolean("data-required");
/// attrs.set("CLASS", "form-control wide");
///
/// assert_eq!(attrs.get("class"), Some("form-control wide"));
/// assert_eq!(attrs.render(), r#" class="form-control wide" data-required"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList {
    attrs: Vec<Attribute>,
}

impl AttributeList {
    /// Creates an empty attribute list.
    pub fn new() -> Self {
        Self { attrs: Vec::new() }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.attrs
            .iter()
            .position(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Sets an attribute, replacing any existing attribute with the same
    /// name (case-insensitive). The entry keeps its original position.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = Some(value.into());
        match self.position(name) {
            Some(i) => self.attrs[i].value = value,
            None => self.attrs.push(Attribute {
                name: name.to_string(),
                value,
            }),
        }
    }

    /// Sets a boolean presence attribute (rendered without a value).
    ///
    /// Idempotent: setting an already present boolean attribute again is
    /// a no-op.
    pub fn set_boolean(&mut self, name: &str) {
        match self.position(name) {
            Some(i) => self.attrs[i].value = None,
            None => self.attrs.push(Attribute {
                name: name.to_string(),
                value: None,
            }),
        }
    }

    /// Returns the value of the named attribute, or `None` if absent or
    /// boolean.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.position(name)
            .and_then(|i| self.attrs[i].value.as_deref())
    }

    /// Returns `true` if the named attribute is present (value-bearing or
    /// boolean).
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Removes the named attribute, returning `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(i) => {
                self.attrs.remove(i);
                true
            }
            None => false,
        }
    }

    /// Appends a CSS class to the `class` attribute, creating it if absent.
    ///
    /// Existing classes are preserved; the new class is appended after a
    /// single space. The class is not added twice.
    pub fn append_class(&mut self, class: &str) {
        let merged = match self.get("class") {
            Some(existing) => {
                if existing.split_ascii_whitespace().any(|c| c == class) {
                    return;
                }
                format!("{existing} {class}")
            }
            None => class.to_string(),
        };
        self.set("class", merged);
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Returns `true` if no attributes are set.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Returns an iterator over the attributes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attrs.iter()
    }

    /// Renders the attributes as a string like ` key="value" flag`.
    ///
    /// Values are attribute-escaped. The leading space makes the result
    /// directly concatenable after a tag name; an empty list renders as
    /// an empty string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for attr in &self.attrs {
            match &attr.value {
                Some(value) => {
                    out.push_str(&format!(r#" {}="{}""#, attr.name, escape_attr(value)));
                }
                None => {
                    out.push_str(&format!(" {}", attr.name));
                }
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a AttributeList {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.iter()
    }
}
