use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inline style of a widget
///
/// Either a pre-formatted declaration string, used verbatim, or a map of
/// camelCase property names to values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Style {
    Inline(String),
    Map(IndexMap<String, Value>),
}

impl Style {
    /// Flatten into a CSS declaration string
    pub fn flatten(&self) -> String {
        match self {
            Style::Inline(css) => css.clone(),
            Style::Map(map) => style_to_string(map),
        }
    }
}

impl From<&str> for Style {
    fn from(css: &str) -> Self {
        Style::Inline(css.to_string())
    }
}

impl From<String> for Style {
    fn from(css: String) -> Self {
        Style::Inline(css)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Style::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// `backgroundColor` → `background-color`
pub fn camel_to_kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Join a style map as `key: value` declarations separated by `"; "`
pub fn style_to_string(style: &IndexMap<String, Value>) -> String {
    style
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!("{}: {}", camel_to_kebab(key), value)
        })
        .collect::<Vec<_>>()
        .join("; ")
}
