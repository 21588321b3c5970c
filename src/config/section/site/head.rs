//! `[[site.head]]` entries: extra elements for the page `<head>`.
//!
//! Passed through verbatim. Attribute values may be strings or booleans
//! (`async = true`), matching HTML's boolean attributes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One `<head>` element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadTag {
    /// Element name, e.g. `link`, `meta`, `script`.
    pub tag: String,
    /// Attributes in key order.
    pub attrs: BTreeMap<String, toml::Value>,
    /// Inner content (inline scripts).
    pub content: Option<String>,
}

impl HeadTag {
    /// Attribute as a string, if it is one.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).and_then(toml::Value::as_str)
    }

    /// Whether a boolean attribute is set (`async = true`).
    pub fn flag(&self, name: &str) -> bool {
        self.attrs
            .get(name)
            .and_then(toml::Value::as_bool)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Doc {
        head: Vec<HeadTag>,
    }

    #[test]
    fn test_parse_head_tags() {
        let doc: Doc = toml::from_str(
            r#"
            [[head]]
            tag = "link"
            attrs = { rel = "icon", type = "image/png", href = "/favicon-96x96.png", sizes = "96x96" }

            [[head]]
            tag = "script"
            attrs = { async = true, src = "https://ps.log.rw/js/pa.js" }

            [[head]]
            tag = "script"
            content = "window.plausible=window.plausible||function(){}"
            "#,
        )
        .unwrap();

        assert_eq!(doc.head.len(), 3);
        assert_eq!(doc.head[0].attr("sizes"), Some("96x96"));
        assert!(doc.head[1].flag("async"));
        assert!(!doc.head[0].flag("async"));
        assert!(doc.head[2].content.as_deref().unwrap().contains("plausible"));
    }
}
