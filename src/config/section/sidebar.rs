//! `[[sidebar]]` entries: the declarative navigation tree.
//!
//! Everything is optional here on purpose. The shape of a node (group, page
//! or link) is decided by which of `items`, `slug` and `link` are present,
//! and the validator reports nodes that mix or omit them.
//!
//! # Example
//!
//! ```toml
//! [[sidebar]]
//! label = "Configuration"
//! translations = { ru = "Конфигурация", fa = "پیکربندی" }
//!
//!   [[sidebar.items]]
//!   label = "Web Customization"
//!   slug = "configuration/web-customization"
//!   badge = { text = "NEW", variant = "success" }
//!
//! [[sidebar]]
//! label = "VPN Recommendation"
//!
//!   [[sidebar.items]]
//!   label = "BlancVPN"
//!   link = "https://getblancvpn.com/pricing"
//!   badge = "KLUGSCL"
//!   attrs = { class = "blanc-vpn-menu-item" }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A sidebar entry as written in the config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNavItem {
    /// Label for the default locale.
    pub label: Option<String>,

    /// Labels for other locales, keyed by locale id.
    pub translations: BTreeMap<String, String>,

    /// Internal content slug (page entry).
    pub slug: Option<String>,

    /// External or site-relative URL (link entry).
    pub link: Option<String>,

    /// Children (group entry).
    pub items: Option<Vec<RawNavItem>>,

    pub badge: Option<RawBadge>,

    /// CSS classes for the rendered entry.
    pub class: Option<RawClass>,

    /// HTML attributes; only `class` is recognized.
    pub attrs: Option<RawAttrs>,
}

/// Badge as a bare string (default variant) or a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawBadge {
    Text(String),
    Full {
        text: String,
        #[serde(default)]
        variant: Option<String>,
    },
}

impl RawBadge {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Full { text, .. } => text,
        }
    }

    pub fn variant(&self) -> Option<&str> {
        match self {
            Self::Text(_) => None,
            Self::Full { variant, .. } => variant.as_deref(),
        }
    }
}

/// Class list as a space-separated string or an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawClass {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawAttrs {
    pub class: Option<RawClass>,
}

// ============================================================================
// In-memory construction
// ============================================================================

impl RawNavItem {
    /// Group entry with the given children.
    pub fn group(label: impl Into<String>, items: Vec<RawNavItem>) -> Self {
        Self {
            label: Some(label.into()),
            items: Some(items),
            ..Default::default()
        }
    }

    /// Internal page entry.
    pub fn page(label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            slug: Some(slug.into()),
            ..Default::default()
        }
    }

    /// External link entry.
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            link: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn translate(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.translations.insert(locale.into(), text.into());
        self
    }

    pub fn with_badge(mut self, text: impl Into<String>, variant: impl Into<String>) -> Self {
        self.badge = Some(RawBadge::Full {
            text: text.into(),
            variant: Some(variant.into()),
        });
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(RawClass::One(class.into()));
        self
    }

    /// Class names from `class` and `attrs.class`, in that order, not yet
    /// checked.
    pub fn class_names(&self) -> Vec<&str> {
        let from_attrs = self.attrs.as_ref().and_then(|a| a.class.as_ref());
        let mut names = Vec::new();
        for raw in [self.class.as_ref(), from_attrs].into_iter().flatten() {
            match raw {
                RawClass::One(list) => names.push(list.as_str()),
                RawClass::Many(list) => names.extend(list.iter().map(String::as_str)),
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Doc {
        sidebar: Vec<RawNavItem>,
    }

    #[test]
    fn test_parse_nested_tables() {
        let doc: Doc = toml::from_str(
            r#"
            [[sidebar]]
            label = "Introduction"
            translations = { ru = "Введение", fa = "مقدمه" }

              [[sidebar.items]]
              label = "Overview"
              slug = "index"

              [[sidebar.items]]
              label = "Quick Start"
              slug = "intro/quick-start"
            "#,
        )
        .unwrap();

        let group = &doc.sidebar[0];
        assert_eq!(group.label.as_deref(), Some("Introduction"));
        assert_eq!(group.translations.get("fa").map(String::as_str), Some("مقدمه"));
        let items = group.items.as_ref().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].slug.as_deref(), Some("intro/quick-start"));
    }

    #[test]
    fn test_badge_forms() {
        let doc: Doc = toml::from_str(
            r#"
            [[sidebar]]
            label = "a"
            badge = "NEW"

            [[sidebar]]
            label = "b"
            badge = { text = "WIP", variant = "caution" }

            [[sidebar]]
            label = "c"
            badge = { text = "BETA" }
            "#,
        )
        .unwrap();

        let badges: Vec<_> = doc.sidebar.iter().map(|i| i.badge.clone().unwrap()).collect();
        assert_eq!(badges[0].text(), "NEW");
        assert_eq!(badges[0].variant(), None);
        assert_eq!(badges[1].variant(), Some("caution"));
        assert_eq!(badges[2].text(), "BETA");
        assert_eq!(badges[2].variant(), None);
    }

    #[test]
    fn test_class_names_merge_class_and_attrs() {
        let doc: Doc = toml::from_str(
            r#"
            [[sidebar]]
            label = "BlancVPN"
            link = "https://getblancvpn.com/pricing"
            class = ["promo", "highlight"]
            attrs = { class = "blanc-vpn-menu-item" }
            "#,
        )
        .unwrap();

        assert_eq!(
            doc.sidebar[0].class_names(),
            vec!["promo", "highlight", "blanc-vpn-menu-item"]
        );
    }

    #[test]
    fn test_builders() {
        let item = RawNavItem::group(
            "Badges",
            vec![RawNavItem::page("Overview", "badges/overview").translate("ru", "Обзор")],
        )
        .with_badge("NEW", "success")
        .with_class("featured");

        assert_eq!(item.badge.as_ref().unwrap().variant(), Some("success"));
        assert_eq!(item.class_names(), vec!["featured"]);
        let child = &item.items.as_ref().unwrap()[0];
        assert_eq!(child.translations.get("ru").map(String::as_str), Some("Обзор"));
    }
}
