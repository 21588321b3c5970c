//! Per-locale views of a validated tree.

use super::{Direction, LocaleRegistry};
use crate::nav::{Badge, NavNode};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("locale `{0}` is not registered")]
    UnknownLocale(String),
}

/// Resolves labels and directions against one registry.
#[derive(Debug, Clone, Copy)]
pub struct LocaleResolver<'a> {
    registry: &'a LocaleRegistry,
}

impl<'a> LocaleResolver<'a> {
    pub fn new(registry: &'a LocaleRegistry) -> Self {
        Self { registry }
    }

    /// Displayed label of `node` in `locale`, falling back to the default
    /// locale. Never fails, even for unregistered locales.
    pub fn resolve_label<'n>(&self, node: &'n NavNode, locale: &str) -> &'n str {
        node.label().resolve(locale)
    }

    /// Text direction of a registered locale.
    pub fn resolve_direction(&self, locale: &str) -> Result<Direction, ResolveError> {
        self.registry
            .get(locale)
            .map(|l| l.dir())
            .ok_or_else(|| ResolveError::UnknownLocale(locale.to_string()))
    }

    /// The whole sidebar rendered for `locale`.
    pub fn resolve_sidebar(
        &self,
        nodes: &[NavNode],
        locale: &str,
    ) -> Result<ResolvedSidebar, ResolveError> {
        let target = self
            .registry
            .get(locale)
            .ok_or_else(|| ResolveError::UnknownLocale(locale.to_string()))?;
        let is_default = target.id() == self.registry.default_locale().id();

        Ok(ResolvedSidebar {
            locale: target.id().to_string(),
            lang: target.lang().to_string(),
            dir: target.dir(),
            entries: nodes
                .iter()
                .map(|node| resolve_entry(node, locale, is_default))
                .collect(),
        })
    }

    /// Translation coverage for every non-default locale, in registry order.
    pub fn coverage(&self, nodes: &[NavNode]) -> Vec<LocaleCoverage> {
        let mut labels = Vec::new();
        collect_nodes(nodes, &mut labels);

        let default = self.registry.default_locale().id();
        self.registry
            .iter()
            .filter(|locale| locale.id() != default)
            .map(|locale| LocaleCoverage {
                locale: locale.id().to_string(),
                translated: labels
                    .iter()
                    .filter(|node| node.label().is_translated(locale.id()))
                    .count(),
                total: labels.len(),
            })
            .collect()
    }
}

fn collect_nodes<'a>(nodes: &'a [NavNode], out: &mut Vec<&'a NavNode>) {
    for node in nodes {
        out.push(node);
        collect_nodes(node.children(), out);
    }
}

fn resolve_entry(node: &NavNode, locale: &str, is_default: bool) -> ResolvedEntry {
    let label = node.label();
    let head = EntryHead {
        label: label.resolve(locale).to_string(),
        fallback: !is_default && !label.is_translated(locale),
        badge: node.badge().cloned(),
        class: node.classes().to_vec(),
    };

    match node {
        NavNode::Group { items, .. } => ResolvedEntry::Group {
            head,
            items: items
                .iter()
                .map(|child| resolve_entry(child, locale, is_default))
                .collect(),
        },
        NavNode::Page { slug, .. } => ResolvedEntry::Page {
            head,
            slug: slug.clone(),
        },
        NavNode::Link { url, .. } => ResolvedEntry::Link {
            head,
            url: url.to_string(),
        },
    }
}

// ============================================================================
// Output types
// ============================================================================

/// A sidebar resolved for one locale, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSidebar {
    pub locale: String,
    /// Value for `<html lang>`.
    pub lang: String,
    pub dir: Direction,
    pub entries: Vec<ResolvedEntry>,
}

impl ResolvedSidebar {
    /// Number of labels that fell back to the default locale.
    pub fn fallback_count(&self) -> usize {
        fn count(entries: &[ResolvedEntry]) -> usize {
            entries
                .iter()
                .map(|e| usize::from(e.head().fallback) + count(e.items()))
                .sum()
        }
        count(&self.entries)
    }
}

/// Fields shared by every resolved entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryHead {
    pub label: String,
    /// The label is the default-locale text because no translation exists.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub class: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResolvedEntry {
    Group {
        #[serde(flatten)]
        head: EntryHead,
        items: Vec<ResolvedEntry>,
    },
    Page {
        #[serde(flatten)]
        head: EntryHead,
        slug: String,
    },
    Link {
        #[serde(flatten)]
        head: EntryHead,
        url: String,
    },
}

impl ResolvedEntry {
    pub fn head(&self) -> &EntryHead {
        match self {
            Self::Group { head, .. } | Self::Page { head, .. } | Self::Link { head, .. } => head,
        }
    }

    pub fn label(&self) -> &str {
        &self.head().label
    }

    pub fn items(&self) -> &[ResolvedEntry] {
        match self {
            Self::Group { items, .. } => items,
            _ => &[],
        }
    }
}

/// How many labels a locale translates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleCoverage {
    pub locale: String,
    pub translated: usize,
    pub total: usize,
}

impl LocaleCoverage {
    /// Labels that fall back to the default locale.
    pub fn missing(&self) -> usize {
        self.total - self.translated
    }

    pub fn is_complete(&self) -> bool {
        self.translated == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;
    use crate::nav::{BadgeVariant, LabelMap};
    use url::Url;

    fn registry() -> LocaleRegistry {
        let mut registry = LocaleRegistry::new(Locale::new("en", "English"));
        registry.register(Locale::new("ru", "Русский")).unwrap();
        registry
            .register(
                Locale::new("fa", "فارسی")
                    .with_dir(Direction::Rtl)
                    .with_lang("fa-IR"),
            )
            .unwrap();
        registry
    }

    fn sidebar() -> Vec<NavNode> {
        vec![NavNode::Group {
            label: LabelMap::new("Introduction")
                .with_translation("ru", "Введение")
                .with_translation("fa", "مقدمه"),
            items: vec![
                NavNode::Page {
                    label: LabelMap::new("Overview").with_translation("ru", "Обзор"),
                    slug: "index".into(),
                    badge: None,
                    class: Vec::new(),
                },
                NavNode::Link {
                    label: LabelMap::new("Releases"),
                    url: Url::parse("https://github.com/kutovoys/xray-checker/releases").unwrap(),
                    badge: Some(Badge::new("NEW", BadgeVariant::Success)),
                    class: vec!["menu-item".into()],
                },
            ],
            badge: None,
            class: Vec::new(),
        }]
    }

    #[test]
    fn test_resolve_label_fallback() {
        let registry = registry();
        let resolver = LocaleResolver::new(&registry);
        let nodes = sidebar();
        let overview = &nodes[0].children()[0];

        assert_eq!(resolver.resolve_label(overview, "ru"), "Обзор");
        assert_eq!(resolver.resolve_label(overview, "fa"), "Overview");
        assert_eq!(resolver.resolve_label(overview, "en"), "Overview");
        // Unregistered locales still resolve.
        assert_eq!(resolver.resolve_label(overview, "de"), "Overview");
    }

    #[test]
    fn test_every_leaf_resolves_for_every_locale() {
        let registry = registry();
        let resolver = LocaleResolver::new(&registry);
        let nodes = sidebar();
        for locale in &registry {
            for node in nodes[0].children() {
                assert!(!resolver.resolve_label(node, locale.id()).is_empty());
            }
            assert!(resolver.resolve_direction(locale.id()).is_ok());
        }
    }

    #[test]
    fn test_resolve_direction() {
        let registry = registry();
        let resolver = LocaleResolver::new(&registry);
        assert_eq!(resolver.resolve_direction("fa"), Ok(Direction::Rtl));
        assert_eq!(resolver.resolve_direction("ru"), Ok(Direction::Ltr));
        assert_eq!(
            resolver.resolve_direction("de"),
            Err(ResolveError::UnknownLocale("de".into()))
        );
    }

    #[test]
    fn test_resolve_sidebar_for_rtl_locale() {
        let registry = registry();
        let resolver = LocaleResolver::new(&registry);
        let sidebar = resolver.resolve_sidebar(&sidebar(), "fa").unwrap();

        assert_eq!(sidebar.lang, "fa-IR");
        assert_eq!(sidebar.dir, Direction::Rtl);
        let group = &sidebar.entries[0];
        assert_eq!(group.label(), "مقدمه");
        assert!(!group.head().fallback);
        assert_eq!(group.items()[0].label(), "Overview");
        assert!(group.items()[0].head().fallback);
        assert_eq!(sidebar.fallback_count(), 2);
    }

    #[test]
    fn test_default_locale_never_marks_fallback() {
        let registry = registry();
        let resolver = LocaleResolver::new(&registry);
        let sidebar = resolver.resolve_sidebar(&sidebar(), "en").unwrap();
        assert_eq!(sidebar.fallback_count(), 0);
    }

    #[test]
    fn test_resolve_sidebar_unknown_locale() {
        let registry = registry();
        let resolver = LocaleResolver::new(&registry);
        assert!(resolver.resolve_sidebar(&sidebar(), "de").is_err());
    }

    #[test]
    fn test_sidebar_json_shape() {
        let registry = registry();
        let resolver = LocaleResolver::new(&registry);
        let sidebar = resolver.resolve_sidebar(&sidebar(), "ru").unwrap();
        let json = serde_json::to_value(&sidebar).unwrap();

        assert_eq!(json["dir"], "ltr");
        let group = &json["entries"][0];
        assert_eq!(group["type"], "group");
        assert_eq!(group["label"], "Введение");
        assert!(group.get("fallback").is_none());
        assert!(group.get("class").is_none());

        let page = &group["items"][0];
        assert_eq!(page["type"], "page");
        assert_eq!(page["slug"], "index");

        let link = &group["items"][1];
        assert_eq!(link["type"], "link");
        assert_eq!(link["fallback"], true);
        assert_eq!(link["url"], "https://github.com/kutovoys/xray-checker/releases");
        assert_eq!(link["badge"]["variant"], "success");
        assert_eq!(link["class"][0], "menu-item");
    }

    #[test]
    fn test_coverage() {
        let registry = registry();
        let resolver = LocaleResolver::new(&registry);
        let coverage = resolver.coverage(&sidebar());

        assert_eq!(coverage.len(), 2);
        assert_eq!(coverage[0].locale, "ru");
        assert_eq!((coverage[0].translated, coverage[0].total), (2, 3));
        assert_eq!(coverage[1].locale, "fa");
        assert_eq!(coverage[1].missing(), 2);
        assert!(!coverage[1].is_complete());
    }
}
