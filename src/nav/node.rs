//! Validated navigation nodes.
//!
//! A [`NavNode`] is one of three shapes, and each variant only carries the
//! fields that make sense for it: a group has children, a page has a slug,
//! a link has a URL. Nodes are only produced by the validator, so every
//! label has a default-locale text and every slug and URL passed its checks.

use crate::locale::{LocaleCoverage, LocaleRegistry, LocaleResolver, ResolveError, ResolvedSidebar};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use url::Url;

// ============================================================================
// LabelMap
// ============================================================================

/// Localized label: the default-locale text plus optional translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    default: String,
    translations: FxHashMap<String, String>,
}

impl LabelMap {
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            translations: FxHashMap::default(),
        }
    }

    pub fn with_translation(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.translations.insert(locale.into(), text.into());
        self
    }

    /// Text for the default locale.
    pub fn default_label(&self) -> &str {
        &self.default
    }

    /// Translation for `locale`, without fallback.
    pub fn get(&self, locale: &str) -> Option<&str> {
        self.translations.get(locale).map(String::as_str)
    }

    /// Whether `locale` has its own translation.
    pub fn is_translated(&self, locale: &str) -> bool {
        self.translations.contains_key(locale)
    }

    /// Fallback policy: the translation for `locale` if present, otherwise
    /// the default-locale text. Never fails.
    pub fn resolve(&self, locale: &str) -> &str {
        self.get(locale).unwrap_or(self.default.as_str())
    }

    /// Locales with an explicit translation, sorted.
    pub fn translated_locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.translations.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }
}

// ============================================================================
// Badge
// ============================================================================

/// Visual severity of a badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    #[default]
    Default,
    Note,
    Tip,
    Info,
    Success,
    Caution,
    Danger,
}

impl BadgeVariant {
    pub const ALL: [BadgeVariant; 7] = [
        Self::Default,
        Self::Note,
        Self::Tip,
        Self::Info,
        Self::Success,
        Self::Caution,
        Self::Danger,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Note => "note",
            Self::Tip => "tip",
            Self::Info => "info",
            Self::Success => "success",
            Self::Caution => "caution",
            Self::Danger => "danger",
        }
    }

    /// Parse a variant name (exact, lowercase).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == name)
    }

    /// Comma-separated list of accepted names, for hints.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(BadgeVariant::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Short annotation shown next to a sidebar entry (e.g. "NEW").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub text: String,
    pub variant: BadgeVariant,
}

impl Badge {
    pub fn new(text: impl Into<String>, variant: BadgeVariant) -> Self {
        Self {
            text: text.into(),
            variant,
        }
    }
}

// ============================================================================
// NavNode
// ============================================================================

/// Node kind without payload, for matching and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Group,
    Page,
    Link,
}

/// A validated sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavNode {
    /// Container for ordered children.
    Group {
        label: LabelMap,
        items: Vec<NavNode>,
        badge: Option<Badge>,
        class: Vec<String>,
    },
    /// Internal page, identified by a content slug.
    Page {
        label: LabelMap,
        slug: String,
        badge: Option<Badge>,
        class: Vec<String>,
    },
    /// External destination.
    Link {
        label: LabelMap,
        url: Url,
        badge: Option<Badge>,
        class: Vec<String>,
    },
}

impl NavNode {
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Group { .. } => NodeKind::Group,
            Self::Page { .. } => NodeKind::Page,
            Self::Link { .. } => NodeKind::Link,
        }
    }

    pub fn label(&self) -> &LabelMap {
        match self {
            Self::Group { label, .. } | Self::Page { label, .. } | Self::Link { label, .. } => {
                label
            }
        }
    }

    pub fn badge(&self) -> Option<&Badge> {
        match self {
            Self::Group { badge, .. } | Self::Page { badge, .. } | Self::Link { badge, .. } => {
                badge.as_ref()
            }
        }
    }

    pub fn classes(&self) -> &[String] {
        match self {
            Self::Group { class, .. } | Self::Page { class, .. } | Self::Link { class, .. } => {
                class
            }
        }
    }

    /// Children of a group; empty for leaves.
    pub fn children(&self) -> &[NavNode] {
        match self {
            Self::Group { items, .. } => items,
            Self::Page { .. } | Self::Link { .. } => &[],
        }
    }

    pub fn slug(&self) -> Option<&str> {
        match self {
            Self::Page { slug, .. } => Some(slug),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&Url> {
        match self {
            Self::Link { url, .. } => Some(url),
            _ => None,
        }
    }

    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    pub const fn is_leaf(&self) -> bool {
        !self.is_group()
    }
}

// ============================================================================
// NavigationTree
// ============================================================================

/// Validated sidebar plus the locale registry it was validated against.
///
/// Only the validator constructs a tree, and nothing mutates it afterwards;
/// a changed config produces a new tree. Shared read access needs no locks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTree {
    registry: LocaleRegistry,
    groups: Vec<NavNode>,
}

impl NavigationTree {
    pub(crate) fn new(registry: LocaleRegistry, groups: Vec<NavNode>) -> Self {
        Self { registry, groups }
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Top-level groups in render order.
    pub fn groups(&self) -> &[NavNode] {
        &self.groups
    }

    /// Resolver bound to this tree's registry.
    pub fn resolver(&self) -> LocaleResolver<'_> {
        LocaleResolver::new(&self.registry)
    }

    /// The sidebar resolved for `locale`.
    pub fn resolve_sidebar(&self, locale: &str) -> Result<ResolvedSidebar, ResolveError> {
        self.resolver().resolve_sidebar(&self.groups, locale)
    }

    /// Translation coverage per non-default locale.
    pub fn coverage(&self) -> Vec<LocaleCoverage> {
        self.resolver().coverage(&self.groups)
    }

    /// Depth-first, pre-order walk over every node.
    pub fn iter(&self) -> Nodes<'_> {
        Nodes {
            stack: self.groups.iter().rev().collect(),
        }
    }

    /// Pages and links, in render order.
    pub fn leaves(&self) -> impl Iterator<Item = &NavNode> {
        self.iter().filter(|node| node.is_leaf())
    }

    /// Total node count.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The page entry for `slug`, if any. Slugs are unique in a valid tree.
    pub fn find_by_slug(&self, slug: &str) -> Option<&NavNode> {
        let slug = slug.trim_matches('/');
        self.iter().find(|node| node.slug() == Some(slug))
    }
}

/// Iterator returned by [`NavigationTree::iter`].
pub struct Nodes<'a> {
    stack: Vec<&'a NavNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a NavNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
