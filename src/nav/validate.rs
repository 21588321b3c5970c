//! Sidebar validation.
//!
//! [`TreeValidator`] walks the declarative `[[sidebar]]` entries once,
//! collects every violation it finds, and only builds a
//! [`NavigationTree`] when there are none.
//!
//! # Checks
//!
//! | Kind                  | Condition                                             |
//! |-----------------------|-------------------------------------------------------|
//! | `unknown-locale`      | translation keyed by an unregistered locale           |
//! | `missing-default-label` | no label for the default locale                     |
//! | `malformed-node`      | not exactly one of `items` / `slug` / `link`, empty group, top-level leaf, blank badge or class |
//! | `invalid-url`         | link is not absolute http(s) with a host              |
//! | `invalid-slug`        | empty slug, traversal segments, backslash, control chars |
//! | `duplicate-slug`      | two pages share a slug                                |
//! | `invalid-badge-variant` | badge variant outside the known set                 |
//! | `depth-exceeded`      | nesting deeper than `max_depth`                       |

use super::{Badge, BadgeVariant, LabelMap, NavNode, NavigationTree, NodePath};
use super::{Violation, ViolationKind, Violations};
use crate::config::RawNavItem;
use crate::locale::LocaleRegistry;
use crate::utils::plural_count;
use percent_encoding::percent_decode_str;
use rustc_hash::FxHashMap;
use url::Url;

/// Deepest nesting allowed when `[validate] max_depth` is not set.
pub const DEFAULT_MAX_DEPTH: usize = 4;

// ============================================================================
// ValidationResult
// ============================================================================

/// Outcome of [`TreeValidator::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(NavigationTree),
    Invalid(Violations),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn tree(&self) -> Option<&NavigationTree> {
        match self {
            Self::Valid(tree) => Some(tree),
            Self::Invalid(_) => None,
        }
    }

    pub fn violations(&self) -> Option<&Violations> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(violations) => Some(violations),
        }
    }

    pub fn into_result(self) -> Result<NavigationTree, Violations> {
        match self {
            Self::Valid(tree) => Ok(tree),
            Self::Invalid(violations) => Err(violations),
        }
    }
}

// ============================================================================
// TreeValidator
// ============================================================================

/// Validates raw sidebar entries against a locale registry.
#[derive(Debug, Clone, Copy)]
pub struct TreeValidator<'a> {
    registry: &'a LocaleRegistry,
    max_depth: usize,
    site_url: Option<&'a Url>,
}

impl<'a> TreeValidator<'a> {
    pub fn new(registry: &'a LocaleRegistry) -> Self {
        Self {
            registry,
            max_depth: DEFAULT_MAX_DEPTH,
            site_url: None,
        }
    }

    /// Deepest allowed nesting; top-level groups are depth 1.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Base for site-relative links (`/contributing/guide`).
    pub fn with_site_url(mut self, site_url: Option<&'a Url>) -> Self {
        self.site_url = site_url;
        self
    }

    /// Validate `items` as the top-level sidebar.
    ///
    /// Pure: the same input always produces an equal result, and violations
    /// are ordered by a pre-order walk, duplicate slugs last.
    pub fn validate(&self, items: &[RawNavItem]) -> ValidationResult {
        let mut walk = Walk {
            validator: self,
            violations: Violations::new(),
            slugs: Vec::new(),
            slug_index: FxHashMap::default(),
        };

        let groups: Vec<NavNode> = items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| {
                let path = NodePath::sidebar(i).labeled(walk.display_label(item));
                walk.node(item, path, 1)
            })
            .collect();

        walk.report_duplicate_slugs();

        if walk.violations.is_empty() {
            ValidationResult::Valid(NavigationTree::new(self.registry.clone(), groups))
        } else {
            ValidationResult::Invalid(walk.violations)
        }
    }
}

/// State of one validation pass.
struct Walk<'v, 'a> {
    validator: &'v TreeValidator<'a>,
    violations: Violations,
    /// Normalized slugs in first-appearance order, with every path using them.
    slugs: Vec<(String, Vec<NodePath>)>,
    slug_index: FxHashMap<String, usize>,
}

impl Walk<'_, '_> {
    /// Validate one node and its subtree. `None` when anything in it failed.
    fn node(&mut self, item: &RawNavItem, path: NodePath, depth: usize) -> Option<NavNode> {
        if depth > self.validator.max_depth {
            self.violations.report_with_hint(
                ViolationKind::DepthExceeded,
                &path,
                format!(
                    "entry is nested {depth} levels deep, the limit is {}",
                    self.validator.max_depth
                ),
                "flatten the group or raise `[validate] max_depth`",
            );
            return None;
        }

        let before = self.violations.len();
        let label = self.label(item, &path);
        let badge = self.badge(item, &path);
        let class = self.classes(item, &path);

        let node = match (&item.items, &item.slug, &item.link) {
            (Some(items), None, None) => {
                if items.is_empty() {
                    self.violations.report_with_hint(
                        ViolationKind::MalformedNode,
                        &path,
                        "group has no items",
                        "add entries under `items` or remove the group",
                    );
                }
                let children = self.children(items, &path, depth);
                label.map(|label| NavNode::Group {
                    label,
                    items: children,
                    badge,
                    class,
                })
            }
            (Some(items), _, _) => {
                self.violations.report_with_hint(
                    ViolationKind::MalformedNode,
                    &path,
                    "group cannot also have `slug` or `link`",
                    "move the page into the group's `items`",
                );
                // Children are still checked.
                self.children(items, &path, depth);
                None
            }
            (None, Some(_), Some(_)) => {
                self.violations.report_with_hint(
                    ViolationKind::MalformedNode,
                    &path,
                    "entry has both `slug` and `link`",
                    "use `slug` for pages of this site and `link` for external URLs",
                );
                None
            }
            (None, Some(slug), None) => {
                self.top_level_leaf(&path, depth);
                let slug = self.slug(slug, &path);
                match (label, slug) {
                    (Some(label), Some(slug)) => Some(NavNode::Page {
                        label,
                        slug,
                        badge,
                        class,
                    }),
                    _ => None,
                }
            }
            (None, None, Some(link)) => {
                self.top_level_leaf(&path, depth);
                let url = self.link(link, &path);
                match (label, url) {
                    (Some(label), Some(url)) => Some(NavNode::Link {
                        label,
                        url,
                        badge,
                        class,
                    }),
                    _ => None,
                }
            }
            (None, None, None) => {
                self.violations.report_with_hint(
                    ViolationKind::MalformedNode,
                    &path,
                    "entry has none of `items`, `slug` or `link`",
                    "a group needs `items`, a page needs `slug`, a link needs `link`",
                );
                None
            }
        };

        if self.violations.len() > before {
            None
        } else {
            node
        }
    }

    fn children(&mut self, items: &[RawNavItem], path: &NodePath, depth: usize) -> Vec<NavNode> {
        items
            .iter()
            .enumerate()
            .filter_map(|(j, child)| {
                let child_path = path.item(j).labeled(self.display_label(child));
                self.node(child, child_path, depth + 1)
            })
            .collect()
    }

    fn top_level_leaf(&mut self, path: &NodePath, depth: usize) {
        if depth == 1 {
            self.violations.report_with_hint(
                ViolationKind::MalformedNode,
                path,
                "top-level sidebar entries must be groups",
                "wrap the entry in a group with `items`",
            );
        }
    }

    // ========================================================================
    // Labels
    // ========================================================================

    /// Default-locale text used to annotate paths, if one can be found.
    fn display_label(&self, item: &RawNavItem) -> String {
        let default = self.validator.registry.default_locale().id();
        item.label
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .or_else(|| item.translations.get(default).map(String::as_str))
            .map(|l| l.trim().to_string())
            .unwrap_or_default()
    }

    fn label(&mut self, item: &RawNavItem, path: &NodePath) -> Option<LabelMap> {
        let registry = self.validator.registry;
        let default = registry.default_locale().id();

        for locale in item.translations.keys() {
            if !registry.is_supported(locale) {
                self.violations.push(
                    Violation::new(
                        ViolationKind::UnknownLocale,
                        path.clone(),
                        format!("translation for unregistered locale `{locale}`"),
                    )
                    .with_hint(format!("registered locales: {}", registry.ids())),
                );
            }
        }

        let text = item
            .label
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .or_else(|| {
                item.translations
                    .get(default)
                    .map(|l| l.trim())
                    .filter(|l| !l.is_empty())
            });

        let Some(text) = text else {
            self.violations.report_with_hint(
                ViolationKind::MissingDefaultLabel,
                path,
                format!("entry has no label for the default locale `{default}`"),
                format!("set `label` or `translations.{default}`"),
            );
            return None;
        };

        let mut label = LabelMap::new(text);
        for (locale, translated) in &item.translations {
            let translated = translated.trim();
            if locale != default && registry.is_supported(locale) && !translated.is_empty() {
                label = label.with_translation(locale.as_str(), translated);
            }
        }
        Some(label)
    }

    // ========================================================================
    // Decorations
    // ========================================================================

    fn badge(&mut self, item: &RawNavItem, path: &NodePath) -> Option<Badge> {
        let raw = item.badge.as_ref()?;
        let path = path.clone().then("badge");

        let text = raw.text().trim();
        if text.is_empty() {
            self.violations
                .report(ViolationKind::MalformedNode, &path, "badge text is empty");
        }

        let variant = match raw.variant() {
            None => Some(BadgeVariant::Default),
            Some(name) => {
                let variant = BadgeVariant::from_name(name.trim());
                if variant.is_none() {
                    self.violations.report_with_hint(
                        ViolationKind::InvalidBadgeVariant,
                        &path,
                        format!("unknown badge variant `{name}`"),
                        format!("expected one of: {}", BadgeVariant::names()),
                    );
                }
                variant
            }
        };

        variant
            .filter(|_| !text.is_empty())
            .map(|variant| Badge::new(text, variant))
    }

    fn classes(&mut self, item: &RawNavItem, path: &NodePath) -> Vec<String> {
        let names = item.class_names();
        if names.iter().any(|name| name.trim().is_empty()) {
            self.violations.report(
                ViolationKind::MalformedNode,
                &path.clone().then("class"),
                "class name is empty",
            );
            return Vec::new();
        }

        let mut classes: Vec<String> = Vec::new();
        for name in names.iter().flat_map(|n| n.split_whitespace()) {
            if !classes.iter().any(|c| c == name) {
                classes.push(name.to_string());
            }
        }
        classes
    }

    // ========================================================================
    // Targets
    // ========================================================================

    fn slug(&mut self, raw: &str, path: &NodePath) -> Option<String> {
        match normalize_slug(raw) {
            Ok(slug) => {
                match self.slug_index.get(&slug).copied() {
                    Some(i) => self.slugs[i].1.push(path.clone()),
                    None => {
                        self.slug_index.insert(slug.clone(), self.slugs.len());
                        self.slugs.push((slug.clone(), vec![path.clone()]));
                    }
                }
                Some(slug)
            }
            Err(message) => {
                self.violations.report_with_hint(
                    ViolationKind::InvalidSlug,
                    &path.clone().then("slug"),
                    message,
                    "use a content path like \"configuration/environment-variables\"",
                );
                None
            }
        }
    }

    fn link(&mut self, raw: &str, path: &NodePath) -> Option<Url> {
        match resolve_link(raw.trim(), self.validator.site_url) {
            Ok(url) => Some(url),
            Err((message, hint)) => {
                self.violations.report_with_hint(
                    ViolationKind::InvalidUrl,
                    &path.clone().then("link"),
                    message,
                    hint,
                );
                None
            }
        }
    }

    /// One violation per slug used more than once, at its second use.
    fn report_duplicate_slugs(&mut self) {
        for (slug, paths) in &self.slugs {
            if let [first, second, rest @ ..] = paths.as_slice() {
                let related = std::iter::once(first).chain(rest).cloned().collect();
                self.violations.push(
                    Violation::new(
                        ViolationKind::DuplicateSlug,
                        second.clone(),
                        format!(
                            "slug `{slug}` is used by {}",
                            plural_count(paths.len(), "page")
                        ),
                    )
                    .with_related(related)
                    .with_hint("each page may appear in the sidebar only once"),
                );
            }
        }
    }
}

// ============================================================================
// Slug and URL checks
// ============================================================================

/// Trim whitespace and surrounding `/`, then reject anything that could
/// escape the content root.
fn normalize_slug(raw: &str) -> Result<String, String> {
    let slug = raw.trim().trim_matches('/');
    if slug.is_empty() {
        return Err("slug is empty".to_string());
    }

    let decoded = percent_decode_str(slug)
        .decode_utf8()
        .map_err(|_| format!("slug `{slug}` is not valid UTF-8 after percent-decoding"))?;

    for candidate in [slug, decoded.as_ref()] {
        if candidate.contains('\\') {
            return Err(format!("slug `{slug}` contains a backslash"));
        }
        if candidate.chars().any(char::is_control) {
            return Err(format!("slug `{slug}` contains control characters"));
        }
        for segment in candidate.split('/') {
            match segment {
                "" => return Err(format!("slug `{slug}` has an empty path segment")),
                "." | ".." => {
                    return Err(format!("slug `{slug}` contains a `{segment}` segment"));
                }
                _ => {}
            }
        }
    }

    Ok(slug.to_string())
}

/// Parse an external link, or join a site-relative one onto `site_url`.
fn resolve_link(raw: &str, site_url: Option<&Url>) -> Result<Url, (String, String)> {
    const FORMAT_HINT: &str = "use format like https://example.com";

    if raw.starts_with('/') && !raw.starts_with("//") {
        let Some(base) = site_url else {
            return Err((
                format!("site-relative link `{raw}` needs `site.url`"),
                "set `url` in [site], or use an absolute URL".to_string(),
            ));
        };
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let url = base
            .join(raw.trim_start_matches('/'))
            .map_err(|e| (format!("invalid link `{raw}`: {e}"), FORMAT_HINT.to_string()))?;
        if !url.path().starts_with(base.path()) {
            return Err((
                format!("site-relative link `{raw}` leaves `{base}`"),
                "remove `.` and `..` segments from the link".to_string(),
            ));
        }
        return Ok(url);
    }

    let url = Url::parse(raw)
        .map_err(|e| (format!("invalid link `{raw}`: {e}"), FORMAT_HINT.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err((
            format!("link `{raw}` must use http or https"),
            FORMAT_HINT.to_string(),
        ));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err((format!("link `{raw}` has no host"), FORMAT_HINT.to_string()));
    }
    Ok(url)
}
