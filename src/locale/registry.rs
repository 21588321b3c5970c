//! Locale registry: the set of locales a site supports.
//!
//! The registry is a plain value. It is built once from `[[locales]]`,
//! handed to the validator and resolver, and never changes afterwards, so
//! several sites (or tests) can hold different registries side by side.

use crate::config::LocaleEntry;
use crate::nav::{NodePath, Violation, ViolationKind, Violations};
use regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

// ============================================================================
// Locale
// ============================================================================

/// Text layout direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// A supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    id: String,
    label: String,
    lang: Option<String>,
    dir: Direction,
}

impl Locale {
    /// Left-to-right locale whose `lang` tag equals its id.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            lang: None,
            dir: Direction::Ltr,
        }
    }

    pub fn with_dir(mut self, dir: Direction) -> Self {
        self.dir = dir;
        self
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// BCP-47 tag, falling back to the id.
    pub fn lang(&self) -> &str {
        self.lang.as_deref().unwrap_or(&self.id)
    }

    pub const fn dir(&self) -> Direction {
        self.dir
    }
}

// ============================================================================
// LocaleRegistry
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("locale `{0}` is already registered")]
    DuplicateLocale(String),
}

/// Supported locales in registration order. The first one is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
    index: FxHashMap<String, usize>,
}

impl LocaleRegistry {
    /// Create a registry whose default locale is `default`.
    pub fn new(default: Locale) -> Self {
        let mut index = FxHashMap::default();
        index.insert(default.id.clone(), 0);
        Self {
            locales: vec![default],
            index,
        }
    }

    /// Add a non-default locale.
    pub fn register(&mut self, locale: Locale) -> Result<(), LocaleError> {
        if self.index.contains_key(&locale.id) {
            return Err(LocaleError::DuplicateLocale(locale.id));
        }
        self.index.insert(locale.id.clone(), self.locales.len());
        self.locales.push(locale);
        Ok(())
    }

    /// The fallback locale.
    pub fn default_locale(&self) -> &Locale {
        &self.locales[0]
    }

    pub fn is_supported(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Locale> {
        self.index.get(id).map(|&i| &self.locales[i])
    }

    /// Locales in registration order, default first.
    pub fn iter(&self) -> std::slice::Iter<'_, Locale> {
        self.locales.iter()
    }

    /// Registered ids joined with `, `, for hints.
    pub fn ids(&self) -> String {
        self.locales
            .iter()
            .map(Locale::id)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    /// Build a registry from `[[locales]]`, reporting every defect.
    ///
    /// # Checks
    /// - at least one locale, exactly one marked `default`
    /// - ids and `lang` tags are well-formed, labels are non-empty
    /// - ids are unique
    pub fn from_entries(entries: &[LocaleEntry]) -> Result<Self, Violations> {
        let mut violations = Violations::new();

        if entries.is_empty() {
            violations.report_with_hint(
                ViolationKind::InvalidLocale,
                &NodePath::key("locales"),
                "no locales configured",
                "add a [[locales]] entry with `default = true`",
            );
            return Err(violations);
        }

        for (i, entry) in entries.iter().enumerate() {
            check_entry(entry, &NodePath::locale(i).labeled(&entry.id), &mut violations);
        }

        let defaults: Vec<usize> = (0..entries.len()).filter(|&i| entries[i].default).collect();
        match defaults.as_slice() {
            [] => violations.report_with_hint(
                ViolationKind::InvalidLocale,
                &NodePath::key("locales"),
                "no default locale",
                "mark exactly one locale with `default = true`",
            ),
            [_] => {}
            [first, rest @ ..] => {
                for &i in rest {
                    violations.report_with_hint(
                        ViolationKind::InvalidLocale,
                        &NodePath::locale(i).labeled(&entries[i].id),
                        format!(
                            "locale `{}` is marked default, but `{}` already is",
                            entries[i].id, entries[*first].id
                        ),
                        "mark exactly one locale with `default = true`",
                    );
                }
            }
        }

        // Register in config order, anchored on the default (or the first
        // entry when there is none) so duplicates are still reported.
        let anchor = defaults.first().copied().unwrap_or(0);
        let mut registry = Self::new(entries[anchor].to_locale());
        for (i, entry) in entries.iter().enumerate() {
            if i == anchor {
                continue;
            }
            if let Err(err) = registry.register(entry.to_locale()) {
                violations.push(
                    Violation::new(
                        ViolationKind::DuplicateLocale,
                        NodePath::locale(i).labeled(&entry.id),
                        err.to_string(),
                    )
                    .with_related(vec![NodePath::locale(
                        entries
                            .iter()
                            .enumerate()
                            .position(|(j, e)| j != i && e.id.trim() == entry.id.trim())
                            .unwrap_or(anchor),
                    )]),
                );
            }
        }

        violations.into_result().map(|()| registry)
    }
}

impl<'a> IntoIterator for &'a LocaleRegistry {
    type Item = &'a Locale;
    type IntoIter = std::slice::Iter<'a, Locale>;

    fn into_iter(self) -> Self::IntoIter {
        self.locales.iter()
    }
}

static LOCALE_TAG: OnceLock<Regex> = OnceLock::new();

/// Loose BCP-47 shape: `en`, `root`, `zh-Hans`, `pt-BR`.
fn is_locale_tag(tag: &str) -> bool {
    let regex =
        LOCALE_TAG.get_or_init(|| Regex::new(r"^[A-Za-z]{2,8}(-[A-Za-z0-9]{1,8})*$").unwrap());
    regex.is_match(tag)
}

fn check_entry(entry: &LocaleEntry, path: &NodePath, violations: &mut Violations) {
    let id = entry.id.trim();
    if id.is_empty() {
        violations.report_with_hint(
            ViolationKind::InvalidLocale,
            path,
            "locale id is empty",
            "set `id`, e.g. \"en\"",
        );
    } else if !is_locale_tag(id) {
        violations.report_with_hint(
            ViolationKind::InvalidLocale,
            path,
            format!("locale id `{id}` is not a valid language tag"),
            "use a tag like \"en\", \"pt-BR\" or \"zh-Hans\"",
        );
    }

    if let Some(lang) = &entry.lang
        && !is_locale_tag(lang.trim())
    {
        violations.report_with_hint(
            ViolationKind::InvalidLocale,
            path,
            format!("lang `{lang}` is not a valid language tag"),
            "use a tag like \"en\", \"pt-BR\" or \"zh-Hans\"",
        );
    }

    if entry.label.trim().is_empty() {
        violations.report_with_hint(
            ViolationKind::InvalidLocale,
            path,
            "locale label is empty",
            "set `label` to the language's own name, e.g. \"Русский\"",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, default: bool) -> LocaleEntry {
        LocaleEntry {
            id: id.to_string(),
            label: id.to_uppercase(),
            default,
            ..Default::default()
        }
    }

    fn registry() -> LocaleRegistry {
        let mut registry = LocaleRegistry::new(Locale::new("en", "English"));
        registry.register(Locale::new("ru", "Русский")).unwrap();
        registry
            .register(Locale::new("fa", "فارسی").with_dir(Direction::Rtl))
            .unwrap();
        registry
    }

    #[test]
    fn test_default_and_lookup() {
        let registry = registry();
        assert_eq!(registry.default_locale().id(), "en");
        assert!(registry.is_supported("fa"));
        assert!(!registry.is_supported("de"));
        assert_eq!(registry.get("fa").unwrap().dir(), Direction::Rtl);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.ids(), "en, ru, fa");
    }

    #[test]
    fn test_register_duplicate_fails() {
        let mut registry = registry();
        let err = registry.register(Locale::new("ru", "Russian")).unwrap_err();
        assert_eq!(err, LocaleError::DuplicateLocale("ru".into()));
        assert_eq!(registry.len(), 3);
        // Registering the default id again is also a duplicate.
        assert!(registry.register(Locale::new("en", "English")).is_err());
    }

    #[test]
    fn test_iteration_order() {
        let registry = registry();
        let ids: Vec<&str> = registry.iter().map(Locale::id).collect();
        assert_eq!(ids, vec!["en", "ru", "fa"]);
    }

    #[test]
    fn test_from_entries_default_not_first() {
        let entries = vec![entry("ru", false), entry("en", true), entry("fa", false)];
        let registry = LocaleRegistry::from_entries(&entries).unwrap();
        assert_eq!(registry.default_locale().id(), "en");
        let ids: Vec<&str> = registry.iter().map(Locale::id).collect();
        assert_eq!(ids, vec!["en", "ru", "fa"]);
    }

    #[test]
    fn test_from_entries_reports_duplicates() {
        let entries = vec![entry("en", true), entry("ru", false), entry("ru", false)];
        let violations = LocaleRegistry::from_entries(&entries).unwrap_err();
        assert_eq!(violations.len(), 1);
        let duplicate = violations.iter().next().unwrap();
        assert_eq!(duplicate.kind, ViolationKind::DuplicateLocale);
        assert_eq!(duplicate.path.to_string(), "locales[2]");
        assert_eq!(duplicate.related[0].to_string(), "locales[1]");
    }

    #[test]
    fn test_from_entries_missing_default() {
        let entries = vec![entry("en", false), entry("ru", false)];
        let violations = LocaleRegistry::from_entries(&entries).unwrap_err();
        assert_eq!(violations.count(ViolationKind::InvalidLocale), 1);
        assert!(violations.iter().next().unwrap().message.contains("no default"));
    }

    #[test]
    fn test_from_entries_multiple_defaults() {
        let entries = vec![entry("en", true), entry("ru", true), entry("fa", true)];
        let violations = LocaleRegistry::from_entries(&entries).unwrap_err();
        assert_eq!(violations.count(ViolationKind::InvalidLocale), 2);
    }

    #[test]
    fn test_from_entries_empty() {
        let violations = LocaleRegistry::from_entries(&[]).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations.iter().next().unwrap().path.to_string(), "locales");
    }

    #[test]
    fn test_from_entries_collects_every_problem() {
        let mut bad_lang = entry("fa", false);
        bad_lang.lang = Some("farsi language".into());
        let mut no_label = entry("ru", false);
        no_label.label = "  ".into();
        let entries = vec![entry("en", true), entry("en us", false), bad_lang, no_label];

        let violations = LocaleRegistry::from_entries(&entries).unwrap_err();
        assert_eq!(violations.count(ViolationKind::InvalidLocale), 3);
    }

    #[test]
    fn test_locale_tags() {
        for tag in ["en", "root", "zh-Hans", "pt-BR", "sr-Latn-RS"] {
            assert!(is_locale_tag(tag), "{tag}");
        }
        for tag in ["", "e", "en_US", "en-", "../en"] {
            assert!(!is_locale_tag(tag), "{tag}");
        }
    }

    #[test]
    fn test_direction_attr() {
        assert_eq!(Direction::Rtl.as_str(), "rtl");
        assert_eq!(Direction::default(), Direction::Ltr);
    }
}
