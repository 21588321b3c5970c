//! `[[locales]]` entries.
//!
//! # Example
//!
//! ```toml
//! [[locales]]
//! id = "en"
//! label = "English"
//! default = true
//!
//! [[locales]]
//! id = "fa"
//! label = "فارسی"
//! dir = "rtl"
//! ```

use crate::locale::{Direction, Locale};
use serde::{Deserialize, Serialize};

/// A locale as written in the config, before registry checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleEntry {
    /// Locale identifier, used as the key in label translations.
    pub id: String,

    /// Human-readable name shown in the language picker.
    pub label: String,

    /// BCP-47 tag for `<html lang>`; defaults to `id`.
    pub lang: Option<String>,

    /// Text direction.
    pub dir: Direction,

    /// Marks the fallback locale. Exactly one entry must set it.
    pub default: bool,
}

impl LocaleEntry {
    pub fn to_locale(&self) -> Locale {
        let locale = Locale::new(self.id.trim(), self.label.trim()).with_dir(self.dir);
        match &self.lang {
            Some(lang) => locale.with_lang(lang.trim()),
            None => locale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let entry: LocaleEntry = toml::from_str("id = \"ru\"\nlabel = \"Русский\"").unwrap();
        assert_eq!(entry.dir, Direction::Ltr);
        assert!(!entry.default);
        assert_eq!(entry.to_locale().lang(), "ru");
    }

    #[test]
    fn test_rtl_with_lang() {
        let entry: LocaleEntry =
            toml::from_str("id = \"fa\"\nlabel = \"فارسی\"\nlang = \"fa-IR\"\ndir = \"rtl\"")
                .unwrap();
        let locale = entry.to_locale();
        assert_eq!(locale.dir(), Direction::Rtl);
        assert_eq!(locale.lang(), "fa-IR");
        assert_eq!(locale.id(), "fa");
    }

    #[test]
    fn test_unknown_direction_is_parse_error() {
        let result: Result<LocaleEntry, _> = toml::from_str("id = \"he\"\ndir = \"right\"");
        assert!(result.is_err());
    }
}
