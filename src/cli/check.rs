//! `navtree check`: validate the config and report every violation.

use crate::config::{ConfigError, NavConfig, Site, display_name};
use crate::locale::LocaleCoverage;
use crate::log;
use crate::utils::plural_count;
use anyhow::{Result, bail};
use std::path::Path;

/// Validate the config at `path`.
///
/// Prints unknown fields and translation coverage hints; fails if any
/// violation was found.
pub fn check_config(path: &Path) -> Result<()> {
    log!("check"; "validating {}", display_name(path));

    let (config, ignored) = NavConfig::from_path(path)?;
    if !ignored.is_empty() {
        log!("warning"; "unknown fields in {}:", display_name(path));
        for field in &ignored {
            eprintln!("- {}", field);
        }
    }

    let site = match config.build() {
        Ok(site) => site,
        Err(ConfigError::Violations(violations)) => {
            eprintln!("{violations}");
            bail!(
                "{} is invalid ({})",
                display_name(path),
                plural_count(violations.len(), "violation")
            );
        }
        Err(err) => return Err(err.into()),
    };

    log!("check"; "{}", summary(&site));
    for coverage in site.tree.coverage() {
        if let Some(hint) = coverage_hint(&coverage) {
            log!("hint"; "{}", hint);
        }
    }
    Ok(())
}

/// One-line description of a valid site.
fn summary(site: &Site) -> String {
    let tree = &site.tree;
    format!(
        "ok: {} in {}, {}",
        plural_count(tree.len(), "node"),
        plural_count(tree.groups().len(), "group"),
        plural_count(tree.registry().len(), "locale")
    )
}

/// Hint for a locale that falls back to default labels, if it does.
fn coverage_hint(coverage: &LocaleCoverage) -> Option<String> {
    (!coverage.is_complete()).then(|| {
        format!(
            "`{}` shows the default label for {} of {}",
            coverage.locale,
            coverage.missing(),
            plural_count(coverage.total, "label")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
[[locales]]
id = "en"
label = "English"
default = true

[[locales]]
id = "ru"
label = "Русский"

[[sidebar]]
label = "Introduction"
translations = { ru = "Введение" }

  [[sidebar.items]]
  label = "Overview"
  slug = "index"
"#;

    fn write(content: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("navtree.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_check_valid() {
        let (_dir, path) = write(CONFIG);
        assert!(check_config(&path).is_ok());
    }

    #[test]
    fn test_check_invalid() {
        let (_dir, path) = write(&CONFIG.replace(
            "slug = \"index\"",
            "slug = \"index\"\nlink = \"https://example.com\"",
        ));
        let err = check_config(&path).unwrap_err();
        assert!(err.to_string().contains("1 violation"));
    }

    #[test]
    fn test_summary_and_hint() {
        let site = NavConfig::from_str(CONFIG).unwrap().build().unwrap();
        assert_eq!(summary(&site), "ok: 2 nodes in 1 group, 2 locales");

        let coverage = site.tree.coverage();
        assert_eq!(
            coverage_hint(&coverage[0]).unwrap(),
            "`ru` shows the default label for 1 of 2 labels"
        );
    }
}
