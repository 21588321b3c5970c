//! `navtree locales`: list registered locales.

use crate::config::Site;
use crate::log;
use anyhow::Result;
use std::path::Path;

pub fn list_locales(path: &Path) -> Result<()> {
    let site = Site::load(path)?;
    site.warn_unknown_fields();
    log!("locales"; "{} registered", site.tree.registry().len());
    for line in locale_lines(&site) {
        println!("{line}");
    }
    Ok(())
}

/// One line per locale: id, lang, direction, label, then translation
/// coverage or `(default)`.
fn locale_lines(site: &Site) -> Vec<String> {
    let registry = site.tree.registry();
    let coverage = site.tree.coverage();
    let width = registry.iter().map(|l| l.id().len()).max().unwrap_or(0);

    registry
        .iter()
        .map(|locale| {
            let note = match coverage.iter().find(|c| c.locale == locale.id()) {
                Some(c) => format!("{}/{} translated", c.translated, c.total),
                None => "(default)".to_string(),
            };
            format!(
                "{:<width$}  {}  {}  {}  {}",
                locale.id(),
                locale.lang(),
                locale.dir().as_str(),
                locale.label(),
                note
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavConfig;

    #[test]
    fn test_locale_lines() {
        let site = NavConfig::from_str(
            r#"
            [[locales]]
            id = "en"
            label = "English"
            default = true

            [[locales]]
            id = "fa"
            label = "فارسی"
            lang = "fa-IR"
            dir = "rtl"

            [[sidebar]]
            label = "Introduction"
            translations = { fa = "مقدمه" }

              [[sidebar.items]]
              label = "Overview"
              slug = "index"
            "#,
        )
        .unwrap()
        .build()
        .unwrap();

        let lines = locale_lines(&site);
        assert_eq!(lines[0], "en  en  ltr  English  (default)");
        assert_eq!(lines[1], "fa  fa-IR  rtl  فارسی  1/2 translated");
    }
}
