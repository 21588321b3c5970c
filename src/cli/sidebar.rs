//! `navtree sidebar`: print the resolved sidebar as JSON.

use crate::config::Site;
use crate::debug;
use anyhow::Result;
use std::path::Path;

/// Print the sidebar for `locale` (default locale when `None`) to stdout.
pub fn print_sidebar(path: &Path, locale: Option<&str>, pretty: bool) -> Result<()> {
    let site = Site::load(path)?;
    site.warn_unknown_fields();
    println!("{}", render_sidebar(&site, locale, pretty)?);
    Ok(())
}

/// Resolve and serialize the sidebar.
pub fn render_sidebar(site: &Site, locale: Option<&str>, pretty: bool) -> Result<String> {
    let locale = locale.unwrap_or_else(|| site.tree.registry().default_locale().id());
    let sidebar = site.tree.resolve_sidebar(locale)?;
    debug!("sidebar"; "{}: {} fallback labels", locale, sidebar.fallback_count());

    let json = if pretty {
        serde_json::to_string_pretty(&sidebar)?
    } else {
        serde_json::to_string(&sidebar)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NavConfig;

    fn site() -> Site {
        NavConfig::from_str(
            r#"
            [[locales]]
            id = "en"
            label = "English"
            default = true

            [[locales]]
            id = "fa"
            label = "فارسی"
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
        .unwrap()
    }

    #[test]
    fn test_render_default_locale() {
        let json: serde_json::Value =
            serde_json::from_str(&render_sidebar(&site(), None, false).unwrap()).unwrap();
        assert_eq!(json["locale"], "en");
        assert_eq!(json["entries"][0]["label"], "Introduction");
    }

    #[test]
    fn test_render_rtl_locale() {
        let rendered = render_sidebar(&site(), Some("fa"), true).unwrap();
        assert!(rendered.contains('\n'));
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["dir"], "rtl");
        assert_eq!(json["entries"][0]["label"], "مقدمه");
        assert_eq!(json["entries"][0]["items"][0]["fallback"], true);
    }

    #[test]
    fn test_render_unknown_locale() {
        let err = render_sidebar(&site(), Some("de"), false).unwrap_err();
        assert!(err.to_string().contains("`de`"));
    }
}
