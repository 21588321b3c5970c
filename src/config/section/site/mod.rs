//! `[site]` section configuration.
//!
//! Site metadata consumed by the external renderer. Apart from `url`, which
//! anchors site-relative sidebar links, nothing here affects validation of
//! the navigation tree; the values are passed through unchanged.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Xray Checker"
//! url = "https://xray-checker.kutovoy.dev"
//! favicon = "/favicon.svg"
//! custom_css = ["./src/styles/custom.css"]
//! logo = { light = "./src/assets/logo-light.svg", dark = "./src/assets/logo-dark.svg" }
//! edit_link = { base_url = "https://github.com/kutovoys/xray-checker/edit/main/docs/" }
//!
//! [site.social]
//! github = "https://github.com/kutovoys/xray-checker"
//!
//! [[site.head]]
//! tag = "link"
//! attrs = { rel = "manifest", href = "/site.webmanifest" }
//! ```

mod head;

pub use head::HeadTag;

use crate::nav::{NodePath, ViolationKind, Violations};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use url::Url;

/// Site metadata (title, url, branding, head tags).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site title.
    pub title: String,

    /// Canonical site URL; also the base for site-relative sidebar links.
    pub url: Option<String>,

    /// Favicon path.
    pub favicon: Option<String>,

    /// Logo variants for light and dark themes.
    pub logo: Option<LogoConfig>,

    /// Extra `<head>` elements.
    pub head: Vec<HeadTag>,

    /// "Edit this page" link settings.
    pub edit_link: Option<EditLinkConfig>,

    /// Custom stylesheet paths.
    pub custom_css: Vec<String>,

    /// Social links keyed by network name.
    pub social: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub light: Option<String>,
    pub dark: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditLinkConfig {
    pub base_url: String,
}

impl SiteSectionConfig {
    /// Parsed `url`, if set and a valid http(s) URL with a host.
    pub fn base_url(&self) -> Option<Url> {
        self.url
            .as_deref()
            .and_then(|url| Url::parse(url.trim()).ok())
            .filter(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
    }

    /// Validate site metadata.
    ///
    /// # Checks
    /// - `url`, when set, must be an absolute http(s) URL with a host
    pub fn validate(&self, violations: &mut Violations) {
        let Some(url_str) = &self.url else {
            return;
        };
        let path = NodePath::key("site").then("url");

        match Url::parse(url_str.trim()) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    violations.report_with_hint(
                        ViolationKind::InvalidUrl,
                        &path,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    violations.report_with_hint(
                        ViolationKind::InvalidUrl,
                        &path,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                violations.report_with_hint(
                    ViolationKind::InvalidUrl,
                    &path,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }
}
