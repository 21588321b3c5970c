//! Site configuration management for `navtree.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site/      # [site] and [[site.head]]
//! │   ├── locale     # [[locales]]
//! │   ├── validate   # [validate]
//! │   └── sidebar    # [[sidebar]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError
//! │   └── handle     # Reloadable SiteHandle
//! └── mod.rs         # NavConfig, Site (this file)
//! ```
//!
//! Loading is two steps: [`NavConfig`] is the file as written, and
//! [`NavConfig::build`] turns it into a [`Site`] whose navigation tree passed
//! every check.

pub mod section;
pub mod types;
mod util;

pub use section::{
    HeadTag, LocaleEntry, RawAttrs, RawBadge, RawClass, RawNavItem, SiteSectionConfig,
    ValidateConfig,
};
pub use types::{ConfigError, SiteHandle};
pub use util::{display_name, find_config_file, find_config_file_from};

use crate::locale::LocaleRegistry;
use crate::nav::{NavigationTree, TreeValidator, ValidationResult, Violations};
use crate::{debug, log};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, searched upward from the working directory.
pub const CONFIG_FILE: &str = "navtree.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing navtree.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// Site metadata, passed through to the renderer
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Supported locales
    #[serde(default)]
    pub locales: Vec<LocaleEntry>,

    /// Validation settings
    #[serde(default)]
    pub validate: ValidateConfig,

    /// Declarative navigation tree
    #[serde(default)]
    pub sidebar: Vec<RawNavItem>,
}

impl NavConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path, with unknown fields.
    pub fn from_path(path: &Path) -> Result<(Self, Vec<String>), ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::parse_with_ignored(&content)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Build the locale registry and validate the sidebar against it.
    ///
    /// Every problem in `[site]`, `[[locales]]` and `[[sidebar]]` is
    /// collected into one [`ConfigError::Violations`]. The sidebar is only
    /// checked once the registry itself is valid.
    pub fn build(self) -> Result<Site, ConfigError> {
        if self.validate.max_depth == 0 {
            return Err(ConfigError::Validation(
                "[validate] max_depth must be at least 1".to_string(),
            ));
        }

        let mut violations = Violations::new();
        self.site.validate(&mut violations);

        let registry = match LocaleRegistry::from_entries(&self.locales) {
            Ok(registry) => registry,
            Err(found) => {
                violations.extend(found);
                return Err(ConfigError::Violations(violations));
            }
        };
        debug!("config"; "locales: {}", registry.ids());

        let base_url = self.site.base_url();
        let result = TreeValidator::new(&registry)
            .with_max_depth(self.validate.max_depth)
            .with_site_url(base_url.as_ref())
            .validate(&self.sidebar);

        match result {
            ValidationResult::Valid(tree) if violations.is_empty() => Ok(Site {
                config_path: PathBuf::new(),
                site: self.site,
                validate: self.validate,
                tree,
                unknown_fields: Vec::new(),
            }),
            ValidationResult::Valid(_) => Err(ConfigError::Violations(violations)),
            ValidationResult::Invalid(found) => {
                violations.extend(found);
                Err(ConfigError::Violations(violations))
            }
        }
    }
}

// ============================================================================
// validated site
// ============================================================================

/// A loaded config whose navigation tree passed validation.
#[derive(Debug, Clone)]
pub struct Site {
    /// Absolute path to the config file
    pub config_path: PathBuf,
    pub site: SiteSectionConfig,
    pub validate: ValidateConfig,
    pub tree: NavigationTree,
    /// Keys present in the file but not understood
    pub unknown_fields: Vec<String>,
}

impl Site {
    /// Read, parse and validate the config at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_content(&content, path)
    }

    /// Parse and validate `content`, recording `path` as its origin.
    pub fn from_content(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let (config, ignored) = NavConfig::parse_with_ignored(content)?;
        let mut site = config.build()?;
        site.config_path = path.to_path_buf();
        site.unknown_fields = ignored;
        debug!(
            "config"; "loaded {} ({} nodes)",
            display_name(path),
            site.tree.len()
        );
        Ok(site)
    }

    /// Print unknown fields, if any.
    pub fn warn_unknown_fields(&self) {
        if self.unknown_fields.is_empty() {
            return;
        }
        log!("warning"; "unknown fields in {}:", display_name(&self.config_path));
        log!("warning"; "ignoring:");
        for field in &self.unknown_fields {
            eprintln!("- {}", field);
        }
    }
}

/// Locate the config file named by `--config`, searching upward.
pub fn resolve_config_path(config: &Path) -> Result<PathBuf, ConfigError> {
    find_config_file(config).ok_or_else(|| ConfigError::NotFound(config.to_path_buf()))
}

// ============================================================================
// tests
// ============================================================================
