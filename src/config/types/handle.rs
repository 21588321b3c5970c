//! Shared site handle with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic replacement, so watch mode
//! can reload `navtree.toml` while readers keep using the tree they hold.

use crate::config::{ConfigError, Site};
use crate::utils::hash;
use arc_swap::ArcSwap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Current validated site, replaceable as a whole.
#[derive(Debug)]
pub struct SiteHandle {
    path: PathBuf,
    current: ArcSwap<Site>,
    /// Hash of the file content the current site was built from.
    hash: AtomicU64,
}

impl SiteHandle {
    /// Load and validate the site at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = read(path)?;
        let site = Site::from_content(&content, path)?;
        Ok(Self {
            path: path.to_path_buf(),
            current: ArcSwap::from_pointee(site),
            hash: AtomicU64::new(hash::compute(content.as_bytes())),
        })
    }

    /// Snapshot of the current site. Stays valid across reloads.
    #[inline]
    pub fn current(&self) -> Arc<Site> {
        self.current.load_full()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reload from disk if the content changed.
    ///
    /// Returns `Ok(true)` if the site was replaced, `Ok(false)` if unchanged.
    /// On error the previous site stays in place.
    pub fn reload(&self) -> Result<bool, ConfigError> {
        let content = read(&self.path)?;
        let new_hash = hash::compute(content.as_bytes());

        if new_hash == self.hash.load(Ordering::Relaxed) {
            return Ok(false);
        }

        let site = Site::from_content(&content, &self.path)?;
        self.current.store(Arc::new(site));
        self.hash.store(new_hash, Ordering::Relaxed);

        Ok(true)
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))
}
