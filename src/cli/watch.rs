//! `navtree watch`: revalidate whenever the config file changes.
//!
//! ```text
//! Watcher → debounce (quiet period) → SiteHandle::reload → WatchStatus
//! ```
//!
//! The parent directory is watched rather than the file itself, since many
//! editors save by writing a temp file and renaming it over the original.

use crate::config::{ConfigError, SiteHandle, display_name};
use crate::log;
use crate::logger::{status_error, status_success, status_unchanged};
use crate::utils::plural_count;
use anyhow::{Context, Result};
use notify::event::ModifyKind;
use notify::{EventKind, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

/// Quiet period before a burst of events triggers one reload.
const DEBOUNCE_MS: u64 = 300;

/// Watch `path` until the watcher shuts down.
pub fn watch_config(path: &Path) -> Result<()> {
    let handle = match SiteHandle::load(path) {
        Ok(handle) => handle,
        Err(ConfigError::Violations(violations)) => {
            eprintln!("{violations}");
            anyhow::bail!("initial config is invalid, fix it before watching");
        }
        Err(err) => return Err(err.into()),
    };
    handle.current().warn_unknown_fields();

    let (notify_tx, notify_rx) = mpsc::channel::<notify::Result<notify::Event>>();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        let _ = notify_tx.send(res);
    })?;

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    watcher
        .watch(dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch {}", dir.display()))?;

    log!(
        "watch"; "watching {} ({})",
        display_name(path),
        plural_count(handle.current().tree.len(), "node")
    );

    while let Ok(result) = notify_rx.recv() {
        match result {
            Ok(event) if is_config_event(&event, path) => {
                crate::debug!("watch"; "raw notify: {:?} {:?}", event.kind, event.paths);
                // Swallow the rest of the burst.
                while notify_rx
                    .recv_timeout(Duration::from_millis(DEBOUNCE_MS))
                    .is_ok()
                {}
                reload(&handle);
            }
            Ok(_) => {}
            Err(e) => log!("watch"; "notify error: {}", e),
        }
    }

    Ok(())
}

/// Whether `event` may have changed the content of `config`.
fn is_config_event(event: &notify::Event, config: &Path) -> bool {
    let touches_content = match event.kind {
        EventKind::Create(_) => true,
        // Ignore metadata-only changes (mtime/atime/chmod noise)
        EventKind::Modify(ModifyKind::Metadata(_)) => false,
        EventKind::Modify(_) => true,
        _ => false,
    };
    touches_content
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == config.file_name())
}

fn reload(handle: &SiteHandle) {
    const KEPT: &str = "reload failed, keeping previous sidebar";

    match handle.reload() {
        Ok(true) => {
            let site = handle.current();
            site.warn_unknown_fields();
            status_success(&format!(
                "reloaded: {}",
                plural_count(site.tree.len(), "node")
            ));
        }
        Ok(false) => status_unchanged("unchanged"),
        Err(ConfigError::Violations(violations)) => status_error(
            &format!("{KEPT} ({})", plural_count(violations.len(), "violation")),
            &violations.to_string(),
        ),
        Err(err) => status_error(KEPT, &format!("{:#}", anyhow::Error::from(err))),
    }
}
