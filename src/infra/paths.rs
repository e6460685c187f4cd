// src/infra/paths.rs — Config file search and icon directory resolution
//
// MMBAR_HOME overrides everything: config is read from $MMBAR_HOME/config.yml.
// Otherwise the XDG config directory is tried first, then ~/.config/mmbar.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "mmbar";
const CONFIG_FILE: &str = "config.yml";

/// Returns the MMBAR_HOME override, if set.
fn mmbar_home() -> Option<PathBuf> {
    std::env::var_os("MMBAR_HOME").map(PathBuf::from)
}

/// Home directory, if one can be determined.
pub fn dirs_home() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().to_path_buf())
}

/// XDG config directory (`$XDG_CONFIG_HOME` or `~/.config` on Linux).
fn xdg_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.config_dir().to_path_buf())
}

/// Ordered config file candidates for the given base directories.
pub fn config_candidates_in(
    home_override: Option<&Path>,
    xdg_config: Option<&Path>,
    home: Option<&Path>,
) -> Vec<PathBuf> {
    if let Some(dir) = home_override {
        return vec![dir.join(CONFIG_FILE)];
    }

    let mut out = Vec::new();
    if let Some(dir) = xdg_config {
        out.push(dir.join(APP_DIR).join(CONFIG_FILE));
    }
    if let Some(dir) = home {
        let fallback = dir.join(".config").join(APP_DIR).join(CONFIG_FILE);
        if !out.contains(&fallback) {
            out.push(fallback);
        }
    }
    out
}

/// Config file candidates for the current environment, in search order.
pub fn config_candidates() -> Vec<PathBuf> {
    config_candidates_in(
        mmbar_home().as_deref(),
        xdg_config_dir().as_deref(),
        dirs_home().as_deref(),
    )
}

/// First existing candidate, or the last candidate (the fixed home default)
/// so that a missing config is reported against a meaningful path.
pub fn config_file_path() -> PathBuf {
    pick_existing(&config_candidates())
}

fn pick_existing(candidates: &[PathBuf]) -> PathBuf {
    candidates
        .iter()
        .find(|p| p.exists())
        .or_else(|| candidates.last())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
}

/// Base directory that holds the `icons/` folder.
///
/// An explicit `icon_path` wins; otherwise icons ship next to the binary.
pub fn icon_base_dir(configured: Option<&str>) -> PathBuf {
    if let Some(dir) = configured {
        return PathBuf::from(dir);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
