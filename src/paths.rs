//! XDG-style path utilities for the configuration directory.
//!
//! Prefers XDG Base Directory conventions over OS-specific locations so the
//! config file lives in the same place on every platform.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "tbox";

/// Returns the configuration directory for tbox.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/tbox` if `XDG_CONFIG_HOME` is set and not empty
/// 2. `~/.config/tbox` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join(APP_DIR))
}
