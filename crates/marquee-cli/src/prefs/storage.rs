//! Preference storage in the platform config directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing::debug;

use super::Preferences;

/// Get the preferences file path.
pub fn preferences_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "marquee").context("Could not determine config directory")?;

    Ok(dirs.config_dir().join("preferences.json"))
}

/// Load preferences, falling back to defaults when none were saved.
pub fn load_preferences() -> Result<Preferences> {
    load_from(&preferences_path()?)
}

/// Save preferences to disk.
pub fn save_preferences(prefs: &Preferences) -> Result<()> {
    save_to(&preferences_path()?, prefs)
}

fn load_from(path: &Path) -> Result<Preferences> {
    if !path.exists() {
        debug!(path = %path.display(), "No preferences file, using defaults");
        return Ok(Preferences::default());
    }

    let json = fs::read_to_string(path).context("Failed to read preferences file")?;
    serde_json::from_str(&json).context("Invalid preferences file")
}

fn save_to(path: &Path, prefs: &Preferences) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).context("Failed to create config directory")?;
    }

    let json = serde_json::to_string_pretty(prefs)?;
    fs::write(path, json).context("Failed to write preferences file")?;
    debug!(path = %path.display(), "Preferences saved");

    Ok(())
}
