//! User settings.
//!
//! Settings come from an optional `customer_desk/settings.json` in the
//! platform config directory. A missing or unreadable file falls back to the
//! defaults (`customer_data.csv`, batches of 15, threshold 3.5), as does one
//! that is not valid JSON. Absent keys take their default individually.

use crate::records::DEFAULT_RATING_THRESHOLD;
use crate::store::default_data_path;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Customers created by one "Generate Data" click.
pub const DEFAULT_BATCH_SIZE: usize = 15;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DeskSettings {
    /// CSV file shared by generate, load and filter. Relative paths resolve
    /// against the working directory.
    pub data_file: PathBuf,
    pub batch_size: usize,
    /// Inclusive lower bound for "Filter by Rating".
    pub rating_threshold: f64,
}

impl Default for DeskSettings {
    fn default() -> Self {
        Self {
            data_file: default_data_path(),
            batch_size: DEFAULT_BATCH_SIZE,
            rating_threshold: DEFAULT_RATING_THRESHOLD,
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("customer_desk").join("settings.json"))
}

/// Loads settings from the per-user config directory, falling back to the
/// defaults when the file is absent or unreadable.
pub fn load_settings() -> DeskSettings {
    match get_config_path() {
        Some(path) => load_settings_from(&path),
        None => DeskSettings::default(),
    }
}

pub fn load_settings_from(path: &Path) -> DeskSettings {
    if path.exists()
        && let Ok(content) = std::fs::read_to_string(path)
    {
        match serde_json::from_str::<DeskSettings>(&content) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                return settings;
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid settings file {}: {e}", path.display());
            }
        }
    }

    DeskSettings::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_defaults() {
        let settings = DeskSettings::default();
        assert_eq!(settings.data_file, PathBuf::from("customer_data.csv"));
        assert_eq!(settings.batch_size, 15);
        assert!((settings.rating_threshold - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let settings = load_settings_from(&dir.path().join("settings.json"));
        assert_eq!(settings, DeskSettings::default());
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "batch_size": 40 }"#)?;
        let settings = load_settings_from(&path);
        assert_eq!(settings.batch_size, 40);
        assert_eq!(settings.data_file, PathBuf::from("customer_data.csv"));
        Ok(())
    }

    #[test]
    fn test_invalid_file_gives_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json")?;
        assert_eq!(load_settings_from(&path), DeskSettings::default());
        Ok(())
    }
}
