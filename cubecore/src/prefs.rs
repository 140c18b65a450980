//! Remembered preferences.
//!
//! One small JSON file under the platform config directory. Currently just
//! the last-used username, so the name field is pre-filled on launch.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Prefs {
    pub username: String,
}

impl Prefs {
    pub fn load_from(path: &Path) -> Result<Self, PrefsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), PrefsError> {
        let contents = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Location of the prefs file under the platform config directory.
pub fn config_path() -> PathBuf {
    directories::ProjectDirs::from("io", "cubetimer", "cubetimer")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("prefs.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefs_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config").join("prefs.json");

        let prefs = Prefs {
            username: "alice".to_string(),
        };
        prefs.save_to(&path).unwrap();

        let loaded = Prefs::load_from(&path).unwrap();
        assert_eq!(loaded.username, "alice");
    }

    #[test]
    fn test_loading_missing_prefs_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        assert!(matches!(
            Prefs::load_from(&path),
            Err(PrefsError::Io(_))
        ));
    }
}
