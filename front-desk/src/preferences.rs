//! Persisted UI preferences
//!
//! The only local state the client keeps. Everything else lives in the
//! backend.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::DeskResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub sidebar_collapsed: bool,
    /// Initial deleted-guest visibility of guest lists
    #[serde(default)]
    pub show_deleted: bool,
}

impl Preferences {
    /// Load from `path`; defaults when the file does not exist.
    pub fn load(path: &Path) -> DeskResult<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> DeskResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "preferences saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let prefs = Preferences::load(&dir.path().join("prefs.json")).unwrap();
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        let prefs = Preferences {
            sidebar_collapsed: true,
            show_deleted: true,
        };
        prefs.save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"sidebarCollapsed\": true"));
        assert_eq!(Preferences::load(&path).unwrap(), prefs);
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"showDeleted":true}"#).unwrap();
        let prefs = Preferences::load(&path).unwrap();
        assert!(prefs.show_deleted);
        assert!(!prefs.sidebar_collapsed);
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(Preferences::load(&path).is_err());
    }
}
