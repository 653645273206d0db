//! Preference storage for ink applications.
//!
//! One JSON file per app under the platform config directory. Apps define
//! their own preference types; this module only moves them to and from disk.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Config directory for an ink app.
/// Falls back to the current directory if no home is known.
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("", "", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Read a JSON value from `path`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write `value` to `path` as pretty JSON, creating parent directories
/// as needed.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        count: u32,
        label: String,
    }

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("inkcore_test_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_round_trip() {
        let dir = scratch_dir("round_trip");
        let path = dir.join("prefs.json");
        let value = Sample {
            count: 3,
            label: "memory".to_string(),
        };
        save_json(&path, &value).unwrap();
        assert_eq!(load_json::<Sample>(&path).unwrap(), value);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = scratch_dir("nested");
        let path = dir.join("a").join("b").join("prefs.json");
        save_json(&path, &Sample { count: 0, label: String::new() }).unwrap();
        assert!(path.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let path = scratch_dir("missing").join("prefs.json");
        assert!(load_json::<Sample>(&path).is_err());
    }

    #[test]
    fn test_load_garbage_errors() {
        let dir = scratch_dir("garbage");
        let path = dir.join("prefs.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not json").unwrap();
        assert!(load_json::<Sample>(&path).is_err());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
