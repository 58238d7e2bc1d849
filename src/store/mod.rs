//! Store - single-document persistence
//!
//! The whole dataset (games, known players, saved lineups) is loaded into
//! memory when the store opens and rewritten whole on every save. The store
//! carries no game logic.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CalcResult;
use crate::types::Dataset;
use crate::utils::{atomic_write, backup_timestamp, move_aside};

/// Suffix given to a data file that could not be parsed, followed by a
/// timestamp: `data.json.corrupt-20240512-181530`
pub const CORRUPT_SUFFIX: &str = "corrupt";

/// Configuration for the Store
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the JSON document
    pub data_file: PathBuf,
    /// Pretty-print the document
    pub pretty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data.json"),
            pretty: true,
        }
    }
}

impl StoreConfig {
    /// Create config for a custom data file
    pub fn new<P: AsRef<Path>>(data_file: P) -> Self {
        Self {
            data_file: data_file.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

/// In-memory dataset backed by one JSON file
#[derive(Debug)]
pub struct Store {
    config: StoreConfig,
    data: Dataset,
}

impl Store {
    /// Open the store, loading the document if it exists.
    ///
    /// A missing file yields an empty dataset. So does an unreadable or
    /// malformed one: it is moved aside to `<file>.corrupt-<timestamp>`
    /// first so the next save does not destroy it.
    pub fn open(config: StoreConfig) -> Self {
        let data = Self::load_document(&config.data_file);
        Self { config, data }
    }

    fn load_document(path: &Path) -> Dataset {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no data file, starting empty");
            return Dataset::default();
        }

        let parsed = fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| {
                serde_json::from_str::<Dataset>(&content).map_err(|e| e.to_string())
            });

        match parsed {
            Ok(data) => {
                tracing::info!(
                    path = %path.display(),
                    games = data.games.len(),
                    players = data.players.len(),
                    "loaded data file"
                );
                data
            }
            Err(reason) => {
                match move_aside(path, &format!("{}-{}", CORRUPT_SUFFIX, backup_timestamp())) {
                    Ok(backup) => tracing::warn!(
                        path = %path.display(),
                        backup = ?backup,
                        %reason,
                        "data file unreadable, starting with an empty dataset"
                    ),
                    Err(e) => tracing::warn!(
                        path = %path.display(),
                        %reason,
                        error = %e,
                        "data file unreadable and could not be moved aside"
                    ),
                }
                Dataset::default()
            }
        }
    }

    pub fn data(&self) -> &Dataset {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Dataset {
        &mut self.data
    }

    /// Rewrite the whole document
    pub fn save(&self) -> CalcResult<()> {
        let content = if self.config.pretty {
            serde_json::to_string_pretty(&self.data)?
        } else {
            serde_json::to_string(&self.data)?
        };
        atomic_write(&self.config.data_file, &content)?;
        tracing::trace!(path = %self.config.data_file.display(), "data file written");
        Ok(())
    }

    /// Get the data file path
    pub fn file_path(&self) -> &Path {
        &self.config.data_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = Store::open(StoreConfig::new(dir.path().join("data.json")));
        assert!(store.data().games.is_empty());
        assert!(!store.file_path().exists());
    }

    fn backups(dir: &TempDir) -> Vec<PathBuf> {
        let prefix = format!("data.json.{}-", CORRUPT_SUFFIX);
        fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect()
    }

    #[test]
    fn test_save_then_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");

        let mut store = Store::open(StoreConfig::new(&path));
        store.data_mut().register_player("Lee");
        store.save().unwrap();

        let reopened = Store::open(StoreConfig::new(&path));
        assert_eq!(reopened.data().players, vec!["Lee"]);
    }

    #[test]
    fn test_malformed_file_is_empty_and_moved_aside() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{ not json").unwrap();

        let store = Store::open(StoreConfig::new(&path));
        assert_eq!(store.data(), &Dataset::default());
        assert!(!path.exists());

        let backups = backups(&dir);
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "{ not json");
    }

    #[test]
    fn test_second_corrupt_start_keeps_first_backup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");

        fs::write(&path, "first").unwrap();
        Store::open(StoreConfig::new(&path));
        fs::write(&path, "second").unwrap();
        Store::open(StoreConfig::new(&path));

        let mut contents: Vec<String> = backups(&dir)
            .iter()
            .map(|p| fs::read_to_string(p).unwrap())
            .collect();
        contents.sort();
        assert_eq!(contents, vec!["first", "second"]);
    }

    #[test]
    fn test_wrong_shape_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, r#"{"games": [{"id": 3}]}"#).unwrap();

        let store = Store::open(StoreConfig::new(&path));
        assert!(store.data().games.is_empty());
    }

    #[test]
    fn test_compact_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        let store = Store::open(StoreConfig::new(&path).compact());
        store.save().unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains('\n'));
    }
}
