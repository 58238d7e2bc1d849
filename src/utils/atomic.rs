//! Atomic file operations
//!
//! The data document is rewritten whole on every mutation. Writes go to a
//! `.tmp` sibling that is synced and then renamed over the target, so the
//! document on disk is always either the previous or the new version.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Atomically write content to a file, creating parent directories
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
    let path = path.as_ref();
    let temp_path = path.with_extension("tmp");

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()?;

    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Move an unreadable file out of the way as `<path>.<suffix>`.
///
/// An existing backup is never replaced: `.1`, `.2`, ... is appended until
/// the name is free. Returns the backup path, or `None` if `path` did not
/// exist.
pub fn move_aside<P: AsRef<Path>>(path: P, suffix: &str) -> io::Result<Option<PathBuf>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let mut base = path.as_os_str().to_os_string();
    base.push(".");
    base.push(suffix);

    let mut backup = PathBuf::from(&base);
    let mut n = 0u32;
    while backup.exists() {
        n += 1;
        let mut candidate = base.clone();
        candidate.push(format!(".{}", n));
        backup = PathBuf::from(candidate);
    }
    fs::rename(path, &backup)?;

    Ok(Some(backup))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");

        atomic_write(&path, "{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("data.json");

        atomic_write(&path, "[]").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_move_aside_keeps_old_backup() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        let backup = temp_dir.path().join("data.json.corrupt");

        fs::write(&backup, "old").unwrap();
        fs::write(&path, "broken").unwrap();

        let moved = move_aside(&path, "corrupt").unwrap().unwrap();
        assert_eq!(moved, temp_dir.path().join("data.json.corrupt.1"));
        assert!(!path.exists());
        assert_eq!(fs::read_to_string(&backup).unwrap(), "old");
        assert_eq!(fs::read_to_string(&moved).unwrap(), "broken");

        fs::write(&path, "broken again").unwrap();
        let moved = move_aside(&path, "corrupt").unwrap().unwrap();
        assert_eq!(moved, temp_dir.path().join("data.json.corrupt.2"));
    }

    #[test]
    fn test_move_aside_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let moved = move_aside(temp_dir.path().join("none.json"), "corrupt").unwrap();
        assert!(moved.is_none());
    }
}
