//! One-shot backups of data files before they get overwritten.
//!
//! Only the first backup is ever made, so the backup always holds the file as it was
//! before any run touched it.

use eyre::WrapErr;
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backup {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

/// `<path>.backup`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut backup = OsString::from(path.as_os_str());
    backup.push(".backup");
    PathBuf::from(backup)
}

/// Copies the file to its backup path unless a backup already exists.
pub fn create(path: &Path) -> eyre::Result<Backup> {
    let backup = backup_path(path);
    if backup.exists() {
        return Ok(Backup::AlreadyExists(backup));
    }
    std::fs::copy(path, &backup).wrap_err_with(|| {
        format!(
            "Failed to copy '{}' to '{}'",
            path.display(),
            backup.display()
        )
    })?;
    Ok(Backup::Created(backup))
}

/// Creates the backup, only logging a warning on failure.
pub fn create_or_warn(path: &Path) {
    match create(path) {
        Ok(Backup::Created(backup)) => tracing::info!("created backup at {}", backup.display()),
        Ok(Backup::AlreadyExists(backup)) => {
            tracing::info!("backup already exists at {}", backup.display())
        }
        Err(err) => tracing::warn!("Failed to create backup: {err:#}"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn appends_backup_extension() {
        assert_eq!(
            backup_path(Path::new("assets/data/grammar_patterns.json")),
            Path::new("assets/data/grammar_patterns.json.backup")
        );
    }

    #[test]
    fn creates_backup_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grammar_patterns.json");
        std::fs::write(&path, "original").unwrap();

        let backup = create(&path).unwrap();
        assert_eq!(backup, Backup::Created(backup_path(&path)));
        assert_eq!(std::fs::read_to_string(backup_path(&path)).unwrap(), "original");

        std::fs::write(&path, "enriched").unwrap();
        let backup = create(&path).unwrap();
        assert_eq!(backup, Backup::AlreadyExists(backup_path(&path)));
        assert_eq!(std::fs::read_to_string(backup_path(&path)).unwrap(), "original");
    }

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grammar_patterns.json");
        assert!(create(&path).is_err());
        assert!(!backup_path(&path).exists());
        // only warns
        create_or_warn(&path);
    }
}
