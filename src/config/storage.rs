use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem storage rooted at a working directory.
///
/// Relative paths resolve against the root; absolute paths are used as given,
/// so `roster-etl /data/in.txt report.txt 3` behaves the way a shell user
/// expects.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        let data = fs::read(&full_path)?;
        tracing::debug!(path = %full_path.display(), bytes = data.len(), "input read");
        Ok(data)
    }

    /// Replaces the file at `path`, creating missing parent directories.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        tracing::debug!(path = %full_path.display(), bytes = data.len(), "report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::RosterError;
    use tempfile::TempDir;

    #[test]
    fn test_report_written_under_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage
            .write_file("reports/ranked.txt", b"Alice Smith Jan-5-1990 3.5 D\n")
            .unwrap();

        assert_eq!(
            storage.read_file("reports/ranked.txt").unwrap(),
            b"Alice Smith Jan-5-1990 3.5 D\n"
        );
        assert!(temp_dir.path().join("reports").is_dir());
    }

    #[test]
    fn test_rewrite_replaces_previous_report() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        storage.write_file("report.txt", b"first\nsecond\n").unwrap();
        storage.write_file("report.txt", b"ERROR: Missing TOEFL\n").unwrap();

        assert_eq!(
            storage.read_file("report.txt").unwrap(),
            b"ERROR: Missing TOEFL\n"
        );
    }

    #[test]
    fn test_absolute_paths_ignore_root() {
        let temp_dir = TempDir::new().unwrap();
        let absolute = temp_dir.path().join("students.txt");
        fs::write(&absolute, "Bob Lee Dec-31-2005 3.9 I 100\n").unwrap();

        let storage = LocalStorage::new("/nonexistent-root");
        assert_eq!(storage.resolve(absolute.to_str().unwrap()), absolute);
        assert!(storage.read_file(absolute.to_str().unwrap()).is_ok());
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp_dir.path());

        assert_eq!(storage.root(), temp_dir.path());
        assert!(matches!(
            storage.read_file("missing.txt"),
            Err(RosterError::IoError(_))
        ));
    }
}
