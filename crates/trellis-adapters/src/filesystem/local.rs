//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use trellis_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{TrellisError, TrellisResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> TrellisResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> TrellisResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> TrellisResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn rename(&self, from: &Path, to: &Path) -> TrellisResult<()> {
        std::fs::rename(from, to).map_err(|e| map_io_error(from, e, "rename directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> TrellisError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_in_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("app/src");

        fs.create_dir_all(&nested).unwrap();
        fs.write_file(&nested.join("App.tsx"), "export {};\n").unwrap();
        assert!(fs.exists(&nested.join("App.tsx")));

        fs.remove_dir_all(&dir.path().join("app")).unwrap();
        assert!(!fs.exists(&nested));
    }

    #[test]
    fn rename_moves_whole_tree() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let staged = dir.path().join(".app.staging");

        fs.create_dir_all(&staged.join("src")).unwrap();
        fs.write_file(&staged.join("src/App.tsx"), "export {};\n").unwrap();
        fs.rename(&staged, &dir.path().join("app")).unwrap();

        assert!(!fs.exists(&staged));
        assert!(fs.exists(&dir.path().join("app/src/App.tsx")));
    }

    #[test]
    fn write_into_missing_directory_is_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem
            .write_file(&dir.path().join("missing/file.ts"), "")
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
    }
}
