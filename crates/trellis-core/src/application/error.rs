//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not generation
//! rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Store access failed (lock poisoned, etc.).
    #[error("Blueprint store error")]
    StoreLockError,

    /// Output directory already exists.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// The output root has no final component to stage beside (`.`, `..`).
    #[error("Cannot generate into {path}: the output must be a named directory")]
    UnnamedRoot { path: PathBuf },

    /// Emission failed and the partial output could not be removed.
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StoreLockError => vec![
                "The blueprint store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to replace it (destructive)".into(),
                "Choose a different project name".into(),
            ],
            Self::UnnamedRoot { path } => vec![
                format!("{} does not name a directory", path.display()),
                "Pass --output with a directory name, e.g. --output ./my-app".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![
                format!("Partial output may remain in {}", path.display()),
                "Remove it manually before retrying".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Filesystem,
            Self::StoreLockError => ErrorCategory::Internal,
            Self::ProjectExists { .. } | Self::UnnamedRoot { .. } => ErrorCategory::Validation,
        }
    }
}
