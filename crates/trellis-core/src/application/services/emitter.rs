//! All-or-nothing emission of a generation plan over a [`Filesystem`].
//!
//! Files are written into a hidden sibling of the root and the finished
//! tree is renamed into place. An existing root is only moved aside once
//! the new tree is complete, and is restored if the final rename fails.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Emitter, Filesystem},
        services::GenerationPlan,
    },
    error::TrellisResult,
};

const STAGING_SUFFIX: &str = "trellis-staging";
const BACKUP_SUFFIX: &str = "trellis-replaced";

/// Writes a plan under a root directory, leaving either the complete new
/// tree or whatever was there before.
pub struct FilesystemEmitter {
    filesystem: Box<dyn Filesystem>,
    replace_existing: bool,
}

impl FilesystemEmitter {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            replace_existing: false,
        }
    }

    /// Replace an existing root instead of refusing.
    pub fn replace_existing(mut self, replace: bool) -> Self {
        self.replace_existing = replace;
        self
    }

    fn write_all(&self, plan: &GenerationPlan, root: &Path) -> TrellisResult<()> {
        self.filesystem.create_dir_all(root)?;

        for (relative, content) in plan.outputs() {
            let path = root.join(relative);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, &content)?;
            debug!(path = relative, bytes = content.len(), "wrote file");
        }

        Ok(())
    }

    /// Move `root` aside, put `staging` in its place, then drop the old tree.
    fn swap(&self, staging: &Path, root: &Path) -> TrellisResult<()> {
        let backup = sibling(root, BACKUP_SUFFIX)?;
        self.clear(&backup)?;

        warn!(path = %root.display(), "Replacing existing directory");
        if let Err(e) = self.filesystem.rename(root, &backup) {
            self.rollback(staging);
            return Err(e);
        }

        if let Err(e) = self.filesystem.rename(staging, root) {
            if let Err(restore) = self.filesystem.rename(&backup, root) {
                return Err(ApplicationError::RollbackFailed {
                    path: backup,
                    reason: restore.to_string(),
                }
                .into());
            }
            self.rollback(staging);
            return Err(e);
        }

        if let Err(e) = self.filesystem.remove_dir_all(&backup) {
            warn!(error = %e, path = %backup.display(), "Could not remove replaced directory");
        }
        Ok(())
    }

    /// Remove a leftover staging or backup directory from an earlier run.
    fn clear(&self, path: &Path) -> TrellisResult<()> {
        if self.filesystem.exists(path) {
            debug!(path = %path.display(), "removing leftover directory");
            self.filesystem.remove_dir_all(path)?;
        }
        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, staging: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(staging) {
            warn!(error = %e, path = %staging.display(), "Rollback failed");
        } else {
            info!("Rollback successful");
        }
    }
}

impl Emitter for FilesystemEmitter {
    fn write(&self, plan: &GenerationPlan, root: &Path) -> TrellisResult<()> {
        let existing = self.filesystem.exists(root);
        if existing && !self.replace_existing {
            return Err(ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }

        let staging = sibling(root, STAGING_SUFFIX)?;
        self.clear(&staging)?;

        if let Err(e) = self.write_all(plan, &staging) {
            warn!("Write failed, attempting rollback");
            self.rollback(&staging);
            return Err(e);
        }

        if existing {
            self.swap(&staging, root)?;
        } else if let Err(e) = self.filesystem.rename(&staging, root) {
            self.rollback(&staging);
            return Err(e);
        }

        info!(files = plan.files.len() + 1, "Successfully wrote all files");
        Ok(())
    }
}

/// `dir/.name.suffix` next to `root`. A root without a final name (`.`,
/// `..`, `/`) has no sibling and cannot be generated into.
fn sibling(root: &Path, suffix: &str) -> TrellisResult<PathBuf> {
    match root.file_name() {
        Some(name) => Ok(root.with_file_name(format!(".{}.{suffix}", name.to_string_lossy()))),
        None => Err(ApplicationError::UnnamedRoot {
            path: root.to_path_buf(),
        }
        .into()),
    }
}
