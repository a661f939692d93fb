//! Filesystem provisioning - Cloning the template installation into instance folders

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("failed to prepare instances directory {}", .dir.display())]
    Prepare {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to copy {} to {}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Creates and removes instance folders
pub trait Provisioner: Send + Sync {
    /// Recursively copy `template` into `dest`, which must not exist yet
    fn clone_template(&self, template: &Path, dest: &Path) -> Result<(), ProvisionError>;

    /// Remove a partially written folder, ignoring errors
    fn rollback(&self, dest: &Path);

    /// Remove an instance folder
    fn remove(&self, dir: &Path) -> io::Result<()>;
}

/// Plain recursive copy on the local filesystem
#[derive(Debug, Default)]
pub struct DirectoryCloner;

impl Provisioner for DirectoryCloner {
    fn clone_template(&self, template: &Path, dest: &Path) -> Result<(), ProvisionError> {
        if dest.exists() {
            return Err(ProvisionError::DestinationExists(dest.to_path_buf()));
        }

        info!("Cloning {:?} into {:?}", template, dest);
        let files = copy_dir_recursive(template, dest)?;
        info!("Copied {} files into {:?}", files, dest);
        Ok(())
    }

    fn rollback(&self, dest: &Path) {
        if !dest.exists() {
            return;
        }
        match fs::remove_dir_all(dest) {
            Ok(()) => debug!("Rolled back {:?}", dest),
            Err(e) => warn!("Failed to roll back {:?}: {}", dest, e),
        }
    }

    fn remove(&self, dir: &Path) -> io::Result<()> {
        fs::remove_dir_all(dir)
    }
}

fn copy_err(from: &Path, to: &Path) -> impl FnOnce(io::Error) -> ProvisionError {
    let (from, to) = (from.to_path_buf(), to.to_path_buf());
    move |source| ProvisionError::Copy { from, to, source }
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<usize, ProvisionError> {
    fs::create_dir_all(dest).map_err(copy_err(src, dest))?;

    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(copy_err(src, dest))? {
        let entry = entry.map_err(copy_err(src, dest))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        // Follow symlinks so linked files and directories are copied as content
        let metadata = fs::metadata(&from).map_err(copy_err(&from, &to))?;
        if metadata.is_dir() {
            copied += copy_dir_recursive(&from, &to)?;
        } else {
            fs::copy(&from, &to).map_err(copy_err(&from, &to))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Reveals a folder in the desktop file manager
pub trait FolderOpener: Send + Sync {
    fn open(&self, folder: &Path) -> io::Result<()>;
}

/// Opens folders with the system handler
#[derive(Debug, Default)]
pub struct DesktopOpener;

impl FolderOpener for DesktopOpener {
    fn open(&self, folder: &Path) -> io::Result<()> {
        open::that(folder)
    }
}
