//! Error taxonomy for the instance manager

use std::path::PathBuf;

use thiserror::Error;

use super::instance::InstanceId;
use super::provision::ProvisionError;

/// Coarse classification used by callers to decide how to react
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The referenced instance does not exist
    NotFound,
    /// The instance is not in a state that allows the operation
    PreconditionViolated,
    /// A required external resource is missing or exhausted
    ResourceUnavailable,
    /// An OS-level operation failed
    OperationFailed,
}

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("instance {0} not found")]
    NotFound(InstanceId),

    #[error("executable not found: {}", .0.display())]
    ExecutableMissing(PathBuf),

    #[error("instance {0} is not running")]
    NotRunning(InstanceId),

    #[error("instance folder not found: {}", .0.display())]
    FolderMissing(PathBuf),

    #[error("template directory not found: {}", .0.display())]
    TemplateMissing(PathBuf),

    #[error("no free port between {start} and {end}")]
    NoPortAvailable { start: u16, end: u32 },

    #[error("no instance id left after {0}")]
    IdsExhausted(InstanceId),

    #[error("failed to create instance {id}")]
    CreationFailed {
        id: InstanceId,
        #[source]
        source: ProvisionError,
    },

    #[error("failed to delete instance {id} folder {}", .path.display())]
    DeletionFailed {
        id: InstanceId,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write registry {}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch instance {id} from {}", .path.display())]
    Spawn {
        id: InstanceId,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to stop instance {id} (pid {pid})")]
    Terminate {
        id: InstanceId,
        pid: u32,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open folder {}", .path.display())]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ManagerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::ExecutableMissing(_) | Self::NotRunning(_) | Self::FolderMissing(_) => {
                ErrorKind::PreconditionViolated
            }
            Self::TemplateMissing(_) | Self::NoPortAvailable { .. } | Self::IdsExhausted(_) => {
                ErrorKind::ResourceUnavailable
            }
            Self::CreationFailed { .. }
            | Self::DeletionFailed { .. }
            | Self::Persistence { .. }
            | Self::Spawn { .. }
            | Self::Terminate { .. }
            | Self::OpenFailed { .. } => ErrorKind::OperationFailed,
        }
    }
}
