//! JSON file backing the instance registry

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, error, info};

use crate::core::{InstanceId, InstanceRecord, ManagerError};

/// Durable list of instance records, rewritten in full on every save
#[derive(Debug, Clone)]
pub struct InstanceStore {
    path: PathBuf,
}

impl InstanceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load every record.
    ///
    /// A missing file is an empty registry. An unreadable or corrupt file is logged and
    /// also treated as empty so the manager keeps serving.
    pub fn load(&self) -> Vec<InstanceRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No registry at {:?}, starting empty", self.path);
                return Vec::new();
            }
            Err(e) => {
                error!("Failed to read registry {:?}: {}", self.path, e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                error!("Failed to parse registry {:?}: {}", self.path, e);
                Vec::new()
            }
        }
    }

    /// Replace the registry file with `records`
    pub fn save(&self, records: &[InstanceRecord]) -> Result<(), ManagerError> {
        self.write_atomically(records)
            .map_err(|source| ManagerError::Persistence {
                path: self.path.clone(),
                source,
            })?;
        debug!("Saved {} records to {:?}", records.len(), self.path);
        Ok(())
    }

    fn write_atomically(&self, records: &[InstanceRecord]) -> io::Result<()> {
        let json = serde_json::to_string_pretty(records).map_err(io::Error::other)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.exists() {
            fs::create_dir_all(dir)?;
            info!("Created registry directory {:?}", dir);
        }

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Id for the next instance: one past the highest id in use, or 1.
///
/// Ids are never handed out twice while their record exists, but deleting the
/// highest instance makes its id available again.
pub fn next_id(records: &[InstanceRecord]) -> Result<InstanceId, ManagerError> {
    match records.iter().map(|record| record.id).max() {
        None => Ok(InstanceId::FIRST),
        Some(highest) => highest.next().ok_or(ManagerError::IdsExhausted(highest)),
    }
}
