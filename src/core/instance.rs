//! Instance records - The persisted registry entry and its live view

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Unique identifier for an instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(pub u64);

impl InstanceId {
    /// The id handed to the first instance of an empty registry
    pub const FIRST: InstanceId = InstanceId(1);

    /// The id after this one, or `None` once the id space is used up
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Live state of an instance, derived on every read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceState {
    /// Instance folder is missing from disk
    Absent,
    /// Folder is present and no process was launched from it
    Stopped,
    /// A process launched from the folder is alive
    Running,
}

impl InstanceState {
    pub fn derive(folder_exists: bool, pid: Option<u32>) -> Self {
        match (folder_exists, pid) {
            (false, _) => Self::Absent,
            (true, Some(_)) => Self::Running,
            (true, None) => Self::Stopped,
        }
    }
}

/// A registry entry. This is the only thing written to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceRecord {
    pub id: InstanceId,
    /// Display name, freely renamable
    pub name: String,
    /// Private installation directory, fixed at creation
    pub folder: PathBuf,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    /// Last start or stop performed through the manager
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub last_session: Option<DateTime<Utc>>,
}

impl InstanceRecord {
    pub fn new(id: InstanceId, name: impl Into<String>, folder: impl Into<PathBuf>) -> Self {
        Self {
            id,
            name: name.into(),
            folder: folder.into(),
            created_at: Utc::now(),
            last_session: None,
        }
    }

    /// Stamp a start/stop transition
    pub fn touch_session(&mut self) {
        self.last_session = Some(Utc::now());
    }
}

/// A record together with the fields computed from the filesystem and process table.
///
/// Never persisted; assembled fresh for each read.
#[derive(Debug, Clone, Serialize)]
pub struct InstanceView {
    #[serde(flatten)]
    pub record: InstanceRecord,
    pub folder_exists: bool,
    pub executable_exists: bool,
    pub is_running: bool,
    pub pid: Option<u32>,
    pub state: InstanceState,
}

impl InstanceView {
    pub fn new(
        record: InstanceRecord,
        folder_exists: bool,
        executable_exists: bool,
        pid: Option<u32>,
    ) -> Self {
        Self {
            record,
            folder_exists,
            executable_exists,
            is_running: pid.is_some(),
            pid,
            state: InstanceState::derive(folder_exists, pid),
        }
    }

    #[cfg(test)]
    pub fn id(&self) -> InstanceId {
        self.record.id
    }
}

/// Registry timestamps are written as RFC 3339 but read leniently.
///
/// Registries written by older tools hold ISO-8601 values without an offset
/// (`2024-05-01T10:00:00.123456`). Those are taken as local wall-clock time.
mod timestamp {
    use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Utc));
        }

        let naive: NaiveDateTime = raw.parse().ok()?;
        // A wall-clock time skipped by a DST jump has no local reading
        let utc = Local
            .from_local_datetime(&naive)
            .earliest()
            .map_or_else(|| naive.and_utc(), |local| local.with_timezone(&Utc));
        Some(utc)
    }

    fn invalid<E: Error>(raw: &str) -> E {
        E::custom(format!("invalid timestamp {:?}", raw))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| invalid(&raw))
    }

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse(&raw).map(Some).ok_or_else(|| invalid(&raw)),
            None => Ok(None),
        }
    }
}
