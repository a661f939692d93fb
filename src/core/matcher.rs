//! Process matching - Find the live process launched from an instance folder

use std::path::Path;

use sysinfo::{ProcessRefreshKind, ProcessStatus, ProcessesToUpdate, System, UpdateKind};
use tracing::trace;

/// Decides whether an instance folder currently has a live process
pub trait ProcessMatcher: Send + Sync {
    /// Pid of a live process whose executable lives in `folder`
    fn find_running(&self, folder: &Path) -> Option<u32>;
}

/// Matches by process name and executable path using the OS process table.
///
/// Both checks are case-insensitive substring tests. A folder whose path is a prefix of
/// another instance's folder (`instance_1` and `instance_10`) can match the other
/// instance's process.
pub struct SysinfoMatcher {
    app_name: String,
}

impl SysinfoMatcher {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl ProcessMatcher for SysinfoMatcher {
    fn find_running(&self, folder: &Path) -> Option<u32> {
        let mut system = System::new();
        system.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::new().with_exe(UpdateKind::OnlyIfNotSet),
        );

        let pid = system
            .processes()
            .iter()
            .filter(|(_, process)| {
                !matches!(process.status(), ProcessStatus::Zombie | ProcessStatus::Dead)
            })
            .filter_map(|(pid, process)| {
                // No exe means it vanished or we lack permission
                let exe = process.exe()?;
                let name = process.name().to_string_lossy();
                matches_instance(&name, exe, &self.app_name, folder).then(|| pid.as_u32())
            })
            .min();

        trace!("Process lookup for {:?}: {:?}", folder, pid);
        pid
    }
}

/// Name and path test applied to one process
pub fn matches_instance(process_name: &str, exe: &Path, app_name: &str, folder: &Path) -> bool {
    if !process_name
        .to_lowercase()
        .contains(&app_name.to_lowercase())
    {
        return false;
    }

    exe.to_string_lossy()
        .to_lowercase()
        .contains(&folder.to_string_lossy().to_lowercase())
}
