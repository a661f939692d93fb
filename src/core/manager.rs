//! Lifecycle manager - Create, list, rename, delete, start, stop and locate instances

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{error, info, warn};

use super::error::ManagerError;
use super::instance::{InstanceId, InstanceRecord, InstanceView};
use super::matcher::{ProcessMatcher, SysinfoMatcher};
use super::process::{ProcessControl, StopOutcome, SystemProcessControl};
use super::provision::{DesktopOpener, DirectoryCloner, FolderOpener, ProvisionError, Provisioner};
use super::settings::Settings;
use crate::persistence::{next_id, InstanceStore};

/// Result of a start request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new process was launched
    Started { name: String, pid: u32 },
    /// A matching process was already alive; nothing was launched
    AlreadyRunning { name: String, pid: u32 },
}

/// Result of a stop request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopReport {
    pub name: String,
    pub pid: u32,
    pub outcome: StopOutcome,
}

/// Health summary of the configured directories
#[derive(Debug, Clone, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub template_base_exists: bool,
    pub instances_base_exists: bool,
}

/// Owns the registry and drives instance state transitions.
///
/// Every mutation holds `write_lock` from load to save so concurrent requests
/// cannot overwrite each other's changes. Reads go straight to the store.
pub struct InstanceManager {
    settings: Settings,
    store: InstanceStore,
    write_lock: Mutex<()>,
    matcher: Arc<dyn ProcessMatcher>,
    processes: Arc<dyn ProcessControl>,
    provisioner: Arc<dyn Provisioner>,
    opener: Arc<dyn FolderOpener>,
}

impl InstanceManager {
    /// Create a manager using the real OS and filesystem collaborators
    pub fn new(settings: Settings) -> Self {
        let store = InstanceStore::new(settings.registry_path());
        let matcher = Arc::new(SysinfoMatcher::new(settings.app_name.clone()));

        Self {
            settings,
            store,
            write_lock: Mutex::new(()),
            matcher,
            processes: Arc::new(SystemProcessControl),
            provisioner: Arc::new(DirectoryCloner),
            opener: Arc::new(DesktopOpener),
        }
    }

    pub fn with_matcher(mut self, matcher: Arc<dyn ProcessMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn with_process_control(mut self, processes: Arc<dyn ProcessControl>) -> Self {
        self.processes = processes;
        self
    }

    pub fn with_provisioner(mut self, provisioner: Arc<dyn Provisioner>) -> Self {
        self.provisioner = provisioner;
        self
    }

    pub fn with_opener(mut self, opener: Arc<dyn FolderOpener>) -> Self {
        self.opener = opener;
        self
    }

    pub fn health(&self) -> Health {
        Health {
            status: "ok",
            template_base_exists: self.settings.template_dir.is_dir(),
            instances_base_exists: self.settings.instances_dir.is_dir(),
        }
    }

    /// All instances with freshly computed live fields
    pub fn list(&self) -> Vec<InstanceView> {
        self.store
            .load()
            .into_iter()
            .map(|record| self.view(record))
            .collect()
    }

    pub fn get(&self, id: InstanceId) -> Result<InstanceView, ManagerError> {
        let record = self
            .store
            .load()
            .into_iter()
            .find(|record| record.id == id)
            .ok_or(ManagerError::NotFound(id))?;
        Ok(self.view(record))
    }

    /// Clone the template into a new folder and register it
    pub fn create(&self, name: &str) -> Result<InstanceView, ManagerError> {
        let template = &self.settings.template_dir;
        if !template.is_dir() {
            return Err(ManagerError::TemplateMissing(template.clone()));
        }

        let _guard = self.lock();
        let mut records = self.store.load();
        let id = next_id(&records)?;
        let folder = self.settings.instance_folder(id);

        info!("Creating instance #{} '{}' in {:?}", id, name, folder);

        if let Err(source) = fs::create_dir_all(&self.settings.instances_dir) {
            return Err(ManagerError::CreationFailed {
                id,
                source: ProvisionError::Prepare {
                    dir: self.settings.instances_dir.clone(),
                    source,
                },
            });
        }

        if let Err(source) = self.provisioner.clone_template(template, &folder) {
            error!("Failed to create instance #{}: {}", id, source);
            // Only undo what this call wrote; a pre-existing folder is not ours
            if !matches!(source, ProvisionError::DestinationExists(_)) {
                self.provisioner.rollback(&folder);
            }
            return Err(ManagerError::CreationFailed { id, source });
        }

        let record = InstanceRecord::new(id, name, folder);
        records.push(record.clone());
        if let Err(e) = self.store.save(&records) {
            self.provisioner.rollback(&record.folder);
            return Err(e);
        }

        info!("Instance #{} created", id);
        Ok(self.view(record))
    }

    pub fn rename(&self, id: InstanceId, name: &str) -> Result<InstanceView, ManagerError> {
        let _guard = self.lock();
        let mut records = self.store.load();
        let record = find_mut(&mut records, id)?;

        let old_name = std::mem::replace(&mut record.name, name.to_string());
        let updated = record.clone();
        self.store.save(&records)?;

        info!("#{}: '{}' -> '{}'", id, old_name, name);
        Ok(self.view(updated))
    }

    /// Stop the instance if needed, remove its folder and drop it from the registry.
    ///
    /// The record is kept when the folder cannot be removed.
    pub fn delete(&self, id: InstanceId) -> Result<InstanceRecord, ManagerError> {
        let _guard = self.lock();
        let mut records = self.store.load();
        let index = records
            .iter()
            .position(|record| record.id == id)
            .ok_or(ManagerError::NotFound(id))?;
        let folder = records[index].folder.clone();

        if let Some(pid) = self.matcher.find_running(&folder) {
            match self.processes.terminate(pid, self.settings.stop_timeout()) {
                Ok(outcome) => info!("Stopped process {} of #{} before delete: {:?}", pid, id, outcome),
                Err(e) => warn!("Failed to stop process {} of #{}: {}", pid, id, e),
            }
        }

        if folder.exists() {
            info!("Deleting #{} folder {:?}", id, folder);
            if let Err(source) = self.provisioner.remove(&folder) {
                error!("Failed to delete #{} folder {:?}: {}", id, folder, source);
                return Err(ManagerError::DeletionFailed {
                    id,
                    path: folder,
                    source,
                });
            }
        }

        let removed = records.remove(index);
        self.store.save(&records)?;

        info!("Instance #{} deleted", id);
        Ok(removed)
    }

    /// Launch the instance executable. Starting a running instance is a no-op.
    pub fn start(&self, id: InstanceId) -> Result<StartOutcome, ManagerError> {
        let _guard = self.lock();
        let mut records = self.store.load();
        let record = find_mut(&mut records, id)?;

        let executable = self.settings.executable_path(&record.folder);
        if !executable.is_file() {
            return Err(ManagerError::ExecutableMissing(executable));
        }

        if let Some(pid) = self.matcher.find_running(&record.folder) {
            info!("#{} '{}' already running as {}", id, record.name, pid);
            return Ok(StartOutcome::AlreadyRunning {
                name: record.name.clone(),
                pid,
            });
        }

        let working_dir = executable
            .parent()
            .map_or_else(|| record.folder.clone(), PathBuf::from);

        info!("Starting #{} '{}'", id, record.name);
        let pid = self
            .processes
            .spawn(&executable, &working_dir)
            .map_err(|source| ManagerError::Spawn {
                id,
                path: executable.clone(),
                source,
            })?;

        record.touch_session();
        let name = record.name.clone();
        self.store.save(&records)?;

        Ok(StartOutcome::Started { name, pid })
    }

    /// Terminate the running instance, force-killing it after the grace period
    pub fn stop(&self, id: InstanceId) -> Result<StopReport, ManagerError> {
        let _guard = self.lock();
        let mut records = self.store.load();
        let record = find_mut(&mut records, id)?;

        let pid = self
            .matcher
            .find_running(&record.folder)
            .ok_or(ManagerError::NotRunning(id))?;

        info!("Stopping #{} '{}' (pid {})", id, record.name, pid);
        let outcome = self
            .processes
            .terminate(pid, self.settings.stop_timeout())
            .map_err(|source| ManagerError::Terminate { id, pid, source })?;

        record.touch_session();
        let name = record.name.clone();
        self.store.save(&records)?;

        Ok(StopReport { name, pid, outcome })
    }

    /// Reveal the instance folder in the file manager
    pub fn locate(&self, id: InstanceId) -> Result<PathBuf, ManagerError> {
        let record = self
            .store
            .load()
            .into_iter()
            .find(|record| record.id == id)
            .ok_or(ManagerError::NotFound(id))?;

        if !record.folder.is_dir() {
            return Err(ManagerError::FolderMissing(record.folder));
        }

        self.opener
            .open(&record.folder)
            .map_err(|source| ManagerError::OpenFailed {
                path: record.folder.clone(),
                source,
            })?;
        Ok(record.folder)
    }

    fn view(&self, record: InstanceRecord) -> InstanceView {
        let folder_exists = record.folder.is_dir();
        let executable_exists = self.settings.executable_path(&record.folder).is_file();
        let pid = self.matcher.find_running(&record.folder);
        InstanceView::new(record, folder_exists, executable_exists, pid)
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn find_mut(records: &mut [InstanceRecord], id: InstanceId) -> Result<&mut InstanceRecord, ManagerError> {
    records
        .iter_mut()
        .find(|record| record.id == id)
        .ok_or(ManagerError::NotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::path::Path;
    use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::core::instance::InstanceState;
    use crate::core::ErrorKind;

    /// In-memory process table: spawning registers the working dir as running
    #[derive(Default)]
    struct FakeProcesses {
        running: Mutex<HashMap<PathBuf, u32>>,
        next_pid: AtomicU32,
        spawns: AtomicUsize,
        terminations: AtomicUsize,
    }

    impl FakeProcesses {
        fn mark_running(&self, folder: &Path, pid: u32) {
            self.running.lock().unwrap().insert(folder.to_path_buf(), pid);
        }
    }

    impl ProcessMatcher for FakeProcesses {
        fn find_running(&self, folder: &Path) -> Option<u32> {
            self.running.lock().unwrap().get(folder).copied()
        }
    }

    impl ProcessControl for FakeProcesses {
        fn spawn(&self, _executable: &Path, working_dir: &Path) -> io::Result<u32> {
            self.spawns.fetch_add(1, Ordering::SeqCst);
            let pid = 1000 + self.next_pid.fetch_add(1, Ordering::SeqCst);
            self.mark_running(working_dir, pid);
            Ok(pid)
        }

        fn terminate(&self, pid: u32, _grace: Duration) -> io::Result<StopOutcome> {
            self.terminations.fetch_add(1, Ordering::SeqCst);
            self.running.lock().unwrap().retain(|_, p| *p != pid);
            Ok(StopOutcome::Exited)
        }
    }

    /// Real copies, but folder removal always fails
    struct StuckRemoval;

    impl Provisioner for StuckRemoval {
        fn clone_template(&self, template: &Path, dest: &Path) -> Result<(), ProvisionError> {
            DirectoryCloner.clone_template(template, dest)
        }

        fn rollback(&self, dest: &Path) {
            DirectoryCloner.rollback(dest)
        }

        fn remove(&self, _dir: &Path) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "file in use"))
        }
    }

    /// Copies half the template, then fails
    struct FailingClone;

    impl Provisioner for FailingClone {
        fn clone_template(&self, _template: &Path, dest: &Path) -> Result<(), ProvisionError> {
            fs::create_dir_all(dest).unwrap();
            fs::write(dest.join("partial"), b"x").unwrap();
            Err(ProvisionError::Copy {
                from: PathBuf::from("template"),
                to: dest.to_path_buf(),
                source: io::Error::other("disk full"),
            })
        }

        fn rollback(&self, dest: &Path) {
            DirectoryCloner.rollback(dest)
        }

        fn remove(&self, dir: &Path) -> io::Result<()> {
            DirectoryCloner.remove(dir)
        }
    }

    #[derive(Default)]
    struct RecordingOpener {
        opened: Mutex<Vec<PathBuf>>,
    }

    impl FolderOpener for RecordingOpener {
        fn open(&self, folder: &Path) -> io::Result<()> {
            self.opened.lock().unwrap().push(folder.to_path_buf());
            Ok(())
        }
    }

    struct Fixture {
        _dir: tempfile::TempDir,
        settings: Settings,
        processes: Arc<FakeProcesses>,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempfile::tempdir().expect("tempdir");
            let template = dir.path().join("template");
            fs::create_dir_all(template.join("tdata")).expect("mkdir");
            fs::write(template.join("App"), b"exe").expect("write");
            fs::write(template.join("tdata").join("settings"), b"cfg").expect("write");

            let settings = Settings {
                template_dir: template,
                instances_dir: dir.path().join("instances"),
                state_dir: dir.path().join("state"),
                executable_name: "App".to_string(),
                ..Settings::default()
            };

            Self {
                _dir: dir,
                settings,
                processes: Arc::new(FakeProcesses::default()),
            }
        }

        fn manager(&self) -> InstanceManager {
            InstanceManager::new(self.settings.clone())
                .with_matcher(self.processes.clone())
                .with_process_control(self.processes.clone())
                .with_opener(Arc::new(RecordingOpener::default()))
        }
    }

    #[test]
    fn create_rename_delete_scenario() {
        let fx = Fixture::new();
        let manager = fx.manager();
        assert!(manager.list().is_empty());

        let created = manager.create("Alice").expect("create");
        assert_eq!(created.record.id, InstanceId(1));
        assert_eq!(created.record.name, "Alice");
        assert!(created.record.folder.ends_with("instance_1"));
        assert_eq!(created.record.last_session, None);
        assert_eq!(created.state, InstanceState::Stopped);
        assert!(created.executable_exists);

        let renamed = manager.rename(InstanceId(1), "Alice2").expect("rename");
        assert_eq!(renamed.record.name, "Alice2");
        assert_eq!(renamed.record.id, created.record.id);
        assert_eq!(renamed.record.folder, created.record.folder);
        assert_eq!(renamed.record.created_at, created.record.created_at);

        manager.delete(InstanceId(1)).expect("delete");
        assert!(manager.list().is_empty());
        assert!(!created.record.folder.exists());
    }

    #[test]
    fn ids_increase_across_creates() {
        let fx = Fixture::new();
        let manager = fx.manager();

        let first = manager.create("one").expect("create");
        let second = manager.create("two").expect("create");

        assert_eq!(first.id(), InstanceId(1));
        assert_eq!(second.id(), InstanceId(2));
        assert_ne!(first.record.folder, second.record.folder);
        assert_eq!(manager.list().len(), 2);
    }

    #[test]
    fn create_without_template_fails() {
        let fx = Fixture::new();
        fs::remove_dir_all(&fx.settings.template_dir).expect("rm");
        let manager = fx.manager();

        let err = manager.create("x").expect_err("template missing");
        assert!(matches!(err, ManagerError::TemplateMissing(_)));
        assert_eq!(err.kind(), ErrorKind::ResourceUnavailable);
        assert!(manager.list().is_empty());
    }

    #[test]
    fn failed_clone_rolls_back_and_leaves_registry_untouched() {
        let fx = Fixture::new();
        let manager = fx.manager().with_provisioner(Arc::new(FailingClone));

        let err = manager.create("x").expect_err("clone fails");
        assert!(matches!(err, ManagerError::CreationFailed { id: InstanceId(1), .. }));
        assert!(!fx.settings.instance_folder(InstanceId(1)).exists());
        assert!(manager.list().is_empty());
    }

    #[test]
    fn leftover_folder_is_not_rolled_back() {
        let fx = Fixture::new();
        let leftover = fx.settings.instance_folder(InstanceId(1));
        fs::create_dir_all(&leftover).expect("mkdir");
        fs::write(leftover.join("notes.txt"), b"keep").expect("write");
        let manager = fx.manager();

        let err = manager.create("x").expect_err("destination exists");
        assert!(matches!(err, ManagerError::CreationFailed { .. }));
        assert!(leftover.join("notes.txt").exists());
    }

    #[test]
    fn rename_unknown_id_is_not_found() {
        let fx = Fixture::new();
        let err = fx.manager().rename(InstanceId(5), "x").expect_err("missing");
        assert!(matches!(err, ManagerError::NotFound(InstanceId(5))));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn start_is_idempotent() {
        let fx = Fixture::new();
        let manager = fx.manager();
        let id = manager.create("Alice").expect("create").id();

        let first = manager.start(id).expect("start");
        let pid = match first {
            StartOutcome::Started { pid, .. } => pid,
            other => panic!("expected a launch, got {other:?}"),
        };

        let second = manager.start(id).expect("second start");
        assert_eq!(
            second,
            StartOutcome::AlreadyRunning {
                name: "Alice".to_string(),
                pid
            }
        );
        assert_eq!(fx.processes.spawns.load(Ordering::SeqCst), 1);

        let view = manager.get(id).expect("get");
        assert!(view.is_running);
        assert_eq!(view.pid, Some(pid));
        assert_eq!(view.state, InstanceState::Running);
        assert!(view.record.last_session.is_some());
    }

    #[test]
    fn start_without_executable_fails() {
        let fx = Fixture::new();
        let manager = fx.manager();
        let created = manager.create("x").expect("create");
        fs::remove_file(fx.settings.executable_path(&created.record.folder)).expect("rm");

        let err = manager.start(created.id()).expect_err("no executable");
        assert!(matches!(err, ManagerError::ExecutableMissing(_)));
        assert_eq!(err.kind(), ErrorKind::PreconditionViolated);
        assert_eq!(fx.processes.spawns.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn stop_terminates_and_stamps_session() {
        let fx = Fixture::new();
        let manager = fx.manager();
        let id = manager.create("x").expect("create").id();
        manager.start(id).expect("start");
        let started_at = manager.get(id).expect("get").record.last_session;

        let report = manager.stop(id).expect("stop");
        assert_eq!(report.outcome, StopOutcome::Exited);

        let view = manager.get(id).expect("get");
        assert!(!view.is_running);
        assert!(view.record.last_session >= started_at);
    }

    #[test]
    fn stop_when_not_running_leaves_session_unchanged() {
        let fx = Fixture::new();
        let manager = fx.manager();
        let id = manager.create("x").expect("create").id();

        let err = manager.stop(id).expect_err("not running");
        assert!(matches!(err, ManagerError::NotRunning(_)));
        assert_eq!(err.kind(), ErrorKind::PreconditionViolated);
        assert_eq!(manager.get(id).expect("get").record.last_session, None);
        assert_eq!(fx.processes.terminations.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn delete_stops_running_instance_first() {
        let fx = Fixture::new();
        let manager = fx.manager();
        let created = manager.create("x").expect("create");
        fx.processes.mark_running(&created.record.folder, 4242);

        manager.delete(created.id()).expect("delete");

        assert_eq!(fx.processes.terminations.load(Ordering::SeqCst), 1);
        assert!(!created.record.folder.exists());
    }

    #[test]
    fn delete_keeps_record_when_folder_removal_fails() {
        let fx = Fixture::new();
        let manager = fx.manager().with_provisioner(Arc::new(StuckRemoval));
        let id = manager.create("x").expect("create").id();

        let err = manager.delete(id).expect_err("removal fails");
        assert!(matches!(err, ManagerError::DeletionFailed { .. }));

        let remaining = manager.list();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id(), id);
    }

    #[test]
    fn delete_of_absent_instance_only_drops_the_record() {
        let fx = Fixture::new();
        let manager = fx.manager();
        let created = manager.create("x").expect("create");
        fs::remove_dir_all(&created.record.folder).expect("rm");
        assert_eq!(manager.get(created.id()).expect("get").state, InstanceState::Absent);

        manager.delete(created.id()).expect("delete");
        assert!(manager.list().is_empty());
    }

    #[test]
    fn locate_hands_existing_folder_to_opener() {
        let fx = Fixture::new();
        let opener = Arc::new(RecordingOpener::default());
        let manager = fx.manager().with_opener(opener.clone());
        let created = manager.create("x").expect("create");

        let folder = manager.locate(created.id()).expect("locate");

        assert_eq!(folder, created.record.folder);
        assert_eq!(*opener.opened.lock().unwrap(), vec![folder]);
    }

    #[test]
    fn locate_missing_folder_fails() {
        let fx = Fixture::new();
        let manager = fx.manager();
        let created = manager.create("x").expect("create");
        fs::remove_dir_all(&created.record.folder).expect("rm");

        let err = manager.locate(created.id()).expect_err("folder missing");
        assert!(matches!(err, ManagerError::FolderMissing(_)));
    }

    #[test]
    fn health_reports_directory_presence() {
        let fx = Fixture::new();
        let manager = fx.manager();

        let health = manager.health();
        assert_eq!(health.status, "ok");
        assert!(health.template_base_exists);
        assert!(!health.instances_base_exists);

        manager.create("x").expect("create");
        assert!(manager.health().instances_base_exists);
    }

    #[test]
    fn failed_registry_write_rolls_back_the_new_folder() {
        let mut fx = Fixture::new();
        let blocker = fx._dir.path().join("blocked");
        fs::write(&blocker, b"file, not a directory").expect("write");
        fx.settings.state_dir = blocker.join("state");
        let manager = fx.manager();

        let err = manager.create("x").expect_err("registry unwritable");
        assert!(matches!(err, ManagerError::Persistence { .. }));
        assert!(!fx.settings.instance_folder(InstanceId(1)).exists());
    }

    #[test]
    fn unusable_instances_directory_is_reported_as_such() {
        let mut fx = Fixture::new();
        let blocker = fx._dir.path().join("blocked");
        fs::write(&blocker, b"file, not a directory").expect("write");
        fx.settings.instances_dir = blocker.join("instances");
        let manager = fx.manager();

        let err = manager.create("x").expect_err("instances dir unusable");
        match err {
            ManagerError::CreationFailed {
                source: ProvisionError::Prepare { dir, .. },
                ..
            } => assert_eq!(dir, fx.settings.instances_dir),
            other => panic!("expected a prepare failure, got {other:?}"),
        }
        assert!(manager.list().is_empty());
    }

    #[test]
    fn concurrent_creates_keep_every_record() {
        let fx = Fixture::new();
        let manager = Arc::new(fx.manager());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let manager = Arc::clone(&manager);
                std::thread::spawn(move || manager.create(&format!("worker {i}")).map(|v| v.record.id))
            })
            .collect();

        let mut ids: Vec<u64> = handles
            .into_iter()
            .map(|handle| handle.join().expect("thread").expect("create").0)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=8).collect::<Vec<_>>());

        let listed = manager.list();
        assert_eq!(listed.len(), 8);
        assert!(listed.iter().all(|view| view.folder_exists));
    }

    #[test]
    fn create_keeps_records_written_by_older_tool() {
        let fx = Fixture::new();
        fs::create_dir_all(&fx.settings.state_dir).expect("mkdir");
        fs::write(
            fx.settings.registry_path(),
            r#"[
  {"id": 1, "name": "Home", "folder": "/gone/instance_1",
   "created_at": "2024-05-01T10:00:00.123456", "last_session": null},
  {"id": 2, "name": "Work", "folder": "/gone/instance_2",
   "created_at": "2024-05-01T11:00:00", "last_session": "2024-05-02T08:30:00"}
]"#,
        )
        .expect("write");
        let manager = fx.manager();
        assert_eq!(manager.list().len(), 2);

        let created = manager.create("New").expect("create");
        assert_eq!(created.record.id, InstanceId(3));

        let names: Vec<_> = manager.list().into_iter().map(|v| v.record.name).collect();
        assert_eq!(names, vec!["Home", "Work", "New"]);
    }
}
