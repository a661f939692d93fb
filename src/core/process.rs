//! Process management - Spawning and stopping instance processes

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::platform;

/// How often liveness is polled while waiting for a process to exit
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How a stop request ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// Exited within the grace period
    Exited,
    /// Still alive after the grace period and force-killed
    Killed,
}

/// Launches and terminates OS processes
pub trait ProcessControl: Send + Sync {
    /// Start `executable` detached from the manager with `working_dir` as cwd
    fn spawn(&self, executable: &Path, working_dir: &Path) -> io::Result<u32>;

    /// Ask `pid` to exit, wait up to `grace`, then force-kill
    fn terminate(&self, pid: u32, grace: Duration) -> io::Result<StopOutcome>;
}

/// Real process control backed by the platform layer
#[derive(Debug, Default)]
pub struct SystemProcessControl;

impl ProcessControl for SystemProcessControl {
    fn spawn(&self, executable: &Path, working_dir: &Path) -> io::Result<u32> {
        info!("Spawning {:?} in {:?}", executable, working_dir);

        let mut cmd = Command::new(executable);
        cmd.current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // Detach from our process group
        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            cmd.creation_flags(0x00000008); // DETACHED_PROCESS
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        let mut child = cmd.spawn()?;
        let pid = child.id();
        info!("Spawned process with PID {}", pid);

        // Reap the child so it never lingers as a zombie
        thread::spawn(move || match child.wait() {
            Ok(status) => debug!("Process {} exited with {}", pid, status),
            Err(e) => warn!("Failed to wait on process {}: {}", pid, e),
        });

        Ok(pid)
    }

    fn terminate(&self, pid: u32, grace: Duration) -> io::Result<StopOutcome> {
        info!("Terminating process {}", pid);

        if let Err(e) = platform::terminate_process(pid) {
            if !platform::is_process_running(pid) {
                // Exited between lookup and signal
                return Ok(StopOutcome::Exited);
            }
            return Err(e);
        }

        if wait_for_exit_with(grace, POLL_INTERVAL, || platform::is_process_running(pid)) {
            return Ok(StopOutcome::Exited);
        }

        warn!("Process {} still alive after {:?}, forcing kill", pid, grace);
        if let Err(e) = platform::kill_process(pid) {
            if platform::is_process_running(pid) {
                return Err(e);
            }
        }
        Ok(StopOutcome::Killed)
    }
}

/// Poll `is_alive` until it reports false or `grace` elapses. Returns whether it exited.
pub fn wait_for_exit_with<F>(grace: Duration, poll: Duration, mut is_alive: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = Instant::now() + grace;
    loop {
        if !is_alive() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        thread::sleep(poll);
    }
}
