//! Platform-specific process signalling for Windows and Unix

#[cfg(windows)]
pub mod windows;

#[cfg(unix)]
pub mod unix;

use std::io;

use sysinfo::{Pid, ProcessStatus, ProcessesToUpdate, System};

/// Terminate a process gracefully
pub fn terminate_process(pid: u32) -> io::Result<()> {
    #[cfg(windows)]
    {
        windows::terminate_process(pid)
    }
    #[cfg(unix)]
    {
        unix::terminate_process(pid)
    }
    #[cfg(not(any(windows, unix)))]
    {
        let _ = pid;
        Err(io::Error::new(io::ErrorKind::Unsupported, "unsupported platform"))
    }
}

/// Force kill a process
pub fn kill_process(pid: u32) -> io::Result<()> {
    #[cfg(windows)]
    {
        windows::kill_process(pid)
    }
    #[cfg(unix)]
    {
        unix::kill_process(pid)
    }
    #[cfg(not(any(windows, unix)))]
    {
        let _ = pid;
        Err(io::Error::new(io::ErrorKind::Unsupported, "unsupported platform"))
    }
}

/// Check if a process is running. Zombies count as exited.
pub fn is_process_running(pid: u32) -> bool {
    let pid = Pid::from_u32(pid);
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);

    system.process(pid).is_some_and(|process| {
        !matches!(process.status(), ProcessStatus::Zombie | ProcessStatus::Dead)
    })
}
