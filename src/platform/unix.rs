//! Unix process signalling

use std::io;

/// Terminate a process gracefully (SIGTERM)
pub fn terminate_process(pid: u32) -> io::Result<()> {
    send_signal(pid, libc::SIGTERM)
}

/// Force kill a process (SIGKILL)
pub fn kill_process(pid: u32) -> io::Result<()> {
    send_signal(pid, libc::SIGKILL)
}

fn send_signal(pid: u32, signal: libc::c_int) -> io::Result<()> {
    let pid = libc::pid_t::try_from(pid)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "pid out of range"))?;

    // pid 0 and negatives address process groups
    if pid <= 0 {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "refusing to signal a process group"));
    }

    let result = unsafe { libc::kill(pid, signal) };
    if result == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}
