//! Windows process termination

use std::io;

use windows::Win32::Foundation::{CloseHandle, FALSE};
use windows::Win32::System::Threading::{OpenProcess, TerminateProcess, PROCESS_TERMINATE};

/// Terminate a process
pub fn terminate_process(pid: u32) -> io::Result<()> {
    terminate_with_code(pid, 0)
}

/// Force kill a process
pub fn kill_process(pid: u32) -> io::Result<()> {
    terminate_with_code(pid, 1)
}

fn terminate_with_code(pid: u32, exit_code: u32) -> io::Result<()> {
    unsafe {
        let handle = OpenProcess(PROCESS_TERMINATE, FALSE, pid).map_err(io::Error::other)?;

        let result = TerminateProcess(handle, exit_code);
        let _ = CloseHandle(handle);

        result.map_err(io::Error::other)
    }
}
