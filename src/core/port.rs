//! Port allocation for the manager's own HTTP endpoint

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::{debug, trace};

use super::error::ManagerError;

/// How long a single probe waits for a connection
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Return the lowest port in `[start, start + max_attempts)` nothing is listening on
pub fn find_free_port(start: u16, max_attempts: u16) -> Result<u16, ManagerError> {
    find_free_port_with(start, max_attempts, |port| is_port_in_use(port, PROBE_TIMEOUT))
}

/// Scan the range using `in_use` to probe each port
pub fn find_free_port_with<F>(start: u16, max_attempts: u16, mut in_use: F) -> Result<u16, ManagerError>
where
    F: FnMut(u16) -> bool,
{
    let end = (u32::from(start) + u32::from(max_attempts)).min(u32::from(u16::MAX) + 1);

    for port in u32::from(start)..end {
        let port = port as u16;
        if in_use(port) {
            trace!("Port {} is taken", port);
            continue;
        }
        debug!("Allocated port {}", port);
        return Ok(port);
    }

    Err(ManagerError::NoPortAvailable { start, end })
}

/// Whether something accepts TCP connections on `localhost:port`.
///
/// A port that cannot be resolved is reported as in use so the scan skips it.
pub fn is_port_in_use(port: u16, timeout: Duration) -> bool {
    match ("localhost", port).to_socket_addrs() {
        Ok(addrs) => addrs
            .into_iter()
            .any(|addr| TcpStream::connect_timeout(&addr, timeout).is_ok()),
        Err(_) => true,
    }
}
