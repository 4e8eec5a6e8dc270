//! TCP port availability probing.

use std::io::ErrorKind;
use std::time::Duration;

use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

/// Probe target; deployments bind on the local host.
pub const PROBE_HOST: &str = "127.0.0.1";

/// Upper bound on a single probe; an indeterminate probe resolves as available.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Report whether nothing is currently listening on `port`.
///
/// One best-effort TCP connection attempt: a successful connect means the
/// port is in use; a refused connection means it is free; a probe that is
/// still indeterminate at the timeout is resolved as available. The port can
/// still be taken between the probe and the actual bind, in which case the
/// bind itself fails loudly.
pub async fn is_port_available(port: u16) -> bool {
    match timeout(PROBE_TIMEOUT, TcpStream::connect((PROBE_HOST, port))).await {
        Ok(Ok(_)) => {
            debug!("Port {} is in use", port);
            false
        }
        Ok(Err(error)) => matches!(
            error.kind(),
            ErrorKind::ConnectionRefused | ErrorKind::AddrNotAvailable
        ),
        Err(_) => {
            debug!("Port {} probe timed out, assuming available", port);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[tokio::test]
    async fn test_listening_port_is_unavailable() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        assert!(!is_port_available(port).await);
    }

    #[tokio::test]
    async fn test_free_port_is_available() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        assert!(is_port_available(port).await);
    }
}
