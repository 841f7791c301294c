//! Local syslog delivery over the system log Unix socket.
//!
//! Frames follow the RFC 3164 layout the local daemon expects:
//! `<PRI>Mmm dd hh:mm:ss tag[pid]: message`. Stream sockets get one frame
//! per line.

use std::io::Write;
use std::os::unix::net::{UnixDatagram, UnixStream};
use std::path::{Path, PathBuf};

use anyhow::Result;
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::debug;

use geoip_filter_core::FilterError;

use crate::AuditSink;

pub const DEFAULT_SOCKETS: [&str; 3] = ["/dev/log", "/var/run/syslog", "/var/run/log"];

/// LOG_AUTHPRIV (10 << 3)
pub const FACILITY_AUTHPRIV: u8 = 10 << 3;
/// LOG_NOTICE
pub const SEVERITY_NOTICE: u8 = 5;

#[derive(Debug)]
enum Transport {
    Datagram(UnixDatagram),
    Stream(UnixStream),
}

#[derive(Debug)]
pub struct SyslogSink {
    socket: Transport,
    tag: String,
    priority: u8,
}

impl SyslogSink {
    /// Connects to the first reachable system log socket.
    pub fn connect(tag: &str) -> Result<Self> {
        let candidates: Vec<PathBuf> = DEFAULT_SOCKETS.iter().map(PathBuf::from).collect();
        Self::connect_to(&candidates, tag)
    }

    pub fn connect_to(candidates: &[PathBuf], tag: &str) -> Result<Self> {
        let mut failures = Vec::new();
        for path in candidates {
            match open_socket(path) {
                Ok(socket) => {
                    debug!(path = %path.display(), "connected to syslog");
                    return Ok(Self {
                        socket,
                        tag: tag.to_string(),
                        priority: FACILITY_AUTHPRIV | SEVERITY_NOTICE,
                    });
                }
                Err(err) => failures.push(format!("{}: {err}", path.display())),
            }
        }
        Err(FilterError::LogChannel(format!(
            "error opening syslog ({})",
            if failures.is_empty() {
                "no socket candidates".to_string()
            } else {
                failures.join("; ")
            }
        ))
        .into())
    }

    fn frame(&self, line: &str) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let stamp = now
            .format(format_description!(
                "[month repr:short] [day padding:space] [hour]:[minute]:[second]"
            ))
            .unwrap_or_default();
        format!(
            "<{}>{} {}[{}]: {}",
            self.priority,
            stamp,
            self.tag,
            std::process::id(),
            line
        )
    }
}

impl AuditSink for SyslogSink {
    fn record(&mut self, line: &str) -> Result<()> {
        let frame = self.frame(line);
        match &mut self.socket {
            Transport::Datagram(socket) => {
                socket.send(frame.as_bytes())?;
            }
            Transport::Stream(stream) => {
                stream.write_all(frame.as_bytes())?;
                stream.write_all(b"\n")?;
                stream.flush()?;
            }
        }
        Ok(())
    }
}

/// Datagram first, then stream for daemons listening on `SOCK_STREAM`.
fn open_socket(path: &Path) -> std::io::Result<Transport> {
    let socket = UnixDatagram::unbound()?;
    match socket.connect(path) {
        Ok(()) => Ok(Transport::Datagram(socket)),
        Err(datagram_err) => match UnixStream::connect(path) {
            Ok(stream) => Ok(Transport::Stream(stream)),
            Err(_) => Err(datagram_err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_sends_tagged_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.sock");
        let server = UnixDatagram::bind(&path).unwrap();

        let mut sink =
            SyslogSink::connect_to(&[dir.path().join("missing.sock"), path.clone()], "geoip-filter")
                .unwrap();
        sink.record("Allow 203.0.113.5 (WHITELIST)").unwrap();

        let mut buf = [0u8; 512];
        let len = server.recv(&mut buf).unwrap();
        let frame = String::from_utf8_lossy(&buf[..len]).to_string();

        assert!(frame.starts_with("<85>"));
        assert!(frame.ends_with(&format!(
            "geoip-filter[{}]: Allow 203.0.113.5 (WHITELIST)",
            std::process::id()
        )));
    }

    #[test]
    fn test_stream_socket_fallback() {
        use std::io::{BufRead, BufReader};
        use std::os::unix::net::UnixListener;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.sock");
        let listener = UnixListener::bind(&path).unwrap();

        let mut sink = SyslogSink::connect_to(&[path.clone()], "geoip-filter").unwrap();
        sink.record("Deny 198.51.100.9 (BLACKLIST)").unwrap();
        sink.record("Allow 8.8.8.8 (US)").unwrap();

        let (conn, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(conn);
        let mut first = String::new();
        reader.read_line(&mut first).unwrap();
        let mut second = String::new();
        reader.read_line(&mut second).unwrap();

        assert!(first.starts_with("<85>"));
        assert!(first.ends_with("]: Deny 198.51.100.9 (BLACKLIST)\n"));
        assert!(second.ends_with("]: Allow 8.8.8.8 (US)\n"));
    }

    #[test]
    fn test_no_reachable_socket_is_log_channel_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SyslogSink::connect_to(&[dir.path().join("nope.sock")], "geoip-filter")
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FilterError>(),
            Some(FilterError::LogChannel(_))
        ));
    }
}
