use std::fmt;

use anyhow::Result;

use geoip_filter_core::Address;
use policy_engine::Verdict;

pub mod syslog;

pub use syslog::SyslogSink;

/// One audited decision, rendered as `Allow|Deny <ip> (<reason>)`.
#[derive(Debug, Clone)]
pub struct AuditRecord<'a> {
    pub address: &'a Address,
    pub verdict: &'a Verdict,
}

/// Destination for audit lines.
pub trait AuditSink {
    fn record(&mut self, line: &str) -> Result<()>;
}

/// Keeps audit lines in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub lines: Vec<String>,
}

impl<'a> AuditRecord<'a> {
    pub fn new(address: &'a Address, verdict: &'a Verdict) -> Self {
        Self { address, verdict }
    }
}

impl fmt::Display for AuditRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.verdict.action, self.address, self.verdict.reason
        )
    }
}

impl AuditSink for MemorySink {
    fn record(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
