use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};

use geo_lookup::{CountryLookup, MmdbLookup};
use geoip_filter_core::{Address, Config, ConfigPaths};
use policy_engine::{PolicyEngine, Verdict};
use reporting::{AuditRecord, AuditSink, SyslogSink};

pub const SYSLOG_TAG: &str = "geoip-filter";

#[derive(Debug)]
pub struct CheckInputs {
    pub config_path: Option<PathBuf>,
    pub ip: String,
}

pub fn execute(inputs: CheckInputs) -> Result<Verdict> {
    let address: Address = inputs.ip.parse()?;

    let config_path = ConfigPaths::default().resolve(inputs.config_path.as_deref())?;
    let config = Config::load(&config_path)?;
    info!(path = %config_path.display(), "configuration loaded");

    let mut sink = SyslogSink::connect(SYSLOG_TAG)?;
    let lookup = MmdbLookup::new(config.geoipdb_path.clone());

    decide(&address, &config, &lookup, &mut sink)
}

/// Evaluates the address and writes the audit line. Audit delivery is best-effort.
pub fn decide(
    address: &Address,
    config: &Config,
    lookup: &dyn CountryLookup,
    sink: &mut dyn AuditSink,
) -> Result<Verdict> {
    let verdict = PolicyEngine::from_config(config).evaluate(address, lookup)?;
    let line = AuditRecord::new(address, &verdict).to_string();
    if let Err(err) = sink.record(&line) {
        warn!("failed writing audit line '{line}': {err:#}");
    }
    Ok(verdict)
}
