use thiserror::Error;

/// Failures that end an invocation without a verdict.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid usage: {0}")]
    Usage(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("audit log unavailable: {0}")]
    LogChannel(String),
    #[error("geoip lookup failed: {0}")]
    Lookup(String),
}
