use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::FilterError;

/// A parsed IP address together with its canonical text form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    ip: IpAddr,
    canonical: String,
}

/// Administrator-supplied addresses, matched by exact string equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct IpList(pub Vec<String>);

/// ISO 3166 alpha-2 codes allowed by the geographic policy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CountryList(pub Vec<String>);

impl Address {
    pub fn new(ip: IpAddr) -> Self {
        // IPv4-mapped IPv6 collapses to the plain IPv4 form.
        let ip = ip.to_canonical();
        Self {
            ip,
            canonical: ip.to_string(),
        }
    }

    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

impl FromStr for Address {
    type Err = FilterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let ip = value
            .parse::<IpAddr>()
            .map_err(|_| FilterError::Usage(format!("failed parsing IP address '{value}'")))?;
        Ok(Self::new(ip))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl IpList {
    pub fn contains(&self, address: &Address) -> bool {
        self.0.iter().any(|entry| entry == address.as_str())
    }
}

impl CountryList {
    /// Exact, case-sensitive membership. An empty code never matches.
    pub fn contains(&self, code: &str) -> bool {
        !code.is_empty() && self.0.iter().any(|allowed| allowed == code)
    }
}

impl From<Vec<&str>> for IpList {
    fn from(values: Vec<&str>) -> Self {
        Self(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<&str>> for CountryList {
    fn from(values: Vec<&str>) -> Self {
        Self(values.into_iter().map(str::to_string).collect())
    }
}
