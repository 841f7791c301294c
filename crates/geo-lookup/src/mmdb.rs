use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Result;
use maxminddb::{geoip2, MaxMindDBError, Reader};
use tracing::debug;

use geoip_filter_core::FilterError;

use crate::CountryLookup;

/// Lookup backed by a MaxMind DB file.
///
/// The database is opened on each lookup and closed before returning, so
/// decisions that never reach the geographic rule never touch the file.
#[derive(Debug, Clone)]
pub struct MmdbLookup {
    path: Option<PathBuf>,
}

impl MmdbLookup {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    fn open(&self) -> Result<Reader<Vec<u8>>> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| FilterError::Lookup("GEOIPDB_PATH is not configured".to_string()))?;
        let reader = Reader::open_readfile(path).map_err(|err| {
            FilterError::Lookup(format!(
                "failed opening GeoIP database {}: {err}",
                path.display()
            ))
        })?;
        Ok(reader)
    }
}

impl CountryLookup for MmdbLookup {
    fn country_code(&self, ip: IpAddr) -> Result<Option<String>> {
        let reader = self.open()?;
        match reader.lookup::<geoip2::Country>(ip) {
            Ok(record) => {
                let code = record
                    .country
                    .and_then(|country| country.iso_code)
                    .map(str::to_string);
                debug!(%ip, country = ?code, "geoip record found");
                Ok(code)
            }
            Err(MaxMindDBError::AddressNotFoundError(_)) => {
                debug!(%ip, "address not present in geoip database");
                Ok(None)
            }
            Err(err) => Err(FilterError::Lookup(format!("lookup of {ip} failed: {err}")).into()),
        }
    }
}
