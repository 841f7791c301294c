use std::collections::HashMap;
use std::net::IpAddr;

use anyhow::Result;

use geo_lookup::CountryLookup;

/// Fixed address to country table.
#[derive(Debug, Default)]
pub struct TableLookup {
    entries: HashMap<IpAddr, String>,
}

impl TableLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, ip: &str, code: &str) -> Self {
        self.entries.insert(ip.parse().unwrap(), code.to_string());
        self
    }
}

impl CountryLookup for TableLookup {
    fn country_code(&self, ip: IpAddr) -> Result<Option<String>> {
        Ok(self.entries.get(&ip).cloned())
    }
}
