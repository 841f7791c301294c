use anyhow::Result;
use tracing::debug;

use geo_lookup::CountryLookup;
use geoip_filter_core::{Address, Config, CountryList, IpList};

mod decision;
pub mod rules;
#[cfg(test)]
mod testing;

pub use decision::{DecisionAction, Reason, Verdict};
pub use rules::private::is_private;

/// Policy engine for deciding whether a single address is allowed.
#[derive(Debug)]
pub struct PolicyEngine<'a> {
    whitelist: &'a IpList,
    blacklist: &'a IpList,
    allowed_countries: &'a CountryList,
}

impl<'a> PolicyEngine<'a> {
    /// Creates a new PolicyEngine borrowing the loaded configuration
    pub fn from_config(config: &'a Config) -> Self {
        Self {
            whitelist: &config.whitelisted_ips,
            blacklist: &config.blacklisted_ips,
            allowed_countries: &config.allowed_countries,
        }
    }

    /// Evaluates an address in priority order; the first matching rule wins.
    ///
    /// `lookup` is only consulted for public addresses on neither list. Its
    /// errors are returned as-is so that a failed lookup never becomes a
    /// verdict.
    pub fn evaluate(&self, address: &Address, lookup: &dyn CountryLookup) -> Result<Verdict> {
        if let Some(verdict) = rules::lists::evaluate_lists(address, self.whitelist, self.blacklist)
        {
            debug!(%address, reason = verdict.reason.tag(), "matched override list");
            return Ok(verdict);
        }

        if is_private(address.ip()) {
            debug!(%address, "private network address");
            return Ok(Verdict::allow(Reason::Private));
        }

        rules::country::evaluate_country(address, self.allowed_countries, lookup)
    }
}
