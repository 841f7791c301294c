use anyhow::Result;
use tracing::debug;

use geo_lookup::CountryLookup;
use geoip_filter_core::{Address, CountryList};

use crate::decision::{Reason, Verdict};

/// Geographic fallback. Lookup errors propagate; they are never a Deny.
pub fn evaluate_country(
    address: &Address,
    allowed: &CountryList,
    lookup: &dyn CountryLookup,
) -> Result<Verdict> {
    // An unknown address yields an empty code, which matches nothing.
    let code = lookup.country_code(address.ip())?.unwrap_or_default();
    debug!(%address, country = %code, "country resolved");

    if allowed.contains(&code) {
        Ok(Verdict::allow(Reason::CountryMatch(code)))
    } else {
        Ok(Verdict::deny(Reason::CountryDeny(code)))
    }
}
