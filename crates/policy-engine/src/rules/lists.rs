use geoip_filter_core::{Address, IpList};

use crate::decision::{Reason, Verdict};

/// Administrator overrides. The whitelist is checked first and always wins.
pub fn evaluate_lists(address: &Address, whitelist: &IpList, blacklist: &IpList) -> Option<Verdict> {
    if whitelist.contains(address) {
        return Some(Verdict::allow(Reason::Whitelist));
    }
    if blacklist.contains(address) {
        return Some(Verdict::deny(Reason::Blacklist));
    }
    None
}
