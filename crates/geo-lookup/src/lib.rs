//! Country lookups for public addresses.
//!
//! The policy engine only sees the [`CountryLookup`] trait; [`MmdbLookup`]
//! backs it with a MaxMind DB file on disk.

use std::net::IpAddr;

use anyhow::Result;

pub mod mmdb;

pub use mmdb::MmdbLookup;

/// Resolves an address to its ISO country code.
///
/// `Ok(None)` means the database has no record for the address. Any `Err` is
/// fatal to the decision.
pub trait CountryLookup {
    fn country_code(&self, ip: IpAddr) -> Result<Option<String>>;
}
