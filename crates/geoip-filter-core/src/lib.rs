pub mod config;
pub mod error;
pub mod paths;
pub mod types;

pub use config::Config;
pub use error::FilterError;
pub use paths::ConfigPaths;
pub use types::{Address, CountryList, IpList};
