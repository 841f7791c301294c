use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::FilterError;
use crate::types::{CountryList, IpList};

/// Policy settings read once at startup and passed by reference afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(rename = "WHITELISTED_IPS", alias = "whitelisted_ips", default)]
    pub whitelisted_ips: IpList,
    #[serde(rename = "BLACKLISTED_IPS", alias = "blacklisted_ips", default)]
    pub blacklisted_ips: IpList,
    #[serde(rename = "GEOIPDB_PATH", alias = "geoipdb_path", default)]
    pub geoipdb_path: Option<PathBuf>,
    #[serde(rename = "ALLOWED_COUNTRIES", alias = "allowed_countries", default)]
    pub allowed_countries: CountryList,
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|err| FilterError::Config(err.to_string()))
            .context("parse config TOML")?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|err| FilterError::Config(err.to_string()))
            .with_context(|| format!("read config at {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("load config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_upper_case_keys() {
        let config = Config::from_toml_str(
            r#"
WHITELISTED_IPS = ["203.0.113.5"]
BLACKLISTED_IPS = ["198.51.100.9", "198.51.100.10"]
GEOIPDB_PATH = "/var/lib/GeoIP/GeoLite2-Country.mmdb"
ALLOWED_COUNTRIES = ["NO", "SE"]
"#,
        )
        .unwrap();

        assert_eq!(config.whitelisted_ips, IpList::from(vec!["203.0.113.5"]));
        assert_eq!(
            config.blacklisted_ips,
            IpList::from(vec!["198.51.100.9", "198.51.100.10"])
        );
        assert_eq!(
            config.geoipdb_path,
            Some(PathBuf::from("/var/lib/GeoIP/GeoLite2-Country.mmdb"))
        );
        assert_eq!(config.allowed_countries, CountryList::from(vec!["NO", "SE"]));
    }

    #[test]
    fn test_lower_case_aliases() {
        let config = Config::from_toml_str(
            r#"
whitelisted_ips = ["10.0.0.1"]
allowed_countries = ["US"]
"#,
        )
        .unwrap();

        assert_eq!(config.whitelisted_ips, IpList::from(vec!["10.0.0.1"]));
        assert_eq!(config.allowed_countries, CountryList::from(vec!["US"]));
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.geoipdb_path.is_none());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = Config::from_toml_str("WHITELISTED_IPS = [").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FilterError>(),
            Some(FilterError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "BLACKLISTED_IPS = [\"198.51.100.9\"]").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.blacklisted_ips, IpList::from(vec!["198.51.100.9"]));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FilterError>(),
            Some(FilterError::Config(_))
        ));
    }
}
