use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::FilterError;

pub const CONFIG_FILE_NAME: &str = "geoip-filter.toml";
pub const SYSTEM_CONFIG_DIR: &str = "/srv/config";

/// Locations searched for the configuration file, in priority order.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub search_dirs: Vec<PathBuf>,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self {
            search_dirs: vec![PathBuf::from("."), PathBuf::from(SYSTEM_CONFIG_DIR)],
        }
    }
}

impl ConfigPaths {
    pub fn candidates(&self) -> Vec<PathBuf> {
        self.search_dirs
            .iter()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .collect()
    }

    /// Returns the explicit path if given, otherwise the first existing candidate.
    pub fn resolve(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        let candidates = self.candidates();
        if let Some(found) = candidates.iter().find(|path| path.is_file()) {
            return Ok(found.clone());
        }
        let searched = candidates
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(FilterError::Config(format!("no {CONFIG_FILE_NAME} found (searched {searched})")).into())
    }
}
