//! Mapper configuration, optionally read from a TOML file.
//!
//! ```toml
//! [text]
//! date_formats = ["%m/%d/%Y", "%Y-%m-%d"]
//! datetime_display = "%Y-%m-%dT%H:%M:%S"
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use crate::error::{MapperError, MapperResult};
use propmap_model::TextFormats;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Date formats used when values cross the text boundary.
    pub text: TextFormats,
}

impl MapperConfig {
    pub fn from_toml_str(contents: &str) -> MapperResult<Self> {
        toml::from_str(contents).map_err(|e| MapperError::Config(e.to_string()))
    }

    /// Loads configuration from `path`. A missing file yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> MapperResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No mapper config found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| MapperError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&contents)?;
        info!("Loaded mapper config from {:?}", path);
        Ok(config)
    }

    pub fn to_toml_string(&self) -> MapperResult<String> {
        toml::to_string(self).map_err(|e| MapperError::Config(e.to_string()))
    }
}
