//! Ledger configuration

use crate::error::ConfigError;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Behaviour switches shared by the registries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Report an unknown token id on transfer as `NotFound` rather than
    /// folding it into `Unauthorized`.
    pub explicit_transfer_not_found: bool,
}

impl LedgerConfig {
    /// Parse from a JSON string; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        info!("Loaded ledger config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
