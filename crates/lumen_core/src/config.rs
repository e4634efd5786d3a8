//! # World Configuration
//!
//! Loaded once at startup from TOML:
//!
//! ```toml
//! cache_size = 1024
//! id_strategy = "sequential"
//! ```
//!
//! Missing keys fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};
use crate::memory::IdStrategy;

/// Default number of entity slots the pool reserves up front.
pub const DEFAULT_CACHE_SIZE: usize = 512;

/// Tunables for a [`World`](crate::ecs::World).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
    /// Pre-allocation hint for the entity pool. Not a hard limit.
    pub cache_size: usize,
    /// How the pool assigns entity ids.
    pub id_strategy: IdStrategy,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            cache_size: DEFAULT_CACHE_SIZE,
            id_strategy: IdStrategy::Random,
        }
    }
}

impl WorldConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidConfig`] when the text is not valid TOML,
    /// contains unknown keys, or fails validation.
    pub fn from_toml_str(text: &str) -> WorldResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| WorldError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidConfig`] when the file cannot be read or
    /// its contents are rejected by [`WorldConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> WorldResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| WorldError::InvalidConfig(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), ?config, "loaded world configuration");
        Ok(config)
    }

    /// Checks the values for consistency.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidConfig`] when `cache_size` is zero.
    pub fn validate(&self) -> WorldResult<()> {
        if self.cache_size == 0 {
            return Err(WorldError::InvalidConfig(
                "cache_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = WorldConfig::from_toml_str("").unwrap();
        assert_eq!(config, WorldConfig::default());
        assert_eq!(config.cache_size, DEFAULT_CACHE_SIZE);
    }

    #[test]
    fn test_parse_full_document() {
        let config =
            WorldConfig::from_toml_str("cache_size = 64\nid_strategy = \"sequential\"\n").unwrap();
        assert_eq!(config.cache_size, 64);
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
    }

    #[test]
    fn test_rejects_zero_cache() {
        let err = WorldConfig::from_toml_str("cache_size = 0").unwrap_err();
        assert!(matches!(err, WorldError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_unknown_keys_and_strategies() {
        assert!(WorldConfig::from_toml_str("cache = 3").is_err());
        assert!(WorldConfig::from_toml_str("id_strategy = \"snowflake\"").is_err());
    }

    #[test]
    fn test_load_shipped_config() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/world.toml");
        let config = WorldConfig::from_toml_file(path).unwrap();
        assert_eq!(config.cache_size, 1024);
        assert_eq!(config.id_strategy, IdStrategy::Sequential);
    }

    #[test]
    fn test_missing_file_is_invalid_config() {
        let err = WorldConfig::from_toml_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, WorldError::InvalidConfig(msg) if msg.contains("not/here.toml")));
    }
}
