//! Replicator configuration

use serde::{Deserialize, Serialize};

/// Switches for the built-in replication rules
///
/// All rules are enabled by default. Missing keys in a TOML document take
/// their default; unknown keys are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplicatorConfig {
    /// Map constants between different enumerations by ordinal
    pub hetero_enum_mapping: bool,
    /// Convert between `Int` and `Float`
    pub numeric_conversion: bool,
    /// Render scalars and enum constants as `Text`
    pub stringify_scalars: bool,
}

impl ReplicatorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With cross-enumeration ordinal mapping on or off
    #[inline]
    #[must_use]
    pub fn with_hetero_enum_mapping(mut self, enabled: bool) -> Self {
        self.hetero_enum_mapping = enabled;
        self
    }

    /// With numeric conversion on or off
    #[inline]
    #[must_use]
    pub fn with_numeric_conversion(mut self, enabled: bool) -> Self {
        self.numeric_conversion = enabled;
        self
    }

    /// With scalar stringification on or off
    #[inline]
    #[must_use]
    pub fn with_stringify_scalars(mut self, enabled: bool) -> Self {
        self.stringify_scalars = enabled;
        self
    }

    /// Parse configuration from TOML
    ///
    /// # Errors
    /// Returns error if the document is not valid TOML or has unknown keys
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }
}

impl Default for ReplicatorConfig {
    fn default() -> Self {
        Self {
            hetero_enum_mapping: true,
            numeric_conversion: true,
            stringify_scalars: true,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure
    #[error("invalid replicator config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let config = ReplicatorConfig::new();
        assert!(config.hetero_enum_mapping);
        assert!(config.numeric_conversion);
        assert!(config.stringify_scalars);
    }

    #[test]
    fn builder_methods() {
        let config = ReplicatorConfig::new()
            .with_hetero_enum_mapping(false)
            .with_stringify_scalars(false);
        assert!(!config.hetero_enum_mapping);
        assert!(config.numeric_conversion);
        assert!(!config.stringify_scalars);
    }

    #[test]
    fn toml_partial_document() {
        let config = ReplicatorConfig::from_toml_str("numeric_conversion = false\n").unwrap();
        assert_eq!(config, ReplicatorConfig::new().with_numeric_conversion(false));
    }

    #[test]
    fn toml_empty_document_is_default() {
        assert_eq!(
            ReplicatorConfig::from_toml_str("").unwrap(),
            ReplicatorConfig::default()
        );
    }

    #[test]
    fn toml_unknown_key_rejected() {
        let err = ReplicatorConfig::from_toml_str("match_by_name = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
