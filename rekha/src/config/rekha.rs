//! Top-level configuration and YAML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::extraction::{RegressionConfig, RobustConfig};

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "configs/rekha.yaml";

/// Full finder configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RekhaConfig {
    /// Regression finder settings
    #[serde(default)]
    pub regression: RegressionConfig,

    /// Robust finder settings
    #[serde(default)]
    pub robust: RobustConfig,
}

impl RekhaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/rekha.yaml)
    pub fn load_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(Error::from)
    }

    /// Validate both sections
    pub fn validate(&self) -> Result<()> {
        self.regression.validate()?;
        self.robust.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::SegmentationStrategy;

    #[test]
    fn test_default_config() {
        let config = RekhaConfig::default();
        assert_eq!(config.regression.window_size, 3);
        assert_eq!(config.robust.residual_threshold, 20.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = RekhaConfig {
            regression: RegressionConfig::default()
                .with_window_size(5)
                .with_strategy(SegmentationStrategy::Simplified),
            robust: RobustConfig::default().with_seed(3).with_density_threshold(0.2),
        };
        let yaml = config.to_yaml().unwrap();
        let parsed = RekhaConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml() {
        let config = RekhaConfig::from_yaml("robust:\n  max_trials: 50\n").unwrap();
        assert_eq!(config.robust.max_trials, 50);
        assert_eq!(config.regression, RegressionConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let result = RekhaConfig::from_yaml("regression:\n  window_size: 4\n");
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_yaml() {
        let result = RekhaConfig::from_yaml("regression: [1, 2");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rekha.yaml");
        std::fs::write(&path, "regression:\n  merge_threshold: 0.5\n").unwrap();

        let config = RekhaConfig::load(&path).unwrap();
        assert_eq!(config.regression.merge_threshold, 0.5);

        let missing = RekhaConfig::load(&dir.path().join("missing.yaml"));
        assert!(matches!(missing, Err(Error::Io(_))));
    }
}
