//! Configuration for the robust segment finder.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for iterative consensus segment extraction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobustConfig {
    /// Maximum orthogonal distance from the line for a point to count as an
    /// inlier (scan units).
    /// Default: 20.0
    pub residual_threshold: f64,

    /// Maximum gap between consecutive inliers along the line within one
    /// segment (scan units).
    /// Default: 150.0
    pub segments_threshold: f64,

    /// Consensus trials per fitted line.
    /// Default: 1000
    pub max_trials: usize,

    /// Stop once a round's mean segment density is not above this value.
    /// Default: None (disabled)
    pub density_threshold: Option<f64>,

    /// Stop once a round's mean segment length is not above this value.
    /// Default: None (disabled)
    pub length_threshold: Option<f64>,

    /// Random seed for reproducible sampling.
    /// None = seed from OS entropy on every call.
    /// Default: None
    pub seed: Option<u64>,
}

impl Default for RobustConfig {
    fn default() -> Self {
        Self {
            residual_threshold: 20.0,
            segments_threshold: 150.0,
            max_trials: 1000,
            density_threshold: None,
            length_threshold: None,
            seed: None,
        }
    }
}

impl RobustConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for residual threshold.
    pub fn with_residual_threshold(mut self, threshold: f64) -> Self {
        self.residual_threshold = threshold;
        self
    }

    /// Builder-style setter for segments threshold.
    pub fn with_segments_threshold(mut self, threshold: f64) -> Self {
        self.segments_threshold = threshold;
        self
    }

    /// Builder-style setter for maximum trials.
    pub fn with_max_trials(mut self, max_trials: usize) -> Self {
        self.max_trials = max_trials;
        self
    }

    /// Builder-style setter for density threshold.
    pub fn with_density_threshold(mut self, threshold: f64) -> Self {
        self.density_threshold = Some(threshold);
        self
    }

    /// Builder-style setter for length threshold.
    pub fn with_length_threshold(mut self, threshold: f64) -> Self {
        self.length_threshold = Some(threshold);
        self
    }

    /// Builder-style setter for random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check threshold signs and trial count.
    pub fn validate(&self) -> Result<()> {
        if self.residual_threshold.is_nan() || self.residual_threshold < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "residual threshold must be non-negative, got {}",
                self.residual_threshold
            )));
        }

        if self.segments_threshold.is_nan() || self.segments_threshold <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "segments threshold must be positive, got {}",
                self.segments_threshold
            )));
        }

        if self.max_trials == 0 {
            return Err(Error::InvalidConfig(
                "max trials must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
