//! Configuration for the regression segment finder.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How fitted windows are grouped into segmentation intervals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SegmentationStrategy {
    /// Compare each window with its symmetric neighborhood of `size` windows
    /// (odd) through their precision-weighted mean.
    Neighborhood {
        /// Number of windows in the neighborhood, centre included.
        size: usize,
    },
    /// Compare each window only with the interval accumulated so far.
    Simplified,
}

impl SegmentationStrategy {
    /// Map a legacy segmentation size: 0 selects [`Simplified`](Self::Simplified),
    /// anything else a neighborhood of that size.
    pub fn from_size(size: usize) -> Self {
        if size == 0 {
            Self::Simplified
        } else {
            Self::Neighborhood { size }
        }
    }

    /// Number of windows on each side of the centre window.
    ///
    /// Expects a validated (odd, non-zero) neighborhood size.
    pub fn half_width(&self) -> usize {
        match self {
            Self::Neighborhood { size } => (size - 1) / 2,
            Self::Simplified => 0,
        }
    }
}

impl Default for SegmentationStrategy {
    fn default() -> Self {
        Self::Neighborhood { size: 3 }
    }
}

/// Configuration for sliding-window regression segmentation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegressionConfig {
    /// Number of consecutive points per fitted window (odd).
    /// Default: 3
    pub window_size: usize,

    /// Windows are merged while the squared Mahalanobis distance score
    /// stays below this value.
    /// Default: 5.0
    pub merge_threshold: f64,

    /// Maximum gap between consecutive projected points within one segment
    /// (scan units).
    /// Default: 150.0
    pub segment_eps: f64,

    /// Interval grouping strategy.
    /// Default: neighborhood of 3
    pub strategy: SegmentationStrategy,
}

impl Default for RegressionConfig {
    fn default() -> Self {
        Self {
            window_size: 3,
            merge_threshold: 5.0,
            segment_eps: 150.0,
            strategy: SegmentationStrategy::default(),
        }
    }
}

impl RegressionConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for window size.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Builder-style setter for merge threshold.
    pub fn with_merge_threshold(mut self, threshold: f64) -> Self {
        self.merge_threshold = threshold;
        self
    }

    /// Builder-style setter for segment gap.
    pub fn with_segment_eps(mut self, eps: f64) -> Self {
        self.segment_eps = eps;
        self
    }

    /// Builder-style setter for segmentation strategy.
    pub fn with_strategy(mut self, strategy: SegmentationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check window and neighborhood parity and threshold signs.
    pub fn validate(&self) -> Result<()> {
        if self.window_size % 2 != 1 {
            return Err(Error::InvalidConfig(format!(
                "window size must be odd number, got {}",
                self.window_size
            )));
        }

        if let SegmentationStrategy::Neighborhood { size } = self.strategy
            && size % 2 != 1
        {
            return Err(Error::InvalidConfig(format!(
                "segmentation size must be odd number, got {}",
                size
            )));
        }

        if self.segment_eps.is_nan() || self.segment_eps < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "segment eps must be non-negative, got {}",
                self.segment_eps
            )));
        }

        if self.merge_threshold.is_nan() {
            return Err(Error::InvalidConfig("merge threshold is NaN".to_string()));
        }

        Ok(())
    }
}
