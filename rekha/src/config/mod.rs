//! Finder configuration loading.
//!
//! All finder settings live in one YAML file with a section per finder.
//! Missing sections and fields fall back to defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rekha::config::RekhaConfig;
//!
//! // Load from default path (configs/rekha.yaml)
//! let config = RekhaConfig::load_default()?;
//!
//! let regression = RegressionSegmentFinder::new(config.regression)?;
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`RegressionConfig`] | Window size, merge threshold, segment gap, strategy |
//! | [`RobustConfig`] | Residual and gap thresholds, trials, stop criteria, seed |
//!
//! ## Example YAML
//!
//! ```yaml
//! regression:
//!   window_size: 3
//!   merge_threshold: 5.0
//!   segment_eps: 150.0
//!   strategy:
//!     kind: neighborhood
//!     size: 3
//!
//! robust:
//!   residual_threshold: 20.0
//!   segments_threshold: 150.0
//!   max_trials: 1000
//!   length_threshold: 50.0
//! ```
//!
//! [`RegressionConfig`]: crate::extraction::RegressionConfig
//! [`RobustConfig`]: crate::extraction::RobustConfig

mod rekha;

pub use rekha::RekhaConfig;
