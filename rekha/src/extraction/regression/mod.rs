//! Statistical sliding-window regression segmentation.
//!
//! Local lines are fitted over short windows of consecutive scan points.
//! Each fit carries the sample covariance of its points, which turns the
//! `(slope, offset)` estimates into comparable distributions: two windows
//! whose parameters are close in Mahalanobis distance lie on the same wall.
//!
//! # Components
//!
//! - [`LinearRegressionEntity`]: least-squares fit plus covariance
//! - [`LinearRegressionCoordinator`]: entity anchored at its scan index,
//!   merged with overlapping or touching neighbours
//! - [`RegressionSegmentFinder`]: window fitting, interval merging and
//!   segment extraction
//!
//! # Strategies
//!
//! | Strategy | Compares a window against |
//! |----------|---------------------------|
//! | `Neighborhood { size }` | precision-weighted mean of its `size` neighbours |
//! | `Simplified` | the interval accumulated so far |

mod algorithm;
mod config;
mod coordinator;
mod entity;

pub use algorithm::RegressionSegmentFinder;
pub use config::{RegressionConfig, SegmentationStrategy};
pub use coordinator::LinearRegressionCoordinator;
pub use entity::LinearRegressionEntity;
