//! Segment extraction from 2D scan points.
//!
//! # Algorithms
//!
//! - **Projection**: project points onto a line and split at gaps
//! - **Regression**: sliding-window least squares with Mahalanobis merging,
//!   for points in scan order
//! - **Robust**: repeated consensus line fitting, order independent
//!
//! Both finders implement [`SegmentFinder`], so they can be swapped at
//! runtime:
//!
//! ```
//! use rekha::extraction::{RegressionSegmentFinder, RobustSegmentFinder, SegmentFinder};
//!
//! let finders: Vec<Box<dyn SegmentFinder>> = vec![
//!     Box::new(RegressionSegmentFinder::new(Default::default()).unwrap()),
//!     Box::new(RobustSegmentFinder::new(Default::default()).unwrap()),
//! ];
//! assert_eq!(finders.len(), 2);
//! ```

pub mod projection;
pub mod regression;
pub mod robust;
pub mod traits;

pub use projection::{FoundSegment, ProjectedPoint, find_segments, find_segments_with_density};
pub use regression::{
    LinearRegressionCoordinator, LinearRegressionEntity, RegressionConfig,
    RegressionSegmentFinder, SegmentationStrategy,
};
pub use robust::{ConsensusFit, ConsensusLineFit, LineModel, RobustConfig, RobustSegmentFinder};
pub use traits::SegmentFinder;
