//! Core types for the rekha segment extraction library.
//!
//! This module provides the fundamental geometric types used throughout the library:
//! - [`Point2D`]: Scan point / 2D vector
//! - [`Line2D`]: Infinite oriented line
//! - [`Segment2D`]: Bounded segment, the output unit of every finder
//! - [`math`]: Matrix inversion with pseudo-inverse fallback, centroid and covariance

mod line;
mod point;

pub mod math;

pub use line::{Line2D, Segment2D};
pub use point::Point2D;
