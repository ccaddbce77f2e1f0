//! Traits for segment finding algorithms.
//!
//! This module defines the `SegmentFinder` trait which allows the regression
//! and robust finders to be used interchangeably, either on a point slice or
//! on an [`Area`].

use log::debug;

use crate::area::Area;
use crate::core::{Point2D, Segment2D};
use crate::error::Result;

/// Trait for segment finding algorithms.
///
/// # Example
///
/// ```
/// use rekha::area::Area;
/// use rekha::core::{Point2D, Segment2D};
/// use rekha::extraction::{RegressionConfig, RegressionSegmentFinder, SegmentFinder, SegmentationStrategy};
///
/// let finder = RegressionSegmentFinder::new(
///     RegressionConfig::default()
///         .with_merge_threshold(0.5)
///         .with_segment_eps(2.0)
///         .with_strategy(SegmentationStrategy::Simplified),
/// )
/// .unwrap();
///
/// let mut area = Area::new();
/// area.extend_objects((0..10).map(|i| Point2D::new(i as f64, 2.0 * i as f64)));
///
/// let added = finder.find(&mut area).unwrap();
/// assert_eq!(added, 1);
/// assert_eq!(area.count::<Segment2D>(), 1);
/// ```
pub trait SegmentFinder: Send + Sync {
    /// Find segments in a point sequence.
    ///
    /// Points should be in scan order for finders that rely on adjacency.
    fn find_segments(&self, points: &[Point2D]) -> Result<Vec<Segment2D>>;

    /// Read all points from `area`, append the found segments to it and
    /// return how many were added.
    fn find(&self, area: &mut Area) -> Result<usize> {
        let points = area.slice::<Point2D>();
        let segments = self.find_segments(points)?;
        let added = segments.len();

        debug!("Adding {} segments to area", added);
        area.extend_objects(segments);
        Ok(added)
    }
}
