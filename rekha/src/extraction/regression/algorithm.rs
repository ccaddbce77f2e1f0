//! Sliding-window regression segmentation.
//!
//! 1. Fit a [`LinearRegressionEntity`] to every window of `window_size`
//!    consecutive points.
//! 2. Merge statistically compatible windows into intervals using the
//!    configured [`SegmentationStrategy`].
//! 3. Project each interval's points onto its fitted line and split at gaps.

use log::{debug, trace, warn};

use super::config::{RegressionConfig, SegmentationStrategy};
use super::coordinator::LinearRegressionCoordinator;
use super::entity::LinearRegressionEntity;
use crate::core::{Line2D, Point2D, Segment2D};
use crate::error::Result;
use crate::extraction::projection::find_segments;
use crate::extraction::traits::SegmentFinder;

/// Segment finder based on local regression windows and Mahalanobis merging.
///
/// # Example
/// ```
/// use rekha::core::Point2D;
/// use rekha::extraction::{RegressionConfig, RegressionSegmentFinder, SegmentationStrategy};
///
/// let config = RegressionConfig::default()
///     .with_merge_threshold(0.5)
///     .with_segment_eps(2.0)
///     .with_strategy(SegmentationStrategy::Simplified);
/// let finder = RegressionSegmentFinder::new(config).unwrap();
///
/// let points: Vec<Point2D> = (0..=20)
///     .map(|i| Point2D::new(i as f64, 0.5 * i as f64 + 1.0))
///     .collect();
/// let segments = finder.segments_in_points(&points).unwrap();
/// assert_eq!(segments.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct RegressionSegmentFinder {
    config: RegressionConfig,
}

impl RegressionSegmentFinder {
    /// Create a finder, validating the configuration.
    pub fn new(config: RegressionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &RegressionConfig {
        &self.config
    }

    /// Find segments in an ordered point sequence.
    pub fn segments_in_points(&self, points: &[Point2D]) -> Result<Vec<Segment2D>> {
        let intervals = self.segmentation(points)?;

        let mut segments = Vec::new();
        for interval in &intervals {
            let entity = interval.entity();
            let Some(interval_points) = entity.points() else {
                warn!(
                    "Regression: interval at {} has no points, skipped",
                    interval.start_index()
                );
                continue;
            };
            let line =
                Line2D::from_point_slope(Point2D::new(0.0, entity.offset()), entity.slope());
            segments.extend(find_segments(
                &line,
                interval_points,
                self.config.segment_eps,
            ));
        }

        debug!(
            "Regression: {} points, {} intervals, {} segments",
            points.len(),
            intervals.len(),
            segments.len()
        );

        Ok(segments)
    }

    /// Merge fitted windows into segmentation intervals.
    pub fn segmentation(&self, points: &[Point2D]) -> Result<Vec<LinearRegressionCoordinator>> {
        let coordinators = self.build_coordinators(points)?;
        trace!("Regression: fitted {} windows", coordinators.len());

        match self.config.strategy {
            SegmentationStrategy::Neighborhood { .. } => {
                self.segment_by_neighborhood(&coordinators)
            }
            SegmentationStrategy::Simplified => self.segment_sequentially(&coordinators),
        }
    }

    /// Fit one coordinator per window start in `[0, len - window_size)`.
    ///
    /// Single-point windows cannot carry a line, so a window size below 2
    /// yields no coordinators.
    pub fn build_coordinators(
        &self,
        points: &[Point2D],
    ) -> Result<Vec<LinearRegressionCoordinator>> {
        let window = self.config.window_size;
        if window < 2 {
            debug!("Regression: window size {} fits no lines", window);
            return Ok(Vec::new());
        }
        let count = points.len().saturating_sub(window);

        (0..count)
            .map(|start| {
                let entity = LinearRegressionEntity::fit(points[start..start + window].to_vec())?;
                Ok(LinearRegressionCoordinator::new(entity, start))
            })
            .collect()
    }

    fn segment_by_neighborhood(
        &self,
        coordinators: &[LinearRegressionCoordinator],
    ) -> Result<Vec<LinearRegressionCoordinator>> {
        let half = self.config.strategy.half_width();
        let mut intervals = Vec::new();
        let mut merging: Option<LinearRegressionCoordinator> = None;

        for i in 0..coordinators.len() {
            let lo = i.saturating_sub(half);
            let hi = (i + half).min(coordinators.len() - 1);
            let neighborhood = &coordinators[lo..=hi];

            let mean =
                LinearRegressionEntity::weighted_mean(neighborhood.iter().map(|c| c.entity()))?;
            let score: f64 = neighborhood
                .iter()
                .map(|c| LinearRegressionEntity::mahalanobis_distance_sqr(c.entity(), &mean))
                .sum();

            if score < self.config.merge_threshold {
                for coordinator in neighborhood {
                    merging = Some(match merging {
                        None => coordinator.clone(),
                        Some(current) => current.merge(coordinator)?,
                    });
                }
            } else if let Some(current) = merging.take() {
                intervals.push(current);
            }
        }

        intervals.extend(merging);
        Ok(intervals)
    }

    fn segment_sequentially(
        &self,
        coordinators: &[LinearRegressionCoordinator],
    ) -> Result<Vec<LinearRegressionCoordinator>> {
        let Some((first, rest)) = coordinators.split_first() else {
            return Ok(Vec::new());
        };

        let mut intervals = Vec::new();
        let mut merging = first.clone();

        for coordinator in rest {
            let distance = LinearRegressionEntity::mahalanobis_distance_sqr(
                merging.entity(),
                coordinator.entity(),
            );

            if distance < self.config.merge_threshold {
                merging = merging.merge(coordinator)?;
            } else {
                intervals.push(std::mem::replace(&mut merging, coordinator.clone()));
            }
        }

        intervals.push(merging);
        Ok(intervals)
    }
}

impl SegmentFinder for RegressionSegmentFinder {
    fn find_segments(&self, points: &[Point2D]) -> Result<Vec<Segment2D>> {
        self.segments_in_points(points)
    }
}
