//! Iterative consensus segment extraction.

use log::{debug, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::config::RobustConfig;
use super::consensus::ConsensusLineFit;
use crate::core::{Line2D, Point2D, Segment2D};
use crate::error::Result;
use crate::extraction::projection::find_segments_with_density;
use crate::extraction::traits::SegmentFinder;

/// Segment finder that repeatedly extracts the dominant line.
///
/// Each round fits a consensus line to the remaining points, splits its
/// inliers into segments at gaps wider than `segments_threshold`, and removes
/// the inliers. Rounds continue while more than two points remain and the
/// previous round's mean density and length stay above their thresholds.
#[derive(Clone, Debug)]
pub struct RobustSegmentFinder {
    config: RobustConfig,
}

impl RobustSegmentFinder {
    /// Create a finder, validating the configuration.
    pub fn new(config: RobustConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &RobustConfig {
        &self.config
    }

    /// Find segments in an unordered point set.
    pub fn segments_in_points(&self, points: &[Point2D]) -> Result<Vec<Segment2D>> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let estimator =
            ConsensusLineFit::new(self.config.residual_threshold, self.config.max_trials);

        let mut remaining = points.to_vec();
        let mut segments = Vec::new();
        let mut density_valid = true;
        let mut length_valid = true;
        let mut rounds = 0usize;

        while remaining.len() > 2
            && (self.config.density_threshold.is_none() || density_valid)
            && (self.config.length_threshold.is_none() || length_valid)
        {
            let Some(fit) = estimator.fit(&remaining, &mut rng) else {
                trace!("Robust: no consensus among {} points", remaining.len());
                break;
            };
            rounds += 1;

            let origin = fit.model.origin;
            let line = Line2D::new(origin, origin + fit.model.direction)?;

            let mut inliers = Vec::new();
            let mut outliers = Vec::new();
            for (&point, &inlier) in remaining.iter().zip(&fit.inliers) {
                if inlier {
                    inliers.push(point);
                } else {
                    outliers.push(point);
                }
            }

            let found = find_segments_with_density(&line, &inliers, self.config.segments_threshold);
            if found.is_empty() {
                trace!("Robust: round {} found no segments", rounds);
                break;
            }

            let count = found.len() as f64;
            let avg_density = found.iter().map(|f| f.density).sum::<f64>() / count;
            let avg_length = found.iter().map(|f| f.segment.length()).sum::<f64>() / count;
            if let Some(threshold) = self.config.density_threshold {
                density_valid = avg_density > threshold;
            }
            if let Some(threshold) = self.config.length_threshold {
                length_valid = avg_length > threshold;
            }

            trace!(
                "Robust: round {}: {} inliers, {} segments, density {:.3}, length {:.3}",
                rounds,
                inliers.len(),
                found.len(),
                avg_density,
                avg_length
            );

            segments.extend(found.into_iter().map(|f| f.segment));
            remaining = outliers;
        }

        debug!(
            "Robust: {} points, {} rounds, {} segments, {} points left",
            points.len(),
            rounds,
            segments.len(),
            remaining.len()
        );

        Ok(segments)
    }
}

impl SegmentFinder for RobustSegmentFinder {
    fn find_segments(&self, points: &[Point2D]) -> Result<Vec<Segment2D>> {
        self.segments_in_points(points)
    }
}
