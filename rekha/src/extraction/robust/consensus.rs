//! Random sample consensus over a two-point line model.
//!
//! Each trial samples two distinct points, hypothesizes the line through
//! them and counts points within the residual threshold. The best hypothesis
//! is refitted on its inliers by total least squares.

use rand::Rng;

use crate::core::Point2D;
use crate::core::math::{compute_centroid, principal_direction};

/// Line in parametric form `origin + t * direction`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineModel {
    /// Point on the line.
    pub origin: Point2D,
    /// Unit direction.
    pub direction: Point2D,
}

impl LineModel {
    /// Line through two points, or `None` if they coincide.
    pub fn through(a: Point2D, b: Point2D) -> Option<Self> {
        let delta = b - a;
        if delta.length() == 0.0 {
            return None;
        }
        Some(Self {
            origin: (a + b) * 0.5,
            direction: delta.normalized(),
        })
    }

    /// Total least squares fit: centroid and principal axis.
    pub fn fit(points: &[Point2D]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        let origin = compute_centroid(points);
        let direction = principal_direction(points, origin)?;
        Some(Self { origin, direction })
    }

    /// Orthogonal distance from `point` to the line.
    #[inline]
    pub fn residual(&self, point: Point2D) -> f64 {
        self.direction.cross(point - self.origin).abs()
    }
}

/// Result of a consensus fit.
#[derive(Clone, Debug, PartialEq)]
pub struct ConsensusFit {
    /// Line refitted on the inliers.
    pub model: LineModel,
    /// Inlier mask, parallel to the input points.
    pub inliers: Vec<bool>,
}

impl ConsensusFit {
    /// Number of inliers.
    pub fn inlier_count(&self) -> usize {
        self.inliers.iter().filter(|&&inlier| inlier).count()
    }
}

/// Consensus line estimator.
#[derive(Clone, Copy, Debug)]
pub struct ConsensusLineFit {
    residual_threshold: f64,
    max_trials: usize,
}

impl ConsensusLineFit {
    /// Create an estimator.
    pub fn new(residual_threshold: f64, max_trials: usize) -> Self {
        Self {
            residual_threshold,
            max_trials,
        }
    }

    /// Fit a line to `points`.
    ///
    /// Returns `None` for fewer than 2 points or when no trial produced a
    /// model with at least one inlier.
    pub fn fit<R: Rng>(&self, points: &[Point2D], rng: &mut R) -> Option<ConsensusFit> {
        let n = points.len();
        if n < 2 {
            return None;
        }

        let mut best: Option<(usize, f64, Vec<bool>)> = None;
        let mut mask = vec![false; n];

        for _ in 0..self.max_trials {
            let first = rng.random_range(0..n);
            let mut second = rng.random_range(0..n - 1);
            if second >= first {
                second += 1;
            }

            let Some(model) = LineModel::through(points[first], points[second]) else {
                continue;
            };

            let mut count = 0;
            let mut residual_sum = 0.0;
            for (inlier, &point) in mask.iter_mut().zip(points) {
                let residual = model.residual(point);
                *inlier = residual < self.residual_threshold;
                if *inlier {
                    count += 1;
                }
                residual_sum += residual;
            }

            let improves = match &best {
                None => count > 0,
                Some((best_count, best_sum, _)) => {
                    count > *best_count || (count == *best_count && residual_sum < *best_sum)
                }
            };
            if improves {
                best = Some((count, residual_sum, mask.clone()));
                if count == n {
                    break;
                }
            }
        }

        let (_, _, inliers) = best?;
        let inlier_points: Vec<Point2D> = points
            .iter()
            .zip(&inliers)
            .filter_map(|(&point, &inlier)| inlier.then_some(point))
            .collect();

        let model = LineModel::fit(&inlier_points)?;
        Some(ConsensusFit { model, inliers })
    }
}
