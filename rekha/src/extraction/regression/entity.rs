//! Fitted line model over a window of scan points.

use nalgebra::{DMatrix, DVector, Matrix2, Vector2};

use crate::core::Point2D;
use crate::core::math::{invert_or_pseudo_invert, sample_covariance};
use crate::error::{Error, Result};

/// Least-squares line `y = slope * x + offset` with the sample covariance of
/// the fitted coordinates.
///
/// Entities are immutable. Entities produced by [`fit`](Self::fit) own their
/// points; synthetic entities (weighted means) carry none.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearRegressionEntity {
    slope: f64,
    offset: f64,
    covariance: Matrix2<f64>,
    points: Option<Vec<Point2D>>,
}

impl LinearRegressionEntity {
    /// Fit an entity to at least two points.
    ///
    /// The line is fitted like a degree-1 polynomial fit: the design matrix
    /// columns `[x, 1]` are scaled to unit norm and the minimum-norm least
    /// squares solution is taken, so windows with constant x still produce
    /// finite parameters.
    pub fn fit(points: Vec<Point2D>) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::InsufficientPoints {
                required: 2,
                actual: points.len(),
            });
        }

        let (slope, offset) = least_squares_line(&points);
        let covariance = sample_covariance(&points);

        Ok(Self {
            slope,
            offset,
            covariance,
            points: Some(points),
        })
    }

    /// Build an entity directly from its parameters, without points.
    pub fn from_parameters(slope: f64, offset: f64, covariance: Matrix2<f64>) -> Self {
        Self {
            slope,
            offset,
            covariance,
            points: None,
        }
    }

    /// Slope of the fitted line.
    #[inline]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Y-intercept of the fitted line.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// 2x2 covariance matrix.
    #[inline]
    pub fn covariance(&self) -> &Matrix2<f64> {
        &self.covariance
    }

    /// Points the entity was fitted to, if any.
    #[inline]
    pub fn points(&self) -> Option<&[Point2D]> {
        self.points.as_deref()
    }

    /// `(slope, offset)` as a vector.
    #[inline]
    pub fn parameters(&self) -> Vector2<f64> {
        Vector2::new(self.slope, self.offset)
    }

    /// Squared Euclidean distance between the `(slope, offset)` vectors.
    pub fn euclidean_distance_sqr(a: &Self, b: &Self) -> f64 {
        (b.parameters() - a.parameters()).norm_squared()
    }

    /// Squared Mahalanobis distance between the `(slope, offset)` vectors,
    /// normalized by the sum of both covariances.
    pub fn mahalanobis_distance_sqr(a: &Self, b: &Self) -> f64 {
        let diff = b.parameters() - a.parameters();
        let weight = invert_or_pseudo_invert(&(a.covariance + b.covariance));
        diff.dot(&(weight * diff))
    }

    /// Precision-weighted mean of several entities.
    ///
    /// Each entity votes with its inverse covariance; the combined
    /// covariance is the inverse of the summed precisions.
    pub fn weighted_mean<'a, I>(entities: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a LinearRegressionEntity>,
    {
        let mut precision_sum: Option<Matrix2<f64>> = None;
        let mut weighted_sum = Vector2::zeros();

        for entity in entities {
            let precision = invert_or_pseudo_invert(&entity.covariance);
            weighted_sum += precision * entity.parameters();
            precision_sum = Some(precision_sum.unwrap_or_else(Matrix2::zeros) + precision);
        }

        let precision_sum = precision_sum.ok_or(Error::EmptyEntities)?;
        let covariance = invert_or_pseudo_invert(&precision_sum);
        let mean = covariance * weighted_sum;

        Ok(Self::from_parameters(mean[0], mean[1], covariance))
    }
}

/// Minimum-norm least-squares fit of `y = slope * x + offset`.
fn least_squares_line(points: &[Point2D]) -> (f64, f64) {
    let n = points.len();
    let x_norm = points.iter().map(|p| p.x * p.x).sum::<f64>().sqrt();
    let x_scale = if x_norm > 0.0 { x_norm } else { 1.0 };
    let one_scale = (n as f64).sqrt();

    let design = DMatrix::from_fn(n, 2, |row, col| {
        if col == 0 {
            points[row].x / x_scale
        } else {
            1.0 / one_scale
        }
    });
    let rhs = DVector::from_iterator(n, points.iter().map(|p| p.y));

    let svd = design.clone().svd(true, true);
    let cutoff = n as f64 * f64::EPSILON * svd.singular_values.max();
    let scaled = match svd.solve(&rhs, cutoff) {
        Ok(solution) => Vector2::new(solution[0], solution[1]),
        Err(_) => {
            // Normal equations through the shared inversion path
            let gram = design.transpose() * &design;
            let gram = Matrix2::new(gram[(0, 0)], gram[(0, 1)], gram[(1, 0)], gram[(1, 1)]);
            let moment = design.transpose() * rhs;
            invert_or_pseudo_invert(&gram) * Vector2::new(moment[0], moment[1])
        }
    };

    (scaled[0] / x_scale, scaled[1] / one_scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn points(coords: &[(f64, f64)]) -> Vec<Point2D> {
        coords.iter().map(|&(x, y)| Point2D::new(x, y)).collect()
    }

    fn scattered_pair() -> (LinearRegressionEntity, LinearRegressionEntity) {
        let first = points(&[(2.0, 2.0), (2.0, 5.0), (6.0, 5.0), (7.0, 3.0), (4.0, 7.0)]);
        let second = points(&[(6.0, 5.0), (7.0, 4.0), (8.0, 7.0), (5.0, 6.0), (5.0, 4.0)]);
        (
            LinearRegressionEntity::fit(first).unwrap(),
            LinearRegressionEntity::fit(second).unwrap(),
        )
    }

    #[test]
    fn test_fit_diagonal() {
        let input = points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        let entity = LinearRegressionEntity::fit(input.clone()).unwrap();

        assert_eq!(entity.points(), Some(input.as_slice()));
        assert_relative_eq!(entity.slope(), (std::f64::consts::PI / 4.0).tan(), epsilon = 1e-6);
        assert_relative_eq!(entity.offset(), 0.0, epsilon = 1e-6);
        assert_relative_eq!(entity.covariance()[(0, 1)], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fit_noisy() {
        let entity = LinearRegressionEntity::fit(points(&[
            (0.0, 1.0),
            (1.0, 3.1),
            (2.0, 4.9),
            (3.0, 7.0),
        ]))
        .unwrap();
        assert_relative_eq!(entity.slope(), 1.98, epsilon = 1e-9);
        assert_relative_eq!(entity.offset(), 1.03, epsilon = 1e-9);
    }

    #[test]
    fn test_fit_constant_x_is_finite() {
        let entity =
            LinearRegressionEntity::fit(points(&[(3.0, 0.0), (3.0, 1.0), (3.0, 2.0)])).unwrap();
        assert!(entity.slope().is_finite());
        assert!(entity.offset().is_finite());
    }

    #[test]
    fn test_fit_too_few_points() {
        let err = LinearRegressionEntity::fit(points(&[(1.0, 1.0)])).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientPoints {
                required: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_singular_mahalanobis_distance_sqr() {
        let entity =
            LinearRegressionEntity::fit(points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])).unwrap();
        let d = LinearRegressionEntity::mahalanobis_distance_sqr(&entity, &entity);
        assert_relative_eq!(d, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_hard_mahalanobis_distance_sqr() {
        let (first, second) = scattered_pair();
        let d = LinearRegressionEntity::mahalanobis_distance_sqr(&first, &second);
        assert_relative_eq!(d, 0.543724758, epsilon = 1e-6);

        let swapped = LinearRegressionEntity::mahalanobis_distance_sqr(&second, &first);
        assert_relative_eq!(d, swapped, epsilon = 1e-12);
    }

    #[test]
    fn test_euclidean_distance_sqr() {
        let a = LinearRegressionEntity::from_parameters(1.0, 2.0, Matrix2::identity());
        let b = LinearRegressionEntity::from_parameters(4.0, 6.0, Matrix2::identity());
        assert_relative_eq!(
            LinearRegressionEntity::euclidean_distance_sqr(&a, &b),
            25.0,
            epsilon = 1e-12
        );
        // Identity covariances sum to 2I, halving the Euclidean distance
        assert_relative_eq!(
            LinearRegressionEntity::mahalanobis_distance_sqr(&a, &b),
            12.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_init_weighted_mean_entity() {
        let (first, second) = scattered_pair();
        let mean = LinearRegressionEntity::weighted_mean([&first, &second]).unwrap();

        assert!(mean.slope().is_finite());
        assert!(mean.offset().is_finite());
        assert!(mean.covariance().iter().all(|v| v.is_finite()));
        assert!(mean.points().is_none());
    }

    #[test]
    fn test_trivial_weighted_mean_entity() {
        let (entity, _) = scattered_pair();
        let mean = LinearRegressionEntity::weighted_mean([&entity]).unwrap();
        assert_relative_eq!(mean.slope(), entity.slope(), epsilon = 1e-6);
        assert_relative_eq!(mean.offset(), entity.offset(), epsilon = 1e-6);
    }

    #[test]
    fn test_weighted_mean_of_singular_entities() {
        let a = LinearRegressionEntity::fit(points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])).unwrap();
        let b = LinearRegressionEntity::fit(points(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)])).unwrap();
        let mean = LinearRegressionEntity::weighted_mean([&a, &b]).unwrap();
        assert!(mean.slope().is_finite());
        assert_relative_eq!(
            LinearRegressionEntity::mahalanobis_distance_sqr(&a, &mean),
            0.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_weighted_mean_empty() {
        let result = LinearRegressionEntity::weighted_mean(std::iter::empty());
        assert!(matches!(result, Err(Error::EmptyEntities)));
    }
}
