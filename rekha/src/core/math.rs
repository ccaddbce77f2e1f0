//! Numerical helpers shared by the regression and robust finders.
//!
//! The central capability here is [`invert_or_pseudo_invert`]: covariance
//! matrices built from nearly collinear scan windows are routinely singular,
//! and every inversion in the crate goes through this function so the
//! fallback behaviour is the same everywhere.

use nalgebra::{Matrix2, SymmetricEigen};

use super::Point2D;

/// Relative cutoff for singular values in the pseudo-inverse.
///
/// Singular values below `PINV_RCOND * σ_max` are treated as zero.
pub const PINV_RCOND: f64 = 1e-15;

/// Check whether a 2x2 matrix must be treated as singular.
///
/// A matrix is singular when `|det| < f64::EPSILON`.
///
/// # Example
/// ```
/// use nalgebra::Matrix2;
/// use rekha::core::math::is_singular;
///
/// assert!(is_singular(&Matrix2::new(1.0, -1.0, -1.0, 1.0)));
/// assert!(!is_singular(&Matrix2::identity()));
/// ```
#[inline]
pub fn is_singular(matrix: &Matrix2<f64>) -> bool {
    matrix.determinant().abs() < f64::EPSILON
}

/// Moore-Penrose pseudo-inverse of a 2x2 matrix via SVD.
pub fn pseudo_inverse(matrix: &Matrix2<f64>) -> Matrix2<f64> {
    let svd = matrix.svd(true, true);
    let (Some(u), Some(v_t)) = (svd.u, svd.v_t) else {
        return Matrix2::zeros();
    };

    let sigma_max = svd.singular_values.max();
    let cutoff = PINV_RCOND * sigma_max;

    let mut sigma_inv = Matrix2::zeros();
    for i in 0..2 {
        let s = svd.singular_values[i];
        if s > cutoff && s > 0.0 {
            sigma_inv[(i, i)] = 1.0 / s;
        }
    }

    v_t.transpose() * sigma_inv * u.transpose()
}

/// Invert a 2x2 matrix, falling back to the pseudo-inverse when singular.
///
/// # Example
/// ```
/// use nalgebra::Matrix2;
/// use rekha::core::math::invert_or_pseudo_invert;
///
/// let inv = invert_or_pseudo_invert(&Matrix2::new(2.0, 0.0, 0.0, 4.0));
/// assert!((inv[(1, 1)] - 0.25).abs() < 1e-12);
///
/// // Rank-1 matrices never produce infinities
/// let pinv = invert_or_pseudo_invert(&Matrix2::new(1.0, 1.0, 1.0, 1.0));
/// assert!(pinv.iter().all(|v| v.is_finite()));
/// ```
pub fn invert_or_pseudo_invert(matrix: &Matrix2<f64>) -> Matrix2<f64> {
    if is_singular(matrix) {
        return pseudo_inverse(matrix);
    }
    matrix
        .try_inverse()
        .unwrap_or_else(|| pseudo_inverse(matrix))
}

/// Compute the centroid of a set of points.
///
/// Returns the origin for an empty slice.
pub fn compute_centroid(points: &[Point2D]) -> Point2D {
    if points.is_empty() {
        return Point2D::ZERO;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point2D::new(sx / n, sy / n)
}

/// Sample covariance matrix of point coordinates (`n - 1` denominator).
///
/// ```text
/// | var(x)    cov(x,y) |
/// | cov(x,y)  var(y)   |
/// ```
///
/// Returns a zero matrix for fewer than 2 points.
pub fn sample_covariance(points: &[Point2D]) -> Matrix2<f64> {
    if points.len() < 2 {
        return Matrix2::zeros();
    }

    let centroid = compute_centroid(points);
    let mut cxx = 0.0;
    let mut cyy = 0.0;
    let mut cxy = 0.0;

    for p in points {
        let dx = p.x - centroid.x;
        let dy = p.y - centroid.y;
        cxx += dx * dx;
        cyy += dy * dy;
        cxy += dx * dy;
    }

    let denom = (points.len() - 1) as f64;
    Matrix2::new(cxx / denom, cxy / denom, cxy / denom, cyy / denom)
}

/// Unit direction of largest spread (principal axis) around `centroid`.
///
/// Returns `None` when all points coincide.
pub fn principal_direction(points: &[Point2D], centroid: Point2D) -> Option<Point2D> {
    let mut cxx = 0.0;
    let mut cyy = 0.0;
    let mut cxy = 0.0;
    for p in points {
        let dx = p.x - centroid.x;
        let dy = p.y - centroid.y;
        cxx += dx * dx;
        cyy += dy * dy;
        cxy += dx * dy;
    }

    let eig = SymmetricEigen::new(Matrix2::new(cxx, cxy, cxy, cyy));
    let major = if eig.eigenvalues[0] >= eig.eigenvalues[1] { 0 } else { 1 };
    if eig.eigenvalues[major].is_nan() || eig.eigenvalues[major] <= 0.0 {
        return None;
    }

    let v = eig.eigenvectors.column(major);
    let dir = Point2D::new(v[0], v[1]);
    if dir.length() > 0.0 { Some(dir.normalized()) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_invert_regular() {
        let m = Matrix2::new(4.0, 1.0, 1.0, 3.0);
        let inv = invert_or_pseudo_invert(&m);
        let identity = m * inv;
        assert_relative_eq!(identity[(0, 0)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(identity[(0, 1)], 0.0, epsilon = 1e-12);
        assert_relative_eq!(identity[(1, 1)], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pseudo_inverse_rank_one() {
        // [[1, 1], [1, 1]]^+ = [[0.25, 0.25], [0.25, 0.25]]
        let m = Matrix2::new(1.0, 1.0, 1.0, 1.0);
        assert!(is_singular(&m));
        let pinv = invert_or_pseudo_invert(&m);
        for v in pinv.iter() {
            assert_relative_eq!(*v, 0.25, epsilon = 1e-12);
        }
        // Penrose condition A A+ A = A
        let back = m * pinv * m;
        assert_relative_eq!(back[(0, 1)], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pseudo_inverse_zero() {
        let pinv = invert_or_pseudo_invert(&Matrix2::zeros());
        assert!(pinv.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_sample_covariance() {
        let points = [
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(2.0, 2.0),
        ];
        let cov = sample_covariance(&points);
        assert_relative_eq!(cov[(0, 0)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(cov[(0, 1)], 1.0, epsilon = 1e-12);
        assert_relative_eq!(cov[(1, 1)], 1.0, epsilon = 1e-12);
        assert!(is_singular(&cov));
    }

    #[test]
    fn test_principal_direction() {
        let points = [
            Point2D::new(0.0, 1.0),
            Point2D::new(1.0, 1.0),
            Point2D::new(2.0, 1.0),
        ];
        let c = compute_centroid(&points);
        let dir = principal_direction(&points, c).unwrap();
        assert_relative_eq!(dir.x.abs(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(dir.y, 0.0, epsilon = 1e-12);

        let same = [Point2D::new(1.0, 1.0); 3];
        assert!(principal_direction(&same, Point2D::new(1.0, 1.0)).is_none());
    }
}
