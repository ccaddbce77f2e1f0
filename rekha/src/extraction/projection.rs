//! Projection of points onto a line and gap-based grouping into segments.
//!
//! Both finders reduce their problem to "here is a line, here are the points
//! that belong to it": the points are projected onto the line, sorted by their
//! signed coordinate along it, and split wherever two consecutive coordinates
//! are further apart than a gap threshold. Every run of at least two points
//! becomes one segment spanning its first and last projection.
//!
//! ```text
//!   •     •  •        •   •        ← points
//! ──┼─────┼──┼────────┼───┼──────  ← line (p1 → p2)
//!   ├─────┴──┤  gap   ├───┤
//!   segment 1         segment 2
//! ```

use crate::core::{Line2D, Point2D, Segment2D};

/// A point together with its projection onto a reference line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    /// Original point.
    pub point: Point2D,
    /// Orthogonal projection onto the line.
    pub projection: Point2D,
    /// Signed distance of the projection from the line's reference point,
    /// positive toward the line's second defining point.
    pub line_coordinate: f64,
}

/// A segment found on a line, with the support it was built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoundSegment {
    /// Segment between the first and last projection of the run.
    pub segment: Segment2D,
    /// Number of points in the run.
    pub points_count: usize,
    /// `points_count / segment.length()`.
    pub density: f64,
}

/// Project every point onto `line`, sorted ascending by line coordinate.
///
/// A projection that coincides exactly with the line's reference point gets
/// coordinate 0. The sort is stable, so points with equal coordinates keep
/// their input order.
pub fn project_on_line(line: &Line2D, points: &[Point2D]) -> Vec<ProjectedPoint> {
    let origin = line.p1();

    let mut projected: Vec<ProjectedPoint> = points
        .iter()
        .map(|&point| {
            let projection = line.projection(point);
            let line_coordinate = if projection == origin {
                0.0
            } else {
                let distance = origin.distance(projection);
                if (projection - origin).dot(line.direction()) < 0.0 {
                    -distance
                } else {
                    distance
                }
            };
            ProjectedPoint {
                point,
                projection,
                line_coordinate,
            }
        })
        .collect();

    projected.sort_by(|a, b| a.line_coordinate.total_cmp(&b.line_coordinate));
    projected
}

/// Find segments on `line`, splitting wherever consecutive projections are
/// more than `epsilon` apart.
pub fn find_segments(line: &Line2D, points: &[Point2D], epsilon: f64) -> Vec<Segment2D> {
    find_segments_with_density(line, points, epsilon)
        .into_iter()
        .map(|found| found.segment)
        .collect()
}

/// Like [`find_segments`], keeping point count and density per segment.
///
/// Runs of a single point produce nothing, and neither do runs whose
/// projections all coincide (zero length, density undefined).
pub fn find_segments_with_density(
    line: &Line2D,
    points: &[Point2D],
    epsilon: f64,
) -> Vec<FoundSegment> {
    let line_points = project_on_line(line, points);

    let mut segments = Vec::new();
    let mut run_start: Option<usize> = None;
    let mut run_count = 0usize;

    for (i, current) in line_points.iter().enumerate() {
        let start = *run_start.get_or_insert(i);
        if start == i {
            run_count = 0;
        }
        run_count += 1;

        let closes_run = match line_points.get(i + 1) {
            None => true,
            Some(next) => (current.line_coordinate - next.line_coordinate).abs() > epsilon,
        };
        if !closes_run {
            continue;
        }

        if i != start {
            let segment = Segment2D::new(line_points[start].projection, current.projection);
            let length = segment.length();
            if length > 0.0 {
                segments.push(FoundSegment {
                    segment,
                    points_count: run_count,
                    density: run_count as f64 / length,
                });
            }
        }
        run_start = None;
    }

    segments
}
