//! Reader for URG `.xy` scan dumps.
//!
//! One record per line:
//!
//! ```text
//! 2372536:(-114.352;-201.86;0),(-113.112;-202.558;0),
//! ```
//!
//! The leading integer is the scan timestamp, followed by `(x;y;z)` triples.
//! Whitespace around the list and a trailing comma are tolerated; `z` is
//! ignored.

use std::collections::BTreeMap;
use std::path::Path;

use log::{debug, trace};

use crate::area::Area;
use crate::core::Point2D;
use crate::error::{Error, Result};

/// Point filtering applied when building an [`Area`] from a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanFilter {
    /// Skip `(0, 0)` points, which the scanner reports for missing returns.
    /// Default: true
    pub ignore_zero_points: bool,

    /// Skip a point equal to the point read just before it.
    /// Default: true
    pub merge_duplicates: bool,
}

impl Default for ScanFilter {
    fn default() -> Self {
        Self {
            ignore_zero_points: true,
            merge_duplicates: true,
        }
    }
}

impl ScanFilter {
    /// Filter that keeps every point.
    pub fn keep_all() -> Self {
        Self {
            ignore_zero_points: false,
            merge_duplicates: false,
        }
    }

    /// Apply the filter to a point sequence.
    pub fn apply(&self, points: &[Point2D]) -> Vec<Point2D> {
        let mut kept = Vec::with_capacity(points.len());
        let mut previous: Option<Point2D> = None;

        for &point in points {
            let duplicate = self.merge_duplicates && previous == Some(point);
            let zero = self.ignore_zero_points && point == Point2D::ZERO;
            if !duplicate && !zero {
                kept.push(point);
            }
            previous = Some(point);
        }

        kept
    }
}

/// Parse one record into its timestamp and points.
pub fn parse_line(line: &str) -> Result<(i64, Vec<Point2D>)> {
    let mut parts = line.split(':');
    let (Some(stamp), Some(list), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::Parse(
            "undefined urg xy format: 'timestamp: list' expected".to_string(),
        ));
    };

    let timestamp: i64 = stamp
        .trim()
        .parse()
        .map_err(|_| Error::Parse(format!("timestamp must be an integer, got '{}'", stamp)))?;

    let list = list.trim_matches(|c: char| matches!(c, ' ' | ',' | '\t' | '\n' | '\r'));
    let points = list
        .split(',')
        .map(parse_point)
        .collect::<Result<Vec<_>>>()?;

    Ok((timestamp, points))
}

fn parse_point(text: &str) -> Result<Point2D> {
    let inner = text.trim_matches(|c: char| c.is_whitespace() || c == '(' || c == ')');
    let components: Vec<&str> = inner.split(';').collect();
    let [x, y, _z] = components.as_slice() else {
        return Err(Error::Parse(format!(
            "undefined urg xy format: (x;y;z) expected, got '{}'",
            text.trim()
        )));
    };

    let coordinate = |s: &str| {
        s.trim()
            .parse::<f64>()
            .map_err(|_| Error::Parse(format!("invalid coordinate '{}'", s.trim())))
    };
    Ok(Point2D::new(coordinate(x)?, coordinate(y)?))
}

/// Read every record of a `.xy` file, keyed by timestamp.
///
/// Blank lines are skipped. A repeated timestamp keeps the last record.
pub fn read_xy_file(path: &Path) -> Result<BTreeMap<i64, Vec<Point2D>>> {
    let contents = std::fs::read_to_string(path)?;

    let mut records = BTreeMap::new();
    for (number, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let (timestamp, points) = parse_line(line).map_err(|e| match e {
            Error::Parse(msg) => Error::Parse(format!("{}:{}: {}", path.display(), number + 1, msg)),
            other => other,
        })?;
        trace!("Record {}: {} points", timestamp, points.len());
        records.insert(timestamp, points);
    }

    debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Read a single-record `.xy` file into an [`Area`] of points.
pub fn read_area(path: &Path, filter: ScanFilter) -> Result<Area> {
    let records = read_xy_file(path)?;
    if records.len() != 1 {
        return Err(Error::Parse(format!(
            "area construction needs exactly one record, {} has {}",
            path.display(),
            records.len()
        )));
    }

    let mut area = Area::new();
    if let Some(points) = records.values().next() {
        let kept = filter.apply(points);
        debug!("Area: kept {} of {} points", kept.len(), points.len());
        area.extend_objects(kept);
    }
    Ok(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    #[test]
    fn test_parse_one_point() {
        let (timestamp, points) = parse_line("222:(1;2;0)").unwrap();
        assert_eq!(timestamp, 222);
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(points[0].y, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_parse_two_points_and_strip() {
        let (timestamp, points) = parse_line("222: (1;2;0), (3;2;0),  \t\n").unwrap();
        assert_eq!(timestamp, 222);
        assert_eq!(points, vec![Point2D::new(1.0, 2.0), Point2D::new(3.0, 2.0)]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_line("(1;2;0)"), Err(Error::Parse(_))));
        assert!(matches!(parse_line("1:2:(1;2;0)"), Err(Error::Parse(_))));
        assert!(matches!(parse_line("abc:(1;2;0)"), Err(Error::Parse(_))));
        assert!(matches!(parse_line("1:(1;2)"), Err(Error::Parse(_))));
        assert!(matches!(parse_line("1:(1;x;0)"), Err(Error::Parse(_))));
        assert!(matches!(parse_line("1:"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_filter() {
        let points = [
            Point2D::new(1.0, 1.0),
            Point2D::new(1.0, 1.0),
            Point2D::ZERO,
            Point2D::new(2.0, 1.0),
            Point2D::new(1.0, 1.0),
        ];

        let kept = ScanFilter::default().apply(&points);
        assert_eq!(
            kept,
            vec![
                Point2D::new(1.0, 1.0),
                Point2D::new(2.0, 1.0),
                Point2D::new(1.0, 1.0)
            ]
        );

        assert_eq!(ScanFilter::keep_all().apply(&points).len(), 5);
    }

    #[test]
    fn test_read_area_one_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "2372536:(-114.352;-201.86;0),(-113.112;-202.558;0),").unwrap();

        let area = read_area(file.path(), ScanFilter::default()).unwrap();
        assert_eq!(
            area.get_objects::<Point2D>(),
            vec![
                Point2D::new(-114.352, -201.86),
                Point2D::new(-113.112, -202.558)
            ]
        );
    }

    #[test]
    fn test_read_xy_file_multiple_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.xy");
        std::fs::write(&path, "20:(1;1;0)\n\n10:(0;0;0),(2;2;0)\n").unwrap();

        let records = read_xy_file(&path).unwrap();
        assert_eq!(records.keys().copied().collect::<Vec<_>>(), vec![10, 20]);
        assert_eq!(records[&10].len(), 2);

        assert!(matches!(
            read_area(&path, ScanFilter::default()),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_xy_file(&dir.path().join("missing.xy"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
