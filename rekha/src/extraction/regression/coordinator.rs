//! Binding of a fitted entity to its position in the scan sequence.

use super::entity::LinearRegressionEntity;
use crate::error::{Error, Result};

/// A regression entity anchored at the index of its first point in the
/// ordered scan.
///
/// The entity's points cover the half-open index interval
/// `[start_index, start_index + points.len())`.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearRegressionCoordinator {
    entity: LinearRegressionEntity,
    start_index: usize,
}

impl LinearRegressionCoordinator {
    /// Anchor `entity` at `start_index`.
    pub fn new(entity: LinearRegressionEntity, start_index: usize) -> Self {
        Self {
            entity,
            start_index,
        }
    }

    /// The fitted entity.
    #[inline]
    pub fn entity(&self) -> &LinearRegressionEntity {
        &self.entity
    }

    /// Index of the entity's first point in the scan.
    #[inline]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Exclusive end of the covered interval, if the entity has points.
    pub fn end_index(&self) -> Option<usize> {
        self.entity
            .points()
            .map(|points| self.start_index + points.len())
    }

    /// Order two coordinators by start index.
    ///
    /// `self` is left only when it starts strictly earlier; on ties the
    /// argument is treated as left.
    fn ordered<'a>(&'a self, other: &'a Self) -> (&'a Self, &'a Self) {
        if self.start_index < other.start_index {
            (self, other)
        } else {
            (other, self)
        }
    }

    /// Whether [`merge`](Self::merge) would succeed.
    pub fn can_merge(&self, other: &Self) -> bool {
        let (left, right) = self.ordered(other);
        match (left.end_index(), right.entity.points()) {
            (Some(left_end), Some(_)) => left_end >= right.start_index,
            _ => false,
        }
    }

    /// Merge two overlapping or touching coordinators.
    ///
    /// The result holds the left entity's points followed by the part of the
    /// right entity's points that lies past the left interval, refitted as a
    /// fresh entity anchored at the left start index.
    pub fn merge(&self, other: &Self) -> Result<Self> {
        let (left, right) = self.ordered(other);

        let (Some(left_points), Some(right_points)) = (left.entity.points(), right.entity.points())
        else {
            return Err(Error::MissingPoints);
        };

        let left_end = left.start_index + left_points.len();
        if left_end < right.start_index {
            return Err(Error::DisjointIntervals {
                left_end,
                right_start: right.start_index,
            });
        }

        let right_end = right.start_index + right_points.len();
        let tail_len = right_end.saturating_sub(left_end);

        let mut points = Vec::with_capacity(left_points.len() + tail_len);
        points.extend_from_slice(left_points);
        points.extend_from_slice(&right_points[right_points.len() - tail_len..]);

        let entity = LinearRegressionEntity::fit(points)?;
        Ok(Self::new(entity, left.start_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point2D;
    use nalgebra::Matrix2;

    fn five_point_entity() -> LinearRegressionEntity {
        let points = [(2.0, 2.0), (2.0, 5.0), (6.0, 5.0), (7.0, 3.0), (4.0, 7.0)]
            .iter()
            .map(|&(x, y)| Point2D::new(x, y))
            .collect();
        LinearRegressionEntity::fit(points).unwrap()
    }

    fn merged_len(first: usize, second: usize) -> usize {
        let a = LinearRegressionCoordinator::new(five_point_entity(), first);
        let b = LinearRegressionCoordinator::new(five_point_entity(), second);
        let merged = a.merge(&b).unwrap();
        assert_eq!(merged.start_index(), first.min(second));
        merged.entity().points().unwrap().len()
    }

    #[test]
    fn test_merge_overlapping() {
        assert_eq!(merged_len(2, 6), 9);
    }

    #[test]
    fn test_merge_touching() {
        assert_eq!(merged_len(2, 7), 10);
    }

    #[test]
    fn test_merge_same_interval() {
        assert_eq!(merged_len(2, 2), 5);
    }

    #[test]
    fn test_merge_is_order_independent() {
        let a = LinearRegressionCoordinator::new(five_point_entity(), 2);
        let b = LinearRegressionCoordinator::new(five_point_entity(), 6);
        assert_eq!(a.merge(&b).unwrap(), b.merge(&a).unwrap());
    }

    #[test]
    fn test_merge_contained_interval() {
        let entity = five_point_entity();
        let outer = LinearRegressionCoordinator::new(entity.clone(), 0);
        let merged_outer = outer.merge(&LinearRegressionCoordinator::new(entity, 4)).unwrap();
        let inner = LinearRegressionCoordinator::new(five_point_entity(), 2);

        let merged = merged_outer.merge(&inner).unwrap();
        assert_eq!(merged.entity().points().unwrap().len(), 9);
        assert_eq!(merged.end_index(), Some(9));
    }

    #[test]
    fn test_merge_disjoint() {
        let a = LinearRegressionCoordinator::new(five_point_entity(), 2);
        let b = LinearRegressionCoordinator::new(five_point_entity(), 8);

        assert!(!a.can_merge(&b));
        assert!(matches!(
            a.merge(&b),
            Err(Error::DisjointIntervals {
                left_end: 7,
                right_start: 8
            })
        ));
    }

    #[test]
    fn test_merge_without_points() {
        let synthetic = LinearRegressionEntity::from_parameters(1.0, 0.0, Matrix2::identity());
        let a = LinearRegressionCoordinator::new(synthetic, 0);
        let b = LinearRegressionCoordinator::new(five_point_entity(), 1);

        assert!(!a.can_merge(&b));
        assert!(matches!(a.merge(&b), Err(Error::MissingPoints)));
    }

    #[test]
    fn test_can_merge() {
        let a = LinearRegressionCoordinator::new(five_point_entity(), 2);
        let b = LinearRegressionCoordinator::new(five_point_entity(), 7);
        assert!(a.can_merge(&b));
        assert!(b.can_merge(&a));
    }
}
