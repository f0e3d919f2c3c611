//! Vertex count and bounding box statistics

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::record::VertexPoint;

/// Axis-aligned bounding box over at least one vertex
///
/// A `Bounds` only exists once a vertex has been seen, so every instance
/// satisfies `min <= max` on each axis for non-NaN input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Bounds {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
    min_z: f64,
    max_z: f64,
}

impl Bounds {
    /// Creates a degenerate box containing a single point
    pub fn from_point(point: VertexPoint) -> Self {
        Self {
            min_x: point.x,
            max_x: point.x,
            min_y: point.y,
            max_y: point.y,
            min_z: point.z,
            max_z: point.z,
        }
    }

    /// Grows the box to contain `point`
    pub fn include(&mut self, point: VertexPoint) {
        self.min_x = self.min_x.min(point.x);
        self.max_x = self.max_x.max(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_y = self.max_y.max(point.y);
        self.min_z = self.min_z.min(point.z);
        self.max_z = self.max_z.max(point.z);
    }

    /// Minimum X coordinate
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    /// Maximum X coordinate
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Minimum Y coordinate
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    /// Maximum Y coordinate
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Minimum Z coordinate
    pub fn min_z(&self) -> f64 {
        self.min_z
    }

    /// Maximum Z coordinate
    pub fn max_z(&self) -> f64 {
        self.max_z
    }

    /// Size of the box along each axis
    pub fn extents(&self) -> (f64, f64, f64) {
        (
            self.max_x - self.min_x,
            self.max_y - self.min_y,
            self.max_z - self.min_z,
        )
    }
}

/// Result of a scan: how many vertices were seen and where they lie
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BoundingBoxStats {
    count: u64,
    bounds: Option<Bounds>,
}

impl BoundingBoxStats {
    /// Creates empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one vertex
    pub fn add(&mut self, point: VertexPoint) {
        self.count += 1;
        self.bounds = Some(match self.bounds {
            Some(mut bounds) => {
                bounds.include(point);
                bounds
            }
            None => Bounds::from_point(point),
        });
    }

    /// Number of vertex records counted
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Bounding box, or `None` when no vertex was counted
    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    /// Returns true when no vertex was counted
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl FromIterator<VertexPoint> for BoundingBoxStats {
    fn from_iter<I: IntoIterator<Item = VertexPoint>>(iter: I) -> Self {
        let mut stats = Self::new();
        for point in iter {
            stats.add(point);
        }
        stats
    }
}

impl fmt::Display for BoundingBoxStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.bounds {
            Some(b) => write!(
                f,
                "{} vertices, x [{:?}, {:?}], y [{:?}, {:?}], z [{:?}, {:?}]",
                self.count, b.min_x, b.max_x, b.min_y, b.max_y, b.min_z, b.max_z
            ),
            None => write!(f, "{} vertices, no bounds", self.count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = BoundingBoxStats::new();
        assert_eq!(stats.count(), 0);
        assert!(stats.bounds().is_none());
        assert!(stats.is_empty());
    }

    #[test]
    fn test_first_point_initializes_bounds() {
        let mut stats = BoundingBoxStats::new();
        stats.add(VertexPoint::new(-3.0, 4.0, 5.5));

        let bounds = stats.bounds().unwrap();
        assert_eq!(*bounds, Bounds::from_point(VertexPoint::new(-3.0, 4.0, 5.5)));
        assert_eq!((bounds.min_x(), bounds.max_x()), (-3.0, -3.0));
        assert_eq!((bounds.min_y(), bounds.max_y()), (4.0, 4.0));
        assert_eq!((bounds.min_z(), bounds.max_z()), (5.5, 5.5));
        assert_eq!(bounds.extents(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_negative_points_not_masked_by_zero() {
        // An all-negative cloud must not report 0.0 as its maximum
        let stats: BoundingBoxStats = [
            VertexPoint::new(-1.0, -2.0, -3.0),
            VertexPoint::new(-4.0, -5.0, -6.0),
        ]
        .into_iter()
        .collect();

        let bounds = stats.bounds().unwrap();
        assert_eq!(stats.count(), 2);
        assert_eq!(bounds.max_x(), -1.0);
        assert_eq!(bounds.max_y(), -2.0);
        assert_eq!(bounds.max_z(), -3.0);
        assert_eq!(bounds.min_x(), -4.0);
        assert_eq!(bounds.extents(), (3.0, 3.0, 3.0));
    }

    #[test]
    fn test_display() {
        let stats: BoundingBoxStats = [VertexPoint::new(1.0, 2.0, 3.0)].into_iter().collect();
        assert_eq!(
            stats.to_string(),
            "1 vertices, x [1.0, 1.0], y [2.0, 2.0], z [3.0, 3.0]"
        );
        assert_eq!(BoundingBoxStats::new().to_string(), "0 vertices, no bounds");
    }
}
