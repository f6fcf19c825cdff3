//! Axis-aligned scene bounds.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Bounds {
    /// Creates bounds from two corners, ordering components as needed.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Computes the bounds of a point set. Returns `None` if it is empty.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(Self::new(first, first), |b, p| b.include(*p)))
    }

    /// Returns bounds grown to contain `point`.
    #[must_use]
    pub fn include(self, point: Vec3) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Returns the smallest bounds containing both.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths along each axis.
    #[must_use]
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// Length of the diagonal, used as the scene length scale.
    #[must_use]
    pub fn length_scale(&self) -> f32 {
        self.extents().length()
    }
}

/// Unions an iterator of optional bounds.
pub fn union_all(items: impl IntoIterator<Item = Option<Bounds>>) -> Option<Bounds> {
    items
        .into_iter()
        .flatten()
        .reduce(Bounds::union)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_from_points_empty() {
        let points: Vec<Vec3> = Vec::new();
        assert!(Bounds::from_points(&points).is_none());
    }

    #[test]
    fn test_from_points() {
        let points = vec![Vec3::new(1.0, -2.0, 0.5), Vec3::new(-1.0, 3.0, 0.0)];
        let b = Bounds::from_points(&points).unwrap();
        assert_eq!(b.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(b.max, Vec3::new(1.0, 3.0, 0.5));
        assert_eq!(b.center(), Vec3::new(0.0, 0.5, 0.25));
    }

    #[test]
    fn test_union_all_skips_none() {
        let a = Bounds::new(Vec3::ZERO, Vec3::ONE);
        let b = Bounds::new(Vec3::splat(2.0), Vec3::splat(3.0));
        let u = union_all([Some(a), None, Some(b)]).unwrap();
        assert_eq!(u.min, Vec3::ZERO);
        assert_eq!(u.max, Vec3::splat(3.0));
        assert!(union_all([None, None]).is_none());
    }

    proptest! {
        #[test]
        fn prop_union_contains_both(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0, az in -100.0f32..100.0,
            bx in -100.0f32..100.0, by in -100.0f32..100.0, bz in -100.0f32..100.0,
        ) {
            let a = Bounds::new(Vec3::ZERO, Vec3::new(ax, ay, az));
            let b = Bounds::new(Vec3::ONE, Vec3::new(bx, by, bz));
            let u = a.union(b);
            prop_assert!(u.min.cmple(a.min).all() && u.min.cmple(b.min).all());
            prop_assert!(u.max.cmpge(a.max).all() && u.max.cmpge(b.max).all());
        }
    }
}
