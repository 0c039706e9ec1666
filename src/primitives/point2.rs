//! 2D point type with a pass-through vertex identifier.

use crate::primitives::Vec2;
use num_traits::Float;
use std::ops::{Add, Sub};

/// A point in the plane.
///
/// Each point carries an opaque `id` that the partitioning algorithms copy
/// around but never inspect; it lets callers trace every output vertex back
/// to an input vertex. Equality compares the coordinates bit-exactly and
/// ignores `id`.
#[derive(Debug, Clone, Copy)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
    /// User-specified vertex identifier, faithfully copied to every output
    /// vertex derived from this point.
    pub id: i32,
}

impl<F: Float> Point2<F> {
    /// Creates a new point with identifier 0.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y, id: 0 }
    }

    /// Creates a new point with the given identifier.
    #[inline]
    pub fn with_id(x: F, y: F, id: i32) -> Self {
        Self { x, y, id }
    }
}

impl<F: Float> PartialEq for Point2<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, offset: Vec2<F>) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            id: self.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_id() {
        let a: Point2<f64> = Point2::with_id(1.0, 2.0, 7);
        let b = Point2::with_id(1.0, 2.0, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_is_bit_exact() {
        let a: Point2<f64> = Point2::new(1.0, 2.0);
        let b = Point2::new(1.0 + 1e-15, 2.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_sub_gives_vector() {
        let a: Point2<f64> = Point2::new(3.0, 4.0);
        let b = Point2::new(1.0, 1.0);
        let v = a - b;
        assert_eq!(v, Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_add_keeps_id() {
        let a: Point2<f64> = Point2::with_id(1.0, 1.0, 9);
        let moved = a + Vec2::new(1.0, 0.0);
        assert_eq!(moved.id, 9);
    }
}
