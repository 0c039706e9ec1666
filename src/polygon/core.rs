//! Core polygon type and winding operations.

use crate::primitives::Point2;
use num_traits::Float;

/// Winding of a polygon boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Vertices wind counter-clockwise (positive area).
    CounterClockwise,
    /// Vertices wind clockwise (negative area).
    Clockwise,
    /// The polygon has no measurable area.
    Degenerate,
}

/// A simple polygon, optionally marking a hole.
///
/// The boundary is implicitly closed: the last vertex connects back to the
/// first. Outer polygons are expected in counter-clockwise order and holes
/// in clockwise order; every hole must lie strictly inside an outer polygon.
///
/// # Example
///
/// ```
/// use partitum::{Point2, Polygon, Orientation};
///
/// let square = Polygon::new(vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(2.0, 0.0),
///     Point2::new(2.0, 2.0),
///     Point2::new(0.0, 2.0),
/// ]);
///
/// assert_eq!(square.orientation(), Orientation::CounterClockwise);
/// assert_eq!(square.area(), 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct Polygon<F> {
    /// The boundary vertices in order.
    pub vertices: Vec<Point2<F>>,
    hole: bool,
}

impl<F: Float> PartialEq for Polygon<F> {
    fn eq(&self, other: &Self) -> bool {
        self.hole == other.hole && self.vertices == other.vertices
    }
}

impl<F: Float> Polygon<F> {
    /// Creates an outer (non-hole) polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self {
            vertices,
            hole: false,
        }
    }

    /// Creates a hole polygon from vertices.
    #[inline]
    pub fn hole(vertices: Vec<Point2<F>>) -> Self {
        Self {
            vertices,
            hole: true,
        }
    }

    /// Creates a triangle from three points.
    #[inline]
    pub fn triangle(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self::new(vec![a, b, c])
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if this polygon marks a hole.
    #[inline]
    pub fn is_hole(&self) -> bool {
        self.hole
    }

    /// Sets or clears the hole flag.
    #[inline]
    pub fn set_hole(&mut self, hole: bool) {
        self.hole = hole;
    }

    /// Returns true if the polygon has enough vertices to bound an area.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
    }

    /// Returns the signed area using the shoelace formula.
    ///
    /// Positive for counter-clockwise winding, negative for clockwise.
    pub fn signed_area(&self) -> F {
        let n = self.vertices.len();
        if n < 3 {
            return F::zero();
        }

        let mut area = F::zero();
        for i in 0..n {
            let j = (i + 1) % n;
            area = area + self.vertices[i].x * self.vertices[j].y;
            area = area - self.vertices[i].y * self.vertices[j].x;
        }
        area / F::from(2.0).unwrap()
    }

    /// Returns the absolute area of the polygon.
    #[inline]
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the winding of the boundary.
    pub fn orientation(&self) -> Orientation {
        let area = self.signed_area();
        if area > F::zero() {
            Orientation::CounterClockwise
        } else if area < F::zero() {
            Orientation::Clockwise
        } else {
            Orientation::Degenerate
        }
    }

    /// Reverses the winding if it differs from `orientation`.
    ///
    /// A degenerate polygon is left untouched.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        let current = self.orientation();
        if current != Orientation::Degenerate && current != orientation {
            self.invert();
        }
    }

    /// Reverses the order of the vertices.
    #[inline]
    pub fn invert(&mut self) {
        self.vertices.reverse();
    }
}
