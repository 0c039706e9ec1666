//! Hole removal by diagonal splicing.
//!
//! Merges every hole into its enclosing outer polygon through a visible
//! diagonal, leaving a list of simple polygons without holes. Holes are
//! consumed right-to-left: the hole vertex with the largest x is connected
//! to an outer vertex strictly to its right, preferring the connection
//! closest to the +x direction.
//!
//! Time complexity is O(h * n^2) for h holes over n total vertices.
//!
//! # Example
//!
//! ```
//! use partitum::{Point2, Polygon, remove_holes};
//!
//! let outer = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ]);
//! // Holes wind clockwise.
//! let hole = Polygon::hole(vec![
//!     Point2::new(3.0, 3.0),
//!     Point2::new(3.0, 7.0),
//!     Point2::new(7.0, 7.0),
//!     Point2::new(7.0, 3.0),
//! ]);
//!
//! let merged = remove_holes(&[outer, hole]).unwrap();
//! assert_eq!(merged.len(), 1);
//! assert_eq!(merged[0].vertices.len(), 10);
//! ```

use crate::error::PartitionError;
use crate::polygon::{Orientation, Polygon};
use crate::predicates::{in_cone, intersects};
use num_traits::Float;

/// Merges all holes into their enclosing polygons.
///
/// Returns an equivalent list of simple, hole-free polygons. Inputs without
/// any hole are passed through unchanged. Fails with
/// [`PartitionError::HoleNotVisible`] when no outer vertex can see a hole,
/// which means the hole is not enclosed or the input is malformed.
pub fn remove_holes<F: Float>(inpolys: &[Polygon<F>]) -> Result<Vec<Polygon<F>>, PartitionError> {
    for poly in inpolys {
        if !poly.is_valid() {
            return Err(PartitionError::TooFewVertices { count: poly.len() });
        }
        if poly.orientation() == Orientation::Degenerate {
            return Err(PartitionError::DegenerateInput);
        }
    }

    if !inpolys.iter().any(|p| p.is_hole()) {
        return Ok(inpolys.to_vec());
    }

    let mut polys: Vec<Polygon<F>> = inpolys.to_vec();

    loop {
        // The hole vertex with the largest x goes first; first found wins ties.
        let mut hole_sel: Option<(usize, usize)> = None;
        for pi in 0..polys.len() {
            if !polys[pi].is_hole() {
                continue;
            }
            for vi in 0..polys[pi].vertices.len() {
                let better = match hole_sel {
                    None => true,
                    Some((bpi, bvi)) => polys[pi].vertices[vi].x > polys[bpi].vertices[bvi].x,
                };
                if better {
                    hole_sel = Some((pi, vi));
                }
            }
        }
        let (hole_pi, hole_vi) = match hole_sel {
            Some(sel) => sel,
            None => break,
        };
        let hole_point = polys[hole_pi].vertices[hole_vi];

        // Find the outer vertex connected to the hole by an unobstructed
        // diagonal, preferring the direction closest to the +x axis.
        let mut best: Option<(usize, usize)> = None;
        for pi in 0..polys.len() {
            if polys[pi].is_hole() {
                continue;
            }
            let n = polys[pi].vertices.len();
            for vi in 0..n {
                let candidate = polys[pi].vertices[vi];
                if candidate.x <= hole_point.x {
                    continue;
                }
                let prev = polys[pi].vertices[(vi + n - 1) % n];
                let next = polys[pi].vertices[(vi + 1) % n];
                if !in_cone(prev, candidate, next, hole_point) {
                    continue;
                }
                if let Some((bpi, bvi)) = best {
                    let dir = (candidate - hole_point).normalized();
                    let best_dir = (polys[bpi].vertices[bvi] - hole_point).normalized();
                    if best_dir.x > dir.x {
                        continue;
                    }
                }

                let mut visible = true;
                'edges: for pj in 0..polys.len() {
                    if polys[pj].is_hole() {
                        continue;
                    }
                    let m = polys[pj].vertices.len();
                    for ei in 0..m {
                        let e1 = polys[pj].vertices[ei];
                        let e2 = polys[pj].vertices[(ei + 1) % m];
                        if intersects(hole_point, candidate, e1, e2) {
                            visible = false;
                            break 'edges;
                        }
                    }
                }
                if visible {
                    best = Some((pi, vi));
                }
            }
        }
        let (poly_pi, poly_vi) = match best {
            Some(sel) => sel,
            None => return Err(PartitionError::HoleNotVisible),
        };

        // Splice the hole ring into the outer boundary: outer up to the
        // bridge vertex, the whole hole ring wrapping back to its start,
        // then the outer boundary again from the bridge vertex.
        let outer = polys[poly_pi].clone();
        let hole = polys[hole_pi].clone();
        let hole_n = hole.vertices.len();

        let mut merged = Vec::with_capacity(outer.len() + hole_n + 2);
        merged.extend_from_slice(&outer.vertices[..=poly_vi]);
        for i in 0..=hole_n {
            merged.push(hole.vertices[(hole_vi + i) % hole_n]);
        }
        merged.extend_from_slice(&outer.vertices[poly_vi..]);

        polys.remove(hole_pi.max(poly_pi));
        polys.remove(hole_pi.min(poly_pi));
        polys.push(Polygon::new(merged));
    }

    Ok(polys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::Point2;
    use approx::assert_relative_eq;

    fn square_with_hole() -> Vec<Polygon<f64>> {
        let outer = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]);
        let hole = Polygon::hole(vec![
            Point2::new(3.0, 3.0),
            Point2::new(3.0, 7.0),
            Point2::new(7.0, 7.0),
            Point2::new(7.0, 3.0),
        ]);
        vec![outer, hole]
    }

    #[test]
    fn test_no_holes_passthrough() {
        let outer = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ]);
        let result = remove_holes(&[outer.clone()]).unwrap();
        assert_eq!(result, vec![outer]);
    }

    #[test]
    fn test_square_with_hole() {
        let result = remove_holes(&square_with_hole()).unwrap();
        assert_eq!(result.len(), 1);
        // Both bridge endpoints are duplicated.
        assert_eq!(result[0].vertices.len(), 10);
        assert!(!result[0].is_hole());
        // The spliced boundary encloses outer minus hole.
        assert_relative_eq!(result[0].signed_area(), 84.0);
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let once = remove_holes(&square_with_hole()).unwrap();
        let twice = remove_holes(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_two_holes() {
        let outer = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(20.0, 0.0),
            Point2::new(20.0, 10.0),
            Point2::new(0.0, 10.0),
        ]);
        let hole1 = Polygon::hole(vec![
            Point2::new(2.0, 4.0),
            Point2::new(2.0, 6.0),
            Point2::new(4.0, 6.0),
            Point2::new(4.0, 4.0),
        ]);
        let hole2 = Polygon::hole(vec![
            Point2::new(12.0, 4.0),
            Point2::new(12.0, 6.0),
            Point2::new(14.0, 6.0),
            Point2::new(14.0, 4.0),
        ]);

        let result = remove_holes(&[outer, hole1, hole2]).unwrap();
        assert_eq!(result.len(), 1);
        let total: f64 = result.iter().map(|p| p.signed_area()).sum();
        assert_relative_eq!(total, 200.0 - 4.0 - 4.0);
    }

    #[test]
    fn test_hole_not_enclosed_fails() {
        // A hole with no outer polygon to its right.
        let outer = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);
        let hole = Polygon::hole(vec![
            Point2::new(5.0, 0.0),
            Point2::new(5.0, 1.0),
            Point2::new(6.0, 1.0),
            Point2::new(6.0, 0.0),
        ]);
        assert_eq!(
            remove_holes(&[outer, hole]),
            Err(PartitionError::HoleNotVisible)
        );
    }

    #[test]
    fn test_too_few_vertices() {
        let line: Polygon<f64> =
            Polygon::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        assert_eq!(
            remove_holes(&[line]),
            Err(PartitionError::TooFewVertices { count: 2 })
        );
    }

    #[test]
    fn test_id_passthrough() {
        let outer = Polygon::new(vec![
            Point2::with_id(0.0, 0.0, 1),
            Point2::with_id(10.0, 0.0, 2),
            Point2::with_id(10.0, 10.0, 3),
            Point2::with_id(0.0, 10.0, 4),
        ]);
        let hole = Polygon::hole(vec![
            Point2::with_id(3.0, 3.0, 5),
            Point2::with_id(3.0, 7.0, 6),
            Point2::with_id(7.0, 7.0, 7),
            Point2::with_id(7.0, 3.0, 8),
        ]);

        let result = remove_holes(&[outer, hole]).unwrap();
        for v in &result[0].vertices {
            assert!((1..=8).contains(&v.id));
        }
    }
}
