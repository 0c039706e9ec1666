//! Convex decomposition with the Hertel-Mehlhorn algorithm.
//!
//! Triangulates the polygon by ear clipping, then deletes every diagonal
//! whose removal keeps both endpoints convex, greedily merging the faces on
//! either side. The result has at most four times the optimal number of
//! convex pieces and is frequently optimal in practice.
//!
//! # Complexity
//!
//! - Time: O(n^2) for a polygon with n vertices
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use partitum::{Point2, Polygon};
//! use partitum::decompose::convex_decomposition;
//!
//! // L-shaped polygon with one reflex corner.
//! let l_shape = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 2.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//!
//! let parts = convex_decomposition(&l_shape).unwrap();
//! assert_eq!(parts.len(), 2);
//! ```

use crate::error::PartitionError;
use crate::polygon::{remove_holes, Orientation, Polygon};
use crate::predicates::{is_convex, is_reflex};
use crate::triangulate::ear_clipping;
use num_traits::Float;

/// Partitions a simple counter-clockwise polygon into convex parts.
///
/// A polygon without reflex vertices is returned unchanged.
pub fn convex_decomposition<F: Float>(
    poly: &Polygon<F>,
) -> Result<Vec<Polygon<F>>, PartitionError> {
    if !poly.is_valid() {
        return Err(PartitionError::TooFewVertices { count: poly.len() });
    }
    if poly.orientation() == Orientation::Degenerate {
        return Err(PartitionError::DegenerateInput);
    }

    let n = poly.len();
    let mut has_reflex = false;
    for i in 0..n {
        let prev = poly.vertices[(i + n - 1) % n];
        let next = poly.vertices[(i + 1) % n];
        if is_reflex(prev, poly.vertices[i], next) {
            has_reflex = true;
            break;
        }
    }
    if !has_reflex {
        return Ok(vec![poly.clone()]);
    }

    let mut parts = ear_clipping(poly)?;

    // For each directed edge of each part, look for the part carrying the
    // reverse edge. The shared edge is a diagonal of the triangulation; drop
    // it when both endpoints stay convex in the merged boundary, then rescan
    // the merged part from its first edge.
    let mut i1 = 0;
    while i1 < parts.len() {
        let mut i11 = 0;
        while i11 < parts[i1].len() {
            let n1 = parts[i1].len();
            let d1 = parts[i1].vertices[i11];
            let i12 = (i11 + 1) % n1;
            let d2 = parts[i1].vertices[i12];

            let mut partner: Option<(usize, usize, usize)> = None;
            'search: for i2 in i1 + 1..parts.len() {
                let n2 = parts[i2].len();
                for i21 in 0..n2 {
                    if parts[i2].vertices[i21] != d2 {
                        continue;
                    }
                    let i22 = (i21 + 1) % n2;
                    if parts[i2].vertices[i22] != d1 {
                        continue;
                    }
                    partner = Some((i2, i21, i22));
                    break 'search;
                }
            }
            let (i2, i21, i22) = match partner {
                Some(found) => found,
                None => {
                    i11 += 1;
                    continue;
                }
            };

            let poly1 = &parts[i1];
            let poly2 = &parts[i2];
            let n2 = poly2.len();

            // The d1 endpoint after the merge: previous neighbor from poly1,
            // next neighbor from poly2.
            let p1 = poly1.vertices[(i11 + n1 - 1) % n1];
            let p3 = poly2.vertices[(i22 + 1) % n2];
            if !is_convex(p1, d1, p3) {
                i11 += 1;
                continue;
            }

            // The d2 endpoint, mirrored.
            let p1 = poly2.vertices[(i21 + n2 - 1) % n2];
            let p3 = poly1.vertices[(i12 + 1) % n1];
            if !is_convex(p1, d2, p3) {
                i11 += 1;
                continue;
            }

            // Walk poly1 from d2 around to d1, then poly2 from d1 around to
            // d2, skipping the shared edge entirely.
            let mut merged = Vec::with_capacity(n1 + n2 - 2);
            let mut j = i12;
            while j != i11 {
                merged.push(poly1.vertices[j]);
                j = (j + 1) % n1;
            }
            let mut j = i22;
            while j != i21 {
                merged.push(poly2.vertices[j]);
                j = (j + 1) % n2;
            }

            parts[i1] = Polygon::new(merged);
            parts.remove(i2);
            i11 = 0;
        }
        i1 += 1;
    }

    Ok(parts)
}

/// Partitions a list of polygons that may contain holes into convex parts.
///
/// Holes are removed first, then each resulting polygon is partitioned.
pub fn convex_decomposition_list<F: Float>(
    inpolys: &[Polygon<F>],
) -> Result<Vec<Polygon<F>>, PartitionError> {
    let outpolys = remove_holes(inpolys)?;
    let mut parts = Vec::new();
    for poly in &outpolys {
        parts.extend(convex_decomposition(poly)?);
    }
    Ok(parts)
}

/// Returns true if every corner of the polygon turns counter-clockwise or
/// is colinear.
pub(crate) fn all_corners_convex<F: Float>(poly: &Polygon<F>) -> bool {
    let n = poly.len();
    (0..n).all(|i| {
        let prev = poly.vertices[(i + n - 1) % n];
        let next = poly.vertices[(i + 1) % n];
        !is_reflex(prev, poly.vertices[i], next)
    })
}
