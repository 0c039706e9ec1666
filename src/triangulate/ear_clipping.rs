//! Triangulation by ear clipping.
//!
//! Repeatedly cuts "ears" off the polygon: convex corners whose triangle
//! contains no other vertex. Among the available ears, the one with the
//! largest interior-angle cosine (the most extruded corner) is clipped
//! first, which keeps the remaining polygon well shaped.
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
//! use partitum::triangulate::ear_clipping;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ]);
//!
//! let triangles = ear_clipping(&square).unwrap();
//! assert_eq!(triangles.len(), 2);
//! ```

use crate::error::PartitionError;
use crate::polygon::{remove_holes, Orientation, Polygon};
use crate::predicates::{is_convex, is_inside};
use crate::primitives::Point2;
use num_traits::Float;

/// A vertex in the doubly-linked clipping ring.
struct EarVertex<F> {
    p: Point2<F>,
    active: bool,
    ear: bool,
    /// Cosine of the interior angle; larger means more extruded.
    cos_angle: F,
    prev: usize,
    next: usize,
}

/// Triangulates a simple counter-clockwise polygon by ear clipping.
///
/// Returns n - 2 triangles covering the polygon exactly. Fails with
/// [`PartitionError::NoEarFound`] when no ear exists at some step, which
/// only happens for non-simple or degenerate input.
pub fn ear_clipping<F: Float>(poly: &Polygon<F>) -> Result<Vec<Polygon<F>>, PartitionError> {
    if !poly.is_valid() {
        return Err(PartitionError::TooFewVertices { count: poly.len() });
    }
    if poly.orientation() == Orientation::Degenerate {
        return Err(PartitionError::DegenerateInput);
    }

    let n = poly.len();
    if n == 3 {
        return Ok(vec![poly.clone()]);
    }

    let mut vertices: Vec<EarVertex<F>> = (0..n)
        .map(|i| EarVertex {
            p: poly.vertices[i],
            active: true,
            ear: false,
            cos_angle: F::zero(),
            prev: (i + n - 1) % n,
            next: (i + 1) % n,
        })
        .collect();
    for i in 0..n {
        update_vertex(&mut vertices, i);
    }

    let mut triangles = Vec::with_capacity(n - 2);
    for round in 0..n - 3 {
        // Pick the most extruded ear; the first one found wins ties.
        let mut ear: Option<usize> = None;
        for j in 0..n {
            if !vertices[j].active || !vertices[j].ear {
                continue;
            }
            ear = match ear {
                Some(e) if vertices[j].cos_angle <= vertices[e].cos_angle => Some(e),
                _ => Some(j),
            };
        }
        let ear = match ear {
            Some(e) => e,
            None => return Err(PartitionError::NoEarFound),
        };

        let prev = vertices[ear].prev;
        let next = vertices[ear].next;
        triangles.push(Polygon::triangle(
            vertices[prev].p,
            vertices[ear].p,
            vertices[next].p,
        ));

        vertices[ear].active = false;
        vertices[prev].next = next;
        vertices[next].prev = prev;

        if round == n - 4 {
            break;
        }
        update_vertex(&mut vertices, prev);
        update_vertex(&mut vertices, next);
    }

    for v in vertices.iter() {
        if v.active {
            triangles.push(Polygon::triangle(vertices[v.prev].p, v.p, vertices[v.next].p));
            break;
        }
    }

    Ok(triangles)
}

/// Triangulates a list of polygons that may contain holes.
///
/// Holes are removed first, then each resulting polygon is ear clipped.
pub fn ear_clipping_list<F: Float>(
    inpolys: &[Polygon<F>],
) -> Result<Vec<Polygon<F>>, PartitionError> {
    let outpolys = remove_holes(inpolys)?;
    let mut triangles = Vec::new();
    for poly in &outpolys {
        triangles.extend(ear_clipping(poly)?);
    }
    Ok(triangles)
}

/// Recomputes convexity, angle cosine, and ear status for one ring vertex.
fn update_vertex<F: Float>(vertices: &mut [EarVertex<F>], i: usize) {
    let p = vertices[i].p;
    let p1 = vertices[vertices[i].prev].p;
    let p3 = vertices[vertices[i].next].p;

    let convex = is_convex(p1, p, p3);

    let vec1 = (p1 - p).normalized();
    let vec3 = (p3 - p).normalized();
    let cos_angle = vec1.dot(vec3);

    let mut ear = convex;
    if ear {
        for other in vertices.iter() {
            if other.p == p || other.p == p1 || other.p == p3 {
                continue;
            }
            if is_inside(p1, p, p3, other.p) {
                ear = false;
                break;
            }
        }
    }

    let v = &mut vertices[i];
    v.cos_angle = cos_angle;
    v.ear = ear;
}
