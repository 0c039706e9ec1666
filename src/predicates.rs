//! Strict geometric predicates shared by all partitioning algorithms.
//!
//! Every test in this module uses strict inequalities: a colinear triple is
//! neither convex nor reflex, and segments that merely touch do not count as
//! intersecting. This gives a single consistent policy at the boundary
//! instead of reporting the same degeneracy twice, at the cost of rejecting
//! some degenerate but well-formed inputs outright.

use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Returns true if the turn p1 -> p2 -> p3 is strictly counter-clockwise.
///
/// Colinear triples return false.
#[inline]
pub fn is_convex<F: Float>(p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> bool {
    (p3.y - p1.y) * (p2.x - p1.x) - (p3.x - p1.x) * (p2.y - p1.y) > F::zero()
}

/// Returns true if the turn p1 -> p2 -> p3 is strictly clockwise.
///
/// Colinear triples return false.
#[inline]
pub fn is_reflex<F: Float>(p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> bool {
    (p3.y - p1.y) * (p2.x - p1.x) - (p3.x - p1.x) * (p2.y - p1.y) < F::zero()
}

/// Tests whether `p` lies inside or on the boundary of the oriented
/// triangle (p1, p2, p3).
pub fn is_inside<F: Float>(p1: Point2<F>, p2: Point2<F>, p3: Point2<F>, p: Point2<F>) -> bool {
    if is_convex(p1, p, p2) {
        return false;
    }
    if is_convex(p2, p, p3) {
        return false;
    }
    if is_convex(p3, p, p1) {
        return false;
    }
    true
}

/// Tests whether `p` lies inside the interior cone at `p2`.
///
/// The cone is the wedge bounded by the rays p2 -> p1 and p2 -> p3, taken on
/// the interior side of the corner (p1, p2, p3): a convex corner requires
/// `p` strictly left of both rays, a reflex corner left of at least one.
pub fn in_cone<F: Float>(p1: Point2<F>, p2: Point2<F>, p3: Point2<F>, p: Point2<F>) -> bool {
    if is_convex(p1, p2, p3) {
        is_convex(p1, p2, p) && is_convex(p2, p3, p)
    } else {
        is_convex(p1, p2, p) || is_convex(p2, p3, p)
    }
}

/// Tests whether the open segments (p11, p12) and (p21, p22) cross.
///
/// Segments that share an endpoint never intersect, and neither do segments
/// that touch without crossing.
pub fn intersects<F: Float>(
    p11: Point2<F>,
    p12: Point2<F>,
    p21: Point2<F>,
    p22: Point2<F>,
) -> bool {
    if p11 == p21 || p11 == p22 || p12 == p21 || p12 == p22 {
        return false;
    }

    let v1ort = Vec2::new(p12.y - p11.y, p11.x - p12.x);
    let v2ort = Vec2::new(p22.y - p21.y, p21.x - p22.x);

    let dot21 = (p21 - p11).dot(v1ort);
    let dot22 = (p22 - p11).dot(v1ort);
    let dot11 = (p11 - p21).dot(v2ort);
    let dot12 = (p12 - p21).dot(v2ort);

    !(dot11 * dot12 > F::zero() || dot21 * dot22 > F::zero())
}

/// Lexicographic "lower than" on points: y is the primary key, ties break
/// on x. Defines the sweep direction for the monotone algorithms.
#[inline]
pub fn below<F: Float>(p1: Point2<F>, p2: Point2<F>) -> bool {
    if p1.y < p2.y {
        return true;
    }
    p1.y == p2.y && p1.x < p2.x
}

/// Euclidean distance between two points.
#[inline]
pub fn distance<F: Float>(p1: Point2<F>, p2: Point2<F>) -> F {
    (p2 - p1).magnitude()
}
