//! Monotone decomposition and triangulation.
//!
//! A top-to-bottom sweep classifies every vertex as start, end, split,
//! merge, or regular, and inserts a diagonal whenever a split or merge
//! vertex would break y-monotonicity. The status structure is an ordered
//! map of the edges crossing the sweep line; diagonals are inserted by
//! splicing mirrored vertex records into an index-linked ring, so each side
//! of the diagonal becomes its own face. Every face of the augmented ring
//! is y-monotone and is then triangulated in linear time with a stack.
//!
//! The algorithm is the textbook one from "Computational Geometry:
//! Algorithms and Applications" by de Berg, Cheong, van Kreveld, and
//! Overmars. Holes participate in the sweep directly, so no separate hole
//! removal pass is needed.
//!
//! # Complexity
//!
//! - Time: O(n log n) for n total vertices
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use partitum::{Point2, Polygon};
//! use partitum::triangulate::monotone;
//!
//! let l_shape = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.0),
//!     Point2::new(4.0, 2.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(2.0, 4.0),
//!     Point2::new(0.0, 4.0),
//! ]);
//!
//! let triangles = monotone(&l_shape).unwrap();
//! assert_eq!(triangles.len(), 4);
//! ```

use crate::error::PartitionError;
use crate::polygon::{Orientation, Polygon};
use crate::predicates::{below, is_convex};
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// A vertex record in the index-linked ring. Diagonal insertion appends two
/// mirrored records and rewires four links.
struct MonoVertex<F> {
    p: Point2<F>,
    previous: usize,
    next: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexType {
    Regular,
    Start,
    End,
    Split,
    Merge,
}

/// An edge crossing the sweep line, keyed by its endpoints.
///
/// The ordering compares horizontal positions at the sweep line and is only
/// meaningful between edges that cross it simultaneously; the sweep
/// maintains that invariant by inserting and erasing edges exactly at their
/// endpoint events. A degenerate edge with `p1 == p2` serves as the probe
/// for "the edge directly left of this point".
#[derive(Debug, Clone, Copy)]
struct SweepEdge<F> {
    p1: Point2<F>,
    p2: Point2<F>,
}

impl<F: Float> SweepEdge<F> {
    fn is_left_of(&self, other: &Self) -> bool {
        if other.p1.y == other.p2.y {
            if self.p1.y == self.p2.y {
                return self.p1.y < other.p1.y;
            }
            return is_convex(self.p1, self.p2, other.p1);
        }
        if self.p1.y == self.p2.y {
            return !is_convex(other.p1, other.p2, self.p1);
        }
        if self.p1.y < other.p1.y {
            return !is_convex(other.p1, other.p2, self.p1);
        }
        is_convex(self.p1, self.p2, other.p1)
    }
}

impl<F: Float> PartialEq for SweepEdge<F> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<F: Float> Eq for SweepEdge<F> {}

impl<F: Float> PartialOrd for SweepEdge<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Ord for SweepEdge<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.is_left_of(other) {
            Ordering::Less
        } else if other.is_left_of(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Decomposes a list of polygons (holes allowed) into y-monotone polygons.
///
/// Outer polygons must wind counter-clockwise and holes clockwise.
pub fn monotone_partition<F: Float>(
    inpolys: &[Polygon<F>],
) -> Result<Vec<Polygon<F>>, PartitionError> {
    let mut numvertices = 0;
    for poly in inpolys {
        if !poly.is_valid() {
            return Err(PartitionError::TooFewVertices { count: poly.len() });
        }
        if poly.orientation() == Orientation::Degenerate {
            return Err(PartitionError::DegenerateInput);
        }
        numvertices += poly.len();
    }

    // One ring per input polygon, all sharing the arena.
    let mut vertices: Vec<MonoVertex<F>> = Vec::with_capacity(numvertices * 3);
    let mut start = 0;
    for poly in inpolys {
        let n = poly.len();
        let end = start + n - 1;
        for (i, &p) in poly.vertices.iter().enumerate() {
            vertices.push(MonoVertex {
                p,
                previous: if i == 0 { end } else { start + i - 1 },
                next: if i == n - 1 { start } else { start + i + 1 },
            });
        }
        start = end + 1;
    }

    // Sweep order: falling y, ties on falling x.
    let mut priority: Vec<usize> = (0..numvertices).collect();
    priority.sort_by(|&a, &b| sweep_order(vertices[a].p, vertices[b].p));

    let mut types: Vec<VertexType> = Vec::with_capacity(numvertices * 3);
    for i in 0..numvertices {
        let v = &vertices[i];
        let vprev = vertices[v.previous].p;
        let vnext = vertices[v.next].p;
        let t = if below(vprev, v.p) && below(vnext, v.p) {
            if is_convex(vnext, vprev, v.p) {
                VertexType::Start
            } else {
                VertexType::Split
            }
        } else if below(v.p, vprev) && below(v.p, vnext) {
            if is_convex(vnext, vprev, v.p) {
                VertexType::End
            } else {
                VertexType::Merge
            }
        } else {
            VertexType::Regular
        };
        types.push(t);
    }

    let mut helpers: Vec<usize> = vec![0; numvertices];
    let mut edge_keys: Vec<Option<SweepEdge<F>>> = vec![None; numvertices];
    let mut tree: BTreeMap<SweepEdge<F>, usize> = BTreeMap::new();

    let mut ok = true;
    'sweep: for idx in 0..numvertices {
        let vindex = priority[idx];
        let mut vindex2 = vindex;

        match types[vindex] {
            VertexType::Start => {
                // Insert the downward edge, helper is the vertex itself.
                let key = SweepEdge {
                    p1: vertices[vindex].p,
                    p2: vertices[vertices[vindex].next].p,
                };
                tree.insert(key, vindex);
                edge_keys[vindex] = Some(key);
                helpers[vindex] = vindex;
            }

            VertexType::End => {
                let prev = vertices[vindex].previous;
                let key = match edge_keys[prev] {
                    Some(key) => key,
                    None => {
                        ok = false;
                        break 'sweep;
                    }
                };
                if types[helpers[prev]] == VertexType::Merge {
                    add_diagonal(
                        &mut vertices,
                        vindex,
                        helpers[prev],
                        &mut types,
                        &mut edge_keys,
                        &mut tree,
                        &mut helpers,
                    );
                }
                tree.remove(&key);
            }

            VertexType::Split => {
                let probe = SweepEdge {
                    p1: vertices[vindex].p,
                    p2: vertices[vindex].p,
                };
                let (ej_key, ej_upper) = match tree.range(..probe).next_back() {
                    Some((&key, &upper)) => (key, upper),
                    None => {
                        ok = false;
                        break 'sweep;
                    }
                };
                add_diagonal(
                    &mut vertices,
                    vindex,
                    helpers[ej_upper],
                    &mut types,
                    &mut edge_keys,
                    &mut tree,
                    &mut helpers,
                );
                vindex2 = vertices.len() - 2;
                // The diagonal may have renumbered the edge's upper vertex.
                let ej_upper = *tree.get(&ej_key).unwrap_or(&ej_upper);
                helpers[ej_upper] = vindex;

                let v2p = vertices[vindex2].p;
                let v2next = vertices[vindex2].next;
                let key = SweepEdge {
                    p1: v2p,
                    p2: vertices[v2next].p,
                };
                tree.insert(key, vindex2);
                edge_keys[vindex2] = Some(key);
                helpers[vindex2] = vindex2;
            }

            VertexType::Merge => {
                let prev = vertices[vindex].previous;
                let key = match edge_keys[prev] {
                    Some(key) => key,
                    None => {
                        ok = false;
                        break 'sweep;
                    }
                };
                if types[helpers[prev]] == VertexType::Merge {
                    add_diagonal(
                        &mut vertices,
                        vindex,
                        helpers[prev],
                        &mut types,
                        &mut edge_keys,
                        &mut tree,
                        &mut helpers,
                    );
                    vindex2 = vertices.len() - 2;
                }
                tree.remove(&key);

                let probe = SweepEdge {
                    p1: vertices[vindex].p,
                    p2: vertices[vindex].p,
                };
                let (ej_key, ej_upper) = match tree.range(..probe).next_back() {
                    Some((&key, &upper)) => (key, upper),
                    None => {
                        ok = false;
                        break 'sweep;
                    }
                };
                if types[helpers[ej_upper]] == VertexType::Merge {
                    add_diagonal(
                        &mut vertices,
                        vindex2,
                        helpers[ej_upper],
                        &mut types,
                        &mut edge_keys,
                        &mut tree,
                        &mut helpers,
                    );
                }
                let ej_upper = *tree.get(&ej_key).unwrap_or(&ej_upper);
                helpers[ej_upper] = vindex2;
            }

            VertexType::Regular => {
                if below(vertices[vindex].p, vertices[vertices[vindex].previous].p) {
                    // Interior lies to the right: close the upper edge,
                    // open the lower one.
                    let prev = vertices[vindex].previous;
                    let key = match edge_keys[prev] {
                        Some(key) => key,
                        None => {
                            ok = false;
                            break 'sweep;
                        }
                    };
                    if types[helpers[prev]] == VertexType::Merge {
                        add_diagonal(
                            &mut vertices,
                            vindex,
                            helpers[prev],
                            &mut types,
                            &mut edge_keys,
                            &mut tree,
                            &mut helpers,
                        );
                        vindex2 = vertices.len() - 2;
                    }
                    tree.remove(&key);

                    let v2p = vertices[vindex2].p;
                    let v2next = vertices[vindex2].next;
                    let key = SweepEdge {
                        p1: v2p,
                        p2: vertices[v2next].p,
                    };
                    tree.insert(key, vindex2);
                    edge_keys[vindex2] = Some(key);
                    helpers[vindex2] = vindex;
                } else {
                    // Interior lies to the left: update the helper of the
                    // edge left of the vertex.
                    let probe = SweepEdge {
                        p1: vertices[vindex].p,
                        p2: vertices[vindex].p,
                    };
                    let (ej_key, ej_upper) = match tree.range(..probe).next_back() {
                        Some((&key, &upper)) => (key, upper),
                        None => {
                            ok = false;
                            break 'sweep;
                        }
                    };
                    if types[helpers[ej_upper]] == VertexType::Merge {
                        add_diagonal(
                            &mut vertices,
                            vindex,
                            helpers[ej_upper],
                            &mut types,
                            &mut edge_keys,
                            &mut tree,
                            &mut helpers,
                        );
                    }
                    let ej_upper = *tree.get(&ej_key).unwrap_or(&ej_upper);
                    helpers[ej_upper] = vindex;
                }
            }
        }
    }

    if !ok {
        return Err(PartitionError::SweepLineError);
    }

    // Every face of the augmented ring is one monotone polygon.
    let total = vertices.len();
    let mut used = vec![false; total];
    let mut monotone_polys = Vec::new();
    for i in 0..total {
        if used[i] {
            continue;
        }
        used[i] = true;
        let mut points = vec![vertices[i].p];
        let mut cur = vertices[i].next;
        while cur != i {
            used[cur] = true;
            points.push(vertices[cur].p);
            cur = vertices[cur].next;
        }
        monotone_polys.push(Polygon::new(points));
    }

    Ok(monotone_polys)
}

/// Triangulates a simple counter-clockwise polygon by monotone
/// decomposition.
pub fn monotone<F: Float>(poly: &Polygon<F>) -> Result<Vec<Polygon<F>>, PartitionError> {
    monotone_list(std::slice::from_ref(poly))
}

/// Triangulates a list of polygons that may contain holes.
///
/// The monotone sweep consumes holes directly, so the list is decomposed as
/// a whole and each monotone piece is triangulated in linear time.
pub fn monotone_list<F: Float>(inpolys: &[Polygon<F>]) -> Result<Vec<Polygon<F>>, PartitionError> {
    let pieces = monotone_partition(inpolys)?;
    let mut triangles = Vec::new();
    for piece in &pieces {
        triangulate_monotone(piece, &mut triangles)?;
    }
    Ok(triangles)
}

fn sweep_order<F: Float>(p1: Point2<F>, p2: Point2<F>) -> Ordering {
    if p1.y > p2.y {
        Ordering::Less
    } else if p1.y < p2.y {
        Ordering::Greater
    } else if p1.x > p2.x {
        Ordering::Less
    } else if p1.x < p2.x {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Splices a diagonal into the ring by appending mirrored copies of both
/// endpoints, so the two sides of the diagonal become separate faces.
///
/// Vertex type, helper, and sweep-status bookkeeping carry over to the new
/// records, and an active edge owned by either endpoint is renumbered to
/// its mirror.
#[allow(clippy::too_many_arguments)]
fn add_diagonal<F: Float>(
    vertices: &mut Vec<MonoVertex<F>>,
    index1: usize,
    index2: usize,
    types: &mut Vec<VertexType>,
    edge_keys: &mut Vec<Option<SweepEdge<F>>>,
    tree: &mut BTreeMap<SweepEdge<F>, usize>,
    helpers: &mut Vec<usize>,
) {
    let newindex1 = vertices.len();
    let newindex2 = newindex1 + 1;

    let p1 = vertices[index1].p;
    let p2 = vertices[index2].p;
    let next1 = vertices[index1].next;
    let next2 = vertices[index2].next;

    vertices.push(MonoVertex {
        p: p1,
        previous: index2,
        next: next1,
    });
    vertices.push(MonoVertex {
        p: p2,
        previous: index1,
        next: next2,
    });
    vertices[next2].previous = newindex2;
    vertices[next1].previous = newindex1;
    vertices[index1].next = newindex2;
    vertices[index2].next = newindex1;

    let type1 = types[index1];
    let key1 = edge_keys[index1];
    let helper1 = helpers[index1];
    types.push(type1);
    edge_keys.push(key1);
    helpers.push(helper1);
    if let Some(key) = key1 {
        if let Some(upper) = tree.get_mut(&key) {
            *upper = newindex1;
        }
    }

    let type2 = types[index2];
    let key2 = edge_keys[index2];
    let helper2 = helpers[index2];
    types.push(type2);
    edge_keys.push(key2);
    helpers.push(helper2);
    if let Some(key) = key2 {
        if let Some(upper) = tree.get_mut(&key) {
            *upper = newindex2;
        }
    }
}

/// Triangulates one y-monotone polygon with the two-chain stack scan.
fn triangulate_monotone<F: Float>(
    poly: &Polygon<F>,
    triangles: &mut Vec<Polygon<F>>,
) -> Result<(), PartitionError> {
    if !poly.is_valid() {
        return Err(PartitionError::TooFewVertices { count: poly.len() });
    }

    let pts = &poly.vertices;
    let n = pts.len();
    if n == 3 {
        triangles.push(poly.clone());
        return Ok(());
    }

    let mut top = 0;
    let mut bottom = 0;
    for i in 1..n {
        if below(pts[i], pts[bottom]) {
            bottom = i;
        }
        if below(pts[top], pts[i]) {
            top = i;
        }
    }

    // Walking down either chain must strictly descend.
    let mut i = top;
    while i != bottom {
        let i2 = (i + 1) % n;
        if !below(pts[i2], pts[i]) {
            return Err(PartitionError::NotMonotone);
        }
        i = i2;
    }
    let mut i = bottom;
    while i != top {
        let i2 = (i + 1) % n;
        if !below(pts[i], pts[i2]) {
            return Err(PartitionError::NotMonotone);
        }
        i = i2;
    }

    // Merge the chains top to bottom; +1 marks the left chain, -1 the
    // right, 0 the two terminals.
    let mut chain = vec![0i8; n];
    let mut priority: Vec<usize> = Vec::with_capacity(n);
    priority.push(top);
    let mut left = (top + 1) % n;
    let mut right = (top + n - 1) % n;
    for _ in 1..n - 1 {
        if left == bottom || (right != bottom && below(pts[left], pts[right])) {
            priority.push(right);
            chain[right] = -1;
            right = (right + n - 1) % n;
        } else {
            priority.push(left);
            chain[left] = 1;
            left = (left + 1) % n;
        }
    }
    priority.push(bottom);

    let mut stack: Vec<usize> = Vec::with_capacity(n);
    stack.push(priority[0]);
    stack.push(priority[1]);

    for i in 2..n - 1 {
        let vindex = priority[i];
        if chain[vindex] != chain[stack[stack.len() - 1]] {
            // Opposite chain: fan out across the whole stack.
            for j in 0..stack.len() - 1 {
                if chain[vindex] == 1 {
                    triangles.push(Polygon::triangle(
                        pts[stack[j + 1]],
                        pts[stack[j]],
                        pts[vindex],
                    ));
                } else {
                    triangles.push(Polygon::triangle(
                        pts[stack[j]],
                        pts[stack[j + 1]],
                        pts[vindex],
                    ));
                }
            }
            let prev = priority[i - 1];
            stack.clear();
            stack.push(prev);
            stack.push(vindex);
        } else {
            // Same chain: cut off every corner that has become convex.
            let mut last = stack.len() - 1;
            while last > 0 {
                let top_idx = stack[last];
                let under = stack[last - 1];
                let cut = if chain[vindex] == 1 {
                    is_convex(pts[vindex], pts[under], pts[top_idx])
                } else {
                    is_convex(pts[vindex], pts[top_idx], pts[under])
                };
                if !cut {
                    break;
                }
                if chain[vindex] == 1 {
                    triangles.push(Polygon::triangle(pts[vindex], pts[under], pts[top_idx]));
                } else {
                    triangles.push(Polygon::triangle(pts[vindex], pts[top_idx], pts[under]));
                }
                last -= 1;
            }
            stack.truncate(last + 1);
            stack.push(vindex);
        }
    }

    // The bottom vertex closes out whatever remains on the stack.
    let vindex = priority[n - 1];
    for j in 0..stack.len() - 1 {
        if chain[stack[j + 1]] == 1 {
            triangles.push(Polygon::triangle(
                pts[stack[j]],
                pts[stack[j + 1]],
                pts[vindex],
            ));
        } else {
            triangles.push(Polygon::triangle(
                pts[stack[j + 1]],
                pts[stack[j]],
                pts[vindex],
            ));
        }
    }

    Ok(())
}

/// Returns true if the polygon is y-monotone under the sweep ordering.
#[cfg(test)]
fn is_y_monotone<F: Float>(poly: &Polygon<F>) -> bool {
    let pts = &poly.vertices;
    let n = pts.len();
    let mut top = 0;
    let mut bottom = 0;
    for i in 1..n {
        if below(pts[i], pts[bottom]) {
            bottom = i;
        }
        if below(pts[top], pts[i]) {
            top = i;
        }
    }
    let mut i = top;
    while i != bottom {
        let i2 = (i + 1) % n;
        if !below(pts[i2], pts[i]) {
            return false;
        }
        i = i2;
    }
    let mut i = bottom;
    while i != top {
        let i2 = (i + 1) % n;
        if !below(pts[i], pts[i2]) {
            return false;
        }
        i = i2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn total_area(polys: &[Polygon<f64>]) -> f64 {
        polys.iter().map(|p| p.signed_area()).sum()
    }

    fn l_shape() -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(4.0, 2.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 4.0),
            Point2::new(0.0, 4.0),
        ])
    }

    fn star() -> Polygon<f64> {
        Polygon::new(vec![
            Point2::new(5.0, 10.0),
            Point2::new(4.0, 6.0),
            Point2::new(0.0, 5.0),
            Point2::new(3.0, 3.0),
            Point2::new(2.0, 0.0),
            Point2::new(5.0, 2.0),
            Point2::new(8.0, 0.0),
            Point2::new(7.0, 3.0),
            Point2::new(10.0, 5.0),
            Point2::new(6.0, 6.0),
        ])
    }

    #[test]
    fn test_partition_square_is_single_piece() {
        let square = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]);
        let pieces = monotone_partition(&[square]).unwrap();
        assert_eq!(pieces.len(), 1);
        assert!(is_y_monotone(&pieces[0]));
    }

    #[test]
    fn test_partition_star_pieces_are_monotone() {
        let pieces = monotone_partition(&[star()]).unwrap();
        assert!(pieces.len() > 1);
        for piece in &pieces {
            assert!(is_y_monotone(piece));
        }
        assert_relative_eq!(total_area(&pieces), star().signed_area());
    }

    #[test]
    fn test_partition_with_hole() {
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
        let pieces = monotone_partition(&[outer, hole]).unwrap();
        for piece in &pieces {
            assert!(is_y_monotone(piece));
        }
        assert_relative_eq!(total_area(&pieces), 84.0);
    }

    #[test]
    fn test_triangle_returns_itself() {
        let tri = Polygon::triangle(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 2.0),
        );
        let triangles = monotone(&tri).unwrap();
        assert_eq!(triangles, vec![tri]);
    }

    #[test]
    fn test_square() {
        let square = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]);
        let triangles = monotone(&square).unwrap();
        assert_eq!(triangles.len(), 2);
        assert_relative_eq!(total_area(&triangles), 100.0);
    }

    #[test]
    fn test_l_shape() {
        let triangles = monotone(&l_shape()).unwrap();
        assert_eq!(triangles.len(), 4);
        assert_relative_eq!(total_area(&triangles), 12.0);
    }

    #[test]
    fn test_star() {
        let triangles = monotone(&star()).unwrap();
        assert_eq!(triangles.len(), 8);
        assert_relative_eq!(total_area(&triangles), star().signed_area());
        for tri in &triangles {
            assert_eq!(tri.len(), 3);
        }
    }

    #[test]
    fn test_list_with_hole() {
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
        let triangles = monotone_list(&[outer, hole]).unwrap();
        assert_eq!(triangles.len(), 8);
        assert_relative_eq!(total_area(&triangles), 84.0);
    }

    #[test]
    fn test_degenerate_fails() {
        let colinear: Polygon<f64> = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ]);
        assert_eq!(monotone(&colinear), Err(PartitionError::DegenerateInput));
    }

    #[test]
    fn test_non_monotone_piece_rejected() {
        // Directly triangulating a polygon that is not y-monotone fails
        // the chain verification.
        let zigzag = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(4.0, 0.0),
            Point2::new(6.0, 2.0),
            Point2::new(6.0, 5.0),
            Point2::new(0.0, 5.0),
        ]);
        let mut out = Vec::new();
        assert_eq!(
            triangulate_monotone(&zigzag, &mut out),
            Err(PartitionError::NotMonotone)
        );
    }

    #[test]
    fn test_generated_fans() {
        let mut state = 0x9e3779b97f4a7c15_u64;
        for &n in &[13, 29, 61] {
            let mut vertices = Vec::with_capacity(n);
            for i in 0..n {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                let radius = 1.0 + (state % 1024) as f64 / 1024.0;
                let angle = i as f64 / n as f64 * std::f64::consts::TAU;
                vertices.push(Point2::new(radius * angle.cos(), radius * angle.sin()));
            }
            let poly = Polygon::new(vertices);
            let triangles = monotone(&poly).unwrap();
            assert_relative_eq!(total_area(&triangles), poly.signed_area(), epsilon = 1e-9);
        }
    }
}
