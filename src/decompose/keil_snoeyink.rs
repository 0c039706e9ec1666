//! Optimal convex decomposition with the Keil-Snoeyink algorithm.
//!
//! Minimizes the number of convex pieces by minimizing the number of
//! diagonals that resolve reflex corners. Interval states dp[i][j] carry the
//! best achievable count for the subpolygon bounded by the chain i..j plus
//! the diagonal (i, j), together with a compressed frontier of "pair"
//! records describing where the optimal sub-solutions attach along that
//! diagonal. Two asymmetric relaxations grow intervals from either end, and
//! a two-pass reconstruction walks the pair lists back into convex faces.
//!
//! For reference, see M. Keil, J. Snoeyink, "On the time bound for convex
//! decomposition of simple polygons", 1998.
//!
//! # Complexity
//!
//! - Time: O(n^3) for a polygon with n vertices
//! - Space: O(n^3)
//!
//! # Example
//!
//! ```
//! use partitum::{Point2, Polygon};
//! use partitum::decompose::optimal_convex_decomposition;
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
//! let parts = optimal_convex_decomposition(&l_shape).unwrap();
//! assert_eq!(parts.len(), 2);
//! ```

use crate::error::PartitionError;
use crate::polygon::{Orientation, Polygon};
use crate::predicates::{in_cone, intersects, is_reflex};
use crate::primitives::Point2;
use num_traits::Float;
use std::collections::VecDeque;

/// Weight of an interval no relaxation has reached yet.
const UNREACHED: i64 = i32::MAX as i64;

/// A ring vertex with its precomputed corner convexity.
struct Corner<F> {
    p: Point2<F>,
    convex: bool,
}

/// An index pair: a diagonal of the polygon, or a pair record on the
/// frontier of an interval state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pair {
    index1: usize,
    index2: usize,
}

impl Pair {
    #[inline]
    fn new(index1: usize, index2: usize) -> Self {
        Self { index1, index2 }
    }
}

/// Interval state for the subpolygon bounded by i..j plus diagonal (i, j).
#[derive(Clone)]
struct CvxState {
    visible: bool,
    weight: i64,
    pairs: VecDeque<Pair>,
}

impl Default for CvxState {
    fn default() -> Self {
        Self {
            visible: false,
            weight: 0,
            pairs: VecDeque::new(),
        }
    }
}

/// Partitions a simple counter-clockwise polygon into the minimum number of
/// convex parts.
pub fn optimal_convex_decomposition<F: Float>(
    poly: &Polygon<F>,
) -> Result<Vec<Polygon<F>>, PartitionError> {
    if !poly.is_valid() {
        return Err(PartitionError::TooFewVertices { count: poly.len() });
    }
    if poly.orientation() == Orientation::Degenerate {
        return Err(PartitionError::DegenerateInput);
    }

    let n = poly.len();
    let pts = &poly.vertices;
    if n == 3 {
        return Ok(vec![poly.clone()]);
    }

    let mut corners: Vec<Corner<F>> = (0..n)
        .map(|i| {
            let prev = pts[(i + n - 1) % n];
            let next = pts[(i + 1) % n];
            Corner {
                p: pts[i],
                convex: !is_reflex(prev, pts[i], next),
            }
        })
        .collect();
    // Vertex 0 anchors every relaxation chain; it must read as reflex.
    corners[0].convex = false;

    let mut dp: Vec<Vec<CvxState>> = vec![vec![CvxState::default(); n]; n];

    // Visibility of every candidate diagonal: interior cone at both
    // endpoints, no crossing with any polygon edge.
    for i in 0..n - 1 {
        let p1 = pts[i];
        for j in i + 1..n {
            dp[i][j].visible = true;
            dp[i][j].weight = if j == i + 1 { 0 } else { UNREACHED };
            if j == i + 1 {
                continue;
            }
            let p2 = pts[j];

            let i_prev = pts[(i + n - 1) % n];
            let i_next = pts[(i + 1) % n];
            if !in_cone(i_prev, p1, i_next, p2) {
                dp[i][j].visible = false;
                continue;
            }
            let j_prev = pts[(j + n - 1) % n];
            let j_next = pts[(j + 1) % n];
            if !in_cone(j_prev, p2, j_next, p1) {
                dp[i][j].visible = false;
                continue;
            }
            for k in 0..n {
                let e1 = pts[k];
                let e2 = pts[(k + 1) % n];
                if intersects(p1, p2, e1, e2) {
                    dp[i][j].visible = false;
                    break;
                }
            }
        }
    }

    // Triangles cost nothing and attach at their middle vertex.
    for i in 0..n - 2 {
        let j = i + 2;
        if dp[i][j].visible {
            dp[i][j].weight = 0;
            dp[i][j].pairs.push_back(Pair::new(i + 1, i + 1));
        }
    }
    // The closing edge bounds the whole polygon.
    dp[0][n - 1].visible = true;

    for gap in 3..n {
        // Extend intervals forward from reflex left endpoints.
        for i in 0..n - gap {
            if corners[i].convex {
                continue;
            }
            let k = i + gap;
            if !dp[i][k].visible {
                continue;
            }
            if !corners[k].convex {
                for j in i + 1..k {
                    type_a(i, j, k, &corners, &mut dp);
                }
            } else {
                for j in i + 1..k - 1 {
                    if corners[j].convex {
                        continue;
                    }
                    type_a(i, j, k, &corners, &mut dp);
                }
                type_a(i, k - 1, k, &corners, &mut dp);
            }
        }
        // Extend intervals backward into convex left endpoints.
        for k in gap..n {
            if corners[k].convex {
                continue;
            }
            let i = k - gap;
            if corners[i].convex && dp[i][k].visible {
                type_b(i, i + 1, k, &corners, &mut dp);
                for j in i + 2..k {
                    if corners[j].convex {
                        continue;
                    }
                    type_b(i, j, k, &corners, &mut dp);
                }
            }
        }
    }

    // First pass: walk the chosen splits from the outermost diagonal,
    // pruning each pair list down to the entries consistent with the
    // selection made one level up.
    let mut diagonals: VecDeque<Pair> = VecDeque::new();
    diagonals.push_front(Pair::new(0, n - 1));
    while let Some(diagonal) = diagonals.pop_front() {
        if diagonal.index2 - diagonal.index1 <= 1 {
            continue;
        }
        let state = &dp[diagonal.index1][diagonal.index2];
        let (front, back) = match (state.pairs.front().copied(), state.pairs.back().copied()) {
            (Some(front), Some(back)) => (front, back),
            _ => return Err(PartitionError::NoFeasibleSplit),
        };

        if !corners[diagonal.index1].convex {
            let j = back.index2;
            diagonals.push_front(Pair::new(j, diagonal.index2));
            if j - diagonal.index1 > 1 {
                if back.index1 != back.index2 {
                    loop {
                        let keep = match dp[diagonal.index1][j].pairs.back() {
                            Some(pair) => pair.index1 == back.index1,
                            None => return Err(PartitionError::NoFeasibleSplit),
                        };
                        if keep {
                            break;
                        }
                        dp[diagonal.index1][j].pairs.pop_back();
                    }
                }
                diagonals.push_front(Pair::new(diagonal.index1, j));
            }
        } else {
            let j = front.index1;
            diagonals.push_front(Pair::new(diagonal.index1, j));
            if diagonal.index2 - j > 1 {
                if front.index1 != front.index2 {
                    loop {
                        let keep = match dp[j][diagonal.index2].pairs.front() {
                            Some(pair) => pair.index2 == front.index2,
                            None => return Err(PartitionError::NoFeasibleSplit),
                        };
                        if keep {
                            break;
                        }
                        dp[j][diagonal.index2].pairs.pop_front();
                    }
                }
                diagonals.push_front(Pair::new(j, diagonal.index2));
            }
        }
    }

    // Second pass: gather the vertices of each convex face. A split whose
    // pair is compressed continues the same face; a real split starts a new
    // one.
    let mut parts = Vec::new();
    let mut diagonals: VecDeque<Pair> = VecDeque::new();
    diagonals.push_front(Pair::new(0, n - 1));
    while let Some(start) = diagonals.pop_front() {
        if start.index2 - start.index1 <= 1 {
            continue;
        }

        let mut indices = vec![start.index1, start.index2];
        let mut face: VecDeque<Pair> = VecDeque::new();
        face.push_front(start);

        while let Some(diagonal) = face.pop_front() {
            if diagonal.index2 - diagonal.index1 <= 1 {
                continue;
            }
            let state = &dp[diagonal.index1][diagonal.index2];
            let mut ij_real = true;
            let mut jk_real = true;
            let j;
            if !corners[diagonal.index1].convex {
                let back = match state.pairs.back() {
                    Some(pair) => *pair,
                    None => return Err(PartitionError::NoFeasibleSplit),
                };
                j = back.index2;
                if back.index1 != back.index2 {
                    ij_real = false;
                }
            } else {
                let front = match state.pairs.front() {
                    Some(pair) => *pair,
                    None => return Err(PartitionError::NoFeasibleSplit),
                };
                j = front.index1;
                if front.index1 != front.index2 {
                    jk_real = false;
                }
            }

            if ij_real {
                diagonals.push_back(Pair::new(diagonal.index1, j));
            } else {
                face.push_back(Pair::new(diagonal.index1, j));
            }
            if jk_real {
                diagonals.push_back(Pair::new(j, diagonal.index2));
            } else {
                face.push_back(Pair::new(j, diagonal.index2));
            }
            indices.push(j);
        }

        indices.sort_unstable();
        parts.push(Polygon::new(
            indices.iter().map(|&idx| pts[idx]).collect(),
        ));
    }

    Ok(parts)
}

/// Extends the interval (i, j) by absorbing the triangle (j, k), charging
/// one extra diagonal unless the new corner at j stays convex and the
/// frontier can be carried over.
fn type_a<F: Float>(
    i: usize,
    j: usize,
    k: usize,
    corners: &[Corner<F>],
    dp: &mut [Vec<CvxState>],
) {
    if !dp[i][j].visible {
        return;
    }
    let mut top = j;
    let mut w = dp[i][j].weight;

    if k - j > 1 {
        if !dp[j][k].visible {
            return;
        }
        w += dp[j][k].weight + 1;
    }

    if j - i > 1 {
        let mut last: Option<Pair> = None;
        for pair in dp[i][j].pairs.iter().rev() {
            if is_reflex(corners[pair.index2].p, corners[j].p, corners[k].p) {
                break;
            }
            last = Some(*pair);
        }
        match last {
            None => w += 1,
            Some(pair) => {
                if is_reflex(corners[k].p, corners[i].p, corners[pair.index1].p) {
                    w += 1;
                } else {
                    top = pair.index1;
                }
            }
        }
    }

    update_state(dp, i, k, w, top, j);
}

/// Mirror of [`type_a`]: extends the interval (j, k) backward across the
/// triangle (i, j).
fn type_b<F: Float>(
    i: usize,
    j: usize,
    k: usize,
    corners: &[Corner<F>],
    dp: &mut [Vec<CvxState>],
) {
    if !dp[j][k].visible {
        return;
    }
    let mut top = j;
    let mut w = dp[j][k].weight;

    if j - i > 1 {
        if !dp[i][j].visible {
            return;
        }
        w += dp[i][j].weight + 1;
    }

    if k - j > 1 {
        let mut last: Option<Pair> = None;
        for pair in dp[j][k].pairs.iter() {
            if is_reflex(corners[i].p, corners[j].p, corners[pair.index1].p) {
                break;
            }
            last = Some(*pair);
        }
        match last {
            None => w += 1,
            Some(pair) => {
                if is_reflex(corners[pair.index2].p, corners[k].p, corners[i].p) {
                    w += 1;
                } else {
                    top = pair.index2;
                }
            }
        }
    }

    update_state(dp, i, k, w, j, top);
}

/// Records a candidate solution for the interval (a, b).
///
/// A strictly better weight replaces the pair list outright; an equal weight
/// inserts the new pair while keeping the list sorted and dominance-free
/// (monotone in both coordinates).
fn update_state(dp: &mut [Vec<CvxState>], a: usize, b: usize, w: i64, i: usize, j: usize) {
    let state = &mut dp[a][b];
    if w > state.weight {
        return;
    }

    if w < state.weight {
        state.weight = w;
        state.pairs.clear();
        state.pairs.push_front(Pair::new(i, j));
    } else {
        if let Some(front) = state.pairs.front() {
            if i <= front.index1 {
                return;
            }
        }
        while let Some(front) = state.pairs.front() {
            if front.index2 < j {
                break;
            }
            state.pairs.pop_front();
        }
        state.pairs.push_front(Pair::new(i, j));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::convex_decomposition;
    use crate::decompose::hertel_mehlhorn::all_corners_convex;
    use approx::assert_relative_eq;

    fn total_area(parts: &[Polygon<f64>]) -> f64 {
        parts.iter().map(|p| p.signed_area()).sum()
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
    fn test_triangle_returns_itself() {
        let tri = Polygon::triangle(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 2.0),
        );
        let parts = optimal_convex_decomposition(&tri).unwrap();
        assert_eq!(parts, vec![tri]);
    }

    #[test]
    fn test_square_unchanged() {
        let square = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 10.0),
        ]);
        let parts = optimal_convex_decomposition(&square).unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].vertices, square.vertices);
    }

    #[test]
    fn test_l_shape_two_parts() {
        let parts = optimal_convex_decomposition(&l_shape()).unwrap();
        assert_eq!(parts.len(), 2);
        for part in &parts {
            assert!(all_corners_convex(part));
        }
        assert_relative_eq!(total_area(&parts), 12.0);
    }

    #[test]
    fn test_star_parts_convex_and_cover() {
        let parts = optimal_convex_decomposition(&star()).unwrap();
        for part in &parts {
            assert!(all_corners_convex(part));
        }
        assert_relative_eq!(total_area(&parts), star().signed_area());
    }

    #[test]
    fn test_never_more_parts_than_hertel_mehlhorn() {
        for poly in [l_shape(), star()] {
            let optimal = optimal_convex_decomposition(&poly).unwrap();
            let greedy = convex_decomposition(&poly).unwrap();
            assert!(optimal.len() <= greedy.len());
        }
    }

    #[test]
    fn test_degenerate_fails() {
        let colinear: Polygon<f64> = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ]);
        assert_eq!(
            optimal_convex_decomposition(&colinear),
            Err(PartitionError::DegenerateInput)
        );
    }

    #[test]
    fn test_comb_minimum_parts() {
        // A two-tooth comb. The outer notch corners each need their own
        // diagonal and the middle pair can share one, so the optimum is the
        // base plus the three teeth.
        let comb = Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(6.0, 0.0),
            Point2::new(6.0, 4.0),
            Point2::new(5.0, 4.0),
            Point2::new(5.0, 1.0),
            Point2::new(4.0, 1.0),
            Point2::new(4.0, 4.0),
            Point2::new(2.0, 4.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 4.0),
            Point2::new(0.0, 4.0),
        ]);
        let parts = optimal_convex_decomposition(&comb).unwrap();
        assert_eq!(parts.len(), 4);
        for part in &parts {
            assert!(all_corners_convex(part));
        }
        assert_relative_eq!(total_area(&parts), comb.signed_area());
    }
}
