//! Minimum-weight triangulation by dynamic programming.
//!
//! Finds the triangulation that minimizes the total length of the internal
//! diagonals. A visibility table over all vertex pairs feeds the classic
//! interval recurrence: the best split vertex k for the subpolygon (i, j)
//! combines the optimal solutions of (i, k) and (k, j).
//!
//! # Complexity
//!
//! - Time: O(n^3) for a polygon with n vertices
//! - Space: O(n^2)
//!
//! # Example
//!
//! ```
//! use partitum::{Point2, Polygon};
//! use partitum::triangulate::min_weight;
//!
//! let square = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ]);
//!
//! let triangles = min_weight(&square).unwrap();
//! assert_eq!(triangles.len(), 2);
//! ```

use crate::error::PartitionError;
use crate::polygon::{Orientation, Polygon};
use crate::predicates::{distance, in_cone, intersects};
use num_traits::Float;
use std::collections::VecDeque;

/// Interval state: can the diagonal (i, j) be drawn, and if so, through
/// which split vertex at what accumulated weight.
#[derive(Clone)]
struct DpState<F> {
    visible: bool,
    weight: F,
    best_vertex: Option<usize>,
}

/// Triangulates a simple counter-clockwise polygon minimizing total
/// diagonal length.
pub fn min_weight<F: Float>(poly: &Polygon<F>) -> Result<Vec<Polygon<F>>, PartitionError> {
    if !poly.is_valid() {
        return Err(PartitionError::TooFewVertices { count: poly.len() });
    }
    if poly.orientation() == Orientation::Degenerate {
        return Err(PartitionError::DegenerateInput);
    }

    let n = poly.len();
    let pts = &poly.vertices;

    // Triangular table: dp[j][i] describes the pair (i, j) with i < j.
    let mut dp: Vec<Vec<DpState<F>>> = (0..n)
        .map(|j| {
            vec![
                DpState {
                    visible: true,
                    weight: F::zero(),
                    best_vertex: None,
                };
                j
            ]
        })
        .collect();

    for i in 0..n - 1 {
        let p1 = pts[i];
        for j in i + 2..n {
            let p2 = pts[j];

            // The diagonal must leave both endpoints through the interior
            // cone and cross no polygon edge.
            let i_prev = pts[(i + n - 1) % n];
            let i_next = pts[(i + 1) % n];
            if !in_cone(i_prev, p1, i_next, p2) {
                dp[j][i].visible = false;
                continue;
            }
            let j_prev = pts[(j + n - 1) % n];
            let j_next = pts[(j + 1) % n];
            if !in_cone(j_prev, p2, j_next, p1) {
                dp[j][i].visible = false;
                continue;
            }
            for k in 0..n {
                let e1 = pts[k];
                let e2 = pts[(k + 1) % n];
                if intersects(p1, p2, e1, e2) {
                    dp[j][i].visible = false;
                    break;
                }
            }
        }
    }
    // The closing edge (0, n - 1) bounds the whole polygon.
    dp[n - 1][0] = DpState {
        visible: true,
        weight: F::zero(),
        best_vertex: None,
    };

    for gap in 2..n {
        for i in 0..n - gap {
            let j = i + gap;
            if !dp[j][i].visible {
                continue;
            }
            let mut best: Option<(usize, F)> = None;
            for k in i + 1..j {
                if !dp[k][i].visible || !dp[j][k].visible {
                    continue;
                }
                // Diagonals that are polygon edges contribute no weight.
                let d1 = if k <= i + 1 {
                    F::zero()
                } else {
                    distance(pts[i], pts[k])
                };
                let d2 = if j <= k + 1 {
                    F::zero()
                } else {
                    distance(pts[k], pts[j])
                };
                let weight = dp[k][i].weight + dp[j][k].weight + d1 + d2;

                let better = match best {
                    None => true,
                    Some((_, best_weight)) => weight < best_weight,
                };
                if better {
                    best = Some((k, weight));
                }
            }
            match best {
                Some((k, weight)) => {
                    dp[j][i].best_vertex = Some(k);
                    dp[j][i].weight = weight;
                }
                None => return Err(PartitionError::NoFeasibleSplit),
            }
        }
    }

    // Recursively split (0, n - 1) along the recorded best vertices.
    let mut triangles = Vec::with_capacity(n - 2);
    let mut diagonals = VecDeque::new();
    diagonals.push_back((0, n - 1));
    while let Some((i1, i2)) = diagonals.pop_front() {
        let k = match dp[i2][i1].best_vertex {
            Some(k) => k,
            None => return Err(PartitionError::NoFeasibleSplit),
        };
        triangles.push(Polygon::triangle(pts[i1], pts[k], pts[i2]));
        if k > i1 + 1 {
            diagonals.push_back((i1, k));
        }
        if i2 > k + 1 {
            diagonals.push_back((k, i2));
        }
    }

    Ok(triangles)
}
