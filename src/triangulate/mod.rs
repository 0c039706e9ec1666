//! Polygon triangulation algorithms.
//!
//! Three routes to the same goal, with different trade-offs:
//!
//! - [`ear_clipping`]: O(n^2), simple and robust, the default choice
//! - [`monotone`]: O(n log n) sweep line, for large inputs
//! - [`min_weight`]: O(n^3) dynamic programming, minimizes total diagonal
//!   length

mod ear_clipping;
mod min_weight;
mod monotone;

pub use ear_clipping::{ear_clipping, ear_clipping_list};
pub use min_weight::min_weight;
pub use monotone::{monotone, monotone_list, monotone_partition};
