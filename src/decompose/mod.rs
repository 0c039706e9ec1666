//! Convex decomposition algorithms.
//!
//! - [`convex_decomposition`]: Hertel-Mehlhorn, O(n^2), at most four times
//!   the optimal number of pieces and usually far better
//! - [`optimal_convex_decomposition`]: Keil-Snoeyink, O(n^3), the minimum
//!   number of pieces

mod hertel_mehlhorn;
mod keil_snoeyink;

pub use hertel_mehlhorn::{convex_decomposition, convex_decomposition_list};
pub use keil_snoeyink::optimal_convex_decomposition;
