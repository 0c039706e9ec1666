//! partitum - 2D polygon partitioning
//!
//! Cuts simple polygons, optionally containing holes, into triangles or
//! convex pieces. Outer boundaries wind counter-clockwise, holes clockwise;
//! every output vertex is an input vertex, with its user identifier carried
//! through unchanged.
//!
//! Five algorithms are provided: ear-clipping and monotone-sweep
//! triangulation, minimum-weight triangulation, and the Hertel-Mehlhorn and
//! Keil-Snoeyink convex decompositions. Polygon lists with holes go through
//! [`remove_holes`] first, except for the monotone sweep which consumes
//! holes directly.
//!
//! # Example
//!
//! ```
//! use partitum::{Point2, Polygon};
//! use partitum::triangulate::ear_clipping_list;
//!
//! let outer = Polygon::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ]);
//! let hole = Polygon::hole(vec![
//!     Point2::new(3.0, 3.0),
//!     Point2::new(3.0, 7.0),
//!     Point2::new(7.0, 7.0),
//!     Point2::new(7.0, 3.0),
//! ]);
//!
//! let triangles = ear_clipping_list(&[outer, hole]).unwrap();
//! assert_eq!(triangles.len(), 8);
//! ```

pub mod decompose;
pub mod error;
pub mod polygon;
pub mod predicates;
pub mod primitives;
pub mod triangulate;

pub use error::PartitionError;
pub use polygon::{remove_holes, Orientation, Polygon};
pub use primitives::{Point2, Vec2};
