//! The [`Vector`] type and everything that operates on it.
//!
//! - `vector`: storage, construction, indexing, iteration, display, hashing
//! - `ops`: arithmetic operators and the dot product
//! - `geometry`: norms, cross product, projections, angles, basis vectors
//! - `tolerance`: `approx` integration for comparisons after rounding
pub mod geometry;
pub mod ops;
pub mod tolerance;
pub mod vector;

pub use geometry::orthonormalize;
pub use vector::Vector;
