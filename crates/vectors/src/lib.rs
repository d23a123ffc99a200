//! vectors: fixed-length real vectors with linear-algebra and geometric operations.
//!
//! This crate provides a single value type, [`Vector`], holding a fixed number
//! of `f64` elements, together with arithmetic (add, subtract, negate, scale,
//! divide), dot and cross products, norms, normalization, projections,
//! Gram-Schmidt orthogonalization and angles.
//!
//! Fallible operations return [`Result`]; the operators do too, so
//! `(&a + &b)?` is the idiomatic way to add two vectors.
//!
//! ```
//! use vectors::Vector;
//!
//! # fn main() -> vectors::Result<()> {
//! let a = Vector::from_values([1, 2, 3]);
//! let b = Vector::from_values([4, 5, 6]);
//! assert_eq!((&a + &b)?, Vector::from_values([5, 7, 9]));
//! assert_eq!(Vector::i().cross(&Vector::j())?, Vector::k());
//! # Ok(())
//! # }
//! ```
pub mod error;
pub mod math;

pub use error::{Result, VectorError};
pub use math::{orthonormalize, Vector};

/// Items intended for glob-import: `use vectors::prelude::*;`
pub mod prelude {
    pub use crate::error::{Result, VectorError};
    pub use crate::math::{orthonormalize, Vector};
}
