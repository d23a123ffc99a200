//! Tolerance-based comparison of vectors through the `approx` traits.
//!
//! `PartialEq` on [`Vector`] is exact; results that went through `sqrt` or a
//! division (unit vectors, projections, angles) should be compared with
//! `assert_abs_diff_eq!` / `assert_relative_eq!` instead.

use approx::{AbsDiffEq, RelativeEq};

use crate::math::vector::Vector;

impl Vector {
    /// `true` when both vectors have the same size and every pair of elements
    /// differs by at most `tolerance`.
    pub fn approx_eq(&self, other: &Vector, tolerance: f64) -> bool {
        self.abs_diff_eq(other, tolerance)
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Vector {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}
