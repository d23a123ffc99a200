//! Arithmetic on [`Vector`].
//!
//! Operations that can fail (mismatched sizes, division by zero) return
//! [`Result`] from both the named method and the operator, so `&a + &b`
//! yields `Result<Vector>` rather than panicking.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{Result, VectorError};
use crate::math::vector::Vector;

impl Vector {
    /// Element-wise sum.
    pub fn checked_add(&self, rhs: &Vector) -> Result<Vector> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Element-wise difference.
    pub fn checked_sub(&self, rhs: &Vector) -> Result<Vector> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Multiply every element by `scalar`.
    pub fn scale(&self, scalar: f64) -> Vector {
        self.map(|v| v * scalar)
    }

    /// Divide every element by `scalar`, failing when it is exactly zero.
    pub fn checked_div(&self, scalar: f64) -> Result<Vector> {
        self.divide(scalar, "division")
    }

    pub(crate) fn divide(&self, scalar: f64, operation: &'static str) -> Result<Vector> {
        if scalar == 0.0 {
            return Err(VectorError::DivideByZero { operation });
        }
        Ok(self.map(|v| v / scalar))
    }

    /// Sum of element-wise products.
    pub fn dot(&self, rhs: &Vector) -> Result<f64> {
        self.ensure_same_size(rhs)?;
        Ok(dot_scalar_f64(self.as_slice(), rhs.as_slice()))
    }
}

fn dot_scalar_f64(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

impl<'a, 'b> Add<&'b Vector> for &'a Vector {
    type Output = Result<Vector>;

    fn add(self, rhs: &'b Vector) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Add for Vector {
    type Output = Result<Vector>;

    fn add(self, rhs: Vector) -> Self::Output {
        self.checked_add(&rhs)
    }
}

impl<'a, 'b> Sub<&'b Vector> for &'a Vector {
    type Output = Result<Vector>;

    fn sub(self, rhs: &'b Vector) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl Sub for Vector {
    type Output = Result<Vector>;

    fn sub(self, rhs: Vector) -> Self::Output {
        self.checked_sub(&rhs)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<&Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Self::Output {
        rhs.scale(self)
    }
}

impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Self::Output {
        rhs.scale(self)
    }
}

/// `&a * &b` is the dot product.
impl<'a, 'b> Mul<&'b Vector> for &'a Vector {
    type Output = Result<f64>;

    fn mul(self, rhs: &'b Vector) -> Self::Output {
        self.dot(rhs)
    }
}

impl Mul for Vector {
    type Output = Result<f64>;

    fn mul(self, rhs: Vector) -> Self::Output {
        self.dot(&rhs)
    }
}

impl Div<f64> for &Vector {
    type Output = Result<Vector>;

    fn div(self, rhs: f64) -> Self::Output {
        self.checked_div(rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Result<Vector>;

    fn div(self, rhs: f64) -> Self::Output {
        self.checked_div(rhs)
    }
}
