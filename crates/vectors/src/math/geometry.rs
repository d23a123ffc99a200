//! Norms, products and projections on [`Vector`].

use log::{debug, trace};

use crate::error::{Result, VectorError};
use crate::math::vector::Vector;

/// Rows are the standard basis of 3D space: i, j, k.
const BASIS: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

impl Vector {
    /// The x-axis unit vector `(1, 0, 0)`. Each call returns a new value.
    pub fn i() -> Vector {
        Vector::from(BASIS[0])
    }

    /// The y-axis unit vector `(0, 1, 0)`. Each call returns a new value.
    pub fn j() -> Vector {
        Vector::from(BASIS[1])
    }

    /// The z-axis unit vector `(0, 0, 1)`. Each call returns a new value.
    pub fn k() -> Vector {
        Vector::from(BASIS[2])
    }

    /// Euclidean norm.
    ///
    /// Elements are divided by the largest magnitude before squaring, so
    /// vectors such as `[1e200, 0]` or `[1e-200, 0]` neither overflow nor
    /// underflow.
    pub fn length(&self) -> f64 {
        let scale = self.max_abs();
        if scale == 0.0 || !scale.is_finite() {
            return scale;
        }
        scale * self.iter().map(|v| (v / scale).powi(2)).sum::<f64>().sqrt()
    }

    /// This vector scaled to length one.
    pub fn unit(&self) -> Result<Vector> {
        let (scaled, _) = self
            .rescaled()
            .ok_or(VectorError::DivideByZero { operation: "unit" })?;
        scaled.divide(scaled.length(), "unit")
    }

    /// Exact check: no tolerance is applied to the length.
    pub fn is_unit(&self) -> bool {
        self.length() == 1.0
    }

    /// Cross product of two 3-element vectors.
    ///
    /// Expanded along the basis row of the determinant
    ///
    /// ```text
    /// | i  j  k  |
    /// | a0 a1 a2 |
    /// | b0 b1 b2 |
    /// ```
    ///
    /// so the j minor enters with a negative sign.
    pub fn cross(&self, other: &Vector) -> Result<Vector> {
        for operand in [self, other] {
            if operand.len() != 3 {
                return Err(VectorError::InvalidDimension {
                    expected: 3,
                    got: operand.len(),
                });
            }
        }

        let (a, b) = (self.as_slice(), other.as_slice());
        let det_i = a[1] * b[2] - a[2] * b[1];
        let det_j = -(a[0] * b[2] - a[2] * b[0]);
        let det_k = a[0] * b[1] - a[1] * b[0];

        Vector::i()
            .scale(det_i)
            .checked_add(&Vector::j().scale(det_j))?
            .checked_add(&Vector::k().scale(det_k))
    }

    /// Projection of `target` onto the line spanned by `self`:
    /// `self * (self · target / |self|²)`.
    pub fn project_on(&self, target: &Vector) -> Result<Vector> {
        self.ensure_same_size(target)?;
        let (s, _) = self.rescaled().ok_or(VectorError::DivideByZero {
            operation: "projection",
        })?;
        let (t, n) = match target.rescaled() {
            Some(rescaled) => rescaled,
            None => return Ok(self.scale(0.0)),
        };
        // the receiver's own scale cancels out: s * (s · t / |s|²) * n
        let ratio = s.dot(&t)? / s.dot(&s)?;
        Ok(s.scale(ratio * n))
    }

    /// `other.project_on(self)`.
    pub fn project_from(&self, other: &Vector) -> Result<Vector> {
        other.project_on(self)
    }

    /// One Gram-Schmidt step: the part of `v` orthogonal to `self`, normalized.
    pub fn gram_schmidt(&self, v: &Vector) -> Result<Vector> {
        let projection = self.project_on(v)?;
        let residual = v.checked_sub(&projection)?;
        trace!(
            "gram-schmidt residual {} (length {})",
            residual,
            residual.length()
        );
        residual.unit()
    }

    /// Angle between the two vectors in radians, in `[0, π]`.
    ///
    /// Fails with `UndefinedAngle` when either vector has zero length or
    /// contains non-finite elements.
    pub fn angle(&self, v: &Vector) -> Result<f64> {
        self.ensure_same_size(v)?;
        let (a, b) = match (self.rescaled(), v.rescaled()) {
            (Some((a, _)), Some((b, _))) => (a, b),
            _ => return Err(VectorError::UndefinedAngle),
        };

        let cos = a.dot(&b)? / (a.length() * b.length());
        if !cos.is_finite() {
            return Err(VectorError::UndefinedAngle);
        }
        // rounding can push the ratio just past ±1
        Ok(cos.clamp(-1.0, 1.0).acos())
    }

    /// Euclidean distance between the two points.
    pub fn distance(&self, other: &Vector) -> Result<f64> {
        Ok(self.checked_sub(other)?.length())
    }

    /// Largest element magnitude; NaN if any element is NaN.
    fn max_abs(&self) -> f64 {
        self.iter().fold(0.0, |acc: f64, v| {
            if acc.is_nan() || v.is_nan() {
                f64::NAN
            } else {
                acc.max(v.abs())
            }
        })
    }

    /// `self` divided by its largest element magnitude, with that magnitude.
    /// `None` for the zero vector.
    fn rescaled(&self) -> Option<(Vector, f64)> {
        let scale = self.max_abs();
        if scale == 0.0 {
            return None;
        }
        Some((self.map(|v| v / scale), scale))
    }
}

/// Turn linearly independent vectors into an orthonormal set spanning the
/// same space, by repeated Gram-Schmidt steps (modified variant).
///
/// Fails with `SizeMismatch` if the vectors differ in size and with
/// `DivideByZero` if one of them lies exactly in the span of the previous ones.
pub fn orthonormalize(vectors: &[Vector]) -> Result<Vec<Vector>> {
    if let Some(first) = vectors.first() {
        for v in vectors {
            first.ensure_same_size(v)?;
        }
    }

    let mut basis: Vec<Vector> = Vec::with_capacity(vectors.len());
    for v in vectors {
        let mut residual = v.clone();
        for e in &basis {
            residual = residual.checked_sub(&e.project_on(&residual)?)?;
        }
        basis.push(residual.unit()?);
    }

    debug!("orthonormalized {} vectors", basis.len());
    Ok(basis)
}
