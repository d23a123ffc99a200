use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use num_traits::AsPrimitive;

use crate::error::{Result, VectorError};

/// A fixed-length vector of `f64` values.
///
/// The length is chosen at construction and never changes afterwards; there
/// is no way to push, insert or remove elements. Individual elements can be
/// read and overwritten through [`Vector::get`] / [`Vector::set`] (checked) or
/// through `Index`/`IndexMut` (panicking, like slices).
///
/// Equality is exact element-wise `==`. Use the `approx` traits for tolerance
/// based comparisons.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    /// A vector of `size` zeros.
    pub fn zeros(size: usize) -> Self {
        Self {
            data: vec![0.0; size],
        }
    }

    /// Build a vector from any sequence of primitive numbers.
    ///
    /// Takes the values by value; use [`Vector::from_slice`] for borrowed
    /// data.
    ///
    /// ```
    /// use vectors::Vector;
    ///
    /// let v = Vector::from_values([1, 3, 4]);
    /// assert_eq!(v.to_vec(), vec![1.0, 3.0, 4.0]);
    /// ```
    pub fn from_values<T, I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsPrimitive<f64>,
    {
        values.into_iter().map(|v| v.as_()).collect()
    }

    /// Build a vector from borrowed numbers, e.g. `&[1, 2, 3]` or `&vec`.
    ///
    /// ```
    /// use vectors::Vector;
    ///
    /// let counts: Vec<u32> = vec![2, 0, 7];
    /// let v = Vector::from_slice(&counts);
    /// assert_eq!(v.to_vec(), vec![2.0, 0.0, 7.0]);
    /// assert_eq!(counts.len(), 3);
    /// ```
    pub fn from_slice<T>(values: &[T]) -> Self
    where
        T: AsPrimitive<f64>,
    {
        values.iter().map(|&v| v.as_()).collect()
    }

    /// Like [`Vector::from_values`], but fails unless the sequence holds
    /// exactly `size` values.
    pub fn with_size<T, I>(values: I, size: usize) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: AsPrimitive<f64>,
    {
        let vector = Self::from_values(values);
        if vector.len() != size {
            return Err(VectorError::SizeMismatch {
                expected: size,
                got: vector.len(),
            });
        }
        Ok(vector)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Alias of [`Vector::len`].
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<f64> {
        self.data
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange {
                index,
                size: self.len(),
            })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut f64> {
        let size = self.len();
        self.data
            .get_mut(index)
            .ok_or(VectorError::IndexOutOfRange { index, size })
    }

    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Iterate the elements in index order.
    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.data.iter_mut()
    }

    /// Read-only view of the elements.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy the elements out into a plain `Vec`.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Apply `f` to every element, producing a vector of the same size.
    pub fn map<F>(&self, f: F) -> Vector
    where
        F: FnMut(f64) -> f64,
    {
        self.iter().copied().map(f).collect()
    }

    /// Combine two vectors element-wise after checking they have equal size.
    pub(crate) fn zip_with<F>(&self, other: &Vector, mut f: F) -> Result<Vector>
    where
        F: FnMut(f64, f64) -> f64,
    {
        self.ensure_same_size(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    pub(crate) fn ensure_same_size(&self, other: &Vector) -> Result<()> {
        if self.len() != other.len() {
            return Err(VectorError::SizeMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Self { data: value }
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(value: [f64; N]) -> Self {
        Self {
            data: value.to_vec(),
        }
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            // 0.0 == -0.0 so they must hash alike
            let bits = if *value == 0.0 { 0u64 } else { value.to_bits() };
            bits.hash(state);
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for value in self.iter() {
            write!(f, "{} ", value)?;
        }
        write!(f, "]")
    }
}
