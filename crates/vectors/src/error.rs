use std::error::Error;
use std::fmt;

/// Errors returned by vector construction, indexing and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Two operands (or a sequence and an asserted size) disagree on length.
    SizeMismatch { expected: usize, got: usize },
    /// Element access outside `[0, size)`.
    IndexOutOfRange { index: usize, size: usize },
    /// Division by an exactly-zero scalar or length.
    DivideByZero { operation: &'static str },
    /// The operation is only defined for vectors of a particular size.
    InvalidDimension { expected: usize, got: usize },
    /// At least one of the vectors has zero length.
    UndefinedAngle,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VectorError::SizeMismatch { expected, got } => {
                write!(f, "size mismatch: expected {} elements, got {}", expected, got)
            }
            VectorError::IndexOutOfRange { index, size } => {
                write!(f, "index {} out of range for vector of size {}", index, size)
            }
            VectorError::DivideByZero { operation } => {
                write!(f, "divide by zero in {}", operation)
            }
            VectorError::InvalidDimension { expected, got } => write!(
                f,
                "invalid dimension: operation requires {} elements, got {}",
                expected, got
            ),
            VectorError::UndefinedAngle => {
                write!(f, "angle is undefined for zero-length vectors")
            }
        }
    }
}

impl Error for VectorError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VectorError>;
