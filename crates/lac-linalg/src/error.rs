use std::error::Error;
use std::fmt;

/// Failures raised by vector and matrix operations.
///
/// Every error is reported at the operation that detects it; nothing in the
/// crate recovers from one internally.
#[derive(Debug, Clone, PartialEq)]
pub enum LinAlgError {
    /// Operands of a binary operation have incompatible shapes.
    DimensionMismatch { expected: String, actual: String },
    /// Trace, determinant or inverse asked of a non-square matrix.
    NotSquare { rows: usize, cols: usize },
    /// Inverse asked of a matrix with zero determinant.
    Singular,
    /// Operation is undefined for its input (e.g. normalizing the zero vector).
    DomainError(&'static str),
    DivisionByZero,
    IndexOutOfRange { index: usize, len: usize },
    /// Matrix built from rows of unequal length.
    InvalidShape {
        row: usize,
        expected: usize,
        actual: usize,
    },
    InvalidArgument(String),
}

impl LinAlgError {
    pub(crate) fn dims(expected: impl fmt::Display, actual: impl fmt::Display) -> Self {
        LinAlgError::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

impl fmt::Display for LinAlgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinAlgError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {}, got {}", expected, actual)
            }
            LinAlgError::NotSquare { rows, cols } => {
                write!(f, "matrix is not square ({}x{})", rows, cols)
            }
            LinAlgError::Singular => write!(f, "matrix is singular (determinant is zero)"),
            LinAlgError::DomainError(what) => write!(f, "domain error: {}", what),
            LinAlgError::DivisionByZero => write!(f, "division by zero"),
            LinAlgError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            LinAlgError::InvalidShape {
                row,
                expected,
                actual,
            } => write!(
                f,
                "ragged rows: row {} has {} columns, expected {}",
                row, actual, expected
            ),
            LinAlgError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl Error for LinAlgError {}

pub type Result<T> = std::result::Result<T, LinAlgError>;
