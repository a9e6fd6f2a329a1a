use thiserror::Error;

/// Condition kinds signalled by [`MathError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter, strum::EnumCount)]
pub enum ErrorKind {
    OutOfRange,
    InvalidValue,
    UnsupportedOperation,
    DimensionMismatch,
    InvalidOperand,
    NotImplemented,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    #[error("Out of range. Invalid offset {offset} for container of length {len}")]
    OutOfRange { offset: String, len: usize },
    #[error("Invalid value {0:?}. Value must be a number")]
    InvalidValue(String),
    #[error("Invalid operation: {0}")]
    UnsupportedOperation(&'static str),
    #[error("Matrix size mismatch, expected {expected}x{expected}, found {found}x{found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("Can only calculate determinant from square matrix, found {rows} rows and {columns} columns")]
    NotSquare { rows: usize, columns: usize },
    #[error("Unsupported matrix size {0}, only 3x3 and 4x4 matrices exist")]
    UnsupportedSize(usize),
    #[error("Invalid type. Can not multiply a matrix with {0}")]
    InvalidOperand(&'static str),
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

impl MathError {
    pub(crate) fn out_of_range(offset: impl ToString, len: usize) -> Self {
        MathError::OutOfRange {
            offset: offset.to_string(),
            len,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            MathError::OutOfRange { .. } => ErrorKind::OutOfRange,
            MathError::InvalidValue(_) => ErrorKind::InvalidValue,
            MathError::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            MathError::DimensionMismatch { .. }
            | MathError::NotSquare { .. }
            | MathError::UnsupportedSize(_) => ErrorKind::DimensionMismatch,
            MathError::InvalidOperand(_) => ErrorKind::InvalidOperand,
            MathError::NotImplemented(_) => ErrorKind::NotImplemented,
        }
    }
}

pub type MathResult<T> = Result<T, MathError>;
