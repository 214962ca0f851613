use std::io;

use thiserror::Error;

/// Which ordering constraint a rejected point violated.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum PointBound {
    #[error("x must be greater than the previous x ({0})")]
    Left(f64),
    #[error("x must be less than the next x ({0})")]
    Right(f64),
    #[error("a point with x = {0} already exists")]
    Duplicate(f64),
    #[error("x must be a finite number")]
    NotFinite
}

#[derive(Debug, Error)]
pub enum TabulatedFunctionError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("index {index} is out of range [{valid_min}, {valid_max}]")]
    IndexOutOfRange {
        index: usize,
        valid_min: isize,
        valid_max: isize
    },
    #[error("inappropriate point with x = {x}: {bound}")]
    InvalidPoint {
        x: f64,
        bound: PointBound
    },
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("I/O failure: {0}")]
    IoFailure(#[from] io::Error)
}

impl TabulatedFunctionError {
    /// Error for an index outside `[0, upper]`.
    pub fn index_out_of_range(index: usize, upper: isize) -> TabulatedFunctionError {
        TabulatedFunctionError::IndexOutOfRange { index, valid_min: 0, valid_max: upper }
    }

    pub fn invalid_point(x: f64, bound: PointBound) -> TabulatedFunctionError {
        TabulatedFunctionError::InvalidPoint { x, bound }
    }

    pub fn invalid_data(message: String) -> TabulatedFunctionError {
        TabulatedFunctionError::IoFailure(io::Error::new(io::ErrorKind::InvalidData, message))
    }
}
