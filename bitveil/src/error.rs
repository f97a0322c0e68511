use thiserror::Error;

use crate::grid::Dimensions;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("pixel buffer holds {actual} bytes, expected {expected} for a {dims} RGBA grid")]
    BufferSize {
        dims: Dimensions,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CombineError {
    #[error("image size mismatch: carrier is {carrier}, payload is {payload}")]
    DimensionMismatch {
        carrier: Dimensions,
        payload: Dimensions,
    },
}
