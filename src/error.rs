//! An error when fitting a least squares model
use std::collections::TryReserveError;

use ndarray::ShapeError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RegressionError>;

/// Malformed problem shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    #[error("need at least one observation and one covariate, got {n_samples}x{n_features}")]
    Empty { n_samples: usize, n_features: usize },
    #[error("{n_samples} observations cannot determine {n_features} coefficients")]
    Underdetermined { n_samples: usize, n_features: usize },
    #[error("a {n_samples}x{n_features} design overflows the address space")]
    Overflow { n_samples: usize, n_features: usize },
    #[error("{name} has length {actual}, expected {expected}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// An error when fitting a least squares model
#[derive(Error, Debug)]
pub enum RegressionError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),
    /// The (possibly penalized) design matrix is numerically rank-deficient
    #[error("design matrix is rank-deficient, column {column} is linearly dependent on the preceding ones")]
    SingularDesign { column: usize },
    /// The records or targets contain a NaN or an infinity
    #[error("{name} contain a non-finite value")]
    NonFinite { name: &'static str },
    #[error(transparent)]
    Linalg(#[from] linfa_linalg::LinalgError),
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
    #[error("cannot allocate scratch storage: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("rank tolerance should be in range [0, 1), but is {0}")]
    InvalidRankTolerance(f32),
    #[error("ridge penalty should be positive and finite, but is {0}")]
    InvalidRidge(f32),
    /// Residual variance is undefined when there are as many coefficients as observations
    #[error("residual variance needs more observations than coefficients")]
    ZeroDegreesOfFreedom,
}
