//! Fallible allocation of the temporaries a fit works on.
//!
//! Every buffer is reserved up front with `try_reserve_exact`, so running out of memory surfaces
//! as [`RegressionError::Allocation`](crate::RegressionError::Allocation) instead of aborting.
//! The buffers are plain owned arrays and are released when they go out of scope, on the error
//! paths as well.
use ndarray::{Array1, Array2};

use crate::error::{DimensionError, Result};
use crate::Float;

fn try_vec<F: Float>(len: usize) -> Result<Vec<F>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)?;
    data.resize(len, F::zero());
    Ok(data)
}

/// Zero-filled vector of length `len`
pub(crate) fn zeros1<F: Float>(len: usize) -> Result<Array1<F>> {
    Ok(Array1::from(try_vec(len)?))
}

/// Zero-filled matrix with `rows` rows and `cols` columns in standard layout
pub(crate) fn zeros2<F: Float>(rows: usize, cols: usize) -> Result<Array2<F>> {
    let len = rows
        .checked_mul(cols)
        .ok_or(DimensionError::Overflow {
            n_samples: rows,
            n_features: cols,
        })?;

    Ok(Array2::from_shape_vec((rows, cols), try_vec(len)?)?)
}
