//!
//! `multifit` fits linear models by ordinary least squares and keeps every by-product of the fit.
//!
//! ## The Big Picture
//!
//! Given a design matrix `X` with one row per observation and one column per covariate, and a
//! response `y` with one entry per observation, the crate computes the coefficients `c`
//! minimizing `||y - Xc||²` together with
//! - the residuals `y - Xc` of every observation, in row order,
//! - the chi-square, the sum of squared residuals,
//! - the covariance of the coefficient estimates, `chisq / (n - p) (XᵗX)⁻¹`.
//!
//! The solve goes through a Householder QR factorization of `X`, the normal equations are
//! never formed.
//!
//! ## Current state
//!
//! Two entry points are available:
//! - [`LeastSquares`] with its [`LeastSquaresParams`], fitted through the [`Fit`](traits::Fit)
//!   trait on a [`Dataset`]. It optionally fits an intercept or adds a ridge penalty, and the
//!   fitted model predicts new observations.
//! - [`regress`], a flat interface taking a row-major design and writing the residuals into a
//!   caller supplied buffer.
//!
//! Fits are pure functions of their input. Each call owns its temporaries, so independent
//! fits can run concurrently from any number of threads.

mod error;
mod float;
mod least_squares;
mod param_guard;
mod qr;
mod scratch;

pub mod dataset;
pub mod prelude;
pub mod traits;

use ndarray::{ArrayView1, ArrayView2, ArrayViewMut1};

pub use dataset::{Dataset, DatasetBase, DatasetView};
pub use error::{DimensionError, RegressionError, Result};
pub use float::Float;
pub use least_squares::{LeastSquares, LeastSquaresParams, LeastSquaresValidParams};
pub use param_guard::ParamGuard;

use crate::traits::Fit;

/// Least squares residuals of a flat, row-major problem
///
/// `x` holds `n_samples` rows of `n_features` covariates each, `y` holds one response per row.
/// On success `residuals` holds `y - Xc` for the least squares coefficients `c`, in row order.
///
/// # Errors
///
/// Returns a [`DimensionError`] if a slice length disagrees with the dimensions or if there are
/// fewer observations than covariates, and [`SingularDesign`](RegressionError::SingularDesign)
/// if the columns of the design are linearly dependent. A NaN or an infinity in `x` or `y` gives
/// [`NonFinite`](RegressionError::NonFinite). On any error `residuals` is left untouched.
///
/// ```rust
/// let x = [1., 0., 0., 1., 1., 1.];
/// let y = [1., 2., 4.];
/// let mut residuals: [f64; 3] = [0.; 3];
///
/// multifit::regress(3, 2, &x, &y, &mut residuals).unwrap();
///
/// assert!((residuals[2] - 1. / 3.).abs() < 1e-12);
/// ```
pub fn regress<F: Float>(
    n_samples: usize,
    n_features: usize,
    x: &[F],
    y: &[F],
    residuals: &mut [F],
) -> Result<()> {
    let expected = n_samples
        .checked_mul(n_features)
        .ok_or(DimensionError::Overflow {
            n_samples,
            n_features,
        })?;
    check_len("x", expected, x.len())?;
    check_len("y", n_samples, y.len())?;
    check_len("residuals", n_samples, residuals.len())?;

    let records = ArrayView2::from_shape((n_samples, n_features), x)?;
    let targets = ArrayView1::from(y);
    let model = LeastSquares::params().fit(&DatasetBase::new(records, targets))?;

    ArrayViewMut1::from(residuals).assign(model.residuals());

    Ok(())
}

fn check_len(
    name: &'static str,
    expected: usize,
    actual: usize,
) -> std::result::Result<(), DimensionError> {
    if expected == actual {
        Ok(())
    } else {
        Err(DimensionError::LengthMismatch {
            name,
            expected,
            actual,
        })
    }
}
