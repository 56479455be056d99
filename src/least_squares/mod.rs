//! Ordinary Least Squares
use ndarray::{Array1, Array2};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{RegressionError, Result};
use crate::Float;

mod algorithm;
mod hyperparams;

pub use hyperparams::{LeastSquaresParams, LeastSquaresValidParams};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
/// A fitted ordinary least squares model.
///
/// LeastSquares fits a linear model minimizing the residual sum of squares between the observed
/// responses and the responses predicted by the linear approximation
///
/// y = Xc (+ b)
///
/// Besides the coefficients the model keeps every by-product of the fit: the residuals of the
/// training observations, their sum of squares (chi-square) and the covariance of the
/// coefficient estimates.
///
/// ## Model implementation
///
/// The columns of the design matrix are scaled to unit norm and the result is factorized with
/// Householder reflections, `XS⁻¹ = QR`, so the rank check does not depend on the column units.
/// The scaled coefficients solve the triangular system `R(Sc) = Qᵗy`, which avoids squaring the
/// condition number the way the normal equations would. Residuals are recomputed from the
/// original design instead of being read off the factorization, and the covariance
/// `chisq / (n - p) (XᵗX)⁻¹` is assembled from `R⁻¹` and `S` alone.
///
/// ## Examples
///
/// ```rust
/// use multifit::traits::Fit;
/// use multifit::{Dataset, LeastSquares};
/// use ndarray::array;
///
/// let dataset = Dataset::new(array![[1., 0.], [0., 1.], [1., 1.]], array![1., 2., 4.]);
/// let model = LeastSquares::params().fit(&dataset).unwrap();
///
/// println!("coefficients: {}", model.coefficients());
/// println!("residuals: {}", model.residuals());
/// println!("chi-square: {}", model.chi_square());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LeastSquares<F> {
    params: Array1<F>,
    intercept: F,
    residuals: Array1<F>,
    chi_square: F,
    degrees_of_freedom: usize,
    covariance: Option<Array2<F>>,
}

impl<F: Float> LeastSquares<F> {
    /// Create a default parameter set for construction of a least squares model
    ///
    /// By default no intercept is fitted and no penalty applied, the design is used as given.
    pub fn params() -> LeastSquaresParams<F> {
        LeastSquaresParams::new()
    }

    /// Create a ridge regression parameter set with penalty `ridge`
    pub fn ridge(ridge: F) -> LeastSquaresParams<F> {
        LeastSquaresParams::new().ridge(ridge)
    }

    /// Get the fitted coefficients, one per design column
    pub fn coefficients(&self) -> &Array1<F> {
        &self.params
    }

    /// Get the fitted intercept, 0. if no intercept was fitted
    pub fn intercept(&self) -> F {
        self.intercept
    }

    /// Residuals `y - prediction` of the training observations, in row order
    pub fn residuals(&self) -> &Array1<F> {
        &self.residuals
    }

    /// Sum of squared residuals
    pub fn chi_square(&self) -> F {
        self.chi_square
    }

    /// Number of observations minus number of fitted coefficients (intercept included)
    pub fn degrees_of_freedom(&self) -> usize {
        self.degrees_of_freedom
    }

    /// Estimated variance of the noise, `chisq / (n - p)`
    pub fn residual_variance(&self) -> Result<F> {
        if self.degrees_of_freedom == 0 {
            return Err(RegressionError::ZeroDegreesOfFreedom);
        }

        Ok(self.chi_square / F::cast(self.degrees_of_freedom))
    }

    /// Covariance matrix of the coefficient estimates
    ///
    /// The matrix has one row and column per coefficient. When an intercept was fitted it
    /// occupies the last row and column.
    ///
    /// Fails with [`ZeroDegreesOfFreedom`](RegressionError::ZeroDegreesOfFreedom) when the model
    /// interpolates the data exactly, as the residual variance is undefined then.
    pub fn covariance(&self) -> Result<&Array2<F>> {
        self.covariance
            .as_ref()
            .ok_or(RegressionError::ZeroDegreesOfFreedom)
    }

    /// Standard errors of the coefficient estimates, in the order of [`covariance`](Self::covariance)
    pub fn std_errors(&self) -> Result<Array1<F>> {
        Ok(self.covariance()?.diag().mapv(F::sqrt))
    }
}
