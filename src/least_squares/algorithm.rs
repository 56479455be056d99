use log::debug;
use ndarray::linalg::general_mat_vec_mul;
use ndarray::{s, Array1, Array2, ArrayBase, Data, Ix1, Ix2};

use super::{LeastSquares, LeastSquaresValidParams};
use crate::error::{DimensionError, RegressionError, Result};
use crate::qr::Qr;
use crate::traits::{Fit, PredictInplace};
use crate::{scratch, DatasetBase, Float};

impl<F: Float, D: Data<Elem = F>, T: Data<Elem = F>>
    Fit<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>, RegressionError> for LeastSquaresValidParams<F>
{
    type Object = LeastSquares<F>;

    /// Fit a least squares model given a design matrix `X` and a response `y`.
    ///
    /// The design matrix `X` must have shape `(n_samples, n_features)`
    ///
    /// The response `y` must have shape `(n_samples)`
    ///
    /// Returns a `LeastSquares` object which contains the coefficients, the residuals of the
    /// training data, their chi-square and the coefficient covariance. The dataset is only read.
    fn fit(
        &self,
        dataset: &DatasetBase<ArrayBase<D, Ix2>, ArrayBase<T, Ix1>>,
    ) -> Result<Self::Object> {
        let x = dataset.records();
        let y = dataset.targets();

        let (n_samples, n_features) = x.dim();
        let n_coeffs = validate_shape(n_samples, n_features, y.len(), self.with_intercept)?;
        check_finite("records", x.iter())?;
        check_finite("targets", y.iter())?;

        let design = self.design_matrix(x)?;
        let mut rhs = scratch::zeros1(design.nrows())?;
        rhs.slice_mut(s![..n_samples]).assign(y);

        // a penalized design is full rank, only an exactly vanishing pivot is rejected then
        let tolerance = if self.ridge > F::zero() {
            F::zero()
        } else {
            self.rank_tolerance
        };

        let qr = Qr::factorize(design)?;
        if let Some(column) = qr.first_dependent_column(tolerance) {
            debug!(
                "rejecting {}x{} design, column {} is numerically dependent",
                n_samples, n_coeffs, column
            );
            return Err(RegressionError::SingularDesign { column });
        }

        let coeffs = qr.solve(&rhs)?;
        let intercept = if self.with_intercept {
            coeffs[n_features]
        } else {
            F::zero()
        };
        let params = coeffs.slice(s![..n_features]).to_owned();

        // residuals against the untouched design, not the rotated right hand side
        let mut residuals = scratch::zeros1(n_samples)?;
        residuals.assign(y);
        general_mat_vec_mul(-F::one(), x, &params, F::one(), &mut residuals);
        residuals.mapv_inplace(|r| r - intercept);

        let chi_square = residuals.dot(&residuals);
        let degrees_of_freedom = n_samples - n_coeffs;

        let covariance = if degrees_of_freedom > 0 {
            let scale = chi_square / F::cast(degrees_of_freedom);
            let mut covariance = qr.inverse_gram()?;
            covariance.mapv_inplace(|c| c * scale);
            Some(covariance)
        } else {
            None
        };

        debug!(
            "fitted {} coefficients on {} observations, chi-square {}",
            n_coeffs, n_samples, chi_square
        );

        Ok(LeastSquares {
            params,
            intercept,
            residuals,
            chi_square,
            degrees_of_freedom,
            covariance,
        })
    }
}

impl<F: Float> LeastSquaresValidParams<F> {
    /// Copy the records into the matrix handed to the factorization.
    ///
    /// With an intercept a trailing column of ones is appended. With a ridge penalty the rows
    /// `sqrt(ridge) I` are stacked below the observations, so that the factorization of the
    /// augmented matrix yields `RᵗR = XᵗX + ridge I`. The intercept column is not penalized.
    fn design_matrix<D: Data<Elem = F>>(&self, x: &ArrayBase<D, Ix2>) -> Result<Array2<F>> {
        let (n_samples, n_features) = x.dim();
        let n_coeffs = n_features + usize::from(self.with_intercept);
        let n_rows = if self.ridge > F::zero() {
            n_samples + n_features
        } else {
            n_samples
        };

        let mut design = scratch::zeros2(n_rows, n_coeffs)?;
        design.slice_mut(s![..n_samples, ..n_features]).assign(x);
        if self.with_intercept {
            design.slice_mut(s![..n_samples, n_features]).fill(F::one());
        }
        if self.ridge > F::zero() {
            let penalty = self.ridge.sqrt();
            for j in 0..n_features {
                design[[n_samples + j, j]] = penalty;
            }
        }

        Ok(design)
    }
}

fn check_finite<'a, F: Float + 'a>(
    name: &'static str,
    mut values: impl Iterator<Item = &'a F>,
) -> Result<()> {
    if values.all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(RegressionError::NonFinite { name })
    }
}

/// Check the problem shape and return the number of coefficients to estimate
fn validate_shape(
    n_samples: usize,
    n_features: usize,
    n_targets: usize,
    with_intercept: bool,
) -> std::result::Result<usize, DimensionError> {
    if n_samples == 0 || n_features == 0 {
        return Err(DimensionError::Empty {
            n_samples,
            n_features,
        });
    }
    if n_targets != n_samples {
        return Err(DimensionError::LengthMismatch {
            name: "targets",
            expected: n_samples,
            actual: n_targets,
        });
    }

    let n_coeffs = n_features + usize::from(with_intercept);
    if n_samples < n_coeffs {
        return Err(DimensionError::Underdetermined {
            n_samples,
            n_features: n_coeffs,
        });
    }

    Ok(n_coeffs)
}

impl<F: Float, D: Data<Elem = F>> PredictInplace<ArrayBase<D, Ix2>, Array1<F>> for LeastSquares<F> {
    /// Given an input matrix `X`, with shape `(n_samples, n_features)`,
    /// `predict` returns the response according to the fitted linear model.
    fn predict_inplace(&self, x: &ArrayBase<D, Ix2>, y: &mut Array1<F>) {
        assert_eq!(
            x.nrows(),
            y.len(),
            "The number of data points must match the number of output targets."
        );
        assert_eq!(
            x.ncols(),
            self.params.len(),
            "The number of features must match the number of fitted coefficients."
        );

        *y = x.dot(&self.params) + self.intercept;
    }

    fn default_target(&self, x: &ArrayBase<D, Ix2>) -> Array1<F> {
        Array1::zeros(x.nrows())
    }
}
