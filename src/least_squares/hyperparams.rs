#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::RegressionError;
use crate::{Float, ParamGuard};

/// A verified hyper-parameter set ready for the estimation of a least squares model
///
/// See [`LeastSquaresParams`](crate::LeastSquaresParams) for more information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct LeastSquaresValidParams<F> {
    pub(crate) with_intercept: bool,
    pub(crate) rank_tolerance: F,
    pub(crate) ridge: F,
}

impl<F: Float> LeastSquaresValidParams<F> {
    pub fn with_intercept(&self) -> bool {
        self.with_intercept
    }

    pub fn rank_tolerance(&self) -> F {
        self.rank_tolerance
    }

    pub fn ridge(&self) -> F {
        self.ridge
    }
}

/// A hyper-parameter set for ordinary least squares
///
/// Minimizes
/// ```ignore
/// ||y - Xc - b||^2_2 + ridge * ||c||^2_2
/// ```
/// where the intercept `b` is zero unless requested. With the default `ridge` of zero this is
/// the plain least squares problem and a rank-deficient design is rejected.
///
/// The parameter set can be verified into a
/// [`LeastSquaresValidParams`](crate::LeastSquaresValidParams) by calling
/// [ParamGuard::check](Self::check). It is also possible to directly fit a model with
/// [Fit::fit](crate::traits::Fit::fit) which implicitely verifies the parameter set prior to the
/// model estimation and forwards any error.
///
/// # Parameters
/// | Name | Default | Purpose | Range |
/// | :--- | :--- | :---| :--- |
/// | [with_intercept](Self::with_intercept) | `false` | Append a constant column to the design | `false`, `true` |
/// | [rank_tolerance](Self::rank_tolerance) | `1e3 * F::epsilon()` | Distance to the span of the preceding columns, relative to the column norm, below which a column counts as dependent | `[0, 1)` |
/// | [ridge](Self::ridge) | `0` | Tikhonov penalty on the coefficients, the intercept is not penalized | `[0, inf)` |
///
/// # Errors
///
/// The following errors can come from invalid hyper-parameters:
///
/// Returns [`InvalidRankTolerance`](RegressionError::InvalidRankTolerance) if the tolerance is
/// negative, not finite or not below one.
///
/// Returns [`InvalidRidge`](RegressionError::InvalidRidge) if the penalty is negative or not
/// finite.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct LeastSquaresParams<F>(pub(crate) LeastSquaresValidParams<F>);

impl<F: Float> Default for LeastSquaresParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a least squares model
impl<F: Float> LeastSquaresParams<F> {
    /// Create a default parameter set: no intercept, no penalty
    pub fn new() -> LeastSquaresParams<F> {
        Self(LeastSquaresValidParams {
            with_intercept: false,
            rank_tolerance: F::epsilon() * F::cast(1e3),
            ridge: F::zero(),
        })
    }

    /// Configure the model to fit an intercept.
    ///
    /// The intercept is treated as an extra, trailing design column of ones. It counts towards
    /// the number of coefficients the observations have to determine.
    pub fn with_intercept(mut self, with_intercept: bool) -> Self {
        self.0.with_intercept = with_intercept;
        self
    }

    /// Set the relative rank tolerance.
    ///
    /// A design column is considered linearly dependent on the preceding ones when its distance
    /// to their span is at most `rank_tolerance` times its own norm. The test does not depend on
    /// the units of the columns. It is skipped for a positive [ridge](Self::ridge) penalty.
    pub fn rank_tolerance(mut self, rank_tolerance: F) -> Self {
        self.0.rank_tolerance = rank_tolerance;
        self
    }

    /// Set the ridge penalty.
    ///
    /// A positive penalty makes every design solvable, including ones with duplicated columns.
    pub fn ridge(mut self, ridge: F) -> Self {
        self.0.ridge = ridge;
        self
    }
}

impl<F: Float> ParamGuard for LeastSquaresParams<F> {
    type Checked = LeastSquaresValidParams<F>;
    type Error = RegressionError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        let tolerance = self.0.rank_tolerance;
        if !tolerance.is_finite() || tolerance < F::zero() || tolerance >= F::one() {
            Err(RegressionError::InvalidRankTolerance(to_f32(tolerance)))
        } else if !self.0.ridge.is_finite() || self.0.ridge < F::zero() {
            Err(RegressionError::InvalidRidge(to_f32(self.0.ridge)))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

fn to_f32<F: Float>(x: F) -> f32 {
    x.to_f32().unwrap_or(f32::NAN)
}
