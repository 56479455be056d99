//! Provide traits for different classes of algorithms
//!

use crate::dataset::{DatasetBase, Records};
use std::error::Error;

/// Fittable algorithms
///
/// A fittable algorithm takes a dataset and creates a concept of some kind about it. For example
/// least squares regression takes a design matrix with responses and returns a fitted model
/// holding coefficients, residuals and their covariance.
pub trait Fit<R: Records, T, E: Error> {
    type Object;

    fn fit(&self, dataset: &DatasetBase<R, T>) -> Result<Self::Object, E>;
}

/// Predict with model into a mutable reference of targets.
pub trait PredictInplace<R: Records, T> {
    /// Predict something in place
    fn predict_inplace(&self, x: &R, y: &mut T);

    /// Create targets that `predict_inplace` works with.
    fn default_target(&self, x: &R) -> T;
}

/// Predict with model
///
/// This trait assumes the `PredictInplace` implementation and provides additional input/output
/// combinations.
pub trait Predict<R, T> {
    fn predict(&self, x: R) -> T;
}

impl<'a, R: Records, T, O> Predict<&'a R, T> for O
where
    O: PredictInplace<R, T>,
{
    fn predict(&self, records: &'a R) -> T {
        let mut targets = self.default_target(records);
        self.predict_inplace(records, &mut targets);
        targets
    }
}

impl<'a, R: Records, T, O> Predict<&'a DatasetBase<R, T>, T> for O
where
    O: PredictInplace<R, T>,
{
    fn predict(&self, ds: &'a DatasetBase<R, T>) -> T {
        let mut targets = self.default_target(&ds.records);
        self.predict_inplace(&ds.records, &mut targets);
        targets
    }
}
