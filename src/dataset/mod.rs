//! Datasets
//!
//! This module implements the dataset struct consumed by [`Fit`](crate::traits::Fit): a design
//! matrix together with the response observed for each of its rows.
use ndarray::{ArrayBase, ArrayView, Data, Ix1, Ix2, OwnedRepr};

/// DatasetBase
///
/// This is the fundamental structure of a dataset. It contains the records (one row per
/// observation, one column per covariate) and one response per record. The dataset is only
/// generic over the records and targets, shapes are validated by the algorithm consuming it.
///
/// # Fields
///
/// * `records`: a two-dimensional matrix with dimensionality (nsamples, nfeatures)
/// * `targets`: a one-dimensional array with dimensionality (nsamples)
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetBase<R, T> {
    pub records: R,
    pub targets: T,
}

/// Dataset
///
/// The most commonly used type of dataset. It owns a design matrix stored as an `Array2` and
/// one response per row stored as an `Array1`.
pub type Dataset<F> = DatasetBase<ArrayBase<OwnedRepr<F>, Ix2>, ArrayBase<OwnedRepr<F>, Ix1>>;

/// DatasetView
///
/// A read only view of a Dataset
pub type DatasetView<'a, F> = DatasetBase<ArrayView<'a, F, Ix2>, ArrayView<'a, F, Ix1>>;

/// Record trait
pub trait Records: Sized {
    type Elem;

    fn nsamples(&self) -> usize;
    fn nfeatures(&self) -> usize;
}

impl<F, D: Data<Elem = F>> Records for ArrayBase<D, Ix2> {
    type Elem = F;

    fn nsamples(&self) -> usize {
        self.nrows()
    }

    fn nfeatures(&self) -> usize {
        self.ncols()
    }
}

impl<R: Records, T> DatasetBase<R, T> {
    /// Create a new dataset from records and targets
    pub fn new(records: R, targets: T) -> DatasetBase<R, T> {
        DatasetBase { records, targets }
    }

    /// Return references to the records
    pub fn records(&self) -> &R {
        &self.records
    }

    /// Return references to the targets
    pub fn targets(&self) -> &T {
        &self.targets
    }

    /// Number of observations
    pub fn nsamples(&self) -> usize {
        self.records.nsamples()
    }

    /// Number of covariates
    pub fn nfeatures(&self) -> usize {
        self.records.nfeatures()
    }
}

impl<F, D: Data<Elem = F>, S: Data<Elem = F>> DatasetBase<ArrayBase<D, Ix2>, ArrayBase<S, Ix1>> {
    /// Creates a view of the dataset without copying records or targets
    pub fn view(&self) -> DatasetView<'_, F> {
        DatasetBase::new(self.records.view(), self.targets.view())
    }
}
