//! multifit prelude.
//!
//! This module contains the most used types, type aliases, traits and
//! functions that you can import easily as a group.
//!

#[doc(no_inline)]
pub use crate::error::{DimensionError, RegressionError, Result};

#[doc(no_inline)]
pub use crate::traits::*;

#[doc(no_inline)]
pub use crate::dataset::{Dataset, DatasetBase, DatasetView, Records};

#[doc(no_inline)]
pub use crate::{regress, Float, LeastSquares, LeastSquaresParams, ParamGuard};
