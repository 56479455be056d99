use std::fmt;
use std::iter::Sum;

use ndarray::NdFloat;
use num_traits::{FromPrimitive, NumCast};

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. Design matrices, responses and every
/// quantity derived from a fit share this element type.
pub trait Float:
    NdFloat
    + FromPrimitive
    + Default
    + Sum
    + fmt::Display
    + fmt::Debug
    + approx::AbsDiffEq<Epsilon = Self>
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}
