//! Distance between an evaluated fraction and the target value.

use crate::traits::Exact;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

/// Absolute error of an exact evaluation. An undefined evaluation is infinitely
/// far from anything, so `Infinite` orders after every finite distance.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Finite(BigRational),
    Infinite,
}

impl Distance {
    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self, Distance::Finite(d) if d.is_zero())
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Distance::Finite(d) => d.to_f64().unwrap_or(f64::INFINITY),
            Distance::Infinite => f64::INFINITY,
        }
    }
}

/// `|value - target|`, or [Distance::Infinite] when `value` is undefined
pub fn distance(value: &Exact, target: &BigRational) -> Distance {
    match value {
        Ok(v) => Distance::Finite((v - target).abs()),
        Err(_) => Distance::Infinite,
    }
}

/// Floating point counterpart of [distance]. NaN counts as infinitely far.
pub fn approx_distance(value: f64, target: f64) -> f64 {
    let d = (value - target).abs();
    if d.is_nan() {
        f64::INFINITY
    } else {
        d
    }
}
