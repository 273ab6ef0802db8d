use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::{BigRational, Ratio};
use num_traits::{One, ToPrimitive, Zero};
use std::fmt;
use std::ops::{Add, Mul};

/// Result of an exact evaluation. The error side marks an undefined value
pub type Exact = Result<BigRational, Undefined>;

/// Reason why an exact evaluation has no rational value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Undefined {
    /// `b_k + tail` reduced to zero while folding term `k` (1-based)
    #[error("zero denominator at term {term}")]
    ZeroDenominator { term: usize },
    /// A real constant (or a partial sum rounded through it) is infinite or NaN.
    /// `index` points into the flat constant sequence
    #[error("non-finite constant at index {index}")]
    NonFinite { index: usize },
}

/// A number that can be used as a constant of a generalized continued fraction.
///
/// Every coefficient has an approximated `f64` value and, unless it is a
/// non-finite float, an exact rational value. Floats are converted through
/// their binary representation, so `1.1f64` becomes
/// `2476979795053773/2251799813685248` rather than `11/10`.
pub trait Coefficient: Clone + Zero + One {
    fn to_approx(&self) -> f64;

    fn to_exact(&self) -> Option<BigRational>;

    /// Compute `self + acc` in the domain of this coefficient.
    ///
    /// Exact types add exactly. Floats add in binary64 and then convert the
    /// rounded sum, so a real constant taints the partial sum it joins.
    fn add_exact(&self, acc: &BigRational) -> Option<BigRational> {
        self.to_exact().map(|v| v + acc)
    }
}

macro_rules! impl_integer_coefficient {
    ($($T:ty),*) => {$(
        impl Coefficient for $T {
            #[inline]
            fn to_approx(&self) -> f64 { *self as f64 }
            #[inline]
            fn to_exact(&self) -> Option<BigRational> {
                Some(BigRational::from_integer(BigInt::from(*self)))
            }
        }
    )*};
}
impl_integer_coefficient!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_float_coefficient {
    ($($T:ty),*) => {$(
        impl Coefficient for $T {
            #[inline]
            fn to_approx(&self) -> f64 { *self as f64 }
            #[inline]
            fn to_exact(&self) -> Option<BigRational> {
                BigRational::from_float(*self)
            }
            fn add_exact(&self, acc: &BigRational) -> Option<BigRational> {
                BigRational::from_float(self.to_approx() + acc.to_f64()?)
            }
        }
    )*};
}
impl_float_coefficient!(f32, f64);

impl Coefficient for BigInt {
    fn to_approx(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    fn to_exact(&self) -> Option<BigRational> {
        Some(BigRational::from_integer(self.clone()))
    }
}

impl<T: Integer + Clone + ToPrimitive + Into<BigInt>> Coefficient for Ratio<T> {
    fn to_approx(&self) -> f64 {
        match (self.numer().to_f64(), self.denom().to_f64()) {
            (Some(n), Some(d)) => n / d,
            _ => f64::NAN,
        }
    }

    fn to_exact(&self) -> Option<BigRational> {
        let (numer, denom): (T, T) = self.clone().into();
        Some(BigRational::new(numer.into(), denom.into()))
    }
}

/// A constant that is either an integer or a real number.
///
/// Sequences mixing both kinds evaluate the way the kinds combine: integer
/// terms stay exact, and a real term rounds the partial sum it is added to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constant {
    Integer(i64),
    Real(f64),
}

impl From<i64> for Constant {
    #[inline]
    fn from(v: i64) -> Self {
        Constant::Integer(v)
    }
}

impl From<i32> for Constant {
    #[inline]
    fn from(v: i32) -> Self {
        Constant::Integer(v as i64)
    }
}

impl From<f64> for Constant {
    #[inline]
    fn from(v: f64) -> Self {
        Constant::Real(v)
    }
}

// integer arithmetic overflowing i64 degrades to a real
macro_rules! impl_constant_arith {
    ($Trait:ident, $method:ident, $checked:ident) => {
        impl $Trait for Constant {
            type Output = Constant;

            fn $method(self, rhs: Constant) -> Constant {
                match (self, rhs) {
                    (Constant::Integer(a), Constant::Integer(b)) => match a.$checked(b) {
                        Some(v) => Constant::Integer(v),
                        None => Constant::Real((a as f64).$method(b as f64)),
                    },
                    (a, b) => Constant::Real(a.to_approx().$method(b.to_approx())),
                }
            }
        }
    };
}
impl_constant_arith!(Add, add, checked_add);
impl_constant_arith!(Mul, mul, checked_mul);

impl Zero for Constant {
    fn zero() -> Self {
        Constant::Integer(0)
    }

    fn is_zero(&self) -> bool {
        match self {
            Constant::Integer(v) => *v == 0,
            Constant::Real(v) => *v == 0.0,
        }
    }
}

impl One for Constant {
    fn one() -> Self {
        Constant::Integer(1)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Integer(v) => write!(f, "{}", v),
            Constant::Real(v) => write!(f, "{}", v),
        }
    }
}

impl Coefficient for Constant {
    fn to_approx(&self) -> f64 {
        match self {
            Constant::Integer(v) => v.to_approx(),
            Constant::Real(v) => v.to_approx(),
        }
    }

    fn to_exact(&self) -> Option<BigRational> {
        match self {
            Constant::Integer(v) => v.to_exact(),
            Constant::Real(v) => v.to_exact(),
        }
    }

    fn add_exact(&self, acc: &BigRational) -> Option<BigRational> {
        match self {
            Constant::Integer(v) => v.add_exact(acc),
            Constant::Real(v) => v.add_exact(acc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_conversion_test() {
        assert_eq!(3i32.to_exact(), Some(BigRational::from_integer(BigInt::from(3))));
        assert_eq!(
            Ratio::new(-6i64, 4).to_exact(),
            Some(BigRational::new(BigInt::from(-3), BigInt::from(2)))
        );
        assert_eq!(
            1.1f64.to_exact(),
            Some(BigRational::new(
                BigInt::from(2476979795053773u64),
                BigInt::from(2251799813685248u64)
            ))
        );
        assert_eq!(0.5f32.to_exact(), Some(BigRational::new(BigInt::from(1), BigInt::from(2))));
        assert_eq!(f64::NAN.to_exact(), None);
        assert_eq!(f64::INFINITY.to_exact(), None);
    }

    #[test]
    fn add_exact_test() {
        let third = BigRational::new(BigInt::from(1), BigInt::from(3));
        assert_eq!(
            2u8.add_exact(&third),
            Some(BigRational::new(BigInt::from(7), BigInt::from(3)))
        );

        // the float path rounds the sum, so it no longer equals 7/3
        let rounded = 2f64.add_exact(&third).unwrap();
        assert_ne!(rounded, BigRational::new(BigInt::from(7), BigInt::from(3)));
        assert_eq!(rounded, BigRational::from_float(2f64 + 1f64 / 3f64).unwrap());
    }

    #[test]
    fn constant_test() {
        assert_eq!(Constant::from(2) + Constant::from(3), Constant::Integer(5));
        assert_eq!(Constant::from(2) * Constant::from(0.5), Constant::Real(1.0));
        assert_eq!(
            Constant::from(i64::MAX) + Constant::one(),
            Constant::Real(i64::MAX as f64 + 1.0)
        );
        assert!(Constant::Real(0.0).is_zero());
        assert_eq!(Constant::from(1.5), Constant::Real(1.5));
        assert_eq!(format!("{}", Constant::from(1.1)), "1.1");
        assert_eq!(Constant::from(4).to_exact(), 4i64.to_exact());
        assert_eq!(Constant::from(1.1).to_exact(), 1.1f64.to_exact());
    }

    #[test]
    fn approx_conversion_test() {
        assert_eq!(Ratio::new(1i32, 4).to_approx(), 0.25);
        assert_eq!(BigInt::from(-7).to_approx(), -7.0);
        assert_eq!(5usize.to_approx(), 5.0);
    }
}
