//! Implementation of generalized continued fractions given as a flat sequence of constants

use crate::traits::{Coefficient, Exact, Undefined};
use core::iter::{FromIterator, Rev};
use core::slice::Chunks;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::fmt;

/// This struct represents a generalized continued fraction
/// `b0 + a1 / (b1 + a2 / (b2 + a3 / ..))`, stored as the flat sequence of
/// constants `[b0, a1, b1, a2, b2, ..]`.
///
/// The sequence is not required to end with a denominator. A trailing
/// numerator `a_k` is read as the term `a_k / 1`, and an empty sequence
/// represents zero.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct GeneralizedFraction<T> {
    constants: Vec<T>,
}

impl<T> GeneralizedFraction<T> {
    #[inline]
    pub fn new(constants: Vec<T>) -> Self {
        GeneralizedFraction { constants }
    }

    #[inline]
    pub fn constants(&self) -> &[T] {
        &self.constants[..]
    }

    #[inline]
    pub fn into_constants(self) -> Vec<T> {
        self.constants
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.constants.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.constants.is_empty()
    }

    /// Returns an iterator of `(a_k, b_k)` pairs from the innermost term outwards
    pub fn pairs_iter(&self) -> Pairs<'_, T> {
        Pairs {
            chunks: term_chunks(&self.constants),
        }
    }
}

impl<T: Clone + Zero + One> GeneralizedFraction<T> {
    /// The leading constant `b0`, or zero for an empty sequence
    pub fn head(&self) -> T {
        self.constants.first().cloned().unwrap_or_else(T::zero)
    }

    /// List of `(a_k, b_k)` pairs, innermost term first. A missing last
    /// denominator is filled with one.
    pub fn pairs(&self) -> Vec<(T, T)> {
        self.pairs_iter().collect()
    }

    /// Keep the first `len` constants (or all of them if there are fewer)
    pub fn truncated(&self, len: usize) -> Self {
        let len = len.min(self.constants.len());
        GeneralizedFraction::new(self.constants[..len].to_vec())
    }
}

impl<T: Coefficient> GeneralizedFraction<T> {
    #[inline]
    pub fn evaluate_approx(&self) -> f64 {
        evaluate_approx(&self.constants)
    }

    #[inline]
    pub fn evaluate_exact(&self) -> Exact {
        evaluate_exact(&self.constants)
    }
}

impl<T> From<Vec<T>> for GeneralizedFraction<T> {
    fn from(constants: Vec<T>) -> Self {
        GeneralizedFraction::new(constants)
    }
}

impl<T> FromIterator<T> for GeneralizedFraction<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        GeneralizedFraction::new(iter.into_iter().collect())
    }
}

impl<T: fmt::Display> fmt::Display for GeneralizedFraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        if let Some((head, rest)) = self.constants.split_first() {
            write!(f, "{}", head)?;
            for (i, c) in rest.iter().enumerate() {
                if i == 0 {
                    write!(f, "; {}", c)?;
                } else {
                    write!(f, ", {}", c)?;
                }
            }
        }
        write!(f, "]")
    }
}

// chunks of [a_k, b_k] (or [a_k] for the last term), innermost first
#[inline]
fn term_chunks<T>(constants: &[T]) -> Rev<Chunks<'_, T>> {
    constants.get(1..).unwrap_or(&[]).chunks(2).rev()
}

/// Iterator of the `(a_k, b_k)` pairs of a [GeneralizedFraction], innermost term first
#[derive(Debug, Clone)]
pub struct Pairs<'a, T> {
    chunks: Rev<Chunks<'a, T>>,
}

impl<'a, T: Clone + One> Iterator for Pairs<'a, T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<Self::Item> {
        let chunk = self.chunks.next()?;
        let b = chunk.get(1).cloned().unwrap_or_else(T::one);
        Some((chunk[0].clone(), b))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl<'a, T: Clone + One> ExactSizeIterator for Pairs<'a, T> {}

/// Evaluate the continued fraction `[b0, a1, b1, ..]` in floating point.
///
/// The tail is folded from the innermost term outwards with `acc = a / (b + acc)`.
/// A zero denominator is not an error, it produces an infinity or NaN that
/// propagates to the result.
pub fn evaluate_approx<T: Coefficient>(constants: &[T]) -> f64 {
    let tail = term_chunks(constants).fold(0.0, |acc, chunk| {
        let b = chunk.get(1).map_or(1.0, Coefficient::to_approx);
        chunk[0].to_approx() / (b + acc)
    });
    match constants.first() {
        Some(head) => head.to_approx() + tail,
        None => tail,
    }
}

/// Evaluate the continued fraction `[b0, a1, b1, ..]` with exact rational arithmetic.
///
/// Folding stops at the first term whose denominator `b_k + acc` is zero, and
/// the value is [Undefined].
pub fn evaluate_exact<T: Coefficient>(constants: &[T]) -> Exact {
    let chunks = term_chunks(constants);
    let count = chunks.len();
    let mut acc = BigRational::zero();

    for (i, chunk) in chunks.enumerate() {
        let term = count - i; // a_term is constants[2 * term - 1]
        let a = chunk[0]
            .to_exact()
            .ok_or(Undefined::NonFinite { index: 2 * term - 1 })?;
        let denom = match chunk.get(1) {
            Some(b) => b
                .add_exact(&acc)
                .ok_or(Undefined::NonFinite { index: 2 * term })?,
            None => acc + BigRational::one(),
        };
        if denom.is_zero() {
            return Err(Undefined::ZeroDenominator { term });
        }
        acc = a / denom;
    }

    match constants.first() {
        Some(head) => head.add_exact(&acc).ok_or(Undefined::NonFinite { index: 0 }),
        None => Ok(acc),
    }
}
