//! Convergence traces of generalized continued fractions

use super::general::{evaluate_approx, evaluate_exact, GeneralizedFraction};
use crate::traits::{Coefficient, Exact};

/// Iterator of the prefixes `[b0]`, `[b0, a1, b1]`, `[b0, a1, b1, a2, b2]`, ..
/// of a constant sequence. Each prefix consumes one more term of the fraction.
///
/// A sequence of length `n` yields `n / 2 + 1` prefixes. The last one is
/// clipped to the whole sequence, so an even-length sequence ends with the
/// `a_k / 1` reading of its trailing numerator. An empty sequence yields one
/// empty prefix.
#[derive(Debug, Clone)]
pub struct Truncations<'a, T> {
    constants: &'a [T],
    k: usize,
}

impl<'a, T> Truncations<'a, T> {
    pub fn new(constants: &'a [T]) -> Self {
        Truncations { constants, k: 0 }
    }

    #[inline]
    fn remaining(&self) -> usize {
        (self.constants.len() / 2 + 1).saturating_sub(self.k)
    }
}

impl<'a, T> Iterator for Truncations<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }
        let len = (2 * self.k + 1).min(self.constants.len());
        self.k += 1;
        Some(&self.constants[..len])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<'a, T> ExactSizeIterator for Truncations<'a, T> {}

impl<T> GeneralizedFraction<T> {
    /// Returns an iterator of the truncated sequences whose values form the
    /// convergence trace
    pub fn truncations(&self) -> Truncations<'_, T> {
        Truncations::new(self.constants())
    }
}

impl<T: Coefficient> GeneralizedFraction<T> {
    /// Floating point value of every truncation, from the head alone to the full fraction
    pub fn convergence_approx(&self) -> Vec<f64> {
        self.truncations().map(evaluate_approx).collect()
    }

    /// Exact value of every truncation, from the head alone to the full fraction
    pub fn convergence_exact(&self) -> Vec<Exact> {
        self.truncations().map(evaluate_exact).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Undefined;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    fn int(n: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(n))
    }

    #[test]
    fn truncations_test() {
        let cf = GeneralizedFraction::new(vec![1, 2, 3, 4, 5, 6]);
        let prefixes: Vec<&[i32]> = cf.truncations().collect();
        assert_eq!(
            prefixes,
            vec![&[1][..], &[1, 2, 3][..], &[1, 2, 3, 4, 5][..], &[1, 2, 3, 4, 5, 6][..]]
        );
        assert_eq!(cf.truncations().len(), 4);

        let empty = GeneralizedFraction::<i32>::new(vec![]);
        assert_eq!(empty.truncations().count(), 1);
        assert!(empty.truncations().all(|p| p.is_empty()));
    }

    #[test]
    fn convergence_approx_test() {
        let ones = GeneralizedFraction::new(vec![1; 11]);
        assert_eq!(
            ones.convergence_approx(),
            vec![1.0, 2.0, 1.5, 1.6666666666666665, 1.6, 1.625]
        );

        let ones = GeneralizedFraction::new(vec![1; 10]);
        assert_eq!(
            ones.convergence_approx(),
            vec![1.0, 2.0, 1.5, 1.6666666666666665, 1.6, 1.625]
        );

        assert_eq!(GeneralizedFraction::<i32>::new(vec![]).convergence_approx(), vec![0.0]);
        assert_eq!(GeneralizedFraction::new(vec![7]).convergence_approx(), vec![7.0]);
    }

    #[test]
    fn convergence_approx_settles_test() {
        // the trace of a long fraction stops moving once f64 precision is exhausted
        let cf: GeneralizedFraction<i64> = (0..51).map(|i| i % 7 + 1).collect();
        let trace = cf.convergence_approx();
        let n = trace.len();
        assert_eq!(trace[n - 1], trace[n - 2]);
    }

    #[test]
    fn convergence_exact_test() {
        assert_eq!(GeneralizedFraction::<i32>::new(vec![]).convergence_exact(), vec![Ok(int(0))]);
        assert_eq!(
            GeneralizedFraction::new(vec![1, 2]).convergence_exact(),
            vec![Ok(int(1)), Ok(int(3))]
        );
        assert_eq!(GeneralizedFraction::new(vec![5]).convergence_exact(), vec![Ok(int(5))]);

        let ones = GeneralizedFraction::new(vec![1; 10]);
        let trace = ones.convergence_exact();
        assert_eq!(trace.len(), 6);
        assert_eq!(
            trace[5],
            Ok(BigRational::new(BigInt::from(13), BigInt::from(8)))
        );
    }

    #[test]
    fn convergence_exact_undefined_test() {
        let cf = GeneralizedFraction::new(vec![0, 1, 0, 1, 1]);
        assert_eq!(
            cf.convergence_exact(),
            vec![
                Ok(int(0)),
                Err(Undefined::ZeroDenominator { term: 1 }),
                Ok(BigRational::new(BigInt::from(1), BigInt::from(1)))
            ]
        );
    }
}
