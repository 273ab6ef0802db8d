//! Data structures and algorithms related to generalized continued fractions
//! written as a flat sequence of constants.
//!
//! A sequence `[b0, a1, b1, a2, b2, ..]` stands for `b0 + a1 / (b1 + a2 / (b2 + ..))`.
//! 1. [GeneralizedFraction] holds the sequence and derives its head and `(a, b)` pairs
//! 2. [evaluate_approx] and [evaluate_exact] fold the pairs in floating point or in
//!    exact rationals. Exact evaluation reports a vanishing denominator as
//!    [Undefined][crate::Undefined] instead of panicking
//! 3. [Truncations] walks the prefixes whose values form the convergence trace
//!
//! # References:
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/nonsimple.html>
//! - <https://en.wikipedia.org/wiki/Generalized_continued_fraction>
//!

mod convergents;
mod general;

pub use convergents::*;
pub use general::*;
