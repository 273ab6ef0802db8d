//! Randomized local search ("rediscover") for the integer constants of a
//! generalized continued fraction that equals a target rational.
//!
//! The search is built from three parts
//! 1. [Neighborhood] perturbs the current vector into a small set of candidates
//! 2. [distance] scores an exact evaluation against the target, undefined values
//!    being infinitely far
//! 3. [Rediscoverer] climbs from a random start, keeping a candidate only when
//!    it strictly improves the error on a random prefix
//!
//! The search is best-effort: it stops at [SearchConfig::max_iterations] and
//! reports [SearchStatus::Exhausted] if the target was not reached.

mod config;
mod driver;
mod fitness;
mod neighborhood;

pub use config::*;
pub use driver::*;
pub use fitness::*;
pub use neighborhood::*;
