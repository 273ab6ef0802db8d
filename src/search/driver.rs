//! Hill climbing search for integer constants of a target rational.

use super::config::{ConfigError, SearchConfig};
use super::fitness::{approx_distance, distance, Distance};
use super::neighborhood::Neighborhood;
use crate::cont_frac::{evaluate_approx, evaluate_exact, GeneralizedFraction};
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Errors that prevent a search from starting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error("rediscover needs at least 3 terms, got {terms}")]
    TooFewTerms { terms: usize },
    #[error("Invalid search configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Terminal state of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// The constants evaluate exactly to the target
    Converged,
    /// The iteration cap was reached first
    Exhausted,
}

/// Outcome of a search. The constants are returned whether or not the search converged.
#[derive(Debug, Clone, PartialEq)]
pub struct Rediscovery {
    pub constants: Vec<i64>,
    pub status: SearchStatus,
    /// Improvement steps taken before the loop stopped
    pub iterations: usize,
}

impl Rediscovery {
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.status == SearchStatus::Converged
    }

    pub fn to_fraction(&self) -> GeneralizedFraction<i64> {
        GeneralizedFraction::new(self.constants.clone())
    }

    /// Floating point error of each convergent of the result against `target`
    pub fn convergence_errors(&self, target: &BigRational) -> Vec<f64> {
        let target = target.to_f64().unwrap_or(f64::NAN);
        self.to_fraction()
            .convergence_approx()
            .into_iter()
            .map(|v| approx_distance(v, target))
            .collect()
    }
}

/// Randomized local search for an integer vector whose generalized continued
/// fraction evaluates exactly to a target rational.
///
/// Each iteration scores candidates on a random prefix `[0..=which]` of the
/// vector, with `which` drawn from `[2, terms - 1]`. The best neighbor by
/// prefix error (ties broken by a shuffle) replaces the current vector only if
/// its prefix error is strictly lower.
pub struct Rediscoverer<R = StdRng> {
    config: SearchConfig,
    neighborhood: Neighborhood,
    rng: R,
}

impl Rediscoverer<StdRng> {
    /// Create a search seeded from `config.seed`, or from OS entropy if unset
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Rediscoverer<R> {
    /// Create a search drawing from the given random source
    pub fn with_rng(config: SearchConfig, rng: R) -> Result<Self, SearchError> {
        let neighborhood = Neighborhood::new(&config)?;
        Ok(Rediscoverer { config, neighborhood, rng })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn run(&mut self, target: &BigRational, terms: usize) -> Result<Rediscovery, SearchError> {
        self.run_with_progress(target, terms, |_, _, _| {})
    }

    /// Run the search, calling `on_progress(iteration, current_error, current)`
    /// every `progress_interval` iterations. `current_error` is the floating
    /// point error of the whole current vector.
    pub fn run_with_progress<F>(
        &mut self,
        target: &BigRational,
        terms: usize,
        mut on_progress: F,
    ) -> Result<Rediscovery, SearchError>
    where
        F: FnMut(usize, f64, &[i64]),
    {
        if terms < 3 {
            return Err(SearchError::TooFewTerms { terms });
        }

        let target_approx = target.to_f64().unwrap_or(f64::NAN);
        let interval = self.config.progress_interval;
        let mut current = self.neighborhood.random_vector(terms, &mut self.rng);
        let mut iterations = 0;

        for i in 1..=self.config.max_iterations {
            if reaches(&current, target) {
                break;
            }
            iterations = i;

            let which = self.rng.gen_range(2..terms);
            if let Some(proposal) = self.propose(&current, which, target) {
                if let Some(error) = adopt(&current, &proposal, which, target) {
                    let error = error.to_f64();
                    log::trace!("({}) prefix {} improved to {:?} ({})", i, which, proposal, error);
                    current = proposal;
                }
            }

            if interval != 0 && i % interval == 0 {
                let error = approx_distance(evaluate_approx(&current), target_approx);
                log::debug!("({}) {} : {} {:?}", i, target, error, current);
                on_progress(i, error, &current);
            }
        }

        let status = if reaches(&current, target) {
            log::info!("converged to {} after {} iterations: {:?}", target, iterations, current);
            SearchStatus::Converged
        } else {
            log::warn!("failed to converge to {} in {} iterations", target, iterations);
            SearchStatus::Exhausted
        };

        Ok(Rediscovery { constants: current, status, iterations })
    }

    /// Best neighbor of `current` on the prefix `[0..=which]`. Neighbors whose
    /// prefix is undefined or zero are dropped, and the neighborhood is
    /// regenerated until one survives or the retry cap is hit.
    fn propose(&mut self, current: &[i64], which: usize, target: &BigRational) -> Option<Vec<i64>> {
        for _ in 0..self.config.max_retries {
            let survivors: Vec<Vec<i64>> = self
                .neighborhood
                .generate(current, &mut self.rng)
                .into_iter()
                .filter(|c| matches!(evaluate_exact(&c[..=which]), Ok(v) if !v.is_zero()))
                .collect();
            if let Some(best) = rank(survivors, which, target, &mut self.rng) {
                return Some(best);
            }
        }

        log::trace!("no usable neighbor of {:?} on prefix {}", current, which);
        None
    }
}

/// Candidate with the lowest prefix error. Equal errors are decided by the shuffle,
/// since the sort is stable.
fn rank<R: Rng + ?Sized>(
    mut survivors: Vec<Vec<i64>>,
    which: usize,
    target: &BigRational,
    rng: &mut R,
) -> Option<Vec<i64>> {
    survivors.shuffle(rng);
    survivors.sort_by_cached_key(|c| prefix_distance(c, which, target));
    survivors.into_iter().next()
}

/// Prefix error of `proposal` if it is strictly lower than the one of `current`.
/// A tie keeps `current`.
fn adopt(
    current: &[i64],
    proposal: &[i64],
    which: usize,
    target: &BigRational,
) -> Option<Distance> {
    let e1 = prefix_distance(current, which, target);
    let e2 = prefix_distance(proposal, which, target);
    if e2 < e1 {
        Some(e2)
    } else {
        None
    }
}

#[inline]
fn prefix_distance(constants: &[i64], which: usize, target: &BigRational) -> Distance {
    distance(&evaluate_exact(&constants[..=which]), target)
}

#[inline]
fn reaches(constants: &[i64], target: &BigRational) -> bool {
    distance(&evaluate_exact(constants), target).is_zero()
}

/// Search for `terms` integer constants whose continued fraction equals `target`,
/// with the default configuration and an entropy seeded random source.
///
/// The constants are returned even if the search did not converge.
pub fn rediscover(target: &BigRational, terms: usize) -> Result<Vec<i64>, SearchError> {
    let mut search = Rediscoverer::new(SearchConfig::default())?;
    Ok(search.run(target, terms)?.constants)
}
