//! Random perturbation of integer coefficient vectors.

use super::config::{ConfigError, SearchConfig};
use rand::Rng;
use std::collections::HashSet;

/// Generator of candidate vectors around a current one.
///
/// A variant keeps every position with probability `1 - mutation_rate`.
/// A changed position is usually jittered by a small offset. With probability
/// `pool_rate` it is instead redrawn from the nonzero pool, except for the
/// head (position 0), which is always jittered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighborhood {
    mutation_rate: f64,
    pool_rate: f64,
    pool_bound: i64,
    jitter: i64,
}

impl Neighborhood {
    pub fn new(config: &SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Neighborhood {
            mutation_rate: config.mutation_rate,
            pool_rate: config.pool_rate,
            pool_bound: config.pool_bound,
            jitter: config.jitter,
        })
    }

    /// Draw uniformly from `[-pool_bound, -1] ∪ [1, pool_bound]`
    pub fn sample_nonzero<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let v = rng.gen_range(1..=self.pool_bound);
        if rng.gen_bool(0.5) {
            v
        } else {
            -v
        }
    }

    /// A vector of `len` values drawn from the nonzero pool
    pub fn random_vector<R: Rng + ?Sized>(&self, len: usize, rng: &mut R) -> Vec<i64> {
        (0..len).map(|_| self.sample_nonzero(rng)).collect()
    }

    /// Build one perturbed copy of `vector`
    pub fn variant<R: Rng + ?Sized>(&self, vector: &[i64], rng: &mut R) -> Vec<i64> {
        vector
            .iter()
            .enumerate()
            .map(|(idx, &v)| {
                if !rng.gen_bool(self.mutation_rate) {
                    v
                } else if idx > 0 && rng.gen_bool(self.pool_rate) {
                    self.sample_nonzero(rng)
                } else {
                    v.saturating_add(rng.gen_range(-self.jitter..=self.jitter))
                }
            })
            .collect()
    }

    /// Make one variant per position of `vector`, drop duplicates and add
    /// `vector` itself. The result holds at most `vector.len() + 1` distinct
    /// vectors and always contains the input unchanged.
    pub fn generate<R: Rng + ?Sized>(&self, vector: &[i64], rng: &mut R) -> Vec<Vec<i64>> {
        let mut seen = HashSet::with_capacity(vector.len() + 1);
        let mut variants = Vec::with_capacity(vector.len() + 1);
        for _ in 0..vector.len() {
            let v = self.variant(vector, rng);
            if seen.insert(v.clone()) {
                variants.push(v);
            }
        }
        if !seen.contains(vector) {
            variants.push(vector.to_vec());
        }
        variants
    }
}

impl Default for Neighborhood {
    fn default() -> Self {
        let config = SearchConfig::default();
        Neighborhood {
            mutation_rate: config.mutation_rate,
            pool_rate: config.pool_rate,
            pool_bound: config.pool_bound,
            jitter: config.jitter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sample_nonzero_test() {
        let hood = Neighborhood::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            let v = hood.sample_nonzero(&mut rng);
            assert!(v != 0 && (-10..=10).contains(&v));
            seen.insert(v);
        }
        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn generate_contains_input_test() {
        let hood = Neighborhood::default();
        let mut rng = StdRng::seed_from_u64(2);
        for len in 0..8 {
            let vector = hood.random_vector(len, &mut rng);
            for _ in 0..50 {
                let candidates = hood.generate(&vector, &mut rng);
                assert!(candidates.contains(&vector));
                assert!(candidates.len() <= len + 1);
                assert!(candidates.iter().all(|c| c.len() == len));

                let distinct: HashSet<_> = candidates.iter().collect();
                assert_eq!(distinct.len(), candidates.len());
            }
        }
    }

    #[test]
    fn variant_bounds_test() {
        // without pool draws every position stays within the jitter radius
        let config = SearchConfig { mutation_rate: 1.0, pool_rate: 0.0, ..Default::default() };
        let hood = Neighborhood::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let vector = vec![100, -100, 0, 7];
        for _ in 0..200 {
            let variant = hood.variant(&vector, &mut rng);
            for (v, o) in variant.iter().zip(&vector) {
                assert!((v - o).abs() <= 4);
            }
        }
    }

    #[test]
    fn variant_head_never_pooled_test() {
        // forcing pool draws changes the tail to nonzero pool values but only jitters the head
        let config = SearchConfig { mutation_rate: 1.0, pool_rate: 1.0, ..Default::default() };
        let hood = Neighborhood::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let vector = vec![1000, 1000, 1000];
        for _ in 0..200 {
            let variant = hood.variant(&vector, &mut rng);
            assert!((996..=1004).contains(&variant[0]));
            assert!(variant[1..].iter().all(|v| *v != 0 && v.abs() <= 10));
        }
    }

    #[test]
    fn unchanged_variant_test() {
        let config = SearchConfig { mutation_rate: 0.0, ..Default::default() };
        let hood = Neighborhood::new(&config).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(hood.generate(&[3, 1, 4], &mut rng), vec![vec![3, 1, 4]]);
    }

    #[test]
    fn invalid_config_test() {
        let config = SearchConfig { mutation_rate: -0.1, ..Default::default() };
        assert!(Neighborhood::new(&config).is_err());
    }
}
