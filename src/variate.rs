//! Uniform variate source.
//!
//! The samplers only ever need two kinds of draw: a real strictly inside
//! `(0, 1)` and an integer in `[0, high)`. Every `rand::Rng` provides both, so
//! a seeded `ChaCha8Rng`, a `StdRng` or the thread-local `rand::rng()` can all
//! be plugged in directly.
//!
//! The trait exists as its own seam so that callers (and tests) can wrap a
//! generator, e.g. to count how many draws a full sampling pass costs.

use rand::distr::Open01;
use rand::Rng;

/// A source of uniform random variates.
pub trait UniformSource {
    /// A uniform real in the open interval `(0, 1)`.
    fn uniform_real(&mut self) -> f64;

    /// A uniform integer in `[0, high)`.
    ///
    /// `high` must be non-zero.
    fn uniform_index(&mut self, high: usize) -> usize;
}

impl<R: Rng + ?Sized> UniformSource for R {
    #[inline]
    fn uniform_real(&mut self) -> f64 {
        self.sample(Open01)
    }

    #[inline]
    fn uniform_index(&mut self, high: usize) -> usize {
        self.random_range(0..high)
    }
}

/// Draw a fresh `V' = U^(1/remaining)` for Algorithm D.
///
/// `V'` is distributed as the largest of `remaining` independent uniforms,
/// which is what Algorithm D uses to place the next selection.
#[inline]
pub(crate) fn new_v_prime<S: UniformSource + ?Sized>(rng: &mut S, remaining: usize) -> f64 {
    rng.uniform_real().powf(1.0 / remaining as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn uniform_real_is_strictly_inside_unit_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..10_000 {
            let u = rng.uniform_real();
            assert!(u > 0.0 && u < 1.0, "u={u}");
        }
    }

    #[test]
    fn uniform_index_stays_below_high() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert_eq!(rng.uniform_index(1), 0);
        for _ in 0..10_000 {
            assert!(rng.uniform_index(7) < 7);
        }
    }

    #[test]
    fn v_prime_mean_matches_max_of_uniforms() {
        // E[max of k uniforms] = k / (k + 1).
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let k = 4;
        let trials = 20_000;
        let mean = (0..trials).map(|_| new_v_prime(&mut rng, k)).sum::<f64>() / trials as f64;
        assert!((mean - 0.8).abs() < 0.01, "mean={mean}");
    }
}
