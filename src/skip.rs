//! Skip-distance strategies.
//!
//! Sequential sampling of `n` out of `N` items reduces to repeatedly asking
//! "how many items do I pass over before the next selection?". Vitter (1987)
//! gives two ways to draw that skip distance `S`:
//!
//! - **Algorithm A**: a single uniform `V`, then walk the skip distribution's
//!   survival function until it drops below `V`. Cheap per step but linear in
//!   `S`, so only worth it while the sample is dense.
//! - **Algorithm D**: rejection sampling against a continuous envelope, with a
//!   carried variate `V'` so that on average O(1) uniforms are used per
//!   selection regardless of `N`.
//!
//! D is used while `ALPHA_INVERSE * n <= N`; once the remaining sample becomes
//! dense the strategy switches to A for good.
//!
//! ## References
//!
//! - Vitter (1984): *Faster Methods for Random Sampling*.
//! - Vitter (1987): *An Efficient Algorithm for Sequential Random Sampling*.

use crate::variate::{new_v_prime, UniformSource};

/// Switch to Algorithm A once `ALPHA_INVERSE * to_select > available`.
pub const ALPHA_INVERSE: usize = 13;

/// Whether the remaining sample is dense enough that Algorithm A wins.
#[inline]
pub(crate) fn prefers_a(available: usize, to_select: usize) -> bool {
    ALPHA_INVERSE.saturating_mul(to_select) > available
}

/// The active skip-distance strategy.
///
/// `V'` is only meaningful under Algorithm D, so it lives in that variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Strategy {
    A,
    D { v_prime: f64 },
}

impl Strategy {
    /// Pick the initial strategy for a fresh `to_select` out of `available`.
    ///
    /// Starting in D draws the first `V'`.
    pub(crate) fn initial<S: UniformSource + ?Sized>(
        available: usize,
        to_select: usize,
        rng: &mut S,
    ) -> Self {
        if to_select == 0 || prefers_a(available, to_select) {
            Self::A
        } else {
            Self::D {
                v_prime: new_v_prime(rng, to_select),
            }
        }
    }

    pub(crate) fn is_algorithm_a(&self) -> bool {
        matches!(self, Self::A)
    }

    /// Number of unselected items to pass over before the next selection.
    ///
    /// Requires `0 < to_select <= available`. May switch `self` from D to A;
    /// never the other way.
    pub(crate) fn skip<S: UniformSource + ?Sized>(
        &mut self,
        available: usize,
        to_select: usize,
        rng: &mut S,
    ) -> usize {
        debug_assert!(to_select > 0 && to_select <= available);

        match self {
            Self::A => skip_a(available, to_select, rng),
            Self::D { .. } if prefers_a(available, to_select) => {
                tracing::trace!(available, to_select, "switching to algorithm A");
                *self = Self::A;
                skip_a(available, to_select, rng)
            }
            Self::D { v_prime } => skip_d(available, to_select, v_prime, rng),
        }
    }
}

/// Algorithm A: one uniform, then walk the survival function.
fn skip_a<S: UniformSource + ?Sized>(available: usize, to_select: usize, rng: &mut S) -> usize {
    if to_select == 1 {
        return rng.uniform_index(available);
    }

    let v = rng.uniform_real();
    let mut quot = (available - to_select) as f64 / available as f64;
    let mut s = 0usize;
    while quot > v {
        s += 1;
        quot *= (available - to_select - s) as f64 / (available - s) as f64;
    }
    s
}

/// Algorithm D, steps D2-D4.
///
/// `v_prime` is carried across calls; on return it holds the variate for the
/// next call (with one fewer item left to select).
fn skip_d<S: UniformSource + ?Sized>(
    available: usize,
    to_select: usize,
    v_prime: &mut f64,
    rng: &mut S,
) -> usize {
    // Closed form for the last selection. Must stay ahead of the loop below,
    // which raises to 1 / (to_select - 1).
    if to_select == 1 {
        let s = (available as f64 * *v_prime).floor() as usize;
        // V' can round up to exactly 1.0 after a fast accept.
        return s.min(available - 1);
    }

    let n = available as f64;
    let qu1 = 1 + available - to_select;
    let qu1_f = qu1 as f64;
    let exponent = 1.0 / (to_select - 1) as f64;

    loop {
        // D2: candidate S from V', regenerating until it lands inside the population.
        let (x, s) = loop {
            let x = n * (1.0 - *v_prime);
            let s = x.floor() as usize;
            if s < qu1 {
                break (x, s);
            }
            *v_prime = new_v_prime(rng, to_select);
        };

        let u = rng.uniform_real();
        let y1 = (u * n / qu1_f).powf(exponent);
        *v_prime = y1 * (1.0 - x / n) * (qu1_f / (qu1_f - s as f64));

        // D3: quick acceptance. V' is already a valid variate for the next call.
        if *v_prime <= 1.0 {
            return s;
        }

        // D4: exact test against the true skip distribution.
        let (mut bottom, limit) = if to_select > s + 1 {
            ((available - to_select) as f64, available - s)
        } else {
            ((available - (s + 1)) as f64, qu1)
        };
        let mut top = (available - 1) as f64;
        let mut y2 = 1.0_f64;
        for _ in limit..available {
            y2 *= top / bottom;
            top -= 1.0;
            bottom -= 1.0;
        }

        if n / (n - x) < y1 * y2.powf(exponent) {
            *v_prime = new_v_prime(rng, to_select);
        } else {
            *v_prime = new_v_prime(rng, to_select - 1);
            return s;
        }
    }
}
