//! Sequential random sampling over an iterator.
//!
//! Selects exactly `n` of the `total` items an iterator will produce, in their
//! original order, while drawing only O(n) random variates. Unselected runs
//! are passed over with a single `Iterator::nth` call, so inputs with a cheap
//! `nth` (ranges, slices, vectors) cost O(n) overall.
//!
//! This is Vitter's **Algorithm D**, falling back to **Algorithm A** once the
//! remaining sample is dense (see [`crate::skip`]).
//!
//! Notes:
//! - `total` must be known up front and must not exceed what the input yields.
//! - `*_with_rng` entrypoints take any [`UniformSource`]; pass a seeded RNG
//!   (or `&mut` to one) for deterministic output.

use std::fmt;
use std::iter::FusedIterator;

use rand::rngs::ThreadRng;

use crate::error::{check_sample_size, SampleError};
use crate::skip::Strategy;
use crate::variate::UniformSource;

/// Lazily yields `n` items sampled uniformly without replacement from `input`.
///
/// The first selection is located at construction time, so [`current`] is
/// valid immediately. Each [`advance`] (or [`Iterator::next`]) consumes the
/// current selection and locates the next one.
///
/// [`current`]: SequentialSampler::current
/// [`advance`]: SequentialSampler::advance
pub struct SequentialSampler<I: Iterator, R = ThreadRng> {
    input: I,
    current: Option<I::Item>,
    /// Items not yet passed over, counting the current selection.
    available: usize,
    /// Selections still owed, counting the current selection.
    to_select: usize,
    index: usize,
    strategy: Strategy,
    rng: R,
}

impl<I: Iterator> SequentialSampler<I, ThreadRng> {
    /// Sample `n` of the `total` items of `input` using the thread-local RNG.
    ///
    /// Duplicates made with [`duplicate`](Self::duplicate) share the thread-local
    /// generator, so they do not replay the original's choices. Use
    /// [`with_rng`](Self::with_rng) with a seeded generator for that.
    pub fn new(input: I, n: usize, total: usize) -> Result<Self, SampleError> {
        Self::with_rng(input, n, total, rand::rng())
    }
}

impl<I: Iterator, R: UniformSource> SequentialSampler<I, R> {
    /// Sample `n` of the `total` items of `input`, drawing from `rng`.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidSampleSize`] if `n > total`.
    ///
    /// # Panics
    ///
    /// Panics (here or while iterating) if `input` yields fewer than `total` items.
    pub fn with_rng(input: I, n: usize, total: usize, mut rng: R) -> Result<Self, SampleError> {
        check_sample_size(n, total)?;

        let strategy = Strategy::initial(total, n, &mut rng);
        tracing::debug!(
            n,
            total,
            algorithm_a = strategy.is_algorithm_a(),
            "new sequential sampler"
        );

        let mut sampler = Self {
            input,
            current: None,
            available: total,
            to_select: n,
            index: 0,
            strategy,
            rng,
        };
        sampler.prime();
        Ok(sampler)
    }

    /// Pass over the next run of unselected items and stop on a selection.
    fn prime(&mut self) {
        if self.to_select == 0 {
            return;
        }

        let s = self
            .strategy
            .skip(self.available, self.to_select, &mut self.rng);
        assert!(
            s + self.to_select <= self.available,
            "skip distance {s} overruns population ({} items for {} selections)",
            self.available,
            self.to_select
        );

        match self.input.nth(s) {
            Some(item) => self.current = Some(item),
            None => panic!(
                "input ended at position {} before the declared total was reached",
                self.index + s
            ),
        }
        self.index += s;
        self.available -= s;
    }

    /// Consume the current selection and locate the next one.
    ///
    /// # Panics
    ///
    /// Panics if the sampler is exhausted.
    pub fn advance(&mut self) {
        assert!(
            !self.is_exhausted(),
            "advance called on an exhausted sampler"
        );

        self.current = None;
        self.available -= 1;
        self.to_select -= 1;
        if self.to_select == 0 {
            return;
        }
        self.index += 1;
        self.prime();
    }
}

impl<I: Iterator, R> SequentialSampler<I, R> {
    /// The current selection, or `None` once all `n` items have been yielded.
    pub fn current(&self) -> Option<&I::Item> {
        self.current.as_ref()
    }

    /// Whether every selection has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.to_select == 0
    }

    /// Selections still to be yielded, including the current one.
    pub fn remaining(&self) -> usize {
        self.to_select
    }

    /// Position in `input` of the current (or, once exhausted, the last) selection.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether skip distances are now drawn with Algorithm A.
    pub fn is_algorithm_a(&self) -> bool {
        self.strategy.is_algorithm_a()
    }
}

impl<I, R> SequentialSampler<I, R>
where
    I: Iterator + Clone,
    I::Item: Clone,
    R: Clone,
{
    /// An independent copy of this sampler.
    ///
    /// The copy owns a clone of the input and of the RNG, so with a seeded RNG
    /// it yields exactly what `self` would have yielded, and advancing either
    /// one leaves the other untouched.
    pub fn duplicate(&self) -> Self {
        Self {
            input: self.input.clone(),
            current: self.current.clone(),
            available: self.available,
            to_select: self.to_select,
            index: self.index,
            strategy: self.strategy,
            rng: self.rng.clone(),
        }
    }
}

impl<I, R> Clone for SequentialSampler<I, R>
where
    I: Iterator + Clone,
    I::Item: Clone,
    R: Clone,
{
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl<I: Iterator, R> fmt::Debug for SequentialSampler<I, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SequentialSampler")
            .field("available", &self.available)
            .field("to_select", &self.to_select)
            .field("index", &self.index)
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

impl<I: Iterator, R: UniformSource> Iterator for SequentialSampler<I, R> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current.take()?;
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.to_select, Some(self.to_select))
    }
}

impl<I: Iterator, R: UniformSource> ExactSizeIterator for SequentialSampler<I, R> {}

impl<I: Iterator, R: UniformSource> FusedIterator for SequentialSampler<I, R> {}

/// Sample `n` items from a sized iterator using the thread-local RNG.
///
/// `total` is taken from `iter.len()`.
pub fn random_sample<I: ExactSizeIterator>(
    iter: I,
    n: usize,
) -> Result<SequentialSampler<I>, SampleError> {
    let total = iter.len();
    SequentialSampler::new(iter, n, total)
}

/// [`random_sample`] with a caller-supplied RNG.
pub fn random_sample_with_rng<I: ExactSizeIterator, R: UniformSource>(
    iter: I,
    n: usize,
    rng: R,
) -> Result<SequentialSampler<I, R>, SampleError> {
    let total = iter.len();
    SequentialSampler::with_rng(iter, n, total, rng)
}

/// Sorted sample of `n` distinct indices from `0..total`.
pub fn sample_indices<R: UniformSource>(
    total: usize,
    n: usize,
    rng: R,
) -> Result<Vec<usize>, SampleError> {
    Ok(SequentialSampler::with_rng(0..total, n, total, rng)?.collect())
}
