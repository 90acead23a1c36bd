//! Selection sampling (Algorithm S).
//!
//! Visits every input item and keeps it with probability
//! `to_select / available`. This is the classic O(total) baseline: one uniform
//! per visited item, no skipping. It is useful as a correctness reference and
//! for comparisons against [`SequentialSampler`](crate::SequentialSampler).
//!
//! ## References
//!
//! - Fan, Muller, Rezucha (1962); Jones (1962).
//! - Knuth, *TAOCP* Vol. 2, §3.4.2, Algorithm S.

use std::fmt;
use std::iter::FusedIterator;

use rand::rngs::ThreadRng;

use crate::error::{check_sample_size, SampleError};
use crate::variate::UniformSource;

/// Yields `n` of the `total` items of `input`, in order, deciding item by item.
#[derive(Clone)]
pub struct SelectionSampler<I, R = ThreadRng> {
    input: I,
    available: usize,
    to_select: usize,
    rng: R,
}

impl<I: Iterator> SelectionSampler<I, ThreadRng> {
    /// Sample `n` of the `total` items of `input` using the thread-local RNG.
    pub fn new(input: I, n: usize, total: usize) -> Result<Self, SampleError> {
        Self::with_rng(input, n, total, rand::rng())
    }
}

impl<I: Iterator, R: UniformSource> SelectionSampler<I, R> {
    /// Sample `n` of the `total` items of `input`, drawing from `rng`.
    pub fn with_rng(input: I, n: usize, total: usize, rng: R) -> Result<Self, SampleError> {
        check_sample_size(n, total)?;
        Ok(Self {
            input,
            available: total,
            to_select: n,
            rng,
        })
    }
}

impl<I, R> SelectionSampler<I, R> {
    /// Selections still to be yielded.
    pub fn remaining(&self) -> usize {
        self.to_select
    }
}

impl<I, R> fmt::Debug for SelectionSampler<I, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionSampler")
            .field("available", &self.available)
            .field("to_select", &self.to_select)
            .finish_non_exhaustive()
    }
}

impl<I: Iterator, R: UniformSource> Iterator for SelectionSampler<I, R> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.to_select > 0 {
            let item = match self.input.next() {
                Some(item) => item,
                None => panic!(
                    "input ended with {} items still owed to the sample",
                    self.to_select
                ),
            };
            let keep = self.available as f64 * self.rng.uniform_real() < self.to_select as f64;
            self.available -= 1;
            if keep {
                self.to_select -= 1;
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.to_select, Some(self.to_select))
    }
}

impl<I: Iterator, R: UniformSource> ExactSizeIterator for SelectionSampler<I, R> {}

impl<I: Iterator, R: UniformSource> FusedIterator for SelectionSampler<I, R> {}
