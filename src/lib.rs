//! `seqsample`: sequential random sampling.
//!
//! Select exactly `n` of `total` items from an iterator, preserving their
//! order, with O(n) random draws and O(n) expected work (plus whatever the
//! input's `nth` costs).
//!
//! Exposed modules:
//! - `sampler`: `SequentialSampler` (Vitter's Algorithm D with an Algorithm A fallback).
//! - `selection`: `SelectionSampler`, the O(total) Algorithm S baseline.
//! - `skip`: the skip-distance strategies behind `SequentialSampler`.
//! - `variate`: the `UniformSource` seam over `rand::Rng`.
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use seqsample::SequentialSampler;
//!
//! let rng = ChaCha8Rng::seed_from_u64(7);
//! let words = ["a", "b", "c", "d", "e", "f", "g", "h"];
//! let picked: Vec<&str> = SequentialSampler::with_rng(words.iter().copied(), 3, words.len(), rng)?
//!     .collect();
//! assert_eq!(picked.len(), 3);
//! # Ok::<(), seqsample::SampleError>(())
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod sampler;
pub mod selection;
pub mod skip;
pub mod variate;

pub use error::SampleError;
pub use sampler::{random_sample, random_sample_with_rng, sample_indices, SequentialSampler};
pub use selection::SelectionSampler;
pub use variate::UniformSource;
