//! Errors for sequential sampling.

/// Errors returned when constructing a sampler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SampleError {
    /// The requested sample is larger than the population.
    #[error("cannot select {n} items out of {total}")]
    InvalidSampleSize { n: usize, total: usize },
}

/// Reject `n > total` before any sampler state exists.
pub(crate) fn check_sample_size(n: usize, total: usize) -> Result<(), SampleError> {
    if n > total {
        return Err(SampleError::InvalidSampleSize { n, total });
    }
    Ok(())
}
