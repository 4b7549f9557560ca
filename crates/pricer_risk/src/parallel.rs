//! Rayon-based batching helpers.
//!
//! Independent work items (option quotes) are split into fixed-size batches
//! and evaluated on the Rayon pool once the input is large enough to amortise
//! the scheduling cost. Below the threshold the same batches run in order on
//! the calling thread, so results are identical either way.

use rayon::prelude::*;

/// Items per batch.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Minimum item count before work is handed to the Rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Configuration for batched execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Batch size for chunked processing
    pub batch_size: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new configuration. A zero batch size is raised to one.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// Configuration that never leaves the calling thread.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }

    /// Number of batches `n_items` splits into.
    #[inline]
    pub fn batch_count(&self, n_items: usize) -> usize {
        n_items.div_ceil(self.batch_size.max(1))
    }
}

/// Processes items in batches, in parallel when the config allows it.
///
/// Batch results are returned in input order.
///
/// # Examples
///
/// ```
/// use pricer_risk::parallel::{process_in_batches, ParallelConfig};
///
/// let items: Vec<u32> = (0..10).collect();
/// let sums = process_in_batches(&items, &ParallelConfig::new(4, 0), |batch| {
///     batch.iter().sum::<u32>()
/// });
/// assert_eq!(sums, vec![6, 22, 17]);
/// ```
pub fn process_in_batches<T, R, F>(items: &[T], config: &ParallelConfig, processor: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&[T]) -> R + Sync + Send,
{
    let batch_size = config.batch_size.max(1);
    if config.should_parallelize(items.len()) {
        items.par_chunks(batch_size).map(processor).collect()
    } else {
        items.chunks(batch_size).map(processor).collect()
    }
}
