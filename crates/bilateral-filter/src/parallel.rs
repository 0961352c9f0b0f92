//! Row scheduling for per-pixel filters
//!
//! Every output row is written by exactly one worker through its own
//! mutable slice, so no locking is needed. The per-pixel work does not
//! depend on which worker runs it, which keeps results bit-identical
//! across strategies.

use crate::{FilterError, FilterResult};
use rayon::prelude::*;

/// Controls how output rows are spread over threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run every row on the calling thread, top to bottom.
    Serial,

    /// Process rows in parallel on rayon's global thread pool.
    #[default]
    ParallelRows,

    /// Process rows on a dedicated pool of exactly `n` workers.
    ///
    /// # Warning
    /// Builds a new thread pool on every call.
    Fixed(usize),
}

impl ExecutionStrategy {
    /// Strategy for an optional worker count: `None` uses the global pool.
    pub fn from_threads(threads: Option<usize>) -> Self {
        match threads {
            Some(n) => Self::Fixed(n),
            None => Self::ParallelRows,
        }
    }
}

/// Run `op(y, row)` for every row of `dst`.
///
/// `dst` is split into rows of `width` elements. If several rows fail, the
/// error from the lowest row index is returned.
pub fn for_each_row<T, F>(
    strategy: ExecutionStrategy,
    dst: &mut [T],
    width: usize,
    op: F,
) -> FilterResult<()>
where
    T: Send,
    F: Fn(u32, &mut [T]) -> FilterResult<()> + Sync + Send,
{
    if width == 0 {
        return Err(FilterError::InvalidParameter(
            "row width must be > 0".to_string(),
        ));
    }

    let run_parallel = |dst: &mut [T]| {
        dst.par_chunks_exact_mut(width)
            .enumerate()
            .filter_map(|(y, row)| op(y as u32, row).err().map(|e| (y, e)))
            .min_by_key(|(y, _)| *y)
            .map_or(Ok(()), |(_, e)| Err(e))
    };

    match strategy {
        ExecutionStrategy::Serial => dst
            .chunks_exact_mut(width)
            .enumerate()
            .try_for_each(|(y, row)| op(y as u32, row)),
        ExecutionStrategy::ParallelRows => run_parallel(dst),
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(FilterError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| FilterError::ThreadPool(e.to_string()))?;
            pool.install(|| run_parallel(dst))
        }
    }
}
