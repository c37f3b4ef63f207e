mod algorithms;
mod error;
mod join;

use std::convert::Infallible;

pub use error::ParamsError;
pub use join::{ForkJoin, InlineJoin, PoolJoin, RayonJoin};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TunedParams {
    /// Windows of at most this many elements are finished with insertion sort.
    pub insertion_threshold: usize,
    /// Windows of at most this many elements are never forked.
    pub parallel_threshold: usize,
    /// Fork depth budget is `depth_factor * ceil(log2(len))`.
    pub depth_factor: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 32,
    parallel_threshold: 1 << 15,
    depth_factor: 2,
};

impl Default for TunedParams {
    fn default() -> Self {
        TUNED_PARAMS
    }
}

impl TunedParams {
    pub fn new(
        insertion_threshold: usize,
        parallel_threshold: usize,
        depth_factor: usize,
    ) -> Result<Self, ParamsError> {
        let params = Self {
            insertion_threshold,
            parallel_threshold,
            depth_factor,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.insertion_threshold < 2 {
            return Err(ParamsError::InsertionThresholdTooSmall {
                threshold: self.insertion_threshold,
            });
        }
        if self.parallel_threshold < self.insertion_threshold {
            return Err(ParamsError::ParallelThresholdBelowInsertion {
                parallel: self.parallel_threshold,
                insertion: self.insertion_threshold,
            });
        }
        Ok(())
    }
}

#[inline]
fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Sorts `data` in place on the calling thread. Not stable.
pub fn sort_sequential<T: Ord + Clone>(data: &mut [T]) {
    sort_sequential_by(data, T::lt);
}

pub fn sort_sequential_by<T, F>(data: &mut [T], mut is_less: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    into_ok(try_sort_sequential_by(data, |a, b| Ok(is_less(a, b))));
}

/// Like [`sort_sequential_by`], but stops at the first comparator error and returns it.
/// `data` is then left as some permutation of its original elements.
pub fn try_sort_sequential_by<T, E, F>(data: &mut [T], is_less: F) -> Result<(), E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    try_sort_sequential_with(&TUNED_PARAMS, data, is_less)
}

pub fn try_sort_sequential_with<T, E, F>(
    params: &TunedParams,
    data: &mut [T],
    mut is_less: F,
) -> Result<(), E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    algorithms::quick_sort_seq::sort(data, &mut is_less, params)
}

/// Sorts `data` in place, forking large partitions onto rayon's global pool.
/// Produces the same order as [`sort_sequential`] up to the placement of equal elements.
pub fn sort_parallel<T: Ord + Clone + Send>(data: &mut [T]) {
    sort_parallel_by(data, T::lt);
}

pub fn sort_parallel_by<T, F>(data: &mut [T], is_less: F)
where
    T: Clone + Send,
    F: Fn(&T, &T) -> bool + Sync,
{
    into_ok(try_sort_parallel_by(data, |a, b| Ok(is_less(a, b))));
}

/// Parallel counterpart of [`try_sort_sequential_by`]. When one half fails the other
/// still runs to completion; the left half's error wins if both fail.
pub fn try_sort_parallel_by<T, E, F>(data: &mut [T], is_less: F) -> Result<(), E>
where
    T: Clone + Send,
    E: Send,
    F: Fn(&T, &T) -> Result<bool, E> + Sync,
{
    try_sort_parallel_with(&RayonJoin, &TUNED_PARAMS, data, is_less)
}

pub fn try_sort_parallel_with<T, E, F, J>(
    join: &J,
    params: &TunedParams,
    data: &mut [T],
    is_less: F,
) -> Result<(), E>
where
    T: Clone + Send,
    E: Send,
    F: Fn(&T, &T) -> Result<bool, E> + Sync,
    J: ForkJoin,
{
    algorithms::quick_sort_par::sort(data, &is_less, params, join)
}
