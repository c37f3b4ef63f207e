use log::{debug, trace};

use crate::TunedParams;
use crate::join::ForkJoin;

use super::{common, quick_sort_seq};

/// Parallel entry point; no-op on empty input.
pub fn sort<T, E, F, J>(
    data: &mut [T],
    is_less: &F,
    params: &TunedParams,
    join: &J,
) -> Result<(), E>
where
    T: Clone + Send,
    E: Send,
    F: Fn(&T, &T) -> Result<bool, E> + Sync,
    J: ForkJoin,
{
    if data.is_empty() {
        return Ok(());
    }
    let depth = common::parallel_depth_budget(data.len(), params.depth_factor);
    debug!("parallel quicksort: len={} depth_budget={}", data.len(), depth);
    quick_sort(data, is_less, params, join, depth)
}

fn quick_sort<T, E, F, J>(
    data: &mut [T],
    is_less: &F,
    params: &TunedParams,
    join: &J,
    depth: usize,
) -> Result<(), E>
where
    T: Clone + Send,
    E: Send,
    F: Fn(&T, &T) -> Result<bool, E> + Sync,
    J: ForkJoin,
{
    let mut is_less_seq = is_less;
    let len = data.len();
    if len <= params.parallel_threshold || depth == 0 {
        return quick_sort_seq::quick_sort(data, &mut is_less_seq, params);
    }

    let split = common::partition_hoare(data, &mut is_less_seq)? + 1;
    if split >= len {
        trace!("skewed split on {len} elements, sorting sequentially");
        return quick_sort_seq::quick_sort(data, &mut is_less_seq, params);
    }

    let (left, right) = data.split_at_mut(split);
    let (left_result, right_result) = join.join(
        || quick_sort(left, is_less, params, join, depth - 1),
        || quick_sort(right, is_less, params, join, depth - 1),
    );
    left_result.and(right_result)
}
