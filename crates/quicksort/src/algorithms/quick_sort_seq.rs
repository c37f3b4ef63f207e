use log::trace;

use crate::TunedParams;

use super::common;

/// Sequential entry point; no-op on empty input.
pub fn sort<T, E, F>(data: &mut [T], is_less: &mut F, params: &TunedParams) -> Result<(), E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    if data.is_empty() {
        return Ok(());
    }
    quick_sort(data, is_less, params)
}

#[inline]
pub(crate) fn quick_sort<T, E, F>(
    data: &mut [T],
    is_less: &mut F,
    params: &TunedParams,
) -> Result<(), E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    quick_sort_observed(data, is_less, params, 0, &mut |_, _| {})
}

/// Recurses into the smaller half and loops over the larger one, so the call depth
/// stays logarithmic whatever the split sequence looks like.
///
/// `on_enter` sees the recursion depth and window length of every call.
fn quick_sort_observed<T, E, F, O>(
    mut data: &mut [T],
    is_less: &mut F,
    params: &TunedParams,
    depth: usize,
    on_enter: &mut O,
) -> Result<(), E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<bool, E>,
    O: FnMut(usize, usize),
{
    on_enter(depth, data.len());
    while data.len() > params.insertion_threshold {
        let len = data.len();
        let split = common::partition_hoare(data, is_less)? + 1;
        if split >= len {
            trace!("partition made no progress on {len} elements, finishing with insertion sort");
            break;
        }

        let (left, right) = data.split_at_mut(split);

        if left.len() < right.len() {
            quick_sort_observed(left, is_less, params, depth + 1, on_enter)?;
            data = right;
        } else {
            quick_sort_observed(right, is_less, params, depth + 1, on_enter)?;
            data = left;
        }
    }

    common::insertion_sort(data, is_less)
}
