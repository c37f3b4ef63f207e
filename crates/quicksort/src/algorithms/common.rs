/// Shift-insertion sort.
///
/// Each element is compared against its predecessors first and then moved into place
/// with a single rotation, so a failing comparator leaves the slice untouched for the
/// element being inserted.
#[inline]
pub fn insertion_sort<T, E, F>(data: &mut [T], is_less: &mut F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let len = data.len();
    if len < 2 {
        return Ok(());
    }

    for i in 1..len {
        let mut j = i;
        while j > 0 && is_less(&data[i], &data[j - 1])? {
            j -= 1;
        }
        if j != i {
            data[j..=i].rotate_right(1);
        }
    }

    Ok(())
}

/// Returns a clone of the median of `x`, `y` and `z`.
#[inline]
pub fn median_of_three<T, E, F>(x: &T, y: &T, z: &T, is_less: &mut F) -> Result<T, E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let median = if is_less(x, y)? {
        if is_less(y, z)? {
            y
        } else if is_less(x, z)? {
            z
        } else {
            x
        }
    } else if is_less(x, z)? {
        x
    } else if is_less(y, z)? {
        z
    } else {
        y
    };
    Ok(median.clone())
}

/// Hoare partition around the median of the first, middle and last element.
///
/// Returns `j` such that `data[..=j]` holds elements not greater than the pivot and
/// `data[j + 1..]` holds elements not less than it. Slices shorter than two elements
/// return `0`.
pub fn partition_hoare<T, E, F>(data: &mut [T], is_less: &mut F) -> Result<usize, E>
where
    T: Clone,
    F: FnMut(&T, &T) -> Result<bool, E>,
{
    let len = data.len();
    if len <= 1 {
        return Ok(0);
    }

    // Owned copy: the scan below may swap the sampled element away.
    let pivot = median_of_three(&data[0], &data[len / 2], &data[len - 1], is_less)?;

    let mut i = 0usize;
    let mut j = len - 1;
    loop {
        // The guards only matter for comparators that are not a strict weak order.
        while i < len && is_less(&data[i], &pivot)? {
            i += 1;
        }
        while j > 0 && is_less(&pivot, &data[j])? {
            j -= 1;
        }

        if i >= j {
            return Ok(j);
        }

        data.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// `ceil(log2(n))`, with `ceil_log2(0) == ceil_log2(1) == 0`.
#[inline]
pub fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

#[inline]
pub fn parallel_depth_budget(n: usize, depth_factor: usize) -> usize {
    ceil_log2(n).saturating_mul(depth_factor)
}
