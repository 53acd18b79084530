//! Quick sort with Lomuto partitioning around the last element.

use std::mem;

/// Sorts `v` by partition-exchange, always pivoting on the last element.
///
/// Already sorted input is the worst case for this pivot choice, O(n^2)
/// comparisons. The smaller side is sorted recursively and the larger one
/// iteratively so the stack depth stays O(log n) even then. Not stable.
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    quick_sort(v, &mut is_less);
}

fn quick_sort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let pivot = partition(v, is_less);
        let (left, right) = mem::take(&mut v).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left, is_less);
            v = right;
        } else {
            quick_sort(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around its last element and returns the pivot's final
/// index. Everything before it strictly precedes the pivot, nothing after it
/// does.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let last = v.len() - 1;
    let mut store = 0;

    for j in 0..last {
        if is_less(&v[j], &v[last]) {
            v.swap(store, j);
            store += 1;
        }
    }

    v.swap(store, last);
    store
}
