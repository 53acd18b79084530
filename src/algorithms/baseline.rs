//! Baseline: the standard library's unstable sort.

use std::cmp::Ordering;

/// Delegates to `slice::sort_unstable_by` (pattern-defeating quicksort),
/// adapting the boolean predicate to an `Ordering`. Not stable.
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    v.sort_unstable_by(|a, b| {
        if is_less(a, b) {
            Ordering::Less
        } else if is_less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
}
