//! Bubble sort with early exit.

/// Sorts `v` by repeated passes of adjacent swaps.
///
/// Each pass leaves its largest element at the end of the live prefix, so the
/// pass length shrinks by one. A pass without swaps ends the sort early.
/// Only strictly out-of-order neighbours are swapped, which keeps it stable.
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for pass in 0..len - 1 {
        let mut swapped = false;
        for j in 0..len - 1 - pass {
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
