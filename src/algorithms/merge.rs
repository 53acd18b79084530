//! Top-down merge sort with a single reusable buffer.

use std::mem;

/// Sorts `v` by recursive halving and merging.
///
/// One buffer the size of `v` is allocated per call and shared by every
/// merge. Elements are moved through it rather than cloned, which is why
/// `T: Default` is needed to fill the vacated slots. On ties the left run
/// wins, so the sort is stable.
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    T: Default,
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    let mut buf: Vec<T> = Vec::with_capacity(v.len());
    buf.resize_with(v.len(), T::default);
    merge_sort(v, &mut buf, &mut is_less);
}

fn merge_sort<T, F>(v: &mut [T], buf: &mut [T], is_less: &mut F)
where
    T: Default,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = v.split_at_mut(mid);
        let (left_buf, right_buf) = buf.split_at_mut(mid);
        merge_sort(left, left_buf, is_less);
        merge_sort(right, right_buf, is_less);
    }
    merge(v, mid, &mut buf[..len], is_less);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` through `buf`.
fn merge<T, F>(v: &mut [T], mid: usize, buf: &mut [T], is_less: &mut F)
where
    T: Default,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let (mut i, mut j, mut k) = (0, mid, 0);

    while i < mid && j < len {
        // Take from the right run only when it strictly precedes the left head.
        if is_less(&v[j], &v[i]) {
            buf[k] = mem::take(&mut v[j]);
            j += 1;
        } else {
            buf[k] = mem::take(&mut v[i]);
            i += 1;
        }
        k += 1;
    }

    while i < mid {
        buf[k] = mem::take(&mut v[i]);
        i += 1;
        k += 1;
    }
    while j < len {
        buf[k] = mem::take(&mut v[j]);
        j += 1;
        k += 1;
    }

    v.swap_with_slice(buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_left_on_ties() {
        let mut v = [(1, 'l'), (3, 'l'), (1, 'r'), (3, 'r')];
        let mut buf = [(0, ' '); 4];
        merge(&mut v, 2, &mut buf, &mut |a: &(i32, char), b: &(i32, char)| a.0 < b.0);
        assert_eq!(v, [(1, 'l'), (1, 'r'), (3, 'l'), (3, 'r')]);
    }

    #[test]
    fn test_sorts_odd_length() {
        let mut v = vec![9, 3, 7, 1, 5, 2, 8];
        sort_by(&mut v, |a, b| a < b);
        assert_eq!(v, [1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn test_moves_owned_values() {
        let mut v: Vec<String> = ["pear", "fig", "apple", "kiwi", "date"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        sort_by(&mut v, |a, b| a.len() < b.len());
        assert_eq!(v, ["fig", "pear", "kiwi", "date", "apple"]);
    }
}
