//! Heap sort over an implicit binary max-heap.

/// Sorts `v` with a binary max-heap where `is_less` is the "less than"
/// relation.
///
/// The heap is built bottom-up from the last non-leaf node, then the root
/// (the current maximum) is repeatedly swapped to the end of the live region,
/// which shrinks by one before the root is sifted down again. Not stable.
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for node in (0..len / 2).rev() {
        sift_down(v, node, &mut is_less);
    }

    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, &mut is_less);
    }
}

/// Restores `parent >= child` below `node`, swapping it with its larger child
/// until it is no smaller than both children or reaches a leaf.
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    loop {
        let left = 2 * node + 1;
        let right = left + 1;

        let mut largest = node;
        if left < len && is_less(&v[largest], &v[left]) {
            largest = left;
        }
        if right < len && is_less(&v[largest], &v[right]) {
            largest = right;
        }

        if largest == node {
            break;
        }

        v.swap(node, largest);
        node = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_max_heap(v: &[i32]) -> bool {
        (1..v.len()).all(|i| v[(i - 1) / 2] >= v[i])
    }

    #[test]
    fn test_sift_down_builds_heap() {
        let mut v = vec![3, 9, 2, 7, 1, 8, 5, 6, 4, 0];
        let len = v.len();
        for node in (0..len / 2).rev() {
            sift_down(&mut v, node, &mut |a: &i32, b: &i32| a < b);
        }
        assert!(is_max_heap(&v));
        assert_eq!(v[0], 9);
    }

    #[test]
    fn test_sorts_integers() {
        let mut v = [12, -4, 7, 7, 0, 33, -4, 1];
        sort_by(&mut v, |a, b| a < b);
        assert_eq!(v, [-4, -4, 0, 1, 7, 7, 12, 33]);
    }

    #[test]
    fn test_two_elements() {
        let mut v = [2, 1];
        sort_by(&mut v, |a, b| a < b);
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn test_descending_predicate() {
        let mut v: Vec<u16> = (0..200).map(|i| (i * 37) % 101).collect();
        sort_by(&mut v, |a, b| b < a);
        assert!(v.windows(2).all(|w| w[0] >= w[1]));
    }
}
