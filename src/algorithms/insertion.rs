//! Insertion sort.

/// Sorts `v` by growing a sorted prefix one element at a time.
///
/// The new element is compared against the prefix from the right and then
/// rotated into place, which moves the displaced elements instead of cloning
/// them. It stops at the first element that does not strictly follow it, so
/// equal elements keep their input order.
pub fn sort_by<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && is_less(&v[i], &v[j - 1]) {
            j -= 1;
        }
        if j != i {
            v[j..=i].rotate_right(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_strings_without_clone() {
        let mut v = vec![
            String::from("delhi"),
            String::from("cairo"),
            String::from("tokyo"),
            String::from("shanghai"),
        ];
        sort_by(&mut v, |a, b| a < b);
        assert_eq!(v, ["cairo", "delhi", "shanghai", "tokyo"]);
    }

    #[test]
    fn test_reverse_input() {
        let mut v: Vec<i32> = (0..50).rev().collect();
        sort_by(&mut v, |a, b| a < b);
        assert_eq!(v, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_sorted_input_is_linear() {
        let mut v: Vec<u32> = (0..100).collect();
        let mut comparisons = 0;
        sort_by(&mut v, |a, b| {
            comparisons += 1;
            a < b
        });
        assert_eq!(comparisons, 99);
    }

    #[test]
    fn test_stable() {
        let mut v = [(3, 0), (1, 1), (3, 2), (1, 3), (2, 4)];
        sort_by(&mut v, |a, b| a.0 < b.0);
        assert_eq!(v, [(1, 1), (1, 3), (2, 4), (3, 0), (3, 2)]);
    }
}
