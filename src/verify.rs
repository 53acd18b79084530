//! Post-sort correctness checks, independent of the algorithm that ran

use crate::error::{CitySortError, CitySortResult};

/// Index of the first element that strictly precedes its predecessor
pub fn first_disorder<T, F>(v: &[T], mut is_less: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2)
        .position(|pair| is_less(&pair[1], &pair[0]))
        .map(|i| i + 1)
}

/// True when no adjacent pair is out of order under `is_less`
pub fn is_sorted<T, F>(v: &[T], is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    first_disorder(v, is_less).is_none()
}

/// Check the output of `algorithm`.
///
/// A disorder means a broken comparator or a broken algorithm; callers must
/// treat the error as fatal.
pub fn verify_sorted<T, F>(algorithm: &str, v: &[T], is_less: F) -> CitySortResult<()>
where
    F: FnMut(&T, &T) -> bool,
{
    match first_disorder(v, is_less) {
        None => {
            log::debug!("{algorithm}: verified {} records in order", v.len());
            Ok(())
        }
        Some(index) => {
            log::error!("{algorithm}: record {index} precedes record {}", index - 1);
            Err(CitySortError::sort_invariant_violated(algorithm, index))
        }
    }
}
