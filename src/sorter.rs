//! The closed set of sorting algorithms and the factory that names them

use crate::algorithms::{baseline, bubble, heap, insertion, merge, quick};
use crate::error::{CitySortError, CitySortResult};
use crate::record::City;
use std::fmt;
use std::str::FromStr;

/// One of the six sorting algorithms.
///
/// The set is closed, so dispatch is a `match` rather than a trait object.
/// Sorters carry no state; a fresh one per run only keeps runs isolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sorter {
    Bubble,
    Insertion,
    Merge,
    Quick,
    Heap,
    Std,
}

/// Name to constructor table consulted by [`Sorter::create`]
const REGISTRY: [(&str, fn() -> Sorter); 6] = [
    ("bubble", || Sorter::Bubble),
    ("insertion", || Sorter::Insertion),
    ("merge", || Sorter::Merge),
    ("quick", || Sorter::Quick),
    ("heap", || Sorter::Heap),
    ("std", || Sorter::Std),
];

impl Sorter {
    /// Every sorter, in the order reports list them
    pub const ALL: [Sorter; 6] = [
        Sorter::Bubble,
        Sorter::Insertion,
        Sorter::Merge,
        Sorter::Quick,
        Sorter::Heap,
        Sorter::Std,
    ];

    /// Construct the sorter registered under `name`
    pub fn create(name: &str) -> CitySortResult<Self> {
        REGISTRY
            .iter()
            .find(|(registered, _)| *registered == name)
            .map(|(_, make)| make())
            .ok_or_else(|| CitySortError::unknown_algorithm(name))
    }

    /// Names accepted by [`Sorter::create`]
    pub fn names() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|(name, _)| *name)
    }

    /// Stable identifier used for lookup and reporting
    pub fn name(&self) -> &'static str {
        match self {
            Sorter::Bubble => "bubble",
            Sorter::Insertion => "insertion",
            Sorter::Merge => "merge",
            Sorter::Quick => "quick",
            Sorter::Heap => "heap",
            Sorter::Std => "std",
        }
    }

    /// Whether records that compare equal keep their input order
    pub fn is_stable(&self) -> bool {
        matches!(self, Sorter::Bubble | Sorter::Insertion | Sorter::Merge)
    }

    /// Reorder `cities` in place so that no element strictly precedes its
    /// predecessor under `is_less`
    pub fn sort<F>(&self, cities: &mut [City], is_less: F)
    where
        F: FnMut(&City, &City) -> bool,
    {
        self.sort_by(cities, is_less)
    }

    /// Same as [`Sorter::sort`] for any element type the algorithms accept
    pub fn sort_by<T, F>(&self, v: &mut [T], is_less: F)
    where
        T: Default,
        F: FnMut(&T, &T) -> bool,
    {
        if v.len() < 2 {
            return;
        }

        match self {
            Sorter::Bubble => bubble::sort_by(v, is_less),
            Sorter::Insertion => insertion::sort_by(v, is_less),
            Sorter::Merge => merge::sort_by(v, is_less),
            Sorter::Quick => quick::sort_by(v, is_less),
            Sorter::Heap => heap::sort_by(v, is_less),
            Sorter::Std => baseline::sort_by(v, is_less),
        }
    }
}

impl FromStr for Sorter {
    type Err = CitySortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sorter::create(s)
    }
}

impl fmt::Display for Sorter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
