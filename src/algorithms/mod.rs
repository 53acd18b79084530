//! The six sorting algorithms.
//!
//! Every algorithm has the same shape, `sort_by(v, is_less)`, where
//! `is_less(a, b)` means "`a` strictly precedes `b`" and must be a strict
//! weak order. Slices of length 0 or 1 are returned untouched.

pub mod baseline;
pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
