//! City record sorting engine
//!
//! Six classic sorting algorithms (bubble, insertion, merge, quick, heap and
//! the standard library's sort) behind one closed [`Sorter`] type, driven by
//! a caller supplied "strictly precedes" predicate and checked after every
//! run by an independent verifier. Around that core sit the CSV ingestion,
//! reporting and benchmark pieces used by the `citysort` binary.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod error;
pub mod config;
pub mod record;

// Sorting engine
pub mod algorithms;
pub mod comparator;
pub mod sorter;
pub mod verify;

// Collaborators around the engine
pub mod dataset;
pub mod report;
pub mod bench;
pub mod runner;

// Re-export commonly used types
pub use comparator::FieldComparator;
pub use config::{RunConfig, SortField, SortOrder};
pub use error::{CitySortError, CitySortResult};
pub use record::City;
pub use sorter::Sorter;
pub use verify::{is_sorted, verify_sorted};

/// Process exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_IO: i32 = 2;
/// A sort produced out-of-order output
pub const EXIT_INVARIANT: i32 = 3;

/// Run citysort according to `config`, writing the report to stdout
pub fn run(config: RunConfig) -> CitySortResult<i32> {
    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    runner::CitySort::new(config).run(&mut out)?;
    std::io::Write::flush(&mut out)?;
    Ok(EXIT_SUCCESS)
}
