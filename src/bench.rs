//! Performance-test mode: every algorithm against a shuffled dataset

use crate::comparator::FieldComparator;
use crate::config::{SortField, SortOrder};
use crate::error::CitySortResult;
use crate::record::City;
use crate::report::{write_bench_row, BENCH_HEADER};
use crate::runner::sort_and_verify;
use crate::sorter::Sorter;
use itertools::iproduct;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::io::Write;

/// Keys measured by default
pub const BENCH_FIELDS: [SortField; 3] = [SortField::Name, SortField::Population, SortField::Lat];

/// Prefix sizes measured by default, besides the full dataset
pub const BENCH_SIZES: [usize; 2] = [1_000, 10_000];

/// What the benchmark measures
#[derive(Debug, Clone)]
pub struct BenchPlan {
    pub sorters: Vec<Sorter>,
    pub fields: Vec<SortField>,
    pub sizes: Vec<usize>,
    /// Shuffle seed; fresh entropy when `None`
    pub seed: Option<u64>,
}

impl Default for BenchPlan {
    fn default() -> Self {
        Self {
            sorters: Sorter::ALL.to_vec(),
            fields: BENCH_FIELDS.to_vec(),
            sizes: BENCH_SIZES.to_vec(),
            seed: None,
        }
    }
}

/// Shuffle `cities` once, then time every sorter on every field (ascending)
/// for each prefix size and for the whole dataset, one CSV line per run.
///
/// Every run is verified; a disorder aborts the benchmark.
pub fn run_benchmark<W: Write>(
    plan: &BenchPlan,
    mut cities: Vec<City>,
    out: &mut W,
) -> CitySortResult<()> {
    writeln!(out, "Starting Performance Test Mode...")?;
    writeln!(out, "{BENCH_HEADER}")?;

    if cities.is_empty() {
        log::warn!("no cities loaded, nothing to benchmark");
        writeln!(out, "# No cities loaded. Aborting.")?;
        return Ok(());
    }
    writeln!(out, "# Full dataset size: {} cities.", cities.len())?;

    let mut rng = match plan.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    cities.shuffle(&mut rng);
    writeln!(out, "# Full dataset shuffled for subsetting.")?;

    for (&sorter, &field) in iproduct!(&plan.sorters, &plan.fields) {
        let comparator = FieldComparator::new(field, SortOrder::Ascending);

        for &size in &plan.sizes {
            if size > cities.len() {
                writeln!(
                    out,
                    "# Skipping size {} for {}/{} as it exceeds total data size ({}).",
                    size,
                    sorter,
                    field,
                    cities.len()
                )?;
                continue;
            }
            measure(sorter, &comparator, &cities[..size], out)?;
        }

        measure(sorter, &comparator, &cities, out)?;
    }

    writeln!(out, "Performance Test Mode Finished.")?;
    Ok(())
}

fn measure<W: Write>(
    sorter: Sorter,
    comparator: &FieldComparator,
    cities: &[City],
    out: &mut W,
) -> CitySortResult<()> {
    let mut data = cities.to_vec();
    let elapsed = sort_and_verify(sorter, comparator, &mut data)?;
    write_bench_row(out, sorter.name(), comparator.field().as_str(), data.len(), elapsed)?;
    Ok(())
}
