//! Driving a configured run from dataset to report

use crate::bench::{run_benchmark, BenchPlan};
use crate::comparator::FieldComparator;
use crate::config::RunConfig;
use crate::dataset::DatasetLoader;
use crate::error::{CitySortError, CitySortResult};
use crate::record::City;
use crate::report::write_table;
use crate::sorter::Sorter;
use crate::verify::verify_sorted;
use std::io::Write;
use std::time::{Duration, Instant};

/// Sort `cities` with `sorter`, then check the result.
///
/// Returns the time spent in the sort call alone.
pub fn sort_and_verify(
    sorter: Sorter,
    comparator: &FieldComparator,
    cities: &mut [City],
) -> CitySortResult<Duration> {
    let start = Instant::now();
    sorter.sort(cities, comparator.as_fn());
    let elapsed = start.elapsed();

    log::debug!(
        "{} sorted {} records by {} in {:?}",
        sorter,
        cities.len(),
        comparator.field(),
        elapsed
    );

    verify_sorted(sorter.name(), cities, comparator.as_fn())?;
    Ok(elapsed)
}

/// A single configured citysort invocation
pub struct CitySort {
    config: RunConfig,
}

impl CitySort {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Execute the run, writing the report to `out`
    pub fn run<W: Write>(&self, out: &mut W) -> CitySortResult<()> {
        if self.config.performance_test {
            let cities = self.load()?;
            return run_benchmark(&BenchPlan::default(), cities, out);
        }

        let algorithm = self
            .config
            .algorithm
            .as_deref()
            .ok_or_else(|| CitySortError::missing_argument("-a <algo>"))?;
        let field = self
            .config
            .field
            .ok_or_else(|| CitySortError::missing_argument("-k <key>"))?;

        // Resolve the algorithm before touching the dataset.
        let sorter = Sorter::create(algorithm)?;
        let comparator = FieldComparator::new(field, self.config.order);
        log::debug!("using {} (stable: {})", sorter, sorter.is_stable());

        writeln!(out, "Selected Algorithm: {}", sorter)?;
        writeln!(out, "Selected Key: {} ({})", field, self.config.order)?;
        if let Some(limit) = self.config.limit {
            writeln!(out, "Printing first {limit} rows upon completion.")?;
        }

        writeln!(out, "\nLoading cities from {}...", self.config.dataset.display())?;
        let mut cities = self.load()?;

        if cities.is_empty() {
            writeln!(out, "\nNo data to sort.")?;
        } else {
            writeln!(
                out,
                "\nSorting {} cities using {} by {}...",
                cities.len(),
                sorter,
                field
            )?;

            let elapsed = sort_and_verify(sorter, &comparator, &mut cities)?;
            writeln!(out, "Sorting completed in {} ms.", elapsed.as_millis())?;
            writeln!(out, "Sort verification successful.")?;
        }

        write_table(out, &cities, self.config.rows_to_print(cities.len()))?;
        Ok(())
    }

    fn load(&self) -> CitySortResult<Vec<City>> {
        let cities = DatasetLoader::new(&self.config.dataset).load()?;
        if cities.is_empty() {
            log::warn!(
                "no cities were loaded, check the CSV file ({})",
                self.config.dataset.display()
            );
        }
        Ok(cities)
    }
}
