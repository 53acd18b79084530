//! Human readable output for sort runs and benchmark tables

use crate::record::City;
use std::io::{self, Write};
use std::time::Duration;

const RULE_WIDTH: usize = 100;

/// Header line of the performance table
pub const BENCH_HEADER: &str = "Algorithm,Key,Size,Time(ms)";

/// Write the first `limit` cities as a fixed-width table
pub fn write_table<W: Write>(out: &mut W, cities: &[City], limit: usize) -> io::Result<()> {
    let limit = limit.min(cities.len());
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(
        out,
        "\n--- Sorted Cities (First {} of {} total rows) ---",
        limit,
        cities.len()
    )?;
    writeln!(
        out,
        "{:<30}{:<25}{:<15}{:<15}{:<15}",
        "City Name", "Country", "Population", "Latitude", "Longitude"
    )?;
    writeln!(out, "{rule}")?;

    for city in &cities[..limit] {
        writeln!(
            out,
            "{:<30}{:<25}{:>14} {:>14.6} {:>14.6}",
            truncate(&city.name, 28),
            truncate(&city.country, 23),
            city.population,
            city.lat,
            city.lng
        )?;
    }

    if cities.is_empty() {
        writeln!(out, "(No cities to print)")?;
    } else if cities.len() > limit {
        writeln!(out, "... and {} more rows not shown.", cities.len() - limit)?;
    }
    writeln!(out, "{rule}")?;

    Ok(())
}

/// One benchmark measurement as a CSV line
pub fn write_bench_row<W: Write>(
    out: &mut W,
    algorithm: &str,
    key: &str,
    size: usize,
    elapsed: Duration,
) -> io::Result<()> {
    writeln!(out, "{},{},{},{}", algorithm, key, size, elapsed.as_millis())
}

/// At most `max` characters of `s`, cut on a char boundary
fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
