//! Configuration management for citysort runs

use crate::error::{CitySortError, CitySortResult};
use std::path::PathBuf;
use std::str::FromStr;

/// Dataset read when no `--file` is given
pub const DEFAULT_DATASET: &str = "worldcities.csv";

/// Record field a run is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Country,
    Population,
    Lat,
    Lng,
}

impl SortField {
    /// Every field, in the order the CLI lists them
    pub const ALL: [SortField; 5] = [
        SortField::Name,
        SortField::Country,
        SortField::Population,
        SortField::Lat,
        SortField::Lng,
    ];

    /// Key name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Country => "country",
            SortField::Population => "population",
            SortField::Lat => "lat",
            SortField::Lng => "lng",
        }
    }
}

/// Sort order enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Main configuration structure for a citysort run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Algorithm name, resolved through the sorter factory
    pub algorithm: Option<String>,
    /// Field to sort by
    pub field: Option<SortField>,
    /// Ascending unless reversed
    pub order: SortOrder,
    /// Print only the first N rows
    pub limit: Option<usize>,
    /// CSV dataset to load
    pub dataset: PathBuf,
    /// Benchmark every algorithm instead of a single run
    pub performance_test: bool,
    /// Verbose diagnostics on stderr
    pub debug: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            algorithm: None,
            field: None,
            order: SortOrder::Ascending,
            limit: None,
            dataset: PathBuf::from(DEFAULT_DATASET),
            performance_test: false,
            debug: false,
        }
    }
}

impl RunConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> CitySortResult<()> {
        if !self.performance_test {
            if self.algorithm.is_none() {
                return Err(CitySortError::missing_argument("-a <algo>"));
            }
            if self.field.is_none() {
                return Err(CitySortError::missing_argument("-k <key>"));
            }
        }

        if self.limit == Some(0) {
            return Err(CitySortError::invalid_row_limit("0"));
        }

        Ok(())
    }

    /// Number of rows the report should print for a dataset of `total` rows
    pub fn rows_to_print(&self, total: usize) -> usize {
        self.limit.map_or(total, |limit| limit.min(total))
    }
}

impl FromStr for SortField {
    type Err = CitySortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortField::Name),
            "country" => Ok(SortField::Country),
            "population" => Ok(SortField::Population),
            "lat" => Ok(SortField::Lat),
            "lng" => Ok(SortField::Lng),
            _ => Err(CitySortError::unknown_field(s)),
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        };
        write!(f, "{name}")
    }
}

/// Builder pattern for creating configurations
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: RunConfig::default(),
        }
    }

    pub fn algorithm(mut self, name: &str) -> Self {
        self.config.algorithm = Some(name.to_string());
        self
    }

    pub fn field(mut self, field: SortField) -> Self {
        self.config.field = Some(field);
        self
    }

    /// Sort descending
    pub fn reverse(mut self) -> Self {
        self.config.order = SortOrder::Descending;
        self
    }

    pub fn limit(mut self, rows: usize) -> Self {
        self.config.limit = Some(rows);
        self
    }

    pub fn dataset(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dataset = path.into();
        self
    }

    pub fn performance_test(mut self) -> Self {
        self.config.performance_test = true;
        self
    }

    pub fn debug(mut self) -> Self {
        self.config.debug = true;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> CitySortResult<RunConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.order, SortOrder::Ascending);
        assert_eq!(config.dataset, PathBuf::from(DEFAULT_DATASET));
        assert!(config.limit.is_none());
        assert!(!config.performance_test);
    }

    #[test]
    fn test_config_builder() {
        let config = RunConfigBuilder::new()
            .algorithm("merge")
            .field(SortField::Population)
            .reverse()
            .limit(100)
            .build()
            .expect("Failed to build test config");

        assert_eq!(config.algorithm.as_deref(), Some("merge"));
        assert_eq!(config.field, Some(SortField::Population));
        assert_eq!(config.order, SortOrder::Descending);
        assert_eq!(config.limit, Some(100));
    }

    #[test]
    fn test_missing_arguments() {
        let result = RunConfigBuilder::new().field(SortField::Name).build();
        assert!(matches!(result, Err(CitySortError::MissingArgument { .. })));

        let result = RunConfigBuilder::new().algorithm("std").build();
        assert!(matches!(result, Err(CitySortError::MissingArgument { .. })));
    }

    #[test]
    fn test_performance_test_needs_no_selection() {
        let config = RunConfigBuilder::new()
            .performance_test()
            .build()
            .expect("Failed to build test config");
        assert!(config.performance_test);
        assert!(config.algorithm.is_none());
    }

    #[test]
    fn test_zero_limit_rejected() {
        let result = RunConfigBuilder::new()
            .algorithm("std")
            .field(SortField::Name)
            .limit(0)
            .build();
        assert!(matches!(result, Err(CitySortError::InvalidRowLimit { .. })));
    }

    #[test]
    fn test_sort_field_from_str() {
        for field in SortField::ALL {
            assert_eq!(field.as_str().parse::<SortField>().unwrap(), field);
        }
        assert!(matches!(
            "elevation".parse::<SortField>(),
            Err(CitySortError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_rows_to_print() {
        let config = RunConfig::default();
        assert_eq!(config.rows_to_print(42), 42);

        let config = RunConfig {
            limit: Some(10),
            ..Default::default()
        };
        assert_eq!(config.rows_to_print(42), 10);
        assert_eq!(config.rows_to_print(3), 3);
    }
}
