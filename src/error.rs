//! Error handling for citysort

use std::io;
use thiserror::Error;

/// Custom error type for citysort operations
#[derive(Error, Debug)]
pub enum CitySortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("Unknown sorting algorithm: {name}")]
    UnknownAlgorithm { name: String },

    #[error("Unknown sort key: {name}")]
    UnknownField { name: String },

    #[error("Invalid row limit: {value} (must be a positive integer)")]
    InvalidRowLimit { value: String },

    #[error("Missing required argument: {name}")]
    MissingArgument { name: String },

    #[error("Data was not sorted correctly by {algorithm}: element {index} precedes its predecessor")]
    SortInvariantViolated { algorithm: String, index: usize },
}

impl CitySortError {
    /// Returns the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CitySortError::SortInvariantViolated { .. } => crate::EXIT_INVARIANT,

            CitySortError::FileNotFound { .. }
            | CitySortError::Io(_)
            | CitySortError::Csv(_) => crate::EXIT_IO,

            _ => crate::EXIT_FAILURE,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        CitySortError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create an unknown algorithm error
    pub fn unknown_algorithm(name: &str) -> Self {
        CitySortError::UnknownAlgorithm {
            name: name.to_string(),
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(name: &str) -> Self {
        CitySortError::UnknownField {
            name: name.to_string(),
        }
    }

    /// Create an invalid row limit error
    pub fn invalid_row_limit(value: &str) -> Self {
        CitySortError::InvalidRowLimit {
            value: value.to_string(),
        }
    }

    /// Create a missing argument error
    pub fn missing_argument(name: &str) -> Self {
        CitySortError::MissingArgument {
            name: name.to_string(),
        }
    }

    /// Create a sort invariant violation
    pub fn sort_invariant_violated(algorithm: &str, index: usize) -> Self {
        CitySortError::SortInvariantViolated {
            algorithm: algorithm.to_string(),
            index,
        }
    }
}

/// Result type for citysort operations
pub type CitySortResult<T> = Result<T, CitySortError>;

/// Context trait for mapping I/O failures onto the file they concern
pub trait FileContext<T> {
    fn with_file_context(self, filename: &str) -> CitySortResult<T>;
}

impl<T> FileContext<T> for Result<T, io::Error> {
    fn with_file_context(self, filename: &str) -> CitySortResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::NotFound => CitySortError::file_not_found(filename),
            _ => CitySortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename, io_err),
            )),
        })
    }
}
