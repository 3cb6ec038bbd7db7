//! Column-aware line sorting
//!
//! This crate sorts tab-separated lines by a single selected column, reading
//! the column as plain text, a signed integer, a human-readable size
//! (`512`, `2K`, `1G`) or a month abbreviation. Keys can be derived once up
//! front or lazily inside each comparison; both strategies yield the same
//! order. Sortedness checking and adjacent duplicate removal are provided
//! alongside the sort itself.

#![warn(clippy::all)]

pub mod error;
pub mod config;

// Engine
pub mod column;
pub mod key;
pub mod compare;
pub mod core_sort;
pub mod check;
pub mod unique;

// Glue
pub mod line_io;

// Re-export commonly used types
pub use check::{first_disorder, is_sorted};
pub use config::{KeyMode, SortConfig, SortConfigBuilder, Strategy};
pub use core_sort::{sort_lines, CoreSort};
pub use error::{SortError, SortResult};
pub use unique::dedupe;

use std::io;
use std::path::Path;

/// Exit codes matching GNU sort
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Read, sort or check, and write according to `config`.
///
/// Returns the process exit code: `EXIT_FAILURE` when `check` finds a line
/// out of order, `EXIT_SUCCESS` otherwise.
pub fn run(config: &SortConfig) -> SortResult<i32> {
    config.validate()?;

    let mut lines = if config.reading_from_stdin() {
        line_io::read_lines_from(io::stdin().lock())?
    } else {
        line_io::read_lines(Path::new(config.input_name()))?
    };

    if config.debug {
        eprintln!("Number of CPUs: {}", num_cpus::get());
        eprintln!("sort: read {} lines from {}", lines.len(), config.input_name());
    }

    if config.check {
        return match first_disorder(&lines, config)? {
            Some(line_num) => {
                eprintln!("sort: {}:{line_num}: disorder", config.input_name());
                Ok(EXIT_FAILURE)
            }
            None => Ok(EXIT_SUCCESS),
        };
    }

    if let Err(err) = sort_lines(&mut lines, config) {
        if config.debug {
            report_key_error(&err);
        }
        return Err(err);
    }

    if config.unique {
        let before = lines.len();
        lines = dedupe(lines);
        if config.debug {
            eprintln!("sort: removed {} duplicate lines", before - lines.len());
        }
    }

    match &config.output_file {
        Some(path) => line_io::write_lines_to_file(&lines, Path::new(path))?,
        None => line_io::write_lines(&lines, io::stdout().lock())?,
    }

    Ok(EXIT_SUCCESS)
}

/// Describe a failed key derivation on stderr
fn report_key_error(err: &SortError) {
    if !err.is_key_error() {
        return;
    }
    eprintln!("sort: key derivation failed, nothing written");
    if let SortError::MissingColumn { line, column } = err {
        eprintln!(
            "sort: line has {} columns, column {column} requested",
            crate::column::field_count(line)
        );
    }
}
