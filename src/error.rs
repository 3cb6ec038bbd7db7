//! Error handling for the sort engine and its I/O front end

use std::io;
use thiserror::Error;

/// Custom error type for sort operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("line has fewer than {column} columns: '{line}'")]
    MissingColumn { line: String, column: usize },

    #[error("not a number: '{value}'")]
    NotNumeric { value: String },

    #[error("not a human-readable size: '{value}'")]
    NotHumanReadableSize { value: String },

    #[error("not a month: '{value}'")]
    NotAMonth { value: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Permission denied: {file}")]
    PermissionDenied { file: String },

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },
}

impl SortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::PermissionDenied { .. }
            | SortError::FileNotFound { .. }
            | SortError::Io(_) => crate::SORT_FAILURE,

            _ => crate::EXIT_FAILURE,
        }
    }

    /// True for errors raised while deriving a key from a line
    pub fn is_key_error(&self) -> bool {
        matches!(
            self,
            SortError::MissingColumn { .. }
                | SortError::NotNumeric { .. }
                | SortError::NotHumanReadableSize { .. }
                | SortError::NotAMonth { .. }
        )
    }

    pub fn missing_column(line: &str, column: usize) -> Self {
        SortError::MissingColumn {
            line: line.to_string(),
            column,
        }
    }

    pub fn not_numeric(value: &str) -> Self {
        SortError::NotNumeric {
            value: value.to_string(),
        }
    }

    pub fn not_human_readable_size(value: &str) -> Self {
        SortError::NotHumanReadableSize {
            value: value.to_string(),
        }
    }

    pub fn not_a_month(value: &str) -> Self {
        SortError::NotAMonth {
            value: value.to_string(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: &str) -> Self {
        SortError::InvalidConfig {
            message: message.to_string(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(file: &str) -> Self {
        SortError::PermissionDenied {
            file: file.to_string(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        SortError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create a parse error
    pub fn parse_error(message: &str) -> Self {
        SortError::ParseError {
            message: message.to_string(),
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Context trait for attaching a file name to I/O failures
pub trait SortContext<T> {
    fn with_file_context(self, filename: &str) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_file_context(self, filename: &str) -> SortResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::PermissionDenied => SortError::permission_denied(filename),
            io::ErrorKind::NotFound => SortError::file_not_found(filename),
            _ => SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename, io_err),
            )),
        })
    }
}
