//! Configuration management for sort operations

use crate::error::{SortError, SortResult};
use std::str::FromStr;

/// How the selected column is interpreted as a sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyMode {
    /// Byte-wise string comparison
    #[default]
    Lexicographic,
    /// Signed base-10 integers
    Numeric,
    /// Integers with an optional K/M/G suffix (base 1024)
    HumanNumeric,
    /// Three-letter month abbreviations, Jan..Dec
    Month,
}

impl KeyMode {
    /// Resolve the legacy independent mode flags into a single mode.
    ///
    /// The first flag set wins in the order numeric, human-readable, month;
    /// with none set the key is compared as a plain string.
    pub fn from_flags(numeric: bool, human_readable: bool, month: bool) -> Self {
        if numeric {
            KeyMode::Numeric
        } else if human_readable {
            KeyMode::HumanNumeric
        } else if month {
            KeyMode::Month
        } else {
            KeyMode::Lexicographic
        }
    }

    /// True when keys in this mode are integers
    pub fn is_integral(&self) -> bool {
        !matches!(self, KeyMode::Lexicographic)
    }
}

/// Key evaluation strategy used by the sort engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Derive every key once, then sort by key
    #[default]
    Precomputed,
    /// Re-derive both keys inside every comparison
    Lazy,
}

/// Main configuration structure for sort operations
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Column to sort by (1-based, tab delimited)
    pub column: usize,
    /// Key interpretation
    pub mode: KeyMode,
    /// Reverse the result of comparisons
    pub reverse: bool,
    /// Strip trailing spaces and tabs from the key before use
    pub trim_trailing_blanks: bool,
    /// Drop adjacent duplicate lines after sorting
    pub unique: bool,
    /// Only check whether the input is sorted
    pub check: bool,
    /// Key evaluation strategy
    pub strategy: Strategy,
    /// Print diagnostics to stderr
    pub debug: bool,
    /// File to read from (stdin when absent or "-")
    pub input_file: Option<String>,
    /// File to write to (stdout when absent)
    pub output_file: Option<String>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            column: 1,
            mode: KeyMode::Lexicographic,
            reverse: false,
            trim_trailing_blanks: false,
            unique: false,
            check: false,
            strategy: Strategy::Precomputed,
            debug: false,
            input_file: None,
            output_file: None,
        }
    }
}

impl SortConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sort column (1-based)
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    /// Set the key mode
    pub fn with_mode(mut self, mode: KeyMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable reverse sorting
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Enable trailing blank trimming
    pub fn with_trim_trailing_blanks(mut self, trim: bool) -> Self {
        self.trim_trailing_blanks = trim;
        self
    }

    /// Enable unique output
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Enable check mode
    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Set the key evaluation strategy
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Set input file
    pub fn with_input_file(mut self, input_file: Option<String>) -> Self {
        self.input_file = input_file;
        self
    }

    /// Set output file
    pub fn with_output_file(mut self, output_file: Option<String>) -> Self {
        self.output_file = output_file;
        self
    }

    /// Set the column from a signed value, rejecting anything below 1
    pub fn set_column_from_signed(&mut self, column: i64) -> SortResult<()> {
        if column < 1 {
            return Err(SortError::invalid_config(&format!(
                "column must be a positive integer, got {column}"
            )));
        }
        self.column = usize::try_from(column)
            .map_err(|_| SortError::invalid_config(&format!("column out of range: {column}")))?;
        Ok(())
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if self.column == 0 {
            return Err(SortError::invalid_config(
                "column numbers start at 1",
            ));
        }

        if self.check && self.output_file.is_some() {
            return Err(SortError::invalid_config(
                "--check does not produce output",
            ));
        }

        Ok(())
    }

    /// Check if reading from stdin
    pub fn reading_from_stdin(&self) -> bool {
        match &self.input_file {
            None => true,
            Some(file) => file == "-",
        }
    }

    /// Name used for the input in diagnostics
    pub fn input_name(&self) -> &str {
        match &self.input_file {
            Some(file) => file.as_str(),
            None => "-",
        }
    }
}

impl FromStr for KeyMode {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lexicographic" | "text" | "default" => Ok(KeyMode::Lexicographic),
            "numeric" | "n" => Ok(KeyMode::Numeric),
            "human-numeric" | "h" => Ok(KeyMode::HumanNumeric),
            "month" | "m" => Ok(KeyMode::Month),
            _ => Err(SortError::parse_error(&format!("unknown key mode: {s}"))),
        }
    }
}

impl std::fmt::Display for KeyMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            KeyMode::Lexicographic => "lexicographic",
            KeyMode::Numeric => "numeric",
            KeyMode::HumanNumeric => "human-numeric",
            KeyMode::Month => "month",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Strategy {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "precomputed" | "keys" => Ok(Strategy::Precomputed),
            "lazy" => Ok(Strategy::Lazy),
            _ => Err(SortError::parse_error(&format!("unknown strategy: {s}"))),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::Precomputed => "precomputed",
            Strategy::Lazy => "lazy",
        };
        write!(f, "{name}")
    }
}

/// Builder pattern for creating configurations
pub struct SortConfigBuilder {
    config: SortConfig,
}

impl SortConfigBuilder {
    /// Start building a new configuration
    pub fn new() -> Self {
        Self {
            config: SortConfig::default(),
        }
    }

    /// Set sort column
    pub fn column(mut self, column: usize) -> Self {
        self.config.column = column;
        self
    }

    /// Set key mode
    pub fn mode(mut self, mode: KeyMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Enable reverse sorting
    pub fn reverse(mut self) -> Self {
        self.config.reverse = true;
        self
    }

    /// Enable trailing blank trimming
    pub fn trim_trailing_blanks(mut self) -> Self {
        self.config.trim_trailing_blanks = true;
        self
    }

    /// Enable unique output
    pub fn unique(mut self) -> Self {
        self.config.unique = true;
        self
    }

    /// Enable check mode
    pub fn check(mut self) -> Self {
        self.config.check = true;
        self
    }

    /// Set the key evaluation strategy
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Enable debug diagnostics
    pub fn debug(mut self) -> Self {
        self.config.debug = true;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SortResult<SortConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for SortConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Preset configurations for common use cases
pub mod presets {
    use super::*;

    /// Configuration for numeric sorting
    pub fn numeric() -> SortConfig {
        SortConfig::new().with_mode(KeyMode::Numeric)
    }

    /// Configuration for human-readable sizes
    pub fn human_numeric() -> SortConfig {
        SortConfig::new().with_mode(KeyMode::HumanNumeric)
    }

    /// Configuration for month sorting
    pub fn month() -> SortConfig {
        SortConfig::new().with_mode(KeyMode::Month)
    }

    /// Configuration for reverse sorting
    pub fn reverse() -> SortConfig {
        SortConfig::new().with_reverse(true)
    }

    /// Configuration for sorting with unique output
    pub fn unique() -> SortConfig {
        SortConfig::new().with_unique(true)
    }

    /// Configuration using the lazy key strategy
    pub fn lazy() -> SortConfig {
        SortConfig::new().with_strategy(Strategy::Lazy)
    }
}
