//! Sort key derivation: column text interpreted per [`KeyMode`]

use crate::column::extract_column;
use crate::config::{KeyMode, SortConfig};
use crate::error::{SortError, SortResult};

/// Month abbreviations and their ordinal, Jan = 1
pub const MONTHS: [(&str, i64); 12] = [
    ("Jan", 1),
    ("Feb", 2),
    ("Mar", 3),
    ("Apr", 4),
    ("May", 5),
    ("Jun", 6),
    ("Jul", 7),
    ("Aug", 8),
    ("Sep", 9),
    ("Oct", 10),
    ("Nov", 11),
    ("Dec", 12),
];

/// Size suffixes and their multipliers (base 1024)
pub const SIZE_SUFFIXES: [(char, i64); 6] = [
    ('K', 1 << 10),
    ('k', 1 << 10),
    ('M', 1 << 20),
    ('m', 1 << 20),
    ('G', 1 << 30),
    ('g', 1 << 30),
];

/// A comparable key derived from one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey<'a> {
    /// Raw column text
    Text(&'a str),
    /// Integer from a numeric, size or month column
    Int(i64),
}

/// Characters stripped by trailing blank trimming
pub fn trim_trailing_blanks(text: &str) -> &str {
    text.trim_end_matches([' ', '\t'])
}

/// Parse a signed base-10 integer; the whole text must be numeric
pub fn parse_numeric(text: &str) -> SortResult<i64> {
    text.parse::<i64>()
        .map_err(|_| SortError::not_numeric(text))
}

/// Parse a size like `512`, `2K` or `3g` into bytes.
///
/// Only the first suffix character is consulted; anything after it is
/// ignored, so `1K2` is 1024.
pub fn parse_human_size(text: &str) -> SortResult<i64> {
    let suffix = text
        .char_indices()
        .find_map(|(i, ch)| suffix_multiplier(ch).map(|mult| (i, mult)));

    let (magnitude, multiplier) = match suffix {
        Some((i, mult)) => (&text[..i], mult),
        None => (text, 1),
    };

    let value = magnitude
        .parse::<i64>()
        .map_err(|_| SortError::not_human_readable_size(text))?;

    value
        .checked_mul(multiplier)
        .ok_or_else(|| SortError::not_human_readable_size(text))
}

fn suffix_multiplier(ch: char) -> Option<i64> {
    SIZE_SUFFIXES
        .iter()
        .find(|(suffix, _)| *suffix == ch)
        .map(|&(_, mult)| mult)
}

/// Look up a three-letter month abbreviation (case-sensitive)
pub fn parse_month(text: &str) -> SortResult<i64> {
    MONTHS
        .iter()
        .find(|(name, _)| *name == text)
        .map(|&(_, ordinal)| ordinal)
        .ok_or_else(|| SortError::not_a_month(text))
}

/// Interpret already extracted column text under `mode`
pub fn interpret(text: &str, mode: KeyMode) -> SortResult<SortKey<'_>> {
    match mode {
        KeyMode::Lexicographic => Ok(SortKey::Text(text)),
        KeyMode::Numeric => parse_numeric(text).map(SortKey::Int),
        KeyMode::HumanNumeric => parse_human_size(text).map(SortKey::Int),
        KeyMode::Month => parse_month(text).map(SortKey::Int),
    }
}

/// Extract, optionally trim, and interpret the configured column of `line`
pub fn derive_key<'a>(line: &'a str, config: &SortConfig) -> SortResult<SortKey<'a>> {
    let mut text = extract_column(line, config.column)?;
    if config.trim_trailing_blanks {
        text = trim_trailing_blanks(text);
    }
    interpret(text, config.mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("42").unwrap(), 42);
        assert_eq!(parse_numeric("-7").unwrap(), -7);
        assert_eq!(parse_numeric("+7").unwrap(), 7);
        assert!(matches!(parse_numeric(""), Err(SortError::NotNumeric { .. })));
        assert!(matches!(parse_numeric("1.5"), Err(SortError::NotNumeric { .. })));
        assert!(matches!(parse_numeric("12abc"), Err(SortError::NotNumeric { .. })));
        assert!(matches!(parse_numeric(" 3"), Err(SortError::NotNumeric { .. })));
        assert!(parse_numeric("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_human_size() {
        assert_eq!(parse_human_size("512").unwrap(), 512);
        assert_eq!(parse_human_size("1K").unwrap(), 1024);
        assert_eq!(parse_human_size("2k").unwrap(), 2048);
        assert_eq!(parse_human_size("3M").unwrap(), 3 * 1024 * 1024);
        assert_eq!(parse_human_size("1g").unwrap(), 1024 * 1024 * 1024);
        assert_eq!(parse_human_size("-1K").unwrap(), -1024);
    }

    #[test]
    fn test_human_size_uses_first_suffix_only() {
        assert_eq!(parse_human_size("1K2").unwrap(), 1024);
        assert_eq!(parse_human_size("1KB").unwrap(), 1024);
        assert_eq!(parse_human_size("2MK").unwrap(), 2 * 1024 * 1024);
    }

    #[test]
    fn test_human_size_errors() {
        assert!(matches!(
            parse_human_size("K"),
            Err(SortError::NotHumanReadableSize { .. })
        ));
        assert!(matches!(
            parse_human_size("x1K"),
            Err(SortError::NotHumanReadableSize { .. })
        ));
        assert!(matches!(
            parse_human_size("1T"),
            Err(SortError::NotHumanReadableSize { .. })
        ));
        assert!(parse_human_size("9223372036854775807G").is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("Jan").unwrap(), 1);
        assert_eq!(parse_month("Dec").unwrap(), 12);
        assert!(matches!(parse_month("jan"), Err(SortError::NotAMonth { .. })));
        assert!(matches!(parse_month("January"), Err(SortError::NotAMonth { .. })));
        assert!(parse_month("").is_err());
    }

    #[test]
    fn test_derive_key_by_column() {
        let config = SortConfig::new().with_column(2).with_mode(KeyMode::Numeric);
        assert_eq!(derive_key("x\t17\ty", &config).unwrap(), SortKey::Int(17));
        assert!(matches!(
            derive_key("x", &config),
            Err(SortError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_derive_key_trims_before_parsing() {
        let config = SortConfig::new()
            .with_mode(KeyMode::Month)
            .with_trim_trailing_blanks(true);
        assert_eq!(derive_key("Feb  ", &config).unwrap(), SortKey::Int(2));

        let untrimmed = SortConfig::new().with_mode(KeyMode::Month);
        assert!(derive_key("Feb  ", &untrimmed).is_err());
    }

    #[test]
    fn test_trim_trailing_blanks() {
        assert_eq!(trim_trailing_blanks("a \t "), "a");
        assert_eq!(trim_trailing_blanks("  a"), "  a");
    }
}
