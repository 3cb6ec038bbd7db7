//! Sortedness checking without reordering

use crate::compare::compare_keys;
use crate::config::SortConfig;
use crate::error::SortResult;
use crate::key::derive_key;
use std::cmp::Ordering;

/// Find the first line that is out of order with its predecessor.
///
/// Returns the 1-based line number of the offending line, or `None` when the
/// whole sequence is sorted. Key derivation failures are returned as errors
/// rather than being folded into "not sorted".
pub fn first_disorder<T>(lines: &[T], config: &SortConfig) -> SortResult<Option<usize>>
where
    T: AsRef<str>,
{
    config.validate()?;

    let mut keys = lines.iter().map(|line| derive_key(line.as_ref(), config));
    let mut prev = match keys.next() {
        Some(key) => key?,
        None => return Ok(None),
    };

    for (i, key) in keys.enumerate() {
        let current = key?;
        if compare_keys(&prev, &current, config) == Ordering::Greater {
            // i indexes from the second line
            return Ok(Some(i + 2));
        }
        prev = current;
    }

    Ok(None)
}

/// True when every adjacent pair of `lines` is in order under `config`
pub fn is_sorted<T>(lines: &[T], config: &SortConfig) -> SortResult<bool>
where
    T: AsRef<str>,
{
    Ok(first_disorder(lines, config)?.is_none())
}
