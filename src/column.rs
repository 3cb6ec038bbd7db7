//! Tab-delimited column extraction

use crate::error::{SortError, SortResult};

/// The only recognized column delimiter
pub const DELIMITER: u8 = b'\t';

/// Return the text of the 1-based `column` of `line`.
///
/// The last column runs to the end of the line and keeps any trailing
/// blanks. A line with fewer columns than requested is an error; an empty
/// column is not.
pub fn extract_column(line: &str, column: usize) -> SortResult<&str> {
    let bytes = line.as_bytes();
    let mut field_start = 0;
    let mut current = 1;

    for (i, &byte) in bytes.iter().enumerate() {
        if byte == DELIMITER {
            if current == column {
                return Ok(&line[field_start..i]);
            }
            current += 1;
            field_start = i + 1;
        }
    }

    if current == column {
        return Ok(&line[field_start..]);
    }

    Err(SortError::missing_column(line, column))
}

/// Number of tab-delimited columns in `line`
pub fn field_count(line: &str) -> usize {
    line.bytes().filter(|&b| b == DELIMITER).count() + 1
}
