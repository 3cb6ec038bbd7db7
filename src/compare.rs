//! Three-way comparison of derived sort keys

use crate::config::SortConfig;
use crate::key::{trim_trailing_blanks, SortKey};
use std::cmp::Ordering;

/// Compare two keys under `config`.
///
/// `reverse` flips the final result, never the operands, so the reversed
/// relation is still a total order.
#[inline]
pub fn compare_keys(a: &SortKey<'_>, b: &SortKey<'_>, config: &SortConfig) -> Ordering {
    let cmp = match (a, b) {
        (SortKey::Int(x), SortKey::Int(y)) => x.cmp(y),
        (SortKey::Text(x), SortKey::Text(y)) => {
            if config.trim_trailing_blanks {
                compare_text(trim_trailing_blanks(x), trim_trailing_blanks(y))
            } else {
                compare_text(x, y)
            }
        }
        // Kinds never mix within one call
        (SortKey::Int(_), SortKey::Text(_)) => Ordering::Less,
        (SortKey::Text(_), SortKey::Int(_)) => Ordering::Greater,
    };

    if config.reverse {
        cmp.reverse()
    } else {
        cmp
    }
}

#[inline]
fn compare_text(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_keys() {
        let config = SortConfig::default();
        assert_eq!(
            compare_keys(&SortKey::Int(2), &SortKey::Int(10), &config),
            Ordering::Less
        );
        assert_eq!(
            compare_keys(&SortKey::Int(-5), &SortKey::Int(-5), &config),
            Ordering::Equal
        );
    }

    #[test]
    fn test_text_keys_are_bytewise() {
        let config = SortConfig::default();
        assert_eq!(
            compare_keys(&SortKey::Text("10"), &SortKey::Text("2"), &config),
            Ordering::Less
        );
        assert_eq!(
            compare_keys(&SortKey::Text("B"), &SortKey::Text("a"), &config),
            Ordering::Less
        );
    }

    #[test]
    fn test_reverse_flips_result() {
        let config = SortConfig::default().with_reverse(true);
        assert_eq!(
            compare_keys(&SortKey::Text("a"), &SortKey::Text("b"), &config),
            Ordering::Greater
        );
        assert_eq!(
            compare_keys(&SortKey::Int(3), &SortKey::Int(3), &config),
            Ordering::Equal
        );
    }

    #[test]
    fn test_trim_applies_to_text() {
        let plain = SortConfig::default();
        let trimmed = SortConfig::default().with_trim_trailing_blanks(true);
        let a = SortKey::Text("a  ");
        let b = SortKey::Text("a");
        assert_eq!(compare_keys(&a, &b, &plain), Ordering::Greater);
        assert_eq!(compare_keys(&a, &b, &trimmed), Ordering::Equal);
    }
}
