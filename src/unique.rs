//! Adjacent duplicate removal for sorted output

use itertools::Itertools;

/// Drop every line equal to the line right before it.
///
/// Only adjacent repeats are merged, so the input should already be sorted.
pub fn dedupe<T: PartialEq>(lines: Vec<T>) -> Vec<T> {
    lines.into_iter().dedup().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedupe_adjacent() {
        assert_eq!(dedupe(vec!["a", "a", "b", "b", "c"]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_dedupe_keeps_separated_duplicates() {
        assert_eq!(dedupe(vec!["a", "b", "a"]), vec!["a", "b", "a"]);
    }

    #[test]
    fn test_dedupe_is_exact() {
        let lines = vec!["a ".to_string(), "a".to_string(), "a".to_string()];
        assert_eq!(dedupe(lines), vec!["a ".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_dedupe_empty() {
        let empty: Vec<String> = Vec::new();
        assert!(dedupe(empty).is_empty());
    }
}
