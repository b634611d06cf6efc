//! Display normalization of accepted lines.

use miyabi_core::{LINE_COUNT, StructuredCandidate};

/// Rewrite the small katakana ッ as the full-size ツ.
pub fn normalize_line(line: &str) -> String {
    line.replace('ッ', "ツ")
}

/// Normalize an accepted candidate into its five display lines.
///
/// Readings are dropped here and never reach the caller.
pub fn normalize(candidate: StructuredCandidate) -> [String; LINE_COUNT] {
    candidate.into_lines().map(|line| normalize_line(&line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_tsu_is_replaced_everywhere() {
        assert_eq!(normalize_line("ロボットがキッチン"), "ロボツトがキツチン");
    }

    #[test]
    fn test_hiragana_small_tsu_is_untouched() {
        assert_eq!(normalize_line("ゆっくり"), "ゆっくり");
    }

    #[test]
    fn test_normalize_keeps_order() {
        let candidate = StructuredCandidate::new(
            ["ネット", "b", "c", "d", "e"],
            ["ねっと", "", "", "", ""],
        );
        assert_eq!(
            normalize(candidate),
            ["ネツト", "b", "c", "d", "e"].map(String::from)
        );
    }
}
