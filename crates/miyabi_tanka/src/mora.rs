//! Mora counting and structural validation of generated tanka.
//!
//! Counting works on the reading (`yomi`) of each line. Latin letters,
//! hiragana and katakana each count as one mora, except the small kana that
//! form digraphs with the preceding mora (ゃ ャ ゅ ュ ょ ョ). A line passes
//! when its count is within [`MORA_TOLERANCE`] of the classical pattern.

use miyabi_core::{LINE_COUNT, StructuredCandidate};
use tracing::debug;

/// Expected morae per line: 5-7-5-7-7.
pub const EXPECTED_MORAE: [usize; LINE_COUNT] = [5, 7, 5, 7, 7];

/// Allowed deviation from the expected count, in either direction.
pub const MORA_TOLERANCE: usize = 1;

const DIGRAPH_KANA: [char; 6] = ['ゃ', 'ャ', 'ゅ', 'ュ', 'ょ', 'ョ'];

const PARENTHESES: [char; 4] = ['（', '）', '(', ')'];

/// Why a candidate failed structural validation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoraViolation {
    /// Display text carries a parenthesised reading or note
    #[display("line {line} contains parentheses: {text}")]
    Parenthesized {
        /// 1-based line number
        line: usize,
        /// Offending display text
        text: String,
    },
    /// Reading is too far from the expected mora count
    #[display("line {line} has {actual} morae, expected {expected}")]
    Count {
        /// 1-based line number
        line: usize,
        /// Expected count for this line
        expected: usize,
        /// Counted morae
        actual: usize,
    },
}

fn counts_as_mora(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ('\u{3040}'..='\u{309F}').contains(&c)
        || ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Count the morae in one reading.
///
/// # Examples
///
/// ```
/// use miyabi_tanka::count_morae;
///
/// assert_eq!(count_morae("はるのあさ"), 5);
/// assert_eq!(count_morae("きょう"), 2);
/// ```
pub fn count_morae(yomi: &str) -> usize {
    yomi.chars()
        .filter(|c| counts_as_mora(*c) && !DIGRAPH_KANA.contains(c))
        .count()
}

/// Mora counts of all five readings, in order.
pub fn line_counts(yomis: [&str; LINE_COUNT]) -> [usize; LINE_COUNT] {
    yomis.map(count_morae)
}

/// Validate five display lines against their readings.
///
/// Parentheses in any display line fail immediately, before any counting.
pub fn validate_lines(
    lines: [&str; LINE_COUNT],
    yomis: [&str; LINE_COUNT],
) -> Result<(), MoraViolation> {
    if let Some((index, text)) = lines
        .iter()
        .enumerate()
        .find(|(_, line)| line.contains(PARENTHESES))
    {
        return Err(MoraViolation::Parenthesized {
            line: index + 1,
            text: text.to_string(),
        });
    }

    for (index, (yomi, expected)) in yomis.iter().zip(EXPECTED_MORAE).enumerate() {
        let actual = count_morae(yomi);
        debug!(line = index + 1, expected, actual, "Counted morae");

        if actual.abs_diff(expected) > MORA_TOLERANCE {
            return Err(MoraViolation::Count {
                line: index + 1,
                expected,
                actual,
            });
        }
    }

    Ok(())
}

/// Validate a candidate's lines and readings.
pub fn validate(candidate: &StructuredCandidate) -> Result<(), MoraViolation> {
    validate_lines(candidate.lines(), candidate.yomis())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: [&str; 5] = ["春の朝", "散歩に出れば", "風薫る", "桜の道を", "ゆっくり歩く"];
    const YOMIS: [&str; 5] = [
        "はるのあさ",
        "さんぽにでれば",
        "かぜかおる",
        "さくらのみちを",
        "ゆっくりあるく",
    ];

    #[test]
    fn test_counts_hiragana_katakana_and_latin() {
        assert_eq!(count_morae("はるのあさ"), 5);
        assert_eq!(count_morae("サクラ"), 3);
        assert_eq!(count_morae("AI"), 2);
        assert_eq!(count_morae("ゆっくり"), 4);
    }

    #[test]
    fn test_small_digraph_kana_are_excluded() {
        assert_eq!(count_morae("きょう"), 2);
        assert_eq!(count_morae("キャンプ"), 3);
        assert_eq!(count_morae("しゅっぱつ"), 4);
    }

    #[test]
    fn test_spaces_punctuation_and_kanji_are_ignored() {
        assert_eq!(count_morae("はる の あさ、"), 5);
        assert_eq!(count_morae("春のあさ"), 3);
        assert_eq!(count_morae(""), 0);
    }

    #[test]
    fn test_well_formed_tanka_passes() {
        assert_eq!(validate_lines(LINES, YOMIS), Ok(()));
    }

    #[test]
    fn test_tolerance_boundary() {
        let with_first = |yomi: &'static str| {
            let mut yomis = YOMIS;
            yomis[0] = yomi;
            validate_lines(LINES, yomis)
        };

        assert!(with_first("はるのあ").is_ok());
        assert!(with_first("はるのあさだ").is_ok());
        assert_eq!(
            with_first("はるの"),
            Err(MoraViolation::Count {
                line: 1,
                expected: 5,
                actual: 3
            })
        );
        assert_eq!(
            with_first("はるのあさだよ"),
            Err(MoraViolation::Count {
                line: 1,
                expected: 5,
                actual: 7
            })
        );
    }

    #[test]
    fn test_every_line_must_pass() {
        let mut yomis = YOMIS;
        yomis[4] = "ゆっくり";
        assert!(matches!(
            validate_lines(LINES, yomis),
            Err(MoraViolation::Count { line: 5, .. })
        ));
    }

    #[test]
    fn test_parentheses_fail_regardless_of_count() {
        for leaked in ["春（はる）", "春(はる)", "春）", "(春"] {
            let mut lines = LINES;
            lines[0] = leaked;
            assert!(matches!(
                validate_lines(lines, YOMIS),
                Err(MoraViolation::Parenthesized { line: 1, .. })
            ));
        }
    }

    #[test]
    fn test_validation_is_deterministic() {
        let mut yomis = YOMIS;
        yomis[2] = "かぜ";
        let first = validate_lines(LINES, yomis);
        for _ in 0..10 {
            assert_eq!(validate_lines(LINES, yomis), first);
        }
    }
}
