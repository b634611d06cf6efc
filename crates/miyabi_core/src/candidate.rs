//! Parsed output of one generation attempt.

use serde::{Deserialize, Serialize};

/// Number of lines in a tanka.
pub const LINE_COUNT: usize = 5;

/// Structured answer from the model, exactly as the response schema defines.
///
/// Every field is required: a response missing any of them fails to
/// deserialize, which keeps malformed output out of the validation stages.
/// The `yomi*` readings exist only for mora counting and are dropped once a
/// candidate is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredCandidate {
    /// Moderation flag set by the model
    pub is_bad_word: bool,
    /// Why the moderation flag was set
    pub bad_reason: String,
    pub line0: String,
    pub line1: String,
    pub line2: String,
    pub line3: String,
    pub line4: String,
    pub yomi0: String,
    pub yomi1: String,
    pub yomi2: String,
    pub yomi3: String,
    pub yomi4: String,
}

impl StructuredCandidate {
    /// Build an unflagged candidate from display lines and readings.
    pub fn new(lines: [&str; LINE_COUNT], yomis: [&str; LINE_COUNT]) -> Self {
        let [line0, line1, line2, line3, line4] = lines.map(str::to_string);
        let [yomi0, yomi1, yomi2, yomi3, yomi4] = yomis.map(str::to_string);
        Self {
            is_bad_word: false,
            bad_reason: String::new(),
            line0,
            line1,
            line2,
            line3,
            line4,
            yomi0,
            yomi1,
            yomi2,
            yomi3,
            yomi4,
        }
    }

    /// Mark this candidate as flagged by moderation.
    pub fn flagged(mut self, reason: impl Into<String>) -> Self {
        self.is_bad_word = true;
        self.bad_reason = reason.into();
        self
    }

    /// Display lines in order.
    pub fn lines(&self) -> [&str; LINE_COUNT] {
        [
            &self.line0,
            &self.line1,
            &self.line2,
            &self.line3,
            &self.line4,
        ]
    }

    /// Phonetic readings in order.
    pub fn yomis(&self) -> [&str; LINE_COUNT] {
        [
            &self.yomi0,
            &self.yomi1,
            &self.yomi2,
            &self.yomi3,
            &self.yomi4,
        ]
    }

    /// Consume the candidate, keeping only its display lines.
    pub fn into_lines(self) -> [String; LINE_COUNT] {
        [self.line0, self.line1, self.line2, self.line3, self.line4]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_complete_object() {
        let json = r#"{
            "is_bad_word": false,
            "bad_reason": "",
            "line0": "春の朝", "line1": "散歩に出れば", "line2": "風薫る",
            "line3": "桜の道を", "line4": "ゆっくり歩く",
            "yomi0": "はるのあさ", "yomi1": "さんぽにでれば", "yomi2": "かぜかおる",
            "yomi3": "さくらのみちを", "yomi4": "ゆっくりあるく"
        }"#;

        let candidate: StructuredCandidate = serde_json::from_str(json).expect("parse");
        assert!(!candidate.is_bad_word);
        assert_eq!(candidate.lines()[0], "春の朝");
        assert_eq!(candidate.yomis()[4], "ゆっくりあるく");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"is_bad_word": false, "bad_reason": "", "line0": "春"}"#;
        assert!(serde_json::from_str::<StructuredCandidate>(json).is_err());
    }

    #[test]
    fn test_wrong_flag_type_is_rejected() {
        let json = r#"{
            "is_bad_word": "no", "bad_reason": "",
            "line0": "", "line1": "", "line2": "", "line3": "", "line4": "",
            "yomi0": "", "yomi1": "", "yomi2": "", "yomi3": "", "yomi4": ""
        }"#;
        assert!(serde_json::from_str::<StructuredCandidate>(json).is_err());
    }

    #[test]
    fn test_into_lines_drops_readings() {
        let candidate = StructuredCandidate::new(["a", "b", "c", "d", "e"], ["", "", "", "", ""]);
        assert_eq!(candidate.into_lines(), ["a", "b", "c", "d", "e"].map(String::from));
    }
}
