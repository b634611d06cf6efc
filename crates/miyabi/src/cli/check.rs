//! Offline mora check handler.

use miyabi_core::LINE_COUNT;
use miyabi_tanka::EXPECTED_MORAE;
use miyabi_tanka::mora::{MoraViolation, line_counts, validate_lines};

/// Result of checking five hand-written lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Counted morae per line
    pub counts: [usize; LINE_COUNT],
    /// First violation, if any
    pub violation: Option<MoraViolation>,
}

impl CheckReport {
    /// Returns true if the lines would be accepted.
    pub fn is_valid(&self) -> bool {
        self.violation.is_none()
    }
}

impl std::fmt::Display for CheckReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, (actual, expected)) in self.counts.iter().zip(EXPECTED_MORAE).enumerate() {
            writeln!(f, "line {}: {} morae (expected {})", index + 1, actual, expected)?;
        }
        match &self.violation {
            None => write!(f, "OK"),
            Some(violation) => write!(f, "NG: {}", violation),
        }
    }
}

/// Handles the check command.
///
/// Display lines default to the readings when not given.
#[tracing::instrument(skip_all)]
pub fn handle_check_command(
    yomis: &[String],
    lines: Option<&[String]>,
) -> Result<CheckReport, Box<dyn std::error::Error>> {
    let yomis: [&str; LINE_COUNT] = to_array(yomis, "--yomi")?;
    let lines: [&str; LINE_COUNT] = match lines {
        Some(lines) => to_array(lines, "--line")?,
        None => yomis,
    };

    let counts = line_counts(yomis);
    let violation = validate_lines(lines, yomis).err();
    tracing::debug!(?counts, ?violation, "Checked readings");

    Ok(CheckReport { counts, violation })
}

fn to_array<'a>(
    values: &'a [String],
    flag: &str,
) -> Result<[&'a str; LINE_COUNT], Box<dyn std::error::Error>> {
    let refs: Vec<&str> = values.iter().map(String::as_str).collect();
    refs.try_into().map_err(|v: Vec<&str>| {
        format!("{} expects {} values, got {}", flag, LINE_COUNT, v.len()).into()
    })
}
