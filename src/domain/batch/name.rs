//! Batch name discovery and ordering.

use std::cmp::Ordering;
use std::fmt;

/// A mapping key recognised as a batch: `<prefix>_<number>`.
///
/// Ordering follows the numeric suffix at any length, falling back to the full key so
/// that `batch_1` and `batch_01` still sort deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BatchName {
    raw: String,
    /// Suffix digits without leading zeros; `"0"` when every digit is zero.
    digits: String,
}

impl BatchName {
    /// Recognise `key` as a batch name, or `None` when it does not follow the pattern.
    ///
    /// The prefix must start with an ASCII letter and may contain letters, digits and
    /// underscores; the suffix after the last underscore must be ASCII digits.
    pub fn parse(key: &str) -> Option<Self> {
        let (prefix, suffix) = key.rsplit_once('_')?;
        if !is_valid_prefix(prefix) || suffix.is_empty() {
            return None;
        }
        if !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = suffix.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        Some(Self { raw: key.to_string(), digits: digits.to_string() })
    }

    /// Synthetic name for items collected outside a batch file.
    pub fn interactive() -> Self {
        Self { raw: "interactive".to_string(), digits: "0".to_string() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Numeric suffix, when it fits in a `u64`.
    pub fn number(&self) -> Option<u64> {
        self.digits.parse().ok()
    }
}

fn is_valid_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl Ord for BatchName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
            .then_with(|| self.raw.cmp(&other.raw))
    }
}

impl PartialOrd for BatchName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BatchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
