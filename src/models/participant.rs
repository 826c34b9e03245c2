//! Participant names and calendar dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A day on which matches can be played. Ordered chronologically.
pub type CalendarDate = NaiveDate;

/// A competitor, identified by its normalized display name.
///
/// Names are unique within a competition and compare alphabetically, which is
/// the order participants are seeded into the generator.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Participant(String);

impl Participant {
    /// Normalize raw input: uppercase, keep letters, digits and spaces, trim.
    /// Returns None if nothing is left.
    pub fn parse(raw: &str) -> Option<Self> {
        let kept: String = raw
            .to_uppercase()
            .chars()
            .filter(|c| c.is_alphanumeric() || *c == ' ')
            .collect();
        let name = kept.trim();
        if name.is_empty() {
            return None;
        }
        Some(Self(name.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short display label for a date, e.g. `Sat, Mar 2, 2024`.
pub fn date_label(date: CalendarDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}
