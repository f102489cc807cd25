//! Recurrence cadence for self-regenerating tasks.

use super::ParseRecurrenceIntervalError;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Cadence at which a recurring task regenerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceInterval {
    /// The next occurrence is due one day after the base date.
    Daily,
    /// The next occurrence is due seven days after the base date.
    Weekly,
}

impl RecurrenceInterval {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }

    /// Returns the number of days between occurrences.
    #[must_use]
    pub const fn days(self) -> u64 {
        match self {
            Self::Daily => 1,
            Self::Weekly => 7,
        }
    }

    /// Computes the due date of the next occurrence from a base date.
    ///
    /// Returns `None` only when the advanced date is unrepresentable.
    #[must_use]
    pub fn advance(self, base: NaiveDate) -> Option<NaiveDate> {
        base.checked_add_days(Days::new(self.days()))
    }
}

impl TryFrom<&str> for RecurrenceInterval {
    type Error = ParseRecurrenceIntervalError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            _ => Err(ParseRecurrenceIntervalError(value.to_owned())),
        }
    }
}
