//! Workday model.
//!
//! Duty scheduling operates over the five fixed workdays Monday through
//! Friday. The derived `Ord` follows enumeration order (Mon..Fri) and is
//! used for display and stable tie-breaking only — processing order is
//! decided by the scarcity sort in the scheduler, never by this ordering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A workday (Monday through Friday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    /// All five workdays in display order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Short day token (e.g., "Mon").
    pub fn token(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
        }
    }

    /// Full day name (e.g., "Monday").
    pub fn full_name(self) -> &'static str {
        match self {
            Self::Mon => "Monday",
            Self::Tue => "Tuesday",
            Self::Wed => "Wednesday",
            Self::Thu => "Thursday",
            Self::Fri => "Friday",
        }
    }

    /// Parses a short day token (ASCII case-insensitive exact match).
    ///
    /// Returns `None` for anything that is not exactly one of the five
    /// day tokens — including full names and weekend days.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.token().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
