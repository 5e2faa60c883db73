//! Personnel models.
//!
//! Two representations: `RosterRecord` is the raw record the boundary layer
//! hands over (names and free-form availability text, straight out of
//! whatever source format it parsed), and `Person` is the normalized form
//! the schedulers consume. Conversion happens in [`crate::roster`].
//!
//! Cumulative shift counts are intentionally not part of `Person`: they are
//! state owned by a single scheduling run and reported on its result.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::Weekday;

/// A raw roster record as supplied by the boundary layer.
///
/// The availability field is free-form text; see [`crate::roster`] for the
/// recognized formats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRecord {
    /// Person name (assumed unique within a roster).
    pub name: String,
    /// Free-form availability text (e.g., "Mon, Wed, Fri").
    pub availability: String,
    /// Raw department label, if the source carries one.
    pub department: Option<String>,
}

impl RosterRecord {
    /// Creates a record from a name and raw availability text.
    pub fn new(name: impl Into<String>, availability: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            availability: availability.into(),
            department: None,
        }
    }

    /// Sets the raw department label.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }
}

/// A normalized person: name plus the set of workdays they can cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Person name (assumed unique within a roster).
    pub name: String,
    /// Days this person declared as available. A set: duplicates collapse.
    pub available: BTreeSet<Weekday>,
    /// Validated department label (departmental scheduling only).
    pub department: Option<String>,
}

impl Person {
    /// Creates a person with no availability.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            available: BTreeSet::new(),
            department: None,
        }
    }

    /// Adds one available day.
    pub fn with_available(mut self, day: Weekday) -> Self {
        self.available.insert(day);
        self
    }

    /// Adds several available days.
    pub fn with_available_days(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.available.extend(days);
        self
    }

    /// Sets the department label.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Whether this person declared the given day as available.
    pub fn is_available(&self, day: Weekday) -> bool {
        self.available.contains(&day)
    }
}
