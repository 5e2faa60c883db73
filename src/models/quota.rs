//! Staffing requirement configuration.
//!
//! Two flavors, matching the two scheduling engines:
//!
//! - [`StaffingBounds`]: a per-day minimum and cap for the balanced engine.
//!   A day below the minimum is skipped entirely; a day at or above the cap
//!   is staffed with exactly the cap.
//! - [`DepartmentQuotas`]: an ordered table of per-department daily minimums
//!   for the department engine. The table doubles as the set of recognized
//!   department labels, and its order drives both processing order and
//!   summary output.
//!
//! Headcounts are configuration, not law: the commonly observed values
//! (3/4 bounds, 3-and-4 department minimums) appear only in defaults and
//! tests.

use serde::{Deserialize, Serialize};

/// Per-day staffing bounds for balanced scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingBounds {
    /// Minimum candidates required before a day is staffed at all.
    pub min_per_day: usize,
    /// Maximum number of people assigned to one day.
    pub max_per_day: usize,
}

impl Default for StaffingBounds {
    /// The observed legacy configuration: at least 3, at most 4.
    fn default() -> Self {
        Self {
            min_per_day: 3,
            max_per_day: 4,
        }
    }
}

impl StaffingBounds {
    /// Creates bounds. The cap is raised to the minimum if given below it.
    pub fn new(min_per_day: usize, max_per_day: usize) -> Self {
        Self {
            min_per_day,
            max_per_day: max_per_day.max(min_per_day),
        }
    }

    /// Headcount to assign for a day with `candidate_count` candidates.
    ///
    /// Returns `None` below the minimum (the day is skipped), otherwise
    /// the candidate count capped at `max_per_day`.
    pub fn required_for(&self, candidate_count: usize) -> Option<usize> {
        if candidate_count < self.min_per_day {
            None
        } else {
            Some(candidate_count.min(self.max_per_day))
        }
    }
}

/// One department's daily minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentQuota {
    /// Department label.
    pub department: String,
    /// Minimum headcount required per day.
    pub min_per_day: usize,
}

/// Ordered department → daily-minimum table.
///
/// Order is load-bearing: the department engine processes departments in
/// table order, and [`crate::models::DayStaffing::summary`] lists them the
/// same way. A department label absent from the table is unrecognized and
/// its people are skipped during normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentQuotas {
    entries: Vec<DepartmentQuota>,
}

impl DepartmentQuotas {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a department with its daily minimum.
    pub fn with_department(mut self, department: impl Into<String>, min_per_day: usize) -> Self {
        self.entries.push(DepartmentQuota {
            department: department.into(),
            min_per_day,
        });
        self
    }

    /// The daily minimum for a department, if recognized.
    pub fn min_for(&self, department: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|q| q.department == department)
            .map(|q| q.min_per_day)
    }

    /// Whether a label names a recognized department.
    pub fn is_recognized(&self, department: &str) -> bool {
        self.min_for(department).is_some()
    }

    /// Departments in table order.
    pub fn iter(&self) -> impl Iterator<Item = &DepartmentQuota> {
        self.entries.iter()
    }

    /// Number of departments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
