//! Schedule (result) models.
//!
//! A finished run produces a day → assignment mapping plus an ordered list
//! of warnings. The two engines return different shapes:
//!
//! - [`WeekSchedule`] (balanced engine): every workday is present from the
//!   start; a skipped day keeps its initialized empty staff list. Final
//!   per-person shift counts ride along for workload inspection.
//! - [`DepartmentSchedule`] (department engine): only days where at least
//!   one person was selected carry an entry; each entry breaks staff down
//!   per department in quota order.
//!
//! Warnings record shortage conditions. They are never fatal and never
//! mutated after creation; `Display` renders the message the boundary layer
//! shows or exports.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::Weekday;

/// A non-fatal shortage notice scoped to one day (and optionally one
/// department).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Shortage classification.
    pub kind: WarningKind,
    /// The affected workday.
    pub day: Weekday,
    /// The affected department, when department-scoped.
    pub department: Option<String>,
    /// Human-readable description.
    pub message: String,
}

/// Classification of scheduling warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// A day had fewer candidates than the minimum and was left unstaffed.
    InsufficientCandidates,
    /// A department fell short of its daily minimum and was staffed with
    /// everyone still available.
    DepartmentShortfall,
}

impl Warning {
    /// A day skipped by the balanced engine for lack of candidates.
    pub fn insufficient_candidates(day: Weekday, available: usize, required: usize) -> Self {
        Self {
            kind: WarningKind::InsufficientCandidates,
            day,
            department: None,
            message: format!(
                "insufficient candidates for {day}: {available} available, need at least {required}"
            ),
        }
    }

    /// A department staffed below its minimum by the department engine.
    pub fn department_shortfall(
        day: Weekday,
        department: impl Into<String>,
        available: usize,
        required: usize,
    ) -> Self {
        let department = department.into();
        let message = format!(
            "{day}: department '{department}' has {available} of {required} required, assigning all available"
        );
        Self {
            kind: WarningKind::DepartmentShortfall,
            day,
            department: Some(department),
            message,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of a balanced scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    /// Assigned staff per workday. All five days are always present;
    /// a skipped day has an empty list.
    pub days: BTreeMap<Weekday, Vec<String>>,
    /// Final cumulative shift count per roster person (zero included).
    pub shift_counts: BTreeMap<String, u32>,
    /// Shortage warnings in the order they were produced.
    pub warnings: Vec<Warning>,
}

impl Default for WeekSchedule {
    fn default() -> Self {
        Self::new()
    }
}

impl WeekSchedule {
    /// Creates an empty schedule with all five days initialized.
    pub fn new() -> Self {
        Self {
            days: Weekday::ALL.into_iter().map(|d| (d, Vec::new())).collect(),
            shift_counts: BTreeMap::new(),
            warnings: Vec::new(),
        }
    }

    /// Staff assigned to a day (empty if the day was skipped).
    pub fn staff_for(&self, day: Weekday) -> &[String] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Headcount for a day.
    pub fn headcount(&self, day: Weekday) -> usize {
        self.staff_for(day).len()
    }

    /// Whether anyone was assigned to a day.
    pub fn is_staffed(&self, day: Weekday) -> bool {
        !self.staff_for(day).is_empty()
    }

    /// Number of days a person appears in the schedule.
    pub fn days_assigned(&self, name: &str) -> usize {
        self.days
            .values()
            .filter(|staff| staff.iter().any(|n| n == name))
            .count()
    }

    /// Final shift count for a person (zero if unknown).
    pub fn shift_count(&self, name: &str) -> u32 {
        self.shift_counts.get(name).copied().unwrap_or(0)
    }

    /// Total assignments across the week.
    pub fn total_assigned(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Whether any shortage warnings were produced.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// One department's selected staff for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentAssignment {
    /// Department label.
    pub department: String,
    /// Selected staff (may be empty when the other department carried
    /// the day).
    pub staff: Vec<String>,
}

/// Per-department staffing for one day, in quota-table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStaffing {
    /// Assignments per department, in quota-table order.
    pub departments: Vec<DepartmentAssignment>,
}

impl DayStaffing {
    /// Combined headcount across departments.
    pub fn total_headcount(&self) -> usize {
        self.departments.iter().map(|d| d.staff.len()).sum()
    }

    /// Selected staff for one department, if present.
    pub fn staff_for_department(&self, department: &str) -> Option<&[String]> {
        self.departments
            .iter()
            .find(|d| d.department == department)
            .map(|d| d.staff.as_slice())
    }

    /// Per-department headcount summary, e.g. `"Ops: 3, Support: 4"`.
    pub fn summary(&self) -> String {
        self.departments
            .iter()
            .map(|d| format!("{}: {}", d.department, d.staff.len()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Result of a departmental scheduling run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSchedule {
    /// Staffing per workday. Days where nobody was selected carry no entry.
    pub days: BTreeMap<Weekday, DayStaffing>,
    /// Shortage warnings in the order they were produced.
    pub warnings: Vec<Warning>,
}

impl DepartmentSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Staffing for a day, if anyone was selected.
    pub fn day(&self, day: Weekday) -> Option<&DayStaffing> {
        self.days.get(&day)
    }

    /// Whether anyone was assigned to a day.
    pub fn is_staffed(&self, day: Weekday) -> bool {
        self.days.contains_key(&day)
    }

    /// Every person assigned anywhere in the week.
    pub fn assigned_staff(&self) -> BTreeSet<&str> {
        self.days
            .values()
            .flat_map(|s| s.departments.iter())
            .flat_map(|d| d.staff.iter())
            .map(String::as_str)
            .collect()
    }

    /// Total assignments across the week.
    pub fn total_assigned(&self) -> usize {
        self.days.values().map(DayStaffing::total_headcount).sum()
    }

    /// Whether any shortage warnings were produced.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
