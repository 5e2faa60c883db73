//! Workload metrics.
//!
//! Summarizes a finished schedule for display or export.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Staffed days | Days with at least one assignment |
//! | Total assignments | Sum of headcounts across the week |
//! | Mean headcount | Average headcount over staffed days |
//! | Min/Max shift count | Per-person load spread |
//! | Shortages | Number of shortage warnings produced |

use crate::models::{DepartmentSchedule, Weekday, WeekSchedule};
use std::collections::BTreeMap;

/// Workload indicators for one scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadKpi {
    /// Days with at least one assignment.
    pub staffed_days: usize,
    /// Days left unstaffed.
    pub unstaffed_days: usize,
    /// Total assignments across the week.
    pub total_assignments: usize,
    /// Mean headcount over staffed days (0.0 when nothing was staffed).
    pub mean_headcount: f64,
    /// Smallest per-person shift count among known people.
    pub min_shift_count: u32,
    /// Largest per-person shift count.
    pub max_shift_count: u32,
    /// Shortage warnings produced by the run.
    pub shortages: usize,
}

impl WorkloadKpi {
    /// Computes KPIs from a balanced run.
    ///
    /// Shift-count spread covers the whole roster, so people who were never
    /// assigned pull `min_shift_count` down to zero.
    pub fn from_week(schedule: &WeekSchedule) -> Self {
        let staffed_days = Weekday::ALL
            .into_iter()
            .filter(|&d| schedule.is_staffed(d))
            .count();
        let total = schedule.total_assigned();
        let counts: Vec<u32> = schedule.shift_counts.values().copied().collect();

        Self {
            staffed_days,
            unstaffed_days: Weekday::ALL.len() - staffed_days,
            total_assignments: total,
            mean_headcount: mean(total, staffed_days),
            min_shift_count: counts.iter().copied().min().unwrap_or(0),
            max_shift_count: counts.iter().copied().max().unwrap_or(0),
            shortages: schedule.warnings.len(),
        }
    }

    /// Computes KPIs from a departmental run.
    ///
    /// Shift counts are derived from appearances; with the no-reuse rule
    /// intact, `max_shift_count` is 1 whenever anyone was assigned.
    pub fn from_departments(schedule: &DepartmentSchedule) -> Self {
        let staffed_days = schedule.days.len();
        let total = schedule.total_assigned();

        let mut appearances: BTreeMap<&str, u32> = BTreeMap::new();
        for staffing in schedule.days.values() {
            for assignment in &staffing.departments {
                for name in &assignment.staff {
                    *appearances.entry(name.as_str()).or_insert(0) += 1;
                }
            }
        }

        Self {
            staffed_days,
            unstaffed_days: Weekday::ALL.len() - staffed_days,
            total_assignments: total,
            mean_headcount: mean(total, staffed_days),
            min_shift_count: appearances.values().copied().min().unwrap_or(0),
            max_shift_count: appearances.values().copied().max().unwrap_or(0),
            shortages: schedule.warnings.len(),
        }
    }

    /// Largest load gap between any two people.
    pub fn load_spread(&self) -> u32 {
        self.max_shift_count - self.min_shift_count
    }
}

fn mean(total: usize, days: usize) -> f64 {
    if days == 0 {
        0.0
    } else {
        total as f64 / days as f64
    }
}
