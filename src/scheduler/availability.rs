//! Availability indexing and day ordering.
//!
//! Inverts a normalized roster into per-day candidate lists (and, for
//! departmental scheduling, per-day per-department lists). An index is
//! built once per run and consumed by the assignment engine.
//!
//! # Day ordering
//!
//! Both indexes expose `days_by_scarcity`: the five workdays sorted
//! ascending by candidate-pool size. Scarce days are assigned first, while
//! shared pools are least depleted by earlier selections — this matters
//! most for the department engine, where every selection removes a person
//! from the week's shared pool. The sort is stable, so tied days keep
//! Mon..Fri enumeration order.

use std::collections::BTreeMap;

use crate::models::{DepartmentQuotas, Person, Weekday};

/// Per-day candidate lists for balanced scheduling.
///
/// Candidate order within a day follows roster iteration order. That order
/// is not load-bearing (the engine shuffles before selecting) but keeps
/// index construction deterministic for a given roster.
#[derive(Debug, Clone)]
pub struct AvailabilityIndex {
    by_day: BTreeMap<Weekday, Vec<String>>,
}

impl AvailabilityIndex {
    /// Builds the index from a normalized roster.
    pub fn build(roster: &[Person]) -> Self {
        let mut by_day: BTreeMap<Weekday, Vec<String>> =
            Weekday::ALL.into_iter().map(|d| (d, Vec::new())).collect();

        for person in roster {
            for &day in &person.available {
                by_day.entry(day).or_default().push(person.name.clone());
            }
        }

        Self { by_day }
    }

    /// Candidates for a day, in roster order.
    pub fn candidates(&self, day: Weekday) -> &[String] {
        self.by_day.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Candidate-pool size for a day.
    pub fn candidate_count(&self, day: Weekday) -> usize {
        self.candidates(day).len()
    }

    /// The five workdays, scarcest pool first; ties keep Mon..Fri order.
    pub fn days_by_scarcity(&self) -> Vec<Weekday> {
        let mut days = Weekday::ALL.to_vec();
        days.sort_by_key(|&d| self.candidate_count(d));
        days
    }
}

/// Per-day, per-department candidate lists for departmental scheduling.
///
/// Only people whose department appears in the quota table enter the index;
/// normalization is expected to have filtered the rest already.
#[derive(Debug, Clone)]
pub struct DepartmentIndex {
    departments: Vec<String>,
    by_day: BTreeMap<Weekday, BTreeMap<String, Vec<String>>>,
}

impl DepartmentIndex {
    /// Builds the index from a normalized roster and the quota table.
    pub fn build(roster: &[Person], quotas: &DepartmentQuotas) -> Self {
        let departments: Vec<String> =
            quotas.iter().map(|q| q.department.clone()).collect();

        let mut by_day: BTreeMap<Weekday, BTreeMap<String, Vec<String>>> = Weekday::ALL
            .into_iter()
            .map(|d| {
                (
                    d,
                    departments
                        .iter()
                        .map(|dept| (dept.clone(), Vec::new()))
                        .collect(),
                )
            })
            .collect();

        for person in roster {
            let Some(department) = &person.department else {
                continue;
            };
            if !quotas.is_recognized(department) {
                continue;
            }
            for &day in &person.available {
                if let Some(candidates) = by_day
                    .entry(day)
                    .or_default()
                    .get_mut(department)
                {
                    candidates.push(person.name.clone());
                }
            }
        }

        Self {
            departments,
            by_day,
        }
    }

    /// Departments in quota-table order.
    pub fn departments(&self) -> &[String] {
        &self.departments
    }

    /// Candidates for a day and department, in roster order.
    pub fn candidates(&self, day: Weekday, department: &str) -> &[String] {
        self.by_day
            .get(&day)
            .and_then(|depts| depts.get(department))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Combined candidate-pool size for a day across all departments.
    pub fn day_total(&self, day: Weekday) -> usize {
        self.departments
            .iter()
            .map(|dept| self.candidates(day, dept).len())
            .sum()
    }

    /// The five workdays, scarcest combined pool first; ties keep Mon..Fri
    /// order.
    pub fn days_by_scarcity(&self) -> Vec<Weekday> {
        let mut days = Weekday::ALL.to_vec();
        days.sort_by_key(|&d| self.day_total(d));
        days
    }
}
