//! Departmental duty assignment.
//!
//! Staffs each workday per department against a quota table, with a hard
//! no-reuse rule: nobody serves more than one day in the week. Because the
//! used-staff set already spreads load, this engine keeps no shift counts
//! and applies no load-balancing sort; selection within a department is
//! purely random.
//!
//! # Algorithm
//!
//! Per day, scarcest combined pool first; per department, quota order:
//!
//! 1. Drop candidates already assigned earlier in the week.
//! 2. Below the department minimum → warning, and everyone remaining is
//!    assigned (partial fulfillment). The balanced engine instead skips a
//!    short day entirely; the two policies are historically different and
//!    both are kept as observed.
//! 3. At or above the minimum → shuffle, keep exactly the minimum.
//! 4. Selections from every department join the used-staff set.
//!
//! A day is recorded only when at least one department selected someone;
//! a day that comes up completely empty keeps no entry (its warnings are
//! still reported).

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

use super::DepartmentIndex;
use crate::models::{
    DayStaffing, DepartmentAssignment, DepartmentQuotas, DepartmentSchedule, Person, Warning,
};

/// Quota-driven, no-reuse weekday scheduler.
///
/// # Example
///
/// ```
/// use duty_roster::models::{DepartmentQuotas, Person, Weekday};
/// use duty_roster::scheduler::DepartmentScheduler;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let quotas = DepartmentQuotas::new()
///     .with_department("Ops", 3)
///     .with_department("Support", 4);
///
/// let roster: Vec<Person> = (0..10)
///     .map(|i| {
///         Person::new(format!("ops-{i}"))
///             .with_available_days(Weekday::ALL)
///             .with_department("Ops")
///     })
///     .collect();
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let schedule = DepartmentScheduler::new(quotas).schedule(&roster, &mut rng);
/// // Ten people, one day each: at most ten assignments in the week.
/// assert!(schedule.total_assigned() <= 10);
/// ```
#[derive(Debug, Clone)]
pub struct DepartmentScheduler {
    quotas: DepartmentQuotas,
}

impl DepartmentScheduler {
    /// Creates a scheduler for the given quota table.
    pub fn new(quotas: DepartmentQuotas) -> Self {
        Self { quotas }
    }

    /// Assigns the week.
    ///
    /// Randomness comes only from `rng`; a seeded generator makes the whole
    /// run reproducible.
    pub fn schedule<R: Rng>(&self, roster: &[Person], rng: &mut R) -> DepartmentSchedule {
        let index = DepartmentIndex::build(roster, &self.quotas);
        let mut result = DepartmentSchedule::new();
        let mut used: BTreeSet<String> = BTreeSet::new();

        for day in index.days_by_scarcity() {
            let mut staffing = DayStaffing::default();

            for quota in self.quotas.iter() {
                let mut available: Vec<String> = index
                    .candidates(day, &quota.department)
                    .iter()
                    .filter(|name| !used.contains(*name))
                    .cloned()
                    .collect();

                let selected = if available.len() < quota.min_per_day {
                    result.warnings.push(Warning::department_shortfall(
                        day,
                        quota.department.clone(),
                        available.len(),
                        quota.min_per_day,
                    ));
                    available
                } else {
                    available.shuffle(rng);
                    available.truncate(quota.min_per_day);
                    available
                };

                used.extend(selected.iter().cloned());
                staffing.departments.push(DepartmentAssignment {
                    department: quota.department.clone(),
                    staff: selected,
                });
            }

            if staffing.total_headcount() > 0 {
                result.days.insert(day, staffing);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sample_quotas() -> DepartmentQuotas {
        DepartmentQuotas::new()
            .with_department("Ops", 3)
            .with_department("Support", 4)
    }

    fn department_people(
        department: &str,
        count: usize,
        days: impl IntoIterator<Item = Weekday> + Clone,
    ) -> Vec<Person> {
        (0..count)
            .map(|i| {
                Person::new(format!("{department}-{i}"))
                    .with_available_days(days.clone())
                    .with_department(department)
            })
            .collect()
    }

    #[test]
    fn test_nobody_serves_twice() {
        let mut roster = department_people("Ops", 20, Weekday::ALL);
        roster.extend(department_people("Support", 25, Weekday::ALL));

        let mut rng = SmallRng::seed_from_u64(42);
        let schedule = DepartmentScheduler::new(sample_quotas()).schedule(&roster, &mut rng);

        let mut seen = BTreeSet::new();
        for staffing in schedule.days.values() {
            for assignment in &staffing.departments {
                for name in &assignment.staff {
                    assert!(seen.insert(name.clone()), "{name} assigned twice");
                }
            }
        }
        // Supply is ample: every day meets both quotas.
        assert_eq!(schedule.total_assigned(), 5 * (3 + 4));
        assert!(!schedule.has_warnings());
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let mut roster = department_people("Ops", 18, Weekday::ALL);
        roster.extend(department_people("Support", 22, Weekday::ALL));
        let scheduler = DepartmentScheduler::new(sample_quotas());

        let first = scheduler.schedule(&roster, &mut SmallRng::seed_from_u64(5));
        let second = scheduler.schedule(&roster, &mut SmallRng::seed_from_u64(5));
        assert_eq!(first, second);
    }

    #[test]
    fn test_quota_met_exactly() {
        let mut roster = department_people("Ops", 6, [Weekday::Mon]);
        roster.extend(department_people("Support", 6, [Weekday::Mon]));

        let mut rng = SmallRng::seed_from_u64(9);
        let schedule = DepartmentScheduler::new(sample_quotas()).schedule(&roster, &mut rng);

        let staffing = schedule.day(Weekday::Mon).unwrap();
        assert_eq!(staffing.staff_for_department("Ops").unwrap().len(), 3);
        assert_eq!(staffing.staff_for_department("Support").unwrap().len(), 4);
        assert_eq!(staffing.summary(), "Ops: 3, Support: 4");
    }

    #[test]
    fn test_shortfall_assigns_everyone_remaining() {
        // Two Support people against a minimum of four: both are assigned
        // and a warning names the gap.
        let mut roster = department_people("Ops", 4, [Weekday::Tue]);
        roster.extend(department_people("Support", 2, [Weekday::Tue]));

        let mut rng = SmallRng::seed_from_u64(13);
        let schedule = DepartmentScheduler::new(sample_quotas()).schedule(&roster, &mut rng);

        let staffing = schedule.day(Weekday::Tue).unwrap();
        let support = staffing.staff_for_department("Support").unwrap();
        assert_eq!(support.len(), 2);
        assert!(support.contains(&"Support-0".to_string()));
        assert!(support.contains(&"Support-1".to_string()));

        let shortfalls: Vec<_> = schedule
            .warnings
            .iter()
            .filter(|w| w.day == Weekday::Tue && w.department.as_deref() == Some("Support"))
            .collect();
        assert_eq!(shortfalls.len(), 1);
        assert!(shortfalls[0].to_string().contains("2 of 4"));
    }

    #[test]
    fn test_empty_day_not_recorded_but_warned() {
        let roster = department_people("Ops", 3, [Weekday::Mon]);

        let mut rng = SmallRng::seed_from_u64(21);
        let schedule = DepartmentScheduler::new(sample_quotas()).schedule(&roster, &mut rng);

        // Monday is staffed by Ops alone (Support empty but warned).
        assert!(schedule.is_staffed(Weekday::Mon));
        // Every other day had zero candidates everywhere: no entries.
        for day in [Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri] {
            assert!(!schedule.is_staffed(day));
        }
        // Both departments warned on the empty days, Support also on Monday.
        let empty_day_warnings = schedule
            .warnings
            .iter()
            .filter(|w| w.day != Weekday::Mon)
            .count();
        assert_eq!(empty_day_warnings, 8);
    }

    #[test]
    fn test_used_staff_thins_later_days() {
        // Three Ops people available Monday and Tuesday only. Scarcity ties
        // keep Mon before Tue: Monday consumes all three, Tuesday gets a
        // shortfall with nobody left.
        let roster = department_people("Ops", 3, [Weekday::Mon, Weekday::Tue]);
        let quotas = DepartmentQuotas::new().with_department("Ops", 3);

        let mut rng = SmallRng::seed_from_u64(17);
        let schedule = DepartmentScheduler::new(quotas).schedule(&roster, &mut rng);

        assert_eq!(
            schedule
                .day(Weekday::Mon)
                .unwrap()
                .staff_for_department("Ops")
                .unwrap()
                .len(),
            3
        );
        assert!(!schedule.is_staffed(Weekday::Tue));
        assert!(schedule
            .warnings
            .iter()
            .any(|w| w.day == Weekday::Tue && w.message.contains("0 of 3")));
    }

    #[test]
    fn test_partial_day_still_recorded() {
        // Support has people on Wednesday, Ops has none: the day is
        // recorded with an empty Ops list.
        let roster = department_people("Support", 5, [Weekday::Wed]);

        let mut rng = SmallRng::seed_from_u64(33);
        let schedule = DepartmentScheduler::new(sample_quotas()).schedule(&roster, &mut rng);

        let staffing = schedule.day(Weekday::Wed).unwrap();
        assert_eq!(staffing.staff_for_department("Ops").unwrap().len(), 0);
        assert_eq!(staffing.staff_for_department("Support").unwrap().len(), 4);
        assert_eq!(staffing.summary(), "Ops: 0, Support: 4");
    }
}
