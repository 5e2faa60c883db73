//! Balanced duty assignment.
//!
//! Staffs each workday from its candidate pool, preferring people with the
//! fewest accumulated shifts. A person may serve on several days; fairness
//! comes from the load-first preference, not from exclusion.
//!
//! # Algorithm
//!
//! Per day, scarcest candidate pool first:
//!
//! 1. Below the minimum → one warning, day left unstaffed (all-or-nothing;
//!    the department engine deliberately behaves differently).
//! 2. Shuffle the pool uniformly with the injected RNG. This is the only
//!    random step; it breaks ties among equally loaded people and removes
//!    roster-order bias.
//! 3. Stable-sort by ascending cumulative shift count. Stability keeps the
//!    shuffled order within each load level.
//! 4. Take the candidate count capped at the maximum, bump each selected
//!    person's count, record the day.
//!
//! Shift counts live in the result being built and are threaded through the
//! loop; nothing outlives the run.
//!
//! # Reference
//! Burke et al. (2004), "The State of the Art of Nurse Rostering"

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

use super::AvailabilityIndex;
use crate::models::{Person, StaffingBounds, Warning, WeekSchedule};

/// Load-balancing weekday scheduler.
///
/// # Example
///
/// ```
/// use duty_roster::models::{Person, Weekday};
/// use duty_roster::scheduler::BalancedScheduler;
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let roster: Vec<Person> = ["Alice", "Bob", "Cara", "Dan"]
///     .into_iter()
///     .map(|name| Person::new(name).with_available_days(Weekday::ALL))
///     .collect();
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let schedule = BalancedScheduler::new().schedule(&roster, &mut rng);
/// assert_eq!(schedule.headcount(Weekday::Mon), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BalancedScheduler {
    bounds: StaffingBounds,
}

impl BalancedScheduler {
    /// Creates a scheduler with the default 3/4 bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-day staffing bounds.
    pub fn with_bounds(mut self, bounds: StaffingBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Assigns the week.
    ///
    /// Randomness comes only from `rng`; a seeded generator makes the whole
    /// run reproducible.
    pub fn schedule<R: Rng>(&self, roster: &[Person], rng: &mut R) -> WeekSchedule {
        let index = AvailabilityIndex::build(roster);
        let mut result = WeekSchedule::new();

        for person in roster {
            result.shift_counts.entry(person.name.clone()).or_insert(0);
        }

        for day in index.days_by_scarcity() {
            let mut candidates = index.candidates(day).to_vec();

            let Some(required) = self.bounds.required_for(candidates.len()) else {
                result.warnings.push(Warning::insufficient_candidates(
                    day,
                    candidates.len(),
                    self.bounds.min_per_day,
                ));
                continue;
            };

            candidates.shuffle(rng);
            prefer_least_loaded(&mut candidates, &result.shift_counts);
            candidates.truncate(required);

            for name in &candidates {
                *result.shift_counts.entry(name.clone()).or_insert(0) += 1;
            }
            result.days.insert(day, candidates);
        }

        result
    }
}

/// Stable-sorts candidates by ascending cumulative shift count.
///
/// Kept separate from the shuffle so each step is testable on its own:
/// the shuffle supplies the randomness, this sort supplies the fairness.
fn prefer_least_loaded(candidates: &mut [String], counts: &BTreeMap<String, u32>) {
    candidates.sort_by_key(|name| counts.get(name).copied().unwrap_or(0));
}
