//! Weekday duty scheduling.
//!
//! Assigns personnel to weekday duty slots from declared availability,
//! balancing workload across the roster. Input is a list of raw roster
//! records; output is a day → staff mapping plus shortage warnings. The
//! boundary layer owns all I/O and rendering — this crate never touches
//! storage, network, or environment.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Weekday`, `RosterRecord`, `Person`,
//!   `StaffingBounds`, `DepartmentQuotas`, `WeekSchedule`,
//!   `DepartmentSchedule`, `Warning`
//! - **`roster`**: Availability-text normalization with lenient and strict
//!   parse policies
//! - **`scheduler`**: Availability indexing, scarcity-first day ordering,
//!   the two assignment engines, and workload KPIs
//!
//! # Example
//!
//! ```
//! use duty_roster::models::{RosterRecord, Weekday};
//! use duty_roster::roster::RosterNormalizer;
//! use duty_roster::scheduler::BalancedScheduler;
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let records = vec![
//!     RosterRecord::new("Alice", "Mon,Wed,Fri"),
//!     RosterRecord::new("Bob", "Mon,Tue,Wed,Thu,Fri"),
//!     RosterRecord::new("Cara", "Mon,Wed"),
//!     RosterRecord::new("Dan", "Mon,Wed,Thu"),
//! ];
//!
//! let roster = RosterNormalizer::new().normalize(&records).unwrap();
//! let mut rng = SmallRng::seed_from_u64(42);
//! let schedule = BalancedScheduler::new().schedule(&roster, &mut rng);
//!
//! assert_eq!(schedule.headcount(Weekday::Mon), 4);
//! for warning in &schedule.warnings {
//!     eprintln!("{warning}");
//! }
//! ```

pub mod models;
pub mod roster;
pub mod scheduler;
