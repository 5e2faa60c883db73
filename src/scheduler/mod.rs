//! Assignment engines and workload metrics.
//!
//! Two engines share the same shape of computation — index the roster,
//! order days by scarcity, select per day — but resolve shortage and
//! fairness differently:
//!
//! - [`BalancedScheduler`]: people may serve several days; fairness comes
//!   from preferring the least-loaded candidates. A day short of the
//!   minimum is skipped entirely.
//! - [`DepartmentScheduler`]: per-department quotas with a hard no-reuse
//!   rule across the week. A department short of its minimum is staffed
//!   with everyone still available.
//!
//! The shortage policies differ on purpose: both match long-observed
//! behavior, and unifying them would silently change one engine's output.
//!
//! Both engines draw randomness only from a caller-supplied [`rand::Rng`],
//! so a seeded generator reproduces a run exactly.

mod availability;
mod balanced;
mod department;
mod kpi;

pub use availability::{AvailabilityIndex, DepartmentIndex};
pub use balanced::BalancedScheduler;
pub use department::DepartmentScheduler;
pub use kpi::WorkloadKpi;
