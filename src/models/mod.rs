//! Duty-scheduling domain models.
//!
//! Core data types for weekday duty assignment: the five workdays, raw and
//! normalized personnel records, staffing requirement configuration, and
//! the schedule results the engines produce.
//!
//! All types are serde-serializable so the boundary layer can export
//! results in any tabular format.

mod person;
mod quota;
mod schedule;
mod weekday;

pub use person::{Person, RosterRecord};
pub use quota::{DepartmentQuota, DepartmentQuotas, StaffingBounds};
pub use schedule::{
    DayStaffing, DepartmentAssignment, DepartmentSchedule, Warning, WarningKind, WeekSchedule,
};
pub use weekday::Weekday;
