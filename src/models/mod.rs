//! Core data models for the staff cost engine.
//!
//! This module contains the domain models: roles, employees, and the
//! per-employee pay breakdown produced by a calculation.

mod employee;
mod pay_breakdown;
mod role;

pub use employee::Employee;
pub use pay_breakdown::{AuditStep, PayBreakdown};
pub use role::{
    MAX_HOURLY_RATE, MAX_HOURS_PER_WEEK, Role, RoleRecord, RoleSummary, open_start_date,
};
