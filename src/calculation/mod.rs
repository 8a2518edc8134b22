//! Calculation logic for the staff cost engine.
//!
//! This module contains the per-employee cost rules (base pay, employer
//! National Insurance and employer pension), the combined per-employee
//! calculation, and aggregation of weekly hours by role category.

mod base_pay;
mod employee_pay;
mod employer_ni;
mod pension;
mod role_categories;

pub use base_pay::{BasePayResult, calculate_base_pay};
pub use employee_pay::calculate_employee_pay;
pub use employer_ni::{EmployerNiResult, calculate_employer_ni};
pub use pension::{PensionResult, calculate_pension};
pub use role_categories::{RoleCategoryTotals, accumulate_role_hours};
