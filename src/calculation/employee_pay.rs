//! Per-employee annual cost calculation.
//!
//! Combines base pay, employer NI and employer pension into a single
//! [`PayBreakdown`] for one employee on one date.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::PolicyRates;
use crate::models::{Employee, PayBreakdown};

use super::{calculate_base_pay, calculate_employer_ni, calculate_pension};

/// Calculates the total annual cost of an employee on `date`.
///
/// 1. Weekly pay is summed over roles valid on `date` and annualised.
/// 2. Employer NI is charged on weekly pay above the threshold.
/// 3. Employer pension is charged on annual base pay if the employee is pensionable.
/// 4. Total cost is base pay plus NI plus pension.
///
/// The calculation is pure: the employee is not modified and the result
/// depends only on the employee, the date and the policy.
pub fn calculate_employee_pay(
    employee: &Employee,
    date: NaiveDate,
    policy: &PolicyRates,
) -> PayBreakdown {
    let base = calculate_base_pay(employee, date, policy, 1);
    let ni = calculate_employer_ni(base.weekly_pay, policy, 2);
    let pension = calculate_pension(base.annual_base_pay, employee.pensionable, policy, 3);

    let total_annual_cost = base.annual_base_pay + ni.annual_ni + pension.annual_pension;

    debug!(
        employee = %employee.name,
        %date,
        weekly_pay = %base.weekly_pay,
        total_annual_cost = %total_annual_cost,
        "Calculated employee pay"
    );

    PayBreakdown {
        employee: employee.name.clone(),
        pensionable: employee.pensionable,
        date,
        active_roles: base.active_roles,
        weekly_pay: base.weekly_pay,
        annual_base_pay: base.annual_base_pay,
        weekly_ni_liable: ni.weekly_liable,
        annual_ni: ni.annual_ni,
        annual_pension: pension.annual_pension,
        total_annual_cost,
        audit_steps: vec![base.audit_step, ni.audit_step, pension.audit_step],
    }
}
