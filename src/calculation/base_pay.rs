//! Base pay calculation.
//!
//! Sums weekly pay across the roles an employee holds on a date and
//! annualises it.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::PolicyRates;
use crate::models::{AuditStep, Employee, RoleSummary};

/// The result of a base pay calculation.
#[derive(Debug, Clone)]
pub struct BasePayResult {
    /// The roles that contributed, in insertion order.
    pub active_roles: Vec<RoleSummary>,
    /// Sum of weekly pay over the active roles.
    pub weekly_pay: Decimal,
    /// `weekly_pay * weeks_per_year`.
    pub annual_base_pay: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates an employee's weekly and annual base pay on `date`.
///
/// Only roles valid on `date` count. An employee with no valid roles has
/// zero base pay; that is not an error.
///
/// # Examples
///
/// ```
/// use staff_cost_engine::calculation::calculate_base_pay;
/// use staff_cost_engine::config::PolicyRates;
/// use staff_cost_engine::models::{Employee, Role};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let employee = Employee::new("Alice", true).with_role(
///     Role::new(date(2019, 1, 1), None, Decimal::from(40), Decimal::from(10), "Clerk").unwrap(),
/// );
///
/// let result = calculate_base_pay(&employee, date(2020, 1, 17), &PolicyRates::default(), 1);
/// assert_eq!(result.weekly_pay, Decimal::from(400));
/// assert_eq!(result.annual_base_pay, Decimal::from(20800));
/// ```
pub fn calculate_base_pay(
    employee: &Employee,
    date: NaiveDate,
    policy: &PolicyRates,
    step_number: u32,
) -> BasePayResult {
    let active = employee.active_roles_on(date);
    let weekly_pay: Decimal = active.iter().map(|role| role.weekly_pay()).sum();
    let annual_base_pay = weekly_pay * policy.weeks_per_year;
    let active_roles: Vec<RoleSummary> = active.iter().map(|role| role.summary()).collect();

    let reasoning = if active_roles.is_empty() {
        format!("No roles valid on {} - base pay is zero", date)
    } else {
        format!(
            "{} active role(s): £{} per week x {} weeks = £{}",
            active_roles.len(),
            weekly_pay.normalize(),
            policy.weeks_per_year.normalize(),
            annual_base_pay.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "base_pay".to_string(),
        rule_name: "Base Pay".to_string(),
        input: serde_json::json!({
            "date": date.to_string(),
            "roles_held": employee.roles.len(),
            "active_roles": active_roles
                .iter()
                .map(|role| role.to_string())
                .collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "weekly_pay": weekly_pay.normalize().to_string(),
            "annual_base_pay": annual_base_pay.normalize().to_string()
        }),
        reasoning,
    };

    BasePayResult {
        active_roles,
        weekly_pay,
        annual_base_pay,
        audit_step,
    }
}
