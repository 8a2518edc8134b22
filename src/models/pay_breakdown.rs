//! Pay calculation result models.
//!
//! This module contains the [`PayBreakdown`] type returned for each employee
//! and date, together with the [`AuditStep`] records explaining each figure.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::RoleSummary;

/// A single step in the audit trail recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The annual cost of one employee on one date.
///
/// All amounts are exact; round them only for display.
///
/// # Example
///
/// ```
/// use staff_cost_engine::config::PolicyRates;
/// use staff_cost_engine::models::{Employee, Role};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let alice = Employee::new("Alice", true).with_role(
///     Role::new(date(2019, 1, 1), None, Decimal::from(40), Decimal::from(10), "Clerk").unwrap(),
/// );
///
/// let pay = alice.compute_pay(date(2020, 1, 17), &PolicyRates::default());
/// assert_eq!(pay.annual_base_pay, Decimal::from(20800));
/// assert_eq!(pay.total_annual_cost.round_dp(2).to_string(), "25498.93");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// The employee's name.
    pub employee: String,
    /// Whether pension contributions were applied.
    pub pensionable: bool,
    /// The date the figures were computed for.
    pub date: NaiveDate,
    /// The roles valid on `date`, in insertion order.
    pub active_roles: Vec<RoleSummary>,
    /// Sum of weekly pay over the active roles.
    pub weekly_pay: Decimal,
    /// Weekly pay annualised.
    pub annual_base_pay: Decimal,
    /// Weekly pay above the NI threshold.
    pub weekly_ni_liable: Decimal,
    /// Annual employer National Insurance.
    pub annual_ni: Decimal,
    /// Annual employer pension contribution.
    pub annual_pension: Decimal,
    /// Base pay plus NI plus pension.
    pub total_annual_cost: Decimal,
    /// How each figure was derived.
    pub audit_steps: Vec<AuditStep>,
}

impl PayBreakdown {
    /// Returns true if no role was valid on the evaluation date.
    pub fn is_idle(&self) -> bool {
        self.active_roles.is_empty()
    }
}
