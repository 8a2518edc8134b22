//! Employer National Insurance calculation.
//!
//! Employer NI is owed on the part of weekly pay above a fixed threshold.

use rust_decimal::Decimal;

use crate::config::PolicyRates;
use crate::models::AuditStep;

/// The result of an employer NI calculation.
#[derive(Debug, Clone)]
pub struct EmployerNiResult {
    /// Weekly pay above the threshold (never negative).
    pub weekly_liable: Decimal,
    /// `weekly_liable * ni_rate * weeks_per_year`.
    pub annual_ni: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates annual employer NI for a weekly pay figure.
///
/// # Examples
///
/// ```
/// use staff_cost_engine::calculation::calculate_employer_ni;
/// use staff_cost_engine::config::PolicyRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_employer_ni(Decimal::from(400), &PolicyRates::default(), 2);
/// assert_eq!(result.weekly_liable, Decimal::from(238));
/// assert_eq!(result.annual_ni, Decimal::from_str("1707.888").unwrap());
/// ```
pub fn calculate_employer_ni(
    weekly_pay: Decimal,
    policy: &PolicyRates,
    step_number: u32,
) -> EmployerNiResult {
    let weekly_liable = (weekly_pay - policy.ni_weekly_threshold).max(Decimal::ZERO);
    let annual_ni = weekly_liable * policy.ni_rate * policy.weeks_per_year;

    let reasoning = if weekly_liable.is_zero() {
        format!(
            "Weekly pay £{} is not above the £{} threshold - no employer NI",
            weekly_pay.normalize(),
            policy.ni_weekly_threshold.normalize()
        )
    } else {
        format!(
            "(£{} - £{}) x {} x {} weeks = £{}",
            weekly_pay.normalize(),
            policy.ni_weekly_threshold.normalize(),
            policy.ni_rate.normalize(),
            policy.weeks_per_year.normalize(),
            annual_ni.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "employer_ni".to_string(),
        rule_name: "Employer National Insurance".to_string(),
        input: serde_json::json!({
            "weekly_pay": weekly_pay.normalize().to_string(),
            "threshold": policy.ni_weekly_threshold.normalize().to_string(),
            "rate": policy.ni_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "weekly_liable": weekly_liable.normalize().to_string(),
            "annual_ni": annual_ni.normalize().to_string()
        }),
        reasoning,
    };

    EmployerNiResult {
        weekly_liable,
        annual_ni,
        audit_step,
    }
}
