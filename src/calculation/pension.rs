//! Employer pension contribution calculation.

use rust_decimal::Decimal;

use crate::config::PolicyRates;
use crate::models::AuditStep;

/// The result of a pension contribution calculation.
#[derive(Debug, Clone)]
pub struct PensionResult {
    /// Annual employer pension contribution.
    pub annual_pension: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the employer pension contribution on annual base pay.
///
/// Employees outside the pension scheme attract no contribution regardless
/// of pay.
///
/// # Examples
///
/// ```
/// use staff_cost_engine::calculation::calculate_pension;
/// use staff_cost_engine::config::PolicyRates;
/// use rust_decimal::Decimal;
///
/// let result = calculate_pension(Decimal::from(20800), true, &PolicyRates::default(), 3);
/// assert_eq!(result.annual_pension.to_string(), "2991.0400");
/// ```
pub fn calculate_pension(
    annual_base_pay: Decimal,
    pensionable: bool,
    policy: &PolicyRates,
    step_number: u32,
) -> PensionResult {
    let (annual_pension, reasoning) = if pensionable {
        let annual_pension = annual_base_pay * policy.pension_rate;
        let reasoning = format!(
            "£{} x {} = £{}",
            annual_base_pay.normalize(),
            policy.pension_rate.normalize(),
            annual_pension.normalize()
        );
        (annual_pension, reasoning)
    } else {
        (
            Decimal::ZERO,
            "Employee is not in the pension scheme - no contribution".to_string(),
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "employer_pension".to_string(),
        rule_name: "Employer Pension Contribution".to_string(),
        input: serde_json::json!({
            "annual_base_pay": annual_base_pay.normalize().to_string(),
            "pensionable": pensionable,
            "rate": policy.pension_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "annual_pension": annual_pension.normalize().to_string()
        }),
        reasoning,
    };

    PensionResult {
        annual_pension,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// PN-001: pensionable employee
    #[test]
    fn test_pensionable_contribution() {
        let result = calculate_pension(dec("20800"), true, &PolicyRates::default(), 3);

        assert_eq!(result.annual_pension, dec("2991.04"));
        assert_eq!(result.audit_step.rule_id, "employer_pension");
        assert_eq!(
            result.audit_step.output["annual_pension"].as_str().unwrap(),
            "2991.04"
        );
        assert_eq!(result.audit_step.reasoning, "£20800 x 0.1438 = £2991.04");
    }

    /// PN-002: non-pensionable employee
    #[test]
    fn test_non_pensionable_contribution_is_zero() {
        let result = calculate_pension(dec("20800"), false, &PolicyRates::default(), 3);

        assert_eq!(result.annual_pension, Decimal::ZERO);
        assert!(result.audit_step.reasoning.contains("not in the pension scheme"));
        assert!(!result.audit_step.input["pensionable"].as_bool().unwrap());
    }

    #[test]
    fn test_zero_pay_zero_pension() {
        let result = calculate_pension(Decimal::ZERO, true, &PolicyRates::default(), 1);
        assert_eq!(result.annual_pension, Decimal::ZERO);
    }

    proptest! {
        #[test]
        fn prop_pension_follows_flag(pence in 0i64..10_000_000, pensionable: bool) {
            let base = Decimal::new(pence, 2);
            let result = calculate_pension(base, pensionable, &PolicyRates::default(), 1);

            if pensionable {
                prop_assert_eq!(result.annual_pension, base * dec("0.1438"));
            } else {
                prop_assert_eq!(result.annual_pension, Decimal::ZERO);
            }
        }
    }
}
