//! Policy rate types for employer cost calculation.
//!
//! The statutory figures used by the calculation live here as named
//! constants, and are carried into every calculation through
//! [`PolicyRates`] so that a different rate table can be supplied without
//! touching the calculation logic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Weekly pay above which employer National Insurance is owed (£162).
pub const NI_WEEKLY_THRESHOLD: Decimal = Decimal::from_parts(162, 0, 0, false, 0);

/// Employer National Insurance rate on pay above the threshold (13.8%).
pub const NI_RATE: Decimal = Decimal::from_parts(138, 0, 0, false, 3);

/// Employer pension contribution rate on base pay (14.38%).
pub const PENSION_RATE: Decimal = Decimal::from_parts(1438, 0, 0, false, 4);

/// Number of weeks used to annualise weekly figures.
pub const WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);

/// Largest accepted `weeks_per_year`.
pub const MAX_WEEKS_PER_YEAR: Decimal = Decimal::from_parts(53, 0, 0, false, 0);

/// The policy parameters applied when costing staff.
///
/// Fields missing from a policy file fall back to the defaults above.
///
/// # Example
///
/// ```
/// use staff_cost_engine::config::{PolicyRates, NI_RATE};
///
/// let policy = PolicyRates::default();
/// assert_eq!(policy.ni_rate, NI_RATE);
/// assert!(policy.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyRates {
    /// Weekly pay threshold for employer NI.
    pub ni_weekly_threshold: Decimal,
    /// Employer NI rate applied above the threshold.
    pub ni_rate: Decimal,
    /// Employer pension contribution rate.
    pub pension_rate: Decimal,
    /// Weeks per year used for annualisation.
    pub weeks_per_year: Decimal,
}

impl Default for PolicyRates {
    fn default() -> Self {
        Self {
            ni_weekly_threshold: NI_WEEKLY_THRESHOLD,
            ni_rate: NI_RATE,
            pension_rate: PENSION_RATE,
            weeks_per_year: WEEKS_PER_YEAR,
        }
    }
}

impl PolicyRates {
    /// Checks that every figure is non-negative, the NI and pension rates are
    /// at most 1, and `weeks_per_year` lies in `1..=53`.
    pub fn validate(&self) -> EngineResult<()> {
        let fields = [
            ("ni_weekly_threshold", self.ni_weekly_threshold),
            ("ni_rate", self.ni_rate),
            ("pension_rate", self.pension_rate),
            ("weeks_per_year", self.weeks_per_year),
        ];

        if let Some((name, value)) = fields.iter().find(|(_, v)| *v < Decimal::ZERO) {
            return Err(EngineError::InvalidPolicy {
                message: format!("{} must not be negative (got {})", name, value),
            });
        }

        if self.weeks_per_year.is_zero() {
            return Err(EngineError::InvalidPolicy {
                message: "weeks_per_year must be greater than zero".to_string(),
            });
        }

        if self.weeks_per_year > MAX_WEEKS_PER_YEAR {
            return Err(EngineError::InvalidPolicy {
                message: format!(
                    "weeks_per_year must not exceed {} (got {})",
                    MAX_WEEKS_PER_YEAR, self.weeks_per_year
                ),
            });
        }

        for (name, value) in [("ni_rate", self.ni_rate), ("pension_rate", self.pension_rate)] {
            if value > Decimal::ONE {
                return Err(EngineError::InvalidPolicy {
                    message: format!("{} must not exceed 1 (got {})", name, value),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_constants_have_expected_values() {
        assert_eq!(NI_WEEKLY_THRESHOLD, dec("162"));
        assert_eq!(NI_RATE, dec("0.138"));
        assert_eq!(PENSION_RATE, dec("0.1438"));
        assert_eq!(WEEKS_PER_YEAR, dec("52"));
    }

    #[test]
    fn test_default_policy_uses_constants() {
        let policy = PolicyRates::default();
        assert_eq!(policy.ni_weekly_threshold, NI_WEEKLY_THRESHOLD);
        assert_eq!(policy.ni_rate, NI_RATE);
        assert_eq!(policy.pension_rate, PENSION_RATE);
        assert_eq!(policy.weeks_per_year, WEEKS_PER_YEAR);
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let policy = PolicyRates {
            pension_rate: dec("-0.01"),
            ..PolicyRates::default()
        };

        match policy.validate() {
            Err(EngineError::InvalidPolicy { message }) => {
                assert!(message.contains("pension_rate"));
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_weeks_is_rejected() {
        let policy = PolicyRates {
            weeks_per_year: Decimal::ZERO,
            ..PolicyRates::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_rate_above_one_is_rejected() {
        let policy = PolicyRates {
            ni_rate: dec("1.01"),
            ..PolicyRates::default()
        };

        match policy.validate() {
            Err(EngineError::InvalidPolicy { message }) => {
                assert!(message.contains("ni_rate"));
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_oversized_weeks_per_year_is_rejected() {
        let policy = PolicyRates {
            weeks_per_year: Decimal::MAX,
            ..PolicyRates::default()
        };
        assert!(matches!(policy.validate(), Err(EngineError::InvalidPolicy { .. })));
    }

    #[test]
    fn test_zero_rates_are_allowed() {
        let policy = PolicyRates {
            ni_rate: Decimal::ZERO,
            pension_rate: Decimal::ZERO,
            ..PolicyRates::default()
        };
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let policy: PolicyRates = serde_yaml::from_str("pension_rate: \"0.2\"\n").unwrap();
        assert_eq!(policy.pension_rate, dec("0.2"));
        assert_eq!(policy.ni_rate, NI_RATE);
    }
}
