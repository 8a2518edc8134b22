//! Scenario comparison.
//!
//! Compares an evaluated scenario against an evaluated base scenario built
//! from the same staff list, reporting the change in total cost and which
//! employees' active roles changed.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculation::RoleCategoryTotals;
use crate::error::{EngineError, EngineResult};
use crate::models::RoleSummary;

use super::Scenario;

/// How one employee's roles and cost differ between two scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeChange {
    /// The employee's name.
    pub name: String,
    /// Whether the employee is in the pension scheme.
    pub pensionable: bool,
    /// Active roles in the base scenario.
    pub base_roles: Vec<RoleSummary>,
    /// Annual cost in the base scenario.
    pub base_cost: Decimal,
    /// Active roles in the compared scenario.
    pub new_roles: Vec<RoleSummary>,
    /// Annual cost in the compared scenario.
    pub new_cost: Decimal,
    /// `new_cost - base_cost`.
    pub cost_delta: Decimal,
}

/// Identifies one side of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSide {
    /// The scenario label.
    pub name: String,
    /// The evaluation date.
    pub date: NaiveDate,
    /// Total annual cost.
    pub total_cost: Decimal,
    /// Weekly hours per role category.
    pub role_category_totals: RoleCategoryTotals,
}

impl ScenarioSide {
    fn of(scenario: &Scenario) -> Self {
        Self {
            name: scenario.name().to_string(),
            date: scenario.date(),
            total_cost: scenario.total_cost(),
            role_category_totals: scenario.role_category_totals().clone(),
        }
    }
}

/// The result of comparing a scenario with a base scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    /// The base scenario.
    pub base: ScenarioSide,
    /// The scenario being compared.
    pub scenario: ScenarioSide,
    /// `scenario.total_cost - base.total_cost`.
    pub total_cost_delta: Decimal,
    /// Employees whose active roles differ, in staff order.
    pub employee_changes: Vec<EmployeeChange>,
}

impl ScenarioComparison {
    /// Returns true if no employee's active roles changed.
    pub fn is_unchanged(&self) -> bool {
        self.employee_changes.is_empty()
    }
}

/// Compares `scenario` against `base_scenario`.
///
/// Both scenarios must have been evaluated, and their staff must line up
/// position by position: same number of employees, same name at each
/// position. An employee is reported as changed when the sequence of
/// active roles (category, hours and rate, in order) differs; employees
/// whose active roles are identical are omitted.
///
/// # Errors
///
/// - `ScenarioNotEvaluated` if either scenario has not been evaluated
/// - `ScenarioAlignment` if the staff lists differ in length or order
///
/// # Example
///
/// ```
/// use staff_cost_engine::config::PolicyRates;
/// use staff_cost_engine::models::{Employee, Role};
/// use staff_cost_engine::scenario::{Scenario, compare_scenarios};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let staff = vec![Employee::new("Alice", true).with_role(
///     Role::new(date(2019, 1, 1), Some(date(2020, 2, 1)), Decimal::from(40), Decimal::from(10), "Clerk").unwrap(),
/// )];
///
/// let mut base = Scenario::new("January", &staff, date(2020, 1, 17));
/// let mut april = Scenario::new("April", &staff, date(2020, 4, 2));
/// base.evaluate(&PolicyRates::default()).unwrap();
/// april.evaluate(&PolicyRates::default()).unwrap();
///
/// let comparison = compare_scenarios(&april, &base).unwrap();
/// assert_eq!(comparison.employee_changes.len(), 1);
/// assert_eq!(comparison.total_cost_delta, -base.total_cost());
/// ```
pub fn compare_scenarios(
    scenario: &Scenario,
    base_scenario: &Scenario,
) -> EngineResult<ScenarioComparison> {
    scenario.ensure_evaluated()?;
    base_scenario.ensure_evaluated()?;
    check_alignment(scenario, base_scenario)?;

    let employee_changes: Vec<EmployeeChange> = scenario
        .employee_costs()
        .iter()
        .zip(base_scenario.employee_costs())
        .filter(|(new, base)| new.active_roles != base.active_roles)
        .map(|(new, base)| EmployeeChange {
            name: new.employee.clone(),
            pensionable: new.pensionable,
            base_roles: base.active_roles.clone(),
            base_cost: base.total_annual_cost,
            new_roles: new.active_roles.clone(),
            new_cost: new.total_annual_cost,
            cost_delta: new.total_annual_cost - base.total_annual_cost,
        })
        .collect();

    let total_cost_delta = scenario.total_cost() - base_scenario.total_cost();

    info!(
        scenario = %scenario.name(),
        base = %base_scenario.name(),
        total_cost_delta = %total_cost_delta.round_dp(2),
        changed_employees = employee_changes.len(),
        "Scenarios compared"
    );

    Ok(ScenarioComparison {
        base: ScenarioSide::of(base_scenario),
        scenario: ScenarioSide::of(scenario),
        total_cost_delta,
        employee_changes,
    })
}

fn check_alignment(scenario: &Scenario, base_scenario: &Scenario) -> EngineResult<()> {
    let staff = scenario.staff();
    let base_staff = base_scenario.staff();

    if staff.len() != base_staff.len() {
        warn!(
            scenario = %scenario.name(),
            base = %base_scenario.name(),
            "Staff counts differ"
        );
        return Err(EngineError::ScenarioAlignment {
            message: format!(
                "'{}' has {} employees but base '{}' has {}",
                scenario.name(),
                staff.len(),
                base_scenario.name(),
                base_staff.len()
            ),
        });
    }

    if let Some((position, (employee, base_employee))) = staff
        .iter()
        .zip(base_staff)
        .enumerate()
        .find(|(_, (employee, base_employee))| employee.name != base_employee.name)
    {
        warn!(
            scenario = %scenario.name(),
            base = %base_scenario.name(),
            position,
            "Staff order differs"
        );
        return Err(EngineError::ScenarioAlignment {
            message: format!(
                "employee {} is '{}' but base has '{}'",
                position + 1,
                employee.name,
                base_employee.name
            ),
        });
    }

    Ok(())
}

impl Scenario {
    /// Compares this scenario against `base_scenario`.
    ///
    /// See [`compare_scenarios`].
    pub fn compare_with(&self, base_scenario: &Scenario) -> EngineResult<ScenarioComparison> {
        compare_scenarios(self, base_scenario)
    }
}
