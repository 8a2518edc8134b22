//! Scenario evaluation.
//!
//! A [`Scenario`] is a staff list costed as of one date. It owns its own
//! copy of the staff, and keeps the figures it computes (per-employee pay,
//! category hours, total cost) alongside rather than inside the employees,
//! so any number of scenarios can be built from the same staff list.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculation::RoleCategoryTotals;
use crate::config::PolicyRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, PayBreakdown};

/// A staff list evaluated as of one date.
///
/// # Example
///
/// ```
/// use staff_cost_engine::config::PolicyRates;
/// use staff_cost_engine::models::{Employee, Role};
/// use staff_cost_engine::scenario::Scenario;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let staff = vec![Employee::new("Alice", true).with_role(
///     Role::new(date(2019, 1, 1), None, Decimal::from(40), Decimal::from(10), "Clerk").unwrap(),
/// )];
///
/// let mut scenario = Scenario::new("January", &staff, date(2020, 1, 17));
/// scenario.evaluate(&PolicyRates::default()).unwrap();
///
/// assert_eq!(scenario.total_cost().round_dp(2).to_string(), "25498.93");
/// assert_eq!(scenario.role_category_totals().get("Clerk"), Some(Decimal::from(40)));
/// ```
#[derive(Debug, Clone)]
pub struct Scenario {
    name: String,
    date: NaiveDate,
    staff: Vec<Employee>,
    role_category_totals: RoleCategoryTotals,
    employee_costs: Vec<PayBreakdown>,
    total_cost: Decimal,
    evaluated: bool,
}

impl Scenario {
    /// Creates a scenario over its own copy of `staff`.
    ///
    /// Every role category held by anyone in `staff` is seeded at zero
    /// hours, including categories with no role valid on `date`.
    pub fn new(name: impl Into<String>, staff: &[Employee], date: NaiveDate) -> Self {
        let staff = staff.to_vec();
        let role_category_totals = RoleCategoryTotals::seed(&staff);

        Self {
            name: name.into(),
            date,
            staff,
            role_category_totals,
            employee_costs: Vec::new(),
            total_cost: Decimal::ZERO,
            evaluated: false,
        }
    }

    /// Costs every employee on the scenario date and aggregates the results.
    ///
    /// Calling this again recomputes everything from scratch, e.g. with a
    /// different policy.
    ///
    /// # Errors
    ///
    /// - `InvalidPolicy` if `policy` fails [`PolicyRates::validate`]
    pub fn evaluate(&mut self, policy: &PolicyRates) -> EngineResult<()> {
        policy.validate()?;
        self.role_category_totals.reset();
        self.employee_costs.clear();
        self.total_cost = Decimal::ZERO;

        for employee in &self.staff {
            let pay = employee.compute_pay(self.date, policy);
            self.total_cost += pay.total_annual_cost;
            employee.accumulate_role_hours(self.date, &mut self.role_category_totals)?;
            self.employee_costs.push(pay);
        }

        self.evaluated = true;

        info!(
            scenario = %self.name,
            date = %self.date,
            employees = self.staff.len(),
            total_cost = %self.total_cost.round_dp(2),
            "Scenario evaluated"
        );

        Ok(())
    }

    /// The scenario label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The evaluation date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The scenario's own copy of the staff.
    pub fn staff(&self) -> &[Employee] {
        &self.staff
    }

    /// Returns true once [`Scenario::evaluate`] has run.
    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    /// Total annual cost of all staff. Zero until evaluated.
    pub fn total_cost(&self) -> Decimal {
        self.total_cost
    }

    /// Weekly hours per role category. All zero until evaluated.
    pub fn role_category_totals(&self) -> &RoleCategoryTotals {
        &self.role_category_totals
    }

    /// Per-employee pay, positionally aligned with [`Scenario::staff`].
    /// Empty until evaluated.
    pub fn employee_costs(&self) -> &[PayBreakdown] {
        &self.employee_costs
    }

    /// Fails with `ScenarioNotEvaluated` unless [`Scenario::evaluate`] has run.
    pub fn ensure_evaluated(&self) -> EngineResult<()> {
        if self.evaluated {
            Ok(())
        } else {
            Err(EngineError::ScenarioNotEvaluated {
                scenario: self.name.clone(),
            })
        }
    }

    /// A serializable snapshot of the evaluated figures.
    pub fn summary(&self) -> EngineResult<ScenarioSummary> {
        self.ensure_evaluated()?;

        Ok(ScenarioSummary {
            name: self.name.clone(),
            date: self.date,
            total_cost: self.total_cost,
            employees: self.employee_costs.clone(),
            role_category_totals: self.role_category_totals.clone(),
        })
    }
}

/// The reportable figures of an evaluated scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    /// The scenario label.
    pub name: String,
    /// The evaluation date.
    pub date: NaiveDate,
    /// Total annual cost of all staff.
    pub total_cost: Decimal,
    /// Per-employee pay, in staff order.
    pub employees: Vec<PayBreakdown>,
    /// Weekly hours per role category.
    pub role_category_totals: RoleCategoryTotals,
}
