//! Employee model.
//!
//! This module defines the [`Employee`] struct: a named person holding zero
//! or more [`Role`]s, with a flag saying whether they are in the employer's
//! pension scheme.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{RoleCategoryTotals, accumulate_role_hours, calculate_employee_pay};
use crate::config::PolicyRates;
use crate::error::EngineResult;

use super::{PayBreakdown, Role, RoleSummary};

fn default_pensionable() -> bool {
    true
}

/// Represents an employee whose pay is being costed.
///
/// Employees are plain values; calculations never modify them, so the same
/// staff list can be evaluated on any number of dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's name, used to line employees up across scenarios.
    pub name: String,
    /// Whether the employer pays pension contributions for this employee.
    #[serde(default = "default_pensionable")]
    pub pensionable: bool,
    /// The employee's roles, in insertion order.
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl Employee {
    /// Creates an employee with no roles.
    pub fn new(name: impl Into<String>, pensionable: bool) -> Self {
        Self {
            name: name.into(),
            pensionable,
            roles: Vec::new(),
        }
    }

    /// Adds a role, returning the employee (builder style).
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.push(role);
        self
    }

    /// Appends a role.
    pub fn add_role(&mut self, role: Role) {
        self.roles.push(role);
    }

    /// Returns the roles valid on `date`, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use staff_cost_engine::models::{Employee, Role};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    /// let employee = Employee::new("Alice", true)
    ///     .with_role(Role::new(date(2019, 1, 1), Some(date(2020, 2, 1)), Decimal::from(40), Decimal::from(10), "Clerk").unwrap())
    ///     .with_role(Role::new(date(2020, 2, 1), None, Decimal::from(40), Decimal::from(12), "Manager").unwrap());
    ///
    /// let active = employee.active_roles_on(date(2020, 4, 2));
    /// assert_eq!(active.len(), 1);
    /// assert_eq!(active[0].category(), "Manager");
    /// ```
    pub fn active_roles_on(&self, date: NaiveDate) -> Vec<&Role> {
        self.roles.iter().filter(|role| role.is_valid_on(date)).collect()
    }

    /// Summaries of the roles valid on `date`, in insertion order.
    pub fn active_role_summaries_on(&self, date: NaiveDate) -> Vec<RoleSummary> {
        self.roles
            .iter()
            .filter(|role| role.is_valid_on(date))
            .map(Role::summary)
            .collect()
    }

    /// Computes this employee's annual cost to the employer on `date`.
    ///
    /// See [`calculate_employee_pay`] for the rules applied.
    pub fn compute_pay(&self, date: NaiveDate, policy: &PolicyRates) -> PayBreakdown {
        calculate_employee_pay(self, date, policy)
    }

    /// Adds the weekly hours of every role valid on `date` to `totals`.
    ///
    /// See [`accumulate_role_hours`].
    pub fn accumulate_role_hours(
        &self,
        date: NaiveDate,
        totals: &mut RoleCategoryTotals,
    ) -> EngineResult<()> {
        accumulate_role_hours(self, date, totals)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.pensionable {
            write!(f, " (Not in pension scheme)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_employee() -> Employee {
        Employee::new("Alice", true)
            .with_role(
                Role::new(date(2019, 1, 1), Some(date(2020, 2, 1)), dec("40"), dec("10"), "Clerk")
                    .unwrap(),
            )
            .with_role(Role::new(date(2019, 6, 1), None, dec("5"), dec("15"), "Trainer").unwrap())
    }

    #[test]
    fn test_deserialize_employee_defaults_pensionable() {
        let json = r#"{
            "name": "Bob",
            "roles": [
                { "start_date": "2019-01-01", "hours_per_week": "20", "hourly_rate": "9.50", "category": "Cook" }
            ]
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.name, "Bob");
        assert!(employee.pensionable);
        assert_eq!(employee.roles.len(), 1);
        assert_eq!(employee.roles[0].category(), "Cook");
    }

    #[test]
    fn test_deserialize_employee_without_roles() {
        let employee: Employee =
            serde_json::from_str(r#"{ "name": "Carol", "pensionable": false }"#).unwrap();
        assert!(!employee.pensionable);
        assert!(employee.roles.is_empty());
    }

    #[test]
    fn test_serialize_employee() {
        let employee = create_test_employee();
        let json = serde_json::to_string(&employee).unwrap();

        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }

    #[test]
    fn test_active_roles_preserve_insertion_order() {
        let employee = create_test_employee();
        let active = employee.active_roles_on(date(2020, 1, 17));

        let categories: Vec<&str> = active.iter().map(|r| r.category()).collect();
        assert_eq!(categories, vec!["Clerk", "Trainer"]);
    }

    #[test]
    fn test_active_roles_exclude_stopped_roles() {
        let employee = create_test_employee();
        let summaries = employee.active_role_summaries_on(date(2020, 4, 2));

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].category, "Trainer");
    }

    #[test]
    fn test_display_marks_non_pensionable() {
        let employee = Employee::new("Dave", false);
        assert_eq!(employee.to_string(), "Dave (Not in pension scheme)");
        assert_eq!(Employee::new("Erin", true).to_string(), "Erin");
    }

    #[test]
    fn test_compute_pay_does_not_modify_employee() {
        let employee = create_test_employee();
        let before = employee.clone();

        let _ = employee.compute_pay(date(2020, 1, 17), &PolicyRates::default());
        let _ = employee.compute_pay(date(2020, 4, 2), &PolicyRates::default());

        assert_eq!(employee, before);
    }
}
