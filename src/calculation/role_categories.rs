//! Role category hour aggregation.
//!
//! A [`RoleCategoryTotals`] holds one entry per role category seen across a
//! staff list. Categories are seeded up front at zero hours, regardless of
//! whether any role in them is valid on the evaluation date, and hours are
//! then added for the roles that are.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

/// Weekly hours per role category.
///
/// # Example
///
/// ```
/// use staff_cost_engine::calculation::RoleCategoryTotals;
/// use staff_cost_engine::models::{Employee, Role};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
/// let staff = vec![Employee::new("Alice", true).with_role(
///     Role::new(date(2019, 1, 1), Some(date(2020, 2, 1)), Decimal::from(40), Decimal::from(10), "Clerk").unwrap(),
/// )];
///
/// let mut totals = RoleCategoryTotals::seed(&staff);
/// for employee in &staff {
///     employee.accumulate_role_hours(date(2020, 4, 2), &mut totals).unwrap();
/// }
/// assert_eq!(totals.get("Clerk"), Some(Decimal::ZERO));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleCategoryTotals(BTreeMap<String, Decimal>);

impl RoleCategoryTotals {
    /// Seeds a zero entry for every distinct category held by any role in
    /// `staff`, whatever its validity window.
    pub fn seed(staff: &[Employee]) -> Self {
        let categories = staff
            .iter()
            .flat_map(|employee| employee.roles.iter())
            .map(|role| (role.category().to_string(), Decimal::ZERO))
            .collect();
        Self(categories)
    }

    /// Adds `hours` to a seeded category.
    ///
    /// # Errors
    ///
    /// Returns `UnseededCategory` if `category` was not seeded.
    pub fn add_hours(&mut self, category: &str, hours: Decimal) -> EngineResult<()> {
        let total = self
            .0
            .get_mut(category)
            .ok_or_else(|| EngineError::UnseededCategory {
                category: category.to_string(),
            })?;
        *total += hours;
        Ok(())
    }

    /// Resets every category to zero hours, keeping the categories.
    pub fn reset(&mut self) {
        self.0.values_mut().for_each(|hours| *hours = Decimal::ZERO);
    }

    /// Hours recorded for `category`, if it was seeded.
    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.0.get(category).copied()
    }

    /// Iterates categories in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(category, hours)| (category.as_str(), *hours))
    }

    /// Number of seeded categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no categories were seeded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of hours across all categories.
    pub fn total_hours(&self) -> Decimal {
        self.0.values().copied().sum()
    }
}

/// Adds the weekly hours of each of `employee`'s roles valid on `date` to
/// its category in `totals`.
///
/// # Errors
///
/// Returns `UnseededCategory` if a valid role's category was never seeded;
/// seed with [`RoleCategoryTotals::seed`] over the same staff first.
pub fn accumulate_role_hours(
    employee: &Employee,
    date: NaiveDate,
    totals: &mut RoleCategoryTotals,
) -> EngineResult<()> {
    for role in employee.active_roles_on(date) {
        totals.add_hours(role.category(), role.hours_per_week())?;
    }
    Ok(())
}
