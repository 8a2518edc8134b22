//! Plain-text rendering of scenarios and comparisons.
//!
//! Money is shown in whole pounds; the underlying figures stay exact.

use std::fmt::Write;

use rust_decimal::Decimal;

use crate::calculation::RoleCategoryTotals;
use crate::error::EngineResult;
use crate::models::RoleSummary;
use crate::scenario::{Scenario, ScenarioComparison};

const RULE: &str = "----------------------------";
const DATE_FORMAT: &str = "%d %B %Y";

fn pounds(amount: Decimal) -> String {
    amount.round_dp(0).to_string()
}

fn render_roles(out: &mut String, roles: &[RoleSummary]) {
    for role in roles {
        let _ = writeln!(out, "{}", role);
    }
}

fn render_category_hours(totals: &RoleCategoryTotals) -> String {
    let entries: Vec<String> = totals
        .iter()
        .map(|(category, hours)| format!("{}: {}", category, hours.normalize()))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

/// Renders an evaluated scenario: each employee's active roles and annual
/// cost, the total, and hours per role category.
pub fn render_scenario(scenario: &Scenario) -> EngineResult<String> {
    scenario.ensure_evaluated()?;

    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Scenario: {}", scenario.name());
    let _ = writeln!(out, "Date: {}", scenario.date().format(DATE_FORMAT));
    let _ = writeln!(out, "{}", RULE);

    for (employee, pay) in scenario.staff().iter().zip(scenario.employee_costs()) {
        let _ = writeln!(out, "{}", employee);
        render_roles(&mut out, &pay.active_roles);
        let _ = writeln!(out, "£{} / year", pounds(pay.total_annual_cost));
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "Total pay: £{}", pounds(scenario.total_cost()));
    let _ = writeln!(
        out,
        "Hours per job role: {}",
        render_category_hours(scenario.role_category_totals())
    );

    Ok(out)
}

/// Renders a comparison: both totals, the difference, a block per changed
/// employee, and hours per role category on each side.
pub fn render_comparison(comparison: &ScenarioComparison) -> String {
    let base = &comparison.base;
    let scenario = &comparison.scenario;

    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(
        out,
        "Comparing this scenario {} ({}) with base scenario {} ({}):",
        scenario.name,
        scenario.date.format(DATE_FORMAT),
        base.name,
        base.date.format(DATE_FORMAT)
    );
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Total annual cost in base scenario: {}", pounds(base.total_cost));
    let _ = writeln!(out, "Total annual cost in this scenario: {}", pounds(scenario.total_cost));
    let _ = writeln!(out, "Difference: {}", pounds(comparison.total_cost_delta));
    let _ = writeln!(out, "This difference is made up as follows:");
    let _ = writeln!(out);

    for change in &comparison.employee_changes {
        let _ = write!(out, "{}", change.name);
        if !change.pensionable {
            let _ = write!(out, " (Not in pension scheme)");
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "In base scenario:");
        render_roles(&mut out, &change.base_roles);
        let _ = writeln!(out, "Total annual cost: {}", pounds(change.base_cost));
        let _ = writeln!(out);

        let _ = writeln!(out, "In this scenario:");
        render_roles(&mut out, &change.new_roles);
        let _ = writeln!(out, "Total annual cost: {}", pounds(change.new_cost));
        let _ = writeln!(out);

        let _ = writeln!(out, "Increase in total annual cost: {}", pounds(change.cost_delta));
        let _ = writeln!(out, "---");
    }

    let _ = writeln!(
        out,
        "Hours per job role in base scenario: {}",
        render_category_hours(&base.role_category_totals)
    );
    let _ = writeln!(
        out,
        "Hours per job role in this scenario: {}",
        render_category_hours(&scenario.role_category_totals)
    );

    out
}

/// Renders the base scenario, the compared scenario, then the comparison
/// between them.
pub fn render_comparison_run(
    scenario: &Scenario,
    base_scenario: &Scenario,
    comparison: &ScenarioComparison,
) -> EngineResult<String> {
    let mut out = render_scenario(base_scenario)?;
    let _ = writeln!(out);
    out.push_str(&render_scenario(scenario)?);
    let _ = writeln!(out);
    out.push_str(&render_comparison(comparison));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicyRates;
    use crate::error::EngineError;
    use crate::models::{Employee, Role};
    use crate::scenario::compare_scenarios;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_staff() -> Vec<Employee> {
        vec![
            Employee::new("Alice", true)
                .with_role(
                    Role::new(date(2019, 1, 1), Some(date(2020, 2, 1)), dec("40"), dec("10"), "Clerk")
                        .unwrap(),
                ),
            Employee::new("Bob", false)
                .with_role(Role::new(date(2019, 1, 1), None, dec("20"), dec("9"), "Cook").unwrap()),
        ]
    }

    fn evaluated(name: &str, on: NaiveDate) -> Scenario {
        let mut scenario = Scenario::new(name, &create_staff(), on);
        scenario.evaluate(&PolicyRates::default()).unwrap();
        scenario
    }

    #[test]
    fn test_render_scenario() {
        let text = render_scenario(&evaluated("Current", date(2020, 1, 17))).unwrap();

        assert!(text.contains("Scenario: Current"));
        assert!(text.contains("Date: 17 January 2020"));
        assert!(text.contains("Clerk: 40 hours/week @ £10 / hour"));
        assert!(text.contains("£25499 / year"));
        assert!(text.contains("Bob (Not in pension scheme)"));
        assert!(text.contains("Total pay: £34988"));
        assert!(text.contains("Hours per job role: {Clerk: 40, Cook: 20}"));
    }

    #[test]
    fn test_render_unevaluated_scenario_fails() {
        let scenario = Scenario::new("Draft", &create_staff(), date(2020, 1, 17));
        assert!(matches!(
            render_scenario(&scenario),
            Err(EngineError::ScenarioNotEvaluated { .. })
        ));
    }

    #[test]
    fn test_render_comparison() {
        let base = evaluated("Current", date(2020, 1, 17));
        let april = evaluated("April", date(2020, 4, 2));
        let comparison = compare_scenarios(&april, &base).unwrap();

        let text = render_comparison(&comparison);

        assert!(text.contains(
            "Comparing this scenario April (02 April 2020) with base scenario Current (17 January 2020):"
        ));
        assert!(text.contains("Total annual cost in base scenario: 34988"));
        assert!(text.contains("Total annual cost in this scenario: 9489"));
        assert!(text.contains("Difference: -25499"));
        assert!(text.contains("Increase in total annual cost: -25499"));
        assert!(text.contains("Hours per job role in this scenario: {Clerk: 0, Cook: 20}"));
        assert!(!text.contains("Bob"));
    }

    #[test]
    fn test_render_comparison_run_shows_both_scenarios_first() {
        let base = evaluated("Current", date(2020, 1, 17));
        let april = evaluated("April", date(2020, 4, 2));
        let comparison = april.compare_with(&base).unwrap();

        let text = render_comparison_run(&april, &base, &comparison).unwrap();

        let base_at = text.find("Scenario: Current").unwrap();
        let april_at = text.find("Scenario: April").unwrap();
        let comparison_at = text.find("Comparing this scenario").unwrap();
        assert!(base_at < april_at && april_at < comparison_at);
        assert!(text.contains("Total pay: £34988"));
        assert!(text.contains("Total pay: £9489"));
    }
}
