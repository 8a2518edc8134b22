//! Dated what-if scenarios.
//!
//! A [`Scenario`] costs a staff list on one date; [`compare_scenarios`]
//! contrasts two scenarios built from the same staff, typically the same
//! list on two dates either side of a pay change.

mod comparison;
mod snapshot;

pub use comparison::{EmployeeChange, ScenarioComparison, ScenarioSide, compare_scenarios};
pub use snapshot::{Scenario, ScenarioSummary};
