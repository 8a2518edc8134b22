//! Request types for the staff cost API.
//!
//! This module defines the JSON request bodies for the `/scenarios` and
//! `/compare` endpoints. Staff are given as [`Employee`] values, whose roles
//! are validated as they are deserialized.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Employee;

/// Request body for the `/scenarios` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRequest {
    /// The scenario label.
    #[serde(default)]
    pub name: String,
    /// The evaluation date.
    pub date: NaiveDate,
    /// The staff to cost.
    pub staff: Vec<Employee>,
}

/// One side of a comparison request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSpec {
    /// The scenario label.
    #[serde(default)]
    pub name: String,
    /// The evaluation date.
    pub date: NaiveDate,
}

/// Request body for the `/compare` endpoint.
///
/// Both sides are evaluated from the same staff list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRequest {
    /// The staff to cost.
    pub staff: Vec<Employee>,
    /// The base scenario.
    pub base: ScenarioSpec,
    /// The scenario compared against the base.
    pub scenario: ScenarioSpec,
}
