//! HTTP request handlers for the staff cost API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::scenario::{Scenario, ScenarioComparison, ScenarioSummary};

use super::request::{ComparisonRequest, ScenarioRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/scenarios", post(scenario_handler))
        .route("/compare", post(compare_handler))
        .with_state(state)
}

/// Handler for POST /scenarios.
///
/// Evaluates the staff list as of the requested date and returns the
/// scenario summary.
async fn scenario_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScenarioRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing scenario request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match evaluate_scenario(&state, request) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                scenario = %summary.name,
                employees = summary.employees.len(),
                total_cost = %summary.total_cost.round_dp(2),
                duration_us = start_time.elapsed().as_micros(),
                "Scenario evaluated"
            );
            json_response(summary)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Scenario evaluation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /compare.
///
/// Evaluates the staff list on the base and scenario dates and returns the
/// per-employee differences.
async fn compare_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComparisonRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing comparison request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match compare(&state, request) {
        Ok(comparison) => {
            info!(
                correlation_id = %correlation_id,
                changed_employees = comparison.employee_changes.len(),
                total_cost_delta = %comparison.total_cost_delta.round_dp(2),
                duration_us = start_time.elapsed().as_micros(),
                "Comparison completed"
            );
            json_response(comparison)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Comparison failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn evaluate_scenario(state: &AppState, request: ScenarioRequest) -> EngineResult<ScenarioSummary> {
    let mut scenario = Scenario::new(request.name, &request.staff, request.date);
    scenario.evaluate(state.policy())?;
    scenario.summary()
}

fn compare(state: &AppState, request: ComparisonRequest) -> EngineResult<ScenarioComparison> {
    let mut base = Scenario::new(request.base.name, &request.staff, request.base.date);
    let mut scenario = Scenario::new(request.scenario.name, &request.staff, request.scenario.date);
    base.evaluate(state.policy())?;
    scenario.evaluate(state.policy())?;
    scenario.compare_with(&base)
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's message, including role validation failures
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}

fn json_response<T: serde::Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicyRates;
    use axum::{body::Body, http::Request};
    use rust_decimal::Decimal;
    use serde_json::{Value, json};
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec_at(value: &Value) -> Decimal {
        Decimal::from_str(value.as_str().unwrap()).unwrap()
    }

    fn create_test_router() -> Router {
        create_router(AppState::new(PolicyRates::default()))
    }

    fn staff_json() -> Value {
        json!([
            {
                "name": "Alice",
                "roles": [
                    {
                        "start_date": "2019-01-01",
                        "stop_date": "2020-02-01",
                        "hours_per_week": "40",
                        "hourly_rate": "10",
                        "category": "Clerk"
                    }
                ]
            },
            {
                "name": "Bob",
                "pensionable": false,
                "roles": [
                    {
                        "hours_per_week": "20",
                        "hourly_rate": "9",
                        "category": "Cook"
                    }
                ]
            }
        ])
    }

    async fn post_json(router: Router, uri: &str, body: String) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_scenario_returns_summary() {
        let body = json!({ "name": "January", "date": "2020-01-17", "staff": staff_json() });
        let (status, json) = post_json(create_test_router(), "/scenarios", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "January");
        assert_eq!(dec_at(&json["total_cost"]), Decimal::from_str("34988.096").unwrap());
        assert_eq!(json["employees"].as_array().unwrap().len(), 2);
        assert_eq!(dec_at(&json["role_category_totals"]["Clerk"]), Decimal::from(40));
        assert_eq!(dec_at(&json["role_category_totals"]["Cook"]), Decimal::from(20));
    }

    #[tokio::test]
    async fn test_scenario_after_role_ends_seeds_category_at_zero() {
        let body = json!({ "name": "April", "date": "2020-04-02", "staff": staff_json() });
        let (status, json) = post_json(create_test_router(), "/scenarios", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(dec_at(&json["role_category_totals"]["Clerk"]).is_zero());
        assert!(dec_at(&json["employees"][0]["total_annual_cost"]).is_zero());
    }

    #[tokio::test]
    async fn test_compare_reports_changed_employee() {
        let body = json!({
            "staff": staff_json(),
            "base": { "name": "January", "date": "2020-01-17" },
            "scenario": { "name": "April", "date": "2020-04-02" }
        });
        let (status, json) = post_json(create_test_router(), "/compare", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        let changes = json["employee_changes"].as_array().unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0]["name"], "Alice");
        assert_eq!(
            dec_at(&json["total_cost_delta"]),
            Decimal::from_str("-25498.928").unwrap()
        );
    }

    #[tokio::test]
    async fn test_compare_same_date_has_no_changes() {
        let body = json!({
            "staff": staff_json(),
            "base": { "date": "2020-01-17" },
            "scenario": { "date": "2020-01-17" }
        });
        let (status, json) = post_json(create_test_router(), "/compare", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["employee_changes"].as_array().unwrap().is_empty());
        assert!(dec_at(&json["total_cost_delta"]).is_zero());
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, json) =
            post_json(create_test_router(), "/scenarios", "{ not valid json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_date_returns_validation_error() {
        let body = json!({ "staff": staff_json() });
        let (status, json) = post_json(create_test_router(), "/scenarios", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["message"].as_str().unwrap().contains("date"));
    }

    #[tokio::test]
    async fn test_inverted_role_dates_return_validation_error() {
        let body = json!({
            "date": "2020-01-17",
            "staff": [
                {
                    "name": "Alice",
                    "roles": [
                        {
                            "start_date": "2020-03-01",
                            "stop_date": "2020-02-01",
                            "hours_per_week": "40",
                            "hourly_rate": "10",
                            "category": "Clerk"
                        }
                    ]
                }
            ]
        });
        let (status, json) = post_json(create_test_router(), "/scenarios", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_oversized_amounts_are_rejected_not_costed() {
        let body = json!({
            "date": "2020-01-17",
            "staff": [{
                "name": "Alice",
                "roles": [{
                    "hours_per_week": "1000000000000000",
                    "hourly_rate": "1000000000000000",
                    "category": "Clerk"
                }]
            }]
        });
        let (status, json) = post_json(create_test_router(), "/scenarios", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(json["message"].as_str().unwrap().contains("must not exceed"));
    }

    #[tokio::test]
    async fn test_invalid_policy_returns_config_error() {
        let policy = PolicyRates {
            pension_rate: Decimal::TWO,
            ..PolicyRates::default()
        };
        let router = create_router(AppState::new(policy));
        let body = json!({ "date": "2020-01-17", "staff": staff_json() });
        let (status, json) = post_json(router, "/scenarios", body.to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "CONFIG_ERROR");
        assert!(json["message"].as_str().unwrap().contains("pension_rate"));
    }
}
