//! HTTP API module for the staff cost engine.
//!
//! This module provides the REST API endpoints for evaluating staff cost
//! scenarios and comparing them.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ComparisonRequest, ScenarioRequest, ScenarioSpec};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
