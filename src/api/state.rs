//! Application state for the staff cost API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PolicyRates;

/// Shared application state.
///
/// Holds the policy rates every request is costed with.
#[derive(Clone)]
pub struct AppState {
    policy: Arc<PolicyRates>,
}

impl AppState {
    /// Creates a new application state with the given policy rates.
    pub fn new(policy: PolicyRates) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns the policy rates.
    pub fn policy(&self) -> &PolicyRates {
        &self.policy
    }
}
