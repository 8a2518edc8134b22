//! Policy configuration for the staff cost engine.
//!
//! Employer NI and pension rates are fixed defaults, but are always passed
//! explicitly into calculations as a [`PolicyRates`] value. A YAML file can
//! override any of them.
//!
//! # Example
//!
//! ```no_run
//! use staff_cost_engine::config::PolicyLoader;
//!
//! let policy = PolicyLoader::load("./config/policy.yaml").unwrap();
//! println!("NI threshold: {}", policy.rates().ni_weekly_threshold);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    MAX_WEEKS_PER_YEAR, NI_RATE, NI_WEEKLY_THRESHOLD, PENSION_RATE, PolicyRates, WEEKS_PER_YEAR,
};
