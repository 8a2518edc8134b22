//! Policy file loading.
//!
//! This module provides the [`PolicyLoader`] type for reading employer cost
//! policy rates from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::PolicyRates;

/// Loads policy rates from YAML.
///
/// A policy file looks like:
///
/// ```text
/// ni_weekly_threshold: "162"
/// ni_rate: "0.138"
/// pension_rate: "0.1438"
/// weeks_per_year: "52"
/// ```
///
/// # Example
///
/// ```no_run
/// use staff_cost_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/policy.yaml")?;
/// println!("Pension rate: {}", loader.rates().pension_rate);
/// # Ok::<(), staff_cost_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolicyLoader {
    rates: PolicyRates,
}

impl PolicyLoader {
    /// Loads and validates the policy file at `path`.
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` on success, or an error if:
    /// - The file does not exist (`ConfigNotFound`)
    /// - The file is not valid YAML for [`PolicyRates`] (`ConfigParseError`)
    /// - Any rate is out of range (`InvalidPolicy`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let rates = Self::load_yaml::<PolicyRates>(path)?;
        rates.validate()?;

        debug!(path = %path.display(), ?rates, "Loaded policy rates");
        Ok(Self { rates })
    }

    /// Loads policy rates from `path` when given, otherwise the built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> EngineResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy rates.
    pub fn rates(&self) -> &PolicyRates {
        &self.rates
    }

    /// Consumes the loader, returning the policy rates.
    pub fn into_rates(self) -> PolicyRates {
        self.rates
    }
}
