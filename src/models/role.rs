//! Role model and related types.
//!
//! A [`Role`] is a time-bounded combination of weekly hours, an hourly rate
//! and a job category. Roles are validated on construction and immutable
//! afterwards.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Upper bound on contracted hours: the number of hours in a week.
pub const MAX_HOURS_PER_WEEK: Decimal = Decimal::from_parts(168, 0, 0, false, 0);

/// Upper bound on the hourly rate (£1,000,000).
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// The start date given to roles whose start date was left blank.
///
/// It lies far enough in the past that such a role is valid on any
/// evaluation date unless its stop date excludes it.
pub fn open_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN)
}

/// A time-bounded employment role.
///
/// Both validity bounds are exclusive: a role starting or stopping exactly
/// on a date is not valid on that date.
///
/// # Examples
///
/// ```
/// use staff_cost_engine::models::Role;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let role = Role::new(
///     NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
///     None,
///     Decimal::from(40),
///     Decimal::from(10),
///     "Clerk",
/// )
/// .unwrap();
///
/// assert_eq!(role.weekly_pay(), Decimal::from(400));
/// assert!(role.is_valid_on(NaiveDate::from_ymd_opt(2020, 1, 17).unwrap()));
/// assert_eq!(role.to_string(), "Clerk: 40 hours/week @ £10 / hour");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RoleRecord", into = "RoleRecord")]
pub struct Role {
    start_date: NaiveDate,
    stop_date: Option<NaiveDate>,
    hours_per_week: Decimal,
    hourly_rate: Decimal,
    category: String,
}

impl Role {
    /// Creates a role, checking its date range and amounts.
    ///
    /// # Errors
    ///
    /// - `InvalidDateRange` if `stop_date` is present and not after `start_date`
    /// - `MalformedRecord` if hours or rate are negative or above
    ///   [`MAX_HOURS_PER_WEEK`] / [`MAX_HOURLY_RATE`], or the category is blank
    pub fn new(
        start_date: NaiveDate,
        stop_date: Option<NaiveDate>,
        hours_per_week: Decimal,
        hourly_rate: Decimal,
        category: impl Into<String>,
    ) -> EngineResult<Self> {
        let category = category.into();
        let record = format!("{} role", category);

        if let Some(stop_date) = stop_date {
            if stop_date <= start_date {
                return Err(EngineError::InvalidDateRange {
                    record,
                    start_date,
                    stop_date,
                });
            }
        }

        if hours_per_week < Decimal::ZERO {
            return Err(EngineError::MalformedRecord {
                record,
                message: format!("hours per week must not be negative (got {})", hours_per_week),
            });
        }

        if hours_per_week > MAX_HOURS_PER_WEEK {
            return Err(EngineError::MalformedRecord {
                record,
                message: format!(
                    "hours per week must not exceed {} (got {})",
                    MAX_HOURS_PER_WEEK, hours_per_week
                ),
            });
        }

        if hourly_rate < Decimal::ZERO {
            return Err(EngineError::MalformedRecord {
                record,
                message: format!("hourly rate must not be negative (got {})", hourly_rate),
            });
        }

        if hourly_rate > MAX_HOURLY_RATE {
            return Err(EngineError::MalformedRecord {
                record,
                message: format!(
                    "hourly rate must not exceed {} (got {})",
                    MAX_HOURLY_RATE, hourly_rate
                ),
            });
        }

        if category.trim().is_empty() {
            return Err(EngineError::MalformedRecord {
                record: "role".to_string(),
                message: "category must not be empty".to_string(),
            });
        }

        Ok(Self {
            start_date,
            stop_date,
            hours_per_week,
            hourly_rate,
            category,
        })
    }

    /// The exclusive lower bound of the role's validity window.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// The exclusive upper bound, or `None` for an open-ended role.
    pub fn stop_date(&self) -> Option<NaiveDate> {
        self.stop_date
    }

    /// Contracted hours per week.
    pub fn hours_per_week(&self) -> Decimal {
        self.hours_per_week
    }

    /// Pay per hour.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// The job category label (e.g. "Manager").
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Weekly pay for this role alone (`hours_per_week * hourly_rate`).
    pub fn weekly_pay(&self) -> Decimal {
        self.hours_per_week * self.hourly_rate
    }

    /// Returns true if the role is valid on `date`.
    ///
    /// A role is valid when `start_date < date` and either there is no stop
    /// date or `stop_date > date`.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.start_date < date && self.stop_date.is_none_or(|stop| stop > date)
    }

    /// The reportable part of the role: category, hours and rate.
    pub fn summary(&self) -> RoleSummary {
        RoleSummary {
            category: self.category.clone(),
            hours_per_week: self.hours_per_week,
            hourly_rate: self.hourly_rate,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.summary(), f)
    }
}

/// The reportable content of an active role.
///
/// Scenario comparison diffs sequences of these rather than whole roles, so
/// two roles differing only in their validity dates compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSummary {
    /// The job category label.
    pub category: String,
    /// Contracted hours per week.
    pub hours_per_week: Decimal,
    /// Pay per hour.
    pub hourly_rate: Decimal,
}

impl fmt::Display for RoleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} hours/week @ £{} / hour",
            self.category,
            self.hours_per_week.normalize(),
            self.hourly_rate.normalize()
        )
    }
}

/// Wire shape of a role, validated into a [`Role`] on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRecord {
    /// Start date; defaults to [`open_start_date`] when absent.
    #[serde(default = "open_start_date")]
    pub start_date: NaiveDate,
    /// Optional stop date.
    #[serde(default)]
    pub stop_date: Option<NaiveDate>,
    /// Contracted hours per week.
    pub hours_per_week: Decimal,
    /// Pay per hour.
    pub hourly_rate: Decimal,
    /// The job category label.
    pub category: String,
}

impl TryFrom<RoleRecord> for Role {
    type Error = EngineError;

    fn try_from(record: RoleRecord) -> Result<Self, Self::Error> {
        Role::new(
            record.start_date,
            record.stop_date,
            record.hours_per_week,
            record.hourly_rate,
            record.category,
        )
    }
}

impl From<Role> for RoleRecord {
    fn from(role: Role) -> Self {
        RoleRecord {
            start_date: role.start_date,
            stop_date: role.stop_date,
            hours_per_week: role.hours_per_week,
            hourly_rate: role.hourly_rate,
            category: role.category,
        }
    }
}
