//! Scheduling constraints
//!
//! Constraints are immutable for a run. At most one of `deadline` and
//! `timebox_days` is meaningful; when both are present the deadline wins.

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Default work week: Monday through Friday
pub const DEFAULT_WORK_DAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Default length of the daily work window, in hours
pub const DEFAULT_HOURS_PER_DAY: f64 = 8.0;

/// Temporal constraints for a schedule run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    /// Hard finish instant for the whole plan
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,

    /// Length of the plan window in calendar days, counted from the plan start
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timebox_days: Option<u32>,

    /// Days of the week on which work happens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_days: Option<Vec<Weekday>>,

    /// Length of the daily work window, in hours
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_per_day: Option<f64>,

    /// Advisory only; calendar math runs in a single fixed reference offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl Constraints {
    /// Returns the work-day set, falling back to Mon-Fri
    pub fn effective_work_days(&self) -> Vec<Weekday> {
        match &self.work_days {
            Some(days) if !days.is_empty() => days.clone(),
            _ => DEFAULT_WORK_DAYS.to_vec(),
        }
    }

    /// Returns the daily window length, falling back to 8 hours
    pub fn effective_hours_per_day(&self) -> f64 {
        self.hours_per_day.unwrap_or(DEFAULT_HOURS_PER_DAY)
    }
}
