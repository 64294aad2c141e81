//! Feasibility classification
//!
//! Compares the schedule's overall finish against the run's deadline or
//! timebox and emits a three-way verdict. Infeasible schedules are reported,
//! never raised as errors. The deadline path additionally reports `tight`
//! when the critical path consumes more than 90% of the available window;
//! the timebox path has no tight branch.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Constraints;

/// Critical-path share of the deadline window above which the verdict is
/// `tight`
pub const TIGHT_THRESHOLD: f64 = 0.9;

pub(crate) const DEADLINE_NOTE: &str =
    "Schedule exceeds the deadline. Consider scope reduction or parallelization.";
pub(crate) const TIMEBOX_NOTE: &str =
    "Schedule exceeds the timebox. Consider scope reduction or increased capacity.";

/// Verdict on whether a schedule fits its constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feasibility {
    Feasible,
    Tight,
    Infeasible,
}

/// Classifies a schedule against its constraints, appending advisory notes.
///
/// `critical_hours` is the total duration of the critical path; the tight
/// ratio compares it to the deadline window in plain hours (the hours-per-day
/// factor cancels out of the ratio).
pub fn classify(
    constraints: Option<&Constraints>,
    plan_start: DateTime<Utc>,
    latest_finish: DateTime<Utc>,
    critical_hours: f64,
    notes: &mut Vec<String>,
) -> Feasibility {
    let Some(constraints) = constraints else {
        return Feasibility::Feasible;
    };

    if let Some(deadline) = constraints.deadline {
        if latest_finish > deadline {
            notes.push(DEADLINE_NOTE.to_string());
            return Feasibility::Infeasible;
        }

        let window_hours = (deadline - plan_start).num_seconds() as f64 / 3600.0;
        if critical_hours > TIGHT_THRESHOLD * window_hours {
            return Feasibility::Tight;
        }
        return Feasibility::Feasible;
    }

    if let Some(days) = constraints.timebox_days {
        let timebox_end = plan_start + Duration::days(i64::from(days));
        if latest_finish > timebox_end {
            notes.push(TIMEBOX_NOTE.to_string());
            return Feasibility::Infeasible;
        }
        // Intentionally no tight branch on the timebox path
        return Feasibility::Feasible;
    }

    Feasibility::Feasible
}
