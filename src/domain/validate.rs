//! Structural validation for engine inputs
//!
//! The engine tolerates any graph shape, but malformed input types (empty
//! titles, non-positive durations, out-of-range calendars) are rejected at
//! the boundary before scheduling starts. The bounds mirror the upstream
//! request schema.

use thiserror::Error;

use super::constraints::Constraints;
use super::task::{DraftTask, MAX_TASK_HOURS};

/// Maximum number of tasks accepted per schedule run
pub const MAX_TASKS_PER_PLAN: usize = 60;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Draft task list is empty")]
    NoTasks,

    #[error("Too many tasks: {0} exceeds the limit of {limit}", limit = MAX_TASKS_PER_PLAN)]
    TooManyTasks(usize),

    #[error("Task at index {0} has an empty title")]
    EmptyTitle(usize),

    #[error("Task '{title}' has a non-positive duration: {hours}")]
    NonPositiveHours { title: String, hours: f64 },

    #[error("Task '{title}' exceeds the {}-hour limit: {hours}", MAX_TASK_HOURS)]
    ExcessiveHours { title: String, hours: f64 },

    #[error("hoursPerDay must be in (0, 24], got {0}")]
    InvalidHoursPerDay(f64),

    #[error("timeboxDays must be positive")]
    InvalidTimebox,

    #[error("workDays must not be empty")]
    EmptyWorkDays,
}

/// Checks the draft task list against the input contract
pub fn check_drafts(drafts: &[DraftTask]) -> Result<(), ValidationError> {
    if drafts.is_empty() {
        return Err(ValidationError::NoTasks);
    }
    if drafts.len() > MAX_TASKS_PER_PLAN {
        return Err(ValidationError::TooManyTasks(drafts.len()));
    }

    for (index, draft) in drafts.iter().enumerate() {
        if draft.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle(index));
        }
        // NaN fails the comparison and lands here too
        if !(draft.estimated_hours > 0.0) {
            return Err(ValidationError::NonPositiveHours {
                title: draft.title.clone(),
                hours: draft.estimated_hours,
            });
        }
        if draft.estimated_hours > MAX_TASK_HOURS {
            return Err(ValidationError::ExcessiveHours {
                title: draft.title.clone(),
                hours: draft.estimated_hours,
            });
        }
    }

    Ok(())
}

/// Checks the constraints value against the input contract
pub fn check_constraints(constraints: &Constraints) -> Result<(), ValidationError> {
    if let Some(hours) = constraints.hours_per_day {
        if !(hours > 0.0) || hours > 24.0 {
            return Err(ValidationError::InvalidHoursPerDay(hours));
        }
    }
    if constraints.timebox_days == Some(0) {
        return Err(ValidationError::InvalidTimebox);
    }
    if let Some(days) = &constraints.work_days {
        if days.is_empty() {
            return Err(ValidationError::EmptyWorkDays);
        }
    }

    Ok(())
}
