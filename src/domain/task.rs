//! Task domain model
//!
//! [`DraftTask`] is the unordered input produced upstream: tasks reference
//! each other by title and carry a raw hour estimate. [`Task`] is the
//! engine-owned form with a minted ID, resolved dependency IDs, and the
//! schedule fields the forward pass fills in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::TaskId;

/// Lower clamp for a task's duration estimate, in hours
pub const MIN_TASK_HOURS: f64 = 0.5;

/// Upper clamp for a task's duration estimate, in hours
pub const MAX_TASK_HOURS: f64 = 1000.0;

/// Priority of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Risk level of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// A draft task as produced by the upstream planner
///
/// Dependencies are free-text title references; resolution to IDs happens in
/// the graph builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftTask {
    /// Human-readable title, unique within a draft
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Raw duration estimate in hours
    pub estimated_hours: f64,

    /// Titles of tasks this one depends on
    #[serde(default)]
    pub depends_on_titles: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
}

impl DraftTask {
    /// Creates a draft task with the given title and hour estimate
    pub fn new(title: impl Into<String>, estimated_hours: f64) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            estimated_hours,
            depends_on_titles: Vec::new(),
            priority: None,
            risk_level: None,
        }
    }

    /// Adds dependency title references
    pub fn depends_on(mut self, titles: &[&str]) -> Self {
        self.depends_on_titles
            .extend(titles.iter().map(|t| t.to_string()));
        self
    }
}

/// A task within a schedule run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, minted per run
    pub id: TaskId,

    /// Human-readable title
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Duration estimate in hours, clamped to `[MIN_TASK_HOURS, MAX_TASK_HOURS]`
    pub estimated_hours: f64,

    /// Resolved dependency IDs, in draft order with duplicates dropped
    #[serde(default)]
    pub depends_on: Vec<TaskId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,

    /// Earliest start instant, populated by the forward pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earliest_start: Option<DateTime<Utc>>,

    /// Finish instant under the working-hours calendar, populated by the forward pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,

    /// Whether this task lies on the critical path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_critical: Option<bool>,
}

impl Task {
    /// Builds a task from a draft, clamping the hour estimate
    pub fn from_draft(id: TaskId, draft: &DraftTask) -> Self {
        Self {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            estimated_hours: draft.estimated_hours.clamp(MIN_TASK_HOURS, MAX_TASK_HOURS),
            depends_on: Vec::new(),
            priority: draft.priority,
            risk_level: draft.risk_level,
            earliest_start: None,
            due_date: None,
            is_critical: None,
        }
    }
}
