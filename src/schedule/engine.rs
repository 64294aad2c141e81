//! Schedule engine orchestration
//!
//! A single synchronous pipeline over immutable inputs:
//! graph builder -> cycle repair -> forward scheduler -> critical path ->
//! feasibility. Nothing is shared across invocations; the only ambient input
//! is the plan-start instant, which [`schedule_now`] reads exactly once and
//! [`schedule`] takes as a parameter so tests can fix it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::domain::{validate, Constraints, DraftTask, IdGenerator, Task, TaskId, ValidationError};

use super::calendar::{self, WorkCalendar};
use super::critical_path::find_critical_path;
use super::feasibility::{classify, Feasibility};
use super::graph::{build_tasks, DependencyGraph};

pub(crate) const CYCLE_NOTE: &str = "Detected dependency cycle(s). Removed some edges to proceed.";

/// Summary of a schedule run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Critical path task IDs, in start-to-end order
    pub critical_path: Vec<TaskId>,

    /// Verdict against the run's deadline or timebox
    pub feasibility: Feasibility,

    /// Human-readable warnings: cycle repairs, feasibility advisories
    pub notes: Vec<String>,
}

/// Output of a schedule run: enriched tasks plus the summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    pub tasks: Vec<Task>,
    pub summary: PlanSummary,
}

/// Schedules a draft task list under the given constraints.
///
/// `plan_start` anchors the whole schedule; pass [`calendar::plan_start`] of
/// the current instant for live runs or any fixed instant for tests. The ID
/// generator is threaded in so runs are reproducible per seed.
///
/// Malformed graph shapes (unresolved titles, self-references, cycles) are
/// degraded, not rejected; only malformed input types return an error.
pub fn schedule(
    drafts: &[DraftTask],
    constraints: Option<&Constraints>,
    plan_start: DateTime<Utc>,
    ids: &mut IdGenerator,
) -> Result<ScheduleOutcome, ValidationError> {
    validate::check_drafts(drafts)?;
    if let Some(constraints) = constraints {
        validate::check_constraints(constraints)?;
    }

    let work_calendar = WorkCalendar::from_constraints(constraints);
    let mut notes = Vec::new();

    let mut tasks = build_tasks(drafts, ids);
    let mut graph = DependencyGraph::from_tasks(&tasks);
    let index_of: HashMap<TaskId, usize> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id.clone(), i))
        .collect();

    // Cycle repair: sever every dependency of the nodes Kahn left behind,
    // then the recomputed order is guaranteed complete
    let mut topo = graph.topo_order();
    if !topo.is_complete() {
        notes.push(CYCLE_NOTE.to_string());
        for id in &topo.cyclic {
            graph.clear_dependencies(id);
            if let Some(&i) = index_of.get(id) {
                tasks[i].depends_on.clear();
            }
        }
        topo = graph.topo_order();
    }
    let order = topo.order;

    // Forward pass: earliest start is the latest dependency finish, or the
    // plan start for roots
    let mut finishes: HashMap<TaskId, DateTime<Utc>> = HashMap::new();
    for id in &order {
        let Some(&i) = index_of.get(id) else {
            continue;
        };

        let earliest = tasks[i]
            .depends_on
            .iter()
            .filter_map(|dep| finishes.get(dep))
            .fold(plan_start, |acc, f| acc.max(*f));
        let finish = work_calendar.add_working_hours(earliest, tasks[i].estimated_hours);

        tasks[i].earliest_start = Some(earliest);
        tasks[i].due_date = Some(finish);
        finishes.insert(id.clone(), finish);
    }

    let critical = find_critical_path(&order, &graph, &tasks);
    let on_path: HashSet<&TaskId> = critical.path.iter().collect();
    for task in &mut tasks {
        task.is_critical = Some(on_path.contains(&task.id));
    }

    let latest_finish = finishes.values().fold(plan_start, |acc, f| acc.max(*f));
    let feasibility = classify(
        constraints,
        plan_start,
        latest_finish,
        critical.total_hours,
        &mut notes,
    );

    Ok(ScheduleOutcome {
        tasks,
        summary: PlanSummary {
            critical_path: critical.path,
            feasibility,
            notes,
        },
    })
}

/// Convenience entry point for live runs: reads the wall clock once, snaps
/// it to the work window start of the current UTC date, and schedules.
pub fn schedule_now(
    drafts: &[DraftTask],
    constraints: Option<&Constraints>,
    ids: &mut IdGenerator,
) -> Result<ScheduleOutcome, ValidationError> {
    let plan_start = calendar::plan_start(Utc::now());
    schedule(drafts, constraints, plan_start, ids)
}
