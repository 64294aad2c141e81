//! Critical path computation
//!
//! Longest duration-weighted chain through the repaired DAG. Distances are
//! relaxed in topological order; the path end is the task maximizing
//! `distance + duration`, and the path is recovered by backtracking through
//! each task's dependency list.
//!
//! Tie-breaks are deterministic and part of the contract: the end node is the
//! earliest topological position among equals (strict `>` comparison), and
//! backtracking picks the earliest-listed dependency among equals.

use std::collections::HashMap;

use crate::domain::{Task, TaskId};

use super::graph::DependencyGraph;

/// The critical path of a schedule run
#[derive(Debug, Default, PartialEq)]
pub struct CriticalPath {
    /// Task IDs in start-to-end order
    pub path: Vec<TaskId>,

    /// Total duration of the path in hours
    pub total_hours: f64,
}

/// Finds the critical path over the final topological order
pub fn find_critical_path(
    order: &[TaskId],
    graph: &DependencyGraph,
    tasks: &[Task],
) -> CriticalPath {
    let duration: HashMap<&TaskId, f64> =
        tasks.iter().map(|t| (&t.id, t.estimated_hours)).collect();
    let by_id: HashMap<&TaskId, &Task> = tasks.iter().map(|t| (&t.id, t)).collect();

    let hours = |id: &TaskId| duration.get(id).copied().unwrap_or(0.0);

    // Relax edges out of each node in topological order
    let mut distance: HashMap<TaskId, f64> = order.iter().map(|id| (id.clone(), 0.0)).collect();
    for id in order {
        let candidate = distance.get(id).copied().unwrap_or(0.0) + hours(id);
        for dependent in graph.dependents(id) {
            let current = distance.entry(dependent).or_insert(0.0);
            if *current < candidate {
                *current = candidate;
            }
        }
    }

    let score = |id: &TaskId| distance.get(id).copied().unwrap_or(0.0) + hours(id);

    // Path end: argmax of distance + duration, first topological position
    // wins ties
    let mut end: Option<&TaskId> = None;
    let mut best = f64::NEG_INFINITY;
    for id in order {
        let total = score(id);
        if total > best {
            best = total;
            end = Some(id);
        }
    }

    let Some(end) = end else {
        return CriticalPath::default();
    };

    // Backtrack through dependency lists; earliest-listed dependency wins
    // ties, and a task already on the path stops the walk
    let mut path = vec![end.clone()];
    let mut current = end;
    loop {
        let deps = by_id
            .get(current)
            .map(|t| t.depends_on.as_slice())
            .unwrap_or(&[]);

        let mut predecessor: Option<&TaskId> = None;
        let mut best_score = f64::NEG_INFINITY;
        for dep in deps {
            let s = score(dep);
            if s > best_score {
                best_score = s;
                predecessor = Some(dep);
            }
        }

        match predecessor {
            Some(pred) if !path.contains(pred) => {
                path.push(pred.clone());
                current = pred;
            }
            _ => break,
        }
    }

    path.reverse();
    CriticalPath {
        path,
        total_hours: best,
    }
}
