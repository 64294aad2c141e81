//! The scheduling pipeline
//!
//! Pure functions over immutable inputs, leaf-first: calendar arithmetic,
//! graph building and repair, the forward pass, critical path, feasibility.
//! [`engine::schedule`] wires them together.

pub mod calendar;
mod critical_path;
mod engine;
mod feasibility;
mod graph;

pub use calendar::{plan_start, WorkCalendar, WORK_WINDOW_START_HOUR};
pub use critical_path::{find_critical_path, CriticalPath};
pub use engine::{schedule, schedule_now, PlanSummary, ScheduleOutcome};
pub use feasibility::{classify, Feasibility, TIGHT_THRESHOLD};
pub use graph::{build_tasks, DependencyGraph, TopoOrder};
