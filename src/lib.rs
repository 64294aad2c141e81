//! Planline - a deterministic task-scheduling engine
//!
//! Takes an unordered list of draft tasks (title, hour estimate, named
//! dependencies) plus optional temporal constraints and commits a schedule:
//! per-task start/finish instants under a working-hours calendar, a repaired
//! dependency DAG, the critical path, and a feasibility verdict.
//!
//! The engine is a pure function over its inputs. The plan-start instant and
//! the ID generator are explicit parameters, so identical inputs always
//! produce identical output.
//!
//! ```
//! use planline::{schedule, DraftTask, IdGenerator};
//! use chrono::{TimeZone, Utc};
//!
//! let drafts = vec![
//!     DraftTask::new("Design", 4.0),
//!     DraftTask::new("Build", 8.0).depends_on(&["Design"]),
//! ];
//! let plan_start = Utc.with_ymd_and_hms(2025, 1, 6, 9, 0, 0).unwrap();
//! let mut ids = IdGenerator::new(42);
//!
//! let outcome = schedule(&drafts, None, plan_start, &mut ids).unwrap();
//! assert_eq!(outcome.summary.critical_path.len(), 2);
//! ```

pub mod domain;
pub mod schedule;

pub use domain::{
    Constraints, DraftTask, IdGenerator, Priority, RiskLevel, Task, TaskId, ValidationError,
};
pub use schedule::{schedule, schedule_now, Feasibility, PlanSummary, ScheduleOutcome};
