//! Domain models for the scheduling engine
//!
//! Contains the core data types without any scheduling logic.

mod constraints;
mod id;
mod task;
pub mod validate;

pub use constraints::{Constraints, DEFAULT_HOURS_PER_DAY, DEFAULT_WORK_DAYS};
pub use id::{IdError, IdGenerator, TaskId};
pub use task::{DraftTask, Priority, RiskLevel, Task, MAX_TASK_HOURS, MIN_TASK_HOURS};
pub use validate::{ValidationError, MAX_TASKS_PER_PLAN};
