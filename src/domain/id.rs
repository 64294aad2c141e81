//! Task identifiers and deterministic ID generation
//!
//! ID format: `t-{7-char-hash}` (e.g., `t-9d3e5f2`).
//!
//! IDs are minted by an explicit [`IdGenerator`] that the caller threads into
//! the graph builder. The generator hashes its seed, a run-local counter, and
//! the task title, so two runs with the same seed and the same input produce
//! identical IDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid task ID format: expected 't-{{7-char-hash}}', got '{0}'")]
    InvalidTaskId(String),
}

/// Task ID in the format `t-{7-char-hash}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId {
    hash: String,
}

impl TaskId {
    /// Returns the hash portion of the ID
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t-{}", self.hash)
    }
}

impl FromStr for TaskId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(hash) = s.strip_prefix("t-") else {
            return Err(IdError::InvalidTaskId(s.to_string()));
        };

        if hash.len() != 7 || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IdError::InvalidTaskId(s.to_string()));
        }

        Ok(Self {
            hash: hash.to_string(),
        })
    }
}

impl TryFrom<String> for TaskId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskId> for String {
    fn from(id: TaskId) -> Self {
        id.to_string()
    }
}

/// Seedable generator of task IDs
///
/// One generator per schedule run. Each call advances an internal counter,
/// so duplicate titles still receive distinct IDs.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: u64,
    counter: u64,
}

impl IdGenerator {
    /// Creates a generator with the given seed
    pub fn new(seed: u64) -> Self {
        Self { seed, counter: 0 }
    }

    /// Mints the next task ID for the given title
    pub fn next_id(&mut self, title: &str) -> TaskId {
        let input = format!("{}:{}:{}", self.seed, self.counter, title);
        self.counter += 1;

        let hash = blake3::hash(input.as_bytes());
        let hex = hash.to_hex();
        TaskId {
            hash: hex[..7].to_string(),
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}
