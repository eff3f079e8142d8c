//! Task numbering and task records
//!
//! Tasks are numbered from 1 in the order they appear in the input data.
//! The numbering is stable and doubles as the tie-break key for the RPW
//! ranking, so it must never change after the graph is built.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid task number: expected a positive integer, got '{0}'")]
    InvalidTaskId(String),
}

/// Task identifier: a 1-based task number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskId(u32);

impl TaskId {
    /// Creates a task ID from a 1-based task number
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the task number
    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<u32>() {
            Ok(n) if n > 0 => Ok(Self(n)),
            _ => Err(IdError::InvalidTaskId(s.to_string())),
        }
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

/// A single assembly-line task: number, display name, processing time.
///
/// The duration is unit-agnostic; the caller fixes the unit when building
/// the production plan. Tasks are immutable once the graph is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub duration: f64,
}

impl Task {
    pub fn new(id: TaskId, name: impl Into<String>, duration: f64) -> Self {
        Self {
            id,
            name: name.into(),
            duration,
        }
    }
}
