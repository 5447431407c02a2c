//! Task records and their completion state.
//!
//! - [`TaskId`] - Positive integer identifier assigned by the manager
//! - [`Task`] - A single todo item
//! - [`TaskStatus`] - The two-state completion machine

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Task ID
// ============================================================================

/// Identifier of a task within one [`TaskManager`](crate::manager::TaskManager).
///
/// Ids start at 1 and are never reused, even after the task is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// The id handed to the first task of a fresh manager.
    pub const FIRST: TaskId = TaskId(1);

    /// Wrap a raw integer.
    ///
    /// # Example
    ///
    /// ```
    /// use tickoff::task::TaskId;
    ///
    /// let id = TaskId::new(7);
    /// assert_eq!(id.get(), 7);
    /// ```
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u64> for TaskId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Task Status
// ============================================================================

/// Completion state of a task.
///
/// # State Transitions
///
/// - `Incomplete` -> `Complete`: `mark_complete`
/// - `Complete` -> `Incomplete`: `mark_incomplete`
///
/// Marking a task into the state it already holds is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Incomplete,
    Complete,
}

impl TaskStatus {
    /// Symbol shown between the brackets of a task line.
    #[must_use]
    pub fn mark(self) -> &'static str {
        match self {
            TaskStatus::Incomplete => "○",
            TaskStatus::Complete => "✓",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Incomplete => write!(f, "incomplete"),
            TaskStatus::Complete => write!(f, "complete"),
        }
    }
}

// ============================================================================
// Task
// ============================================================================

/// A single todo item.
///
/// Holds no validation of its own; the manager decides what a usable
/// description is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub completed: bool,
}

impl Task {
    /// Create an incomplete task.
    #[must_use]
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
        }
    }

    #[must_use]
    pub fn status(&self) -> TaskStatus {
        if self.completed {
            TaskStatus::Complete
        } else {
            TaskStatus::Incomplete
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. [{}] {}",
            self.id,
            self.status().mark(),
            self.description
        )
    }
}
