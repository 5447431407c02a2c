//! The in-memory task collection.
//!
//! [`TaskManager`] owns every [`Task`] of a session together with the id
//! generator. Lookups are a linear scan over the insertion-ordered list;
//! there is no secondary index, so every operation is O(n) in the number
//! of live tasks. That is the intended ceiling for a console-sized list.

use crate::error::{Result, TodoError};
use crate::task::{Task, TaskId};
use tracing::debug;

/// Owns the ordered task list and hands out ids.
///
/// # Example
///
/// ```
/// use tickoff::TaskManager;
///
/// let mut manager = TaskManager::new();
/// let task = manager.add("Buy milk").unwrap();
/// assert_eq!(task.id.get(), 1);
/// assert!(manager.mark_complete(task.id));
/// assert!(manager.get_by_id(task.id).unwrap().completed);
/// ```
#[derive(Debug, Clone)]
pub struct TaskManager {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskManager {
    /// Create an empty manager whose first task gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::FIRST,
        }
    }

    /// Append a new incomplete task and return a copy of it.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Validation`] when `description` is empty or only
    /// whitespace. Nothing is created and the id counter does not move.
    pub fn add(&mut self, description: impl Into<String>) -> Result<Task> {
        let description = description.into();
        validate_description(&description)?;

        let task = Task::new(self.next_id, description);
        self.next_id = self.next_id.next();
        self.tasks.push(task.clone());

        debug!(id = %task.id, "Added task");
        Ok(task)
    }

    /// Find a task by id.
    #[must_use]
    pub fn get_by_id(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// All live tasks in creation order.
    #[must_use]
    pub fn get_all(&self) -> &[Task] {
        &self.tasks
    }

    /// Replace the description of a task, keeping its id and completion.
    ///
    /// Returns `Ok(false)` if no task has this id.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Validation`] for an empty or blank description,
    /// checked before the lookup so a rejected call changes nothing.
    pub fn update(&mut self, id: TaskId, new_description: impl Into<String>) -> Result<bool> {
        let new_description = new_description.into();
        validate_description(&new_description)?;

        match self.get_mut(id) {
            Some(task) => {
                task.description = new_description;
                debug!(%id, "Updated task");
                Ok(true)
            }
            None => {
                debug!(%id, "Update skipped, no such task");
                Ok(false)
            }
        }
    }

    /// Remove a task. Other tasks keep their ids and relative order.
    pub fn delete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => {
                self.tasks.remove(index);
                debug!(%id, "Deleted task");
                true
            }
            None => false,
        }
    }

    /// Mark a task complete. Succeeds again on an already complete task.
    pub fn mark_complete(&mut self, id: TaskId) -> bool {
        self.set_completed(id, true)
    }

    /// Mark a task incomplete. Succeeds again on an already incomplete task.
    pub fn mark_incomplete(&mut self, id: TaskId) -> bool {
        self.set_completed(id, false)
    }

    /// Number of live tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The id the next successful [`add`](Self::add) will assign.
    #[must_use]
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }

    fn set_completed(&mut self, id: TaskId, completed: bool) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.completed = completed;
                debug!(%id, status = %task.status(), "Set task status");
                true
            }
            None => false,
        }
    }
}

/// Check that a description has visible content.
///
/// # Errors
///
/// Returns [`TodoError::Validation`] if the text is empty after trimming.
pub fn validate_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(TodoError::empty_description());
    }
    Ok(())
}
