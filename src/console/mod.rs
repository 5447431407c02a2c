//! Interactive menu session.
//!
//! [`Session`] reads choices and arguments from any [`BufRead`], calls one
//! [`TaskManager`] operation per action, and writes the outcome to any
//! [`Write`]. The binary wires it to stdin/stdout; tests drive it with
//! in-memory buffers.

pub mod input;
pub mod render;

pub use input::{is_confirmation, parse_task_id, IdInputError, MenuChoice};
pub use render::Painter;

use crate::config::Settings;
use crate::error::Result;
use crate::manager::TaskManager;
use crate::task::TaskId;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Outcome of asking for the id of an existing task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdAnswer {
    Found(TaskId),
    /// The text was reported to the user and the action is abandoned
    Rejected,
    EndOfInput,
}

/// Menu-driven session over a borrowed [`TaskManager`].
pub struct Session<'a, R, W> {
    manager: &'a mut TaskManager,
    input: R,
    output: W,
    painter: Painter,
    confirm_delete: bool,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a session using the given settings.
    pub fn new(manager: &'a mut TaskManager, input: R, output: W, settings: &Settings) -> Self {
        Self {
            manager,
            input,
            output,
            painter: Painter::new(settings.color),
            confirm_delete: settings.confirm_delete,
        }
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Io`](crate::TodoError::Io) if the console fails.
    pub fn run(&mut self) -> Result<()> {
        info!(tasks = self.manager.len(), "Session started");

        loop {
            let menu = self.painter.menu();
            let Some(line) = self.prompt(&menu)? else {
                self.farewell()?;
                break;
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    debug!(?choice, "Menu selection");
                    self.dispatch(choice)?
                }
                Err(_) => {
                    let message = format!(
                        "Invalid choice. Please select a number between 1 and {}.",
                        MenuChoice::COUNT
                    );
                    writeln!(self.output, "\n{}", self.painter.notice(&message))?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        info!(tasks = self.manager.len(), "Session ended");
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => self.add_task(),
            MenuChoice::View => self.view_tasks(),
            MenuChoice::Update => self.update_task(),
            MenuChoice::Delete => self.delete_task(),
            MenuChoice::MarkComplete => self.mark_task(true),
            MenuChoice::MarkIncomplete => self.mark_task(false),
            MenuChoice::Exit => {
                self.farewell()?;
                Ok(Flow::Exit)
            }
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn add_task(&mut self) -> Result<Flow> {
        self.header("ADD TASK")?;
        let Some(description) = self.prompt("Enter task description: ")? else {
            return self.exit_on_eof();
        };

        match self.manager.add(description) {
            Ok(task) => {
                let message = format!(
                    "Task added successfully with ID {}: {}",
                    task.id, task.description
                );
                self.say_success(&message)?;
            }
            Err(e) if e.is_recoverable() => {
                self.say_error("Task description cannot be empty.")?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn view_tasks(&mut self) -> Result<Flow> {
        self.header("VIEW TASK LIST")?;
        let tasks = self.manager.get_all();
        if tasks.is_empty() {
            writeln!(self.output, "Your task list is empty.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.output, "Total tasks: {}", tasks.len())?;
        for task in tasks {
            writeln!(self.output, "{}", self.painter.task(task))?;
        }
        Ok(Flow::Continue)
    }

    fn update_task(&mut self) -> Result<Flow> {
        self.header("UPDATE TASK")?;
        if self.manager.is_empty() {
            writeln!(
                self.output,
                "Your task list is empty. Cannot update any tasks."
            )?;
            return Ok(Flow::Continue);
        }

        let id = match self.prompt_existing_id("Enter task ID to update: ")? {
            IdAnswer::Found(id) => id,
            IdAnswer::Rejected => return Ok(Flow::Continue),
            IdAnswer::EndOfInput => return self.exit_on_eof(),
        };
        self.show_task("Current task", id)?;

        let Some(description) = self.prompt("Enter new task description: ")? else {
            return self.exit_on_eof();
        };

        match self.manager.update(id, description.as_str()) {
            Ok(true) => {
                let message = format!("Task {id} updated successfully: {description}");
                self.say_success(&message)?;
            }
            Ok(false) => self.say_error(&format!("Could not update task {id}."))?,
            Err(e) if e.is_recoverable() => {
                self.say_error("Task description cannot be empty.")?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn delete_task(&mut self) -> Result<Flow> {
        self.header("DELETE TASK")?;
        if self.manager.is_empty() {
            writeln!(
                self.output,
                "Your task list is empty. Cannot delete any tasks."
            )?;
            return Ok(Flow::Continue);
        }

        let id = match self.prompt_existing_id("Enter task ID to delete: ")? {
            IdAnswer::Found(id) => id,
            IdAnswer::Rejected => return Ok(Flow::Continue),
            IdAnswer::EndOfInput => return self.exit_on_eof(),
        };
        self.show_task("Task to delete", id)?;

        if self.confirm_delete {
            let question = "Are you sure you want to delete this task? (y/N): ";
            let Some(answer) = self.prompt(question)? else {
                return self.exit_on_eof();
            };
            if !is_confirmation(&answer) {
                writeln!(
                    self.output,
                    "{}",
                    self.painter.notice("Task deletion cancelled.")
                )?;
                return Ok(Flow::Continue);
            }
        }

        if self.manager.delete(id) {
            self.say_success(&format!("Task {id} deleted successfully."))?;
        } else {
            self.say_error(&format!("Could not delete task {id}."))?;
        }
        Ok(Flow::Continue)
    }

    fn mark_task(&mut self, complete: bool) -> Result<Flow> {
        let word = if complete { "complete" } else { "incomplete" };
        self.header(&format!("MARK TASK {}", word.to_uppercase()))?;
        if self.manager.is_empty() {
            writeln!(
                self.output,
                "Your task list is empty. No tasks to mark as {word}."
            )?;
            return Ok(Flow::Continue);
        }

        let question = format!("Enter task ID to mark as {word}: ");
        let id = match self.prompt_existing_id(&question)? {
            IdAnswer::Found(id) => id,
            IdAnswer::Rejected => return Ok(Flow::Continue),
            IdAnswer::EndOfInput => return self.exit_on_eof(),
        };

        let already = self
            .manager
            .get_by_id(id)
            .is_some_and(|task| task.completed == complete);
        if already {
            let message = format!("Task {id} is already marked as {word}.");
            writeln!(self.output, "{}", self.painter.notice(&message))?;
            return Ok(Flow::Continue);
        }

        let marked = if complete {
            self.manager.mark_complete(id)
        } else {
            self.manager.mark_incomplete(id)
        };
        let description = self
            .manager
            .get_by_id(id)
            .filter(|_| marked)
            .map(|task| task.description.clone());
        match description {
            Some(description) => {
                self.say_success(&format!("Task {id} marked as {word}: {description}"))?;
            }
            None => self.say_error(&format!("Could not mark task {id} as {word}."))?,
        }
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Console helpers
    // =========================================================================

    /// Write `text` and read one trimmed line. `None` means end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask for an id and check that a task carries it. Bad or unknown ids
    /// are reported here and come back as [`IdAnswer::Rejected`].
    fn prompt_existing_id(&mut self, text: &str) -> Result<IdAnswer> {
        let Some(raw) = self.prompt(text)? else {
            return Ok(IdAnswer::EndOfInput);
        };

        match parse_task_id(&raw) {
            Ok(id) if self.manager.get_by_id(id).is_some() => Ok(IdAnswer::Found(id)),
            Ok(id) => {
                self.say_error(&format!("Task with ID {id} not found."))?;
                Ok(IdAnswer::Rejected)
            }
            Err(IdInputError::NoSuchId(typed)) => {
                self.say_error(&format!("Task with ID {typed} not found."))?;
                Ok(IdAnswer::Rejected)
            }
            Err(IdInputError::NotANumber) => {
                self.say_error("Task ID must be a number.")?;
                Ok(IdAnswer::Rejected)
            }
        }
    }

    fn show_task(&mut self, label: &str, id: TaskId) -> Result<()> {
        if let Some(task) = self.manager.get_by_id(id) {
            writeln!(self.output, "{label}: {}", self.painter.task(task))?;
        }
        Ok(())
    }

    fn header(&mut self, title: &str) -> Result<()> {
        writeln!(self.output, "\n{}", self.painter.header(title))?;
        Ok(())
    }

    fn say_success(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", self.painter.success(message))?;
        Ok(())
    }

    fn say_error(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", self.painter.error(message))?;
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "\nThank you for using the Todo Application. Goodbye!"
        )?;
        Ok(())
    }

    fn exit_on_eof(&mut self) -> Result<Flow> {
        writeln!(self.output)?;
        self.farewell()?;
        Ok(Flow::Exit)
    }
}

/// Add each description as a task, in order.
///
/// # Errors
///
/// Stops at the first blank description with a validation error;
/// tasks added before it stay in the manager.
pub fn seed_tasks<I, S>(manager: &mut TaskManager, descriptions: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for description in descriptions {
        manager.add(description)?;
    }
    Ok(())
}
