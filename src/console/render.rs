//! Console text and colouring.

use super::input::MenuChoice;
use crate::task::Task;
use colored::Colorize;

const RULE_WIDTH: usize = 40;

/// Applies colour to console messages, or leaves them plain.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    color: bool,
}

impl Painter {
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// A painter that never emits escape codes.
    #[must_use]
    pub fn plain() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub fn error(&self, message: &str) -> String {
        let line = format!("Error: {message}");
        if self.color {
            line.red().to_string()
        } else {
            line
        }
    }

    #[must_use]
    pub fn success(&self, message: &str) -> String {
        if self.color {
            message.green().to_string()
        } else {
            message.to_string()
        }
    }

    #[must_use]
    pub fn notice(&self, message: &str) -> String {
        if self.color {
            message.yellow().to_string()
        } else {
            message.to_string()
        }
    }

    #[must_use]
    pub fn header(&self, title: &str) -> String {
        let line = format!("--- {title} ---");
        if self.color {
            line.bold().to_string()
        } else {
            line
        }
    }

    /// One task line; completed tasks are dimmed.
    #[must_use]
    pub fn task(&self, task: &Task) -> String {
        let line = task.to_string();
        if self.color && task.completed {
            line.dimmed().to_string()
        } else {
            line
        }
    }

    /// The main menu block, ending with the choice prompt (no newline).
    #[must_use]
    pub fn menu(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let title = if self.color {
            "TODO APPLICATION - MAIN MENU".bold().to_string()
        } else {
            "TODO APPLICATION - MAIN MENU".to_string()
        };

        let mut out = format!("\n{rule}\n{title}\n{rule}\n");
        for choice in MenuChoice::all() {
            out.push_str(&format!("{}. {}\n", choice.number(), choice.label()));
        }
        out.push_str(&format!(
            "{rule}\nChoose an option (1-{}): ",
            MenuChoice::COUNT
        ));
        out
    }
}
