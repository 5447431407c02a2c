//! Settings for the console session.
//!
//! Loaded from an optional JSON file and then overridden by command-line
//! flags.
//!
//! # Example settings.json
//!
//! ```json
//! {
//!   "color": false,
//!   "confirmDelete": true,
//!   "seedTasks": ["Buy milk", "Walk dog"]
//! }
//! ```

use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::Path;

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Colour the console output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Ask for y/N confirmation before deleting a task
    #[serde(default = "default_true")]
    pub confirm_delete: bool,

    /// Tasks added before the menu is first shown
    #[serde(default)]
    pub seed_tasks: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            confirm_delete: true,
            seed_tasks: Vec::new(),
        }
    }
}

/// Command-line values that take precedence over the settings file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub no_color: bool,
    pub no_confirm: bool,
    pub seed_tasks: Vec<String>,
}

impl Settings {
    /// Load settings from a JSON file.
    ///
    /// With no path, or a path that does not exist, the defaults are used.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Config`] if the file exists but cannot be read
    /// or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Settings file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            TodoError::config_with_path(format!("cannot read settings: {e}"), path.to_path_buf())
        })?;
        let settings: Settings = serde_json::from_str(&content).map_err(|e| {
            TodoError::config_with_path(
                format!("invalid settings in {}: {e}", path.display()),
                path.to_path_buf(),
            )
        })?;
        Ok(settings)
    }

    /// Apply command-line overrides. Seed tasks from the command line are
    /// appended after the ones from the file.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if overrides.no_color {
            self.color = false;
        }
        if overrides.no_confirm {
            self.confirm_delete = false;
        }
        self.seed_tasks.extend(overrides.seed_tasks);
        self
    }
}

/// Whether a `NO_COLOR` value asks for plain output.
///
/// Any non-empty value counts, including `0` and `false`.
#[must_use]
pub fn no_color_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}
