//! tickoff - in-memory console todo manager
//!
//! Keeps a list of short tasks for the length of one run and drives it from
//! a numbered menu on standard input. Nothing is written to disk.
//!
//! # Architecture
//!
//! - [`task`] - Task records, ids and completion state
//! - [`manager`] - The owning collection and id generator
//! - [`console`] - Menu loop, input parsing and rendering
//! - [`config`] - Settings file and command-line overrides
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```
//! use tickoff::TaskManager;
//!
//! let mut manager = TaskManager::new();
//! let milk = manager.add("Buy milk")?;
//! let dog = manager.add("Walk dog")?;
//!
//! assert!(manager.delete(milk.id));
//! assert!(manager.mark_complete(dog.id));
//! assert_eq!(manager.add("Read book")?.id.get(), 3);
//! # Ok::<(), tickoff::TodoError>(())
//! ```

pub mod config;
pub mod console;
pub mod error;
pub mod manager;
pub mod task;

pub use config::{Overrides, Settings};
pub use console::Session;
pub use error::{Result, TodoError};
pub use manager::TaskManager;
pub use task::{Task, TaskId, TaskStatus};
