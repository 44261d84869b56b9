//! # Task Tracker
//!
//! Core of a single-user, in-memory task tracker.
//!
//! [`TaskStore`] holds the ordered task list, validates new tasks and keeps
//! them sorted by deadline then priority. Exporting to a flat file goes
//! through the [`export::Exporter`] seam, and [`menu::MenuSession`] is the
//! text front end the binary runs.

pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod menu;
pub mod store;

// Re-export commonly used types
pub use config::TrackerConfig;
pub use domain::{
    sorting::DeadlineOrder,
    task::{Deadline, Priority, Task, TaskKind},
};
pub use error::{Result, TrackerError};
pub use export::{ExportFormat, Exporter, FileExporter};
pub use store::{SharedTaskStore, TaskStore};
