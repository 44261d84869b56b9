//! The task collection manager.
//!
//! [`TaskStore`] owns every task, validates new ones and keeps the list in
//! sort order after each insertion. [`SharedTaskStore`] puts one behind a
//! single async mutex for callers that share it.

use crate::{
    domain::{sort_tasks, DeadlineOrder, Task},
    error::{Result, TrackerError},
    export::{render_tasks, ExportFormat, Exporter, FileExporter},
};
use std::{path::Path, sync::Arc};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

/// Ordered, in-memory collection of tasks
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    order: DeadlineOrder,
}

impl TaskStore {
    /// Creates an empty store using raw string deadline ordering
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given deadline ordering
    pub fn with_order(order: DeadlineOrder) -> Self {
        Self {
            tasks: Vec::new(),
            order,
        }
    }

    /// Returns the deadline ordering in use
    pub fn order(&self) -> DeadlineOrder {
        self.order
    }

    /// Returns the number of tasks
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true when the store holds no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Validates and inserts a new task, then restores sort order
    ///
    /// Names are not required to be unique.
    pub fn add(&mut self, name: &str, deadline: &str, priority: i64) -> Result<&Task> {
        let task = Task::new(name, deadline, priority).map_err(|e| {
            debug!(name, deadline, priority, error = %e, "rejected task");
            e
        })?;

        info!(
            name,
            deadline,
            priority,
            kind = %task.kind(),
            "task added"
        );

        self.tasks.push(task);
        sort_tasks(&mut self.tasks, self.order);

        // Stable sort: the new task is the last one with its exact key
        let position = self
            .tasks
            .iter()
            .rposition(|t| {
                t.name() == name
                    && t.deadline().as_str() == deadline
                    && i64::from(t.priority().value()) == priority
            })
            .unwrap_or(self.tasks.len() - 1);

        Ok(&self.tasks[position])
    }

    /// Tasks in current sort order
    pub fn list(&self) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter()
    }

    /// First task with exactly this name, in sort order
    pub fn get(&self, name: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.name() == name)
    }

    /// Sets the status of the first task named `name`
    pub fn update_status(&mut self, name: &str, status: &str) -> Result<()> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.name() == name) else {
            warn!(name, "status update for unknown task");
            return Err(TrackerError::NotFound(name.to_string()));
        };

        task.update_status(status);
        info!(name, status, "task status updated");
        Ok(())
    }

    /// Removes the first task named `name`
    pub fn delete(&mut self, name: &str) -> Result<Task> {
        let Some(position) = self.tasks.iter().position(|t| t.name() == name) else {
            warn!(name, "delete for unknown task");
            return Err(TrackerError::NotFound(name.to_string()));
        };

        let removed = self.tasks.remove(position);
        info!(name, remaining = self.tasks.len(), "task deleted");
        Ok(removed)
    }

    /// Writes every task as `name,deadline,status,priority` lines to `path`
    pub async fn export_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let exporter = FileExporter::new(path);
        self.export_with(&exporter, ExportFormat::Csv).await
    }

    /// Renders the tasks in `format` and hands them to `exporter`
    pub async fn export_with(&self, exporter: &dyn Exporter, format: ExportFormat) -> Result<()> {
        let contents = render_tasks(&self.tasks, format)?;

        exporter.write_all(&contents).await.map_err(|e| {
            warn!(path = %exporter.describe(), error = %e, "export failed");
            e
        })?;

        info!(
            path = %exporter.describe(),
            %format,
            count = self.tasks.len(),
            "tasks exported"
        );
        Ok(())
    }
}

/// A [`TaskStore`] shared between callers
///
/// Every operation takes the same lock, so adds, updates, deletes and exports
/// never interleave.
#[derive(Debug, Clone, Default)]
pub struct SharedTaskStore {
    inner: Arc<Mutex<TaskStore>>,
}

impl SharedTaskStore {
    pub fn new(store: TaskStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Exclusive access for a sequence of operations
    pub async fn lock(&self) -> MutexGuard<'_, TaskStore> {
        self.inner.lock().await
    }

    /// Adds a task and returns a copy of it
    pub async fn add(&self, name: &str, deadline: &str, priority: i64) -> Result<Task> {
        self.inner
            .lock()
            .await
            .add(name, deadline, priority)
            .cloned()
    }

    /// Snapshot of the tasks in current order
    pub async fn list(&self) -> Vec<Task> {
        self.inner.lock().await.list().cloned().collect()
    }

    pub async fn update_status(&self, name: &str, status: &str) -> Result<()> {
        self.inner.lock().await.update_status(name, status)
    }

    pub async fn delete(&self, name: &str) -> Result<Task> {
        self.inner.lock().await.delete(name)
    }

    pub async fn export_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        self.inner.lock().await.export_to_file(path).await
    }
}
