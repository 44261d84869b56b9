//! Six-option text menu driving a [`TaskStore`].
//!
//! Generic over its input and output so it runs on stdin/stdout in the binary
//! and on in-memory buffers in tests. Store errors are printed and the loop
//! carries on; only failures writing to the output end the session early.

use crate::{
    config::TrackerConfig,
    domain::Priority,
    error::{Result, TrackerError},
    export::FileExporter,
    store::TaskStore,
};
use std::{
    io::{BufRead, Write},
    path::PathBuf,
    str::FromStr,
};
use tracing::debug;

/// Menu entries in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AddTask,
    ViewTasks,
    UpdateStatus,
    DeleteTask,
    Export,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 6] = [
        Self::AddTask,
        Self::ViewTasks,
        Self::UpdateStatus,
        Self::DeleteTask,
        Self::Export,
        Self::Exit,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::AddTask => "Add Task",
            Self::ViewTasks => "View Tasks",
            Self::UpdateStatus => "Update Task Status",
            Self::DeleteTask => "Delete Task",
            Self::Export => "Export Tasks",
            Self::Exit => "Exit",
        }
    }
}

impl FromStr for MenuOption {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::AddTask),
            "2" => Ok(Self::ViewTasks),
            "3" => Ok(Self::UpdateStatus),
            "4" => Ok(Self::DeleteTask),
            "5" => Ok(Self::Export),
            "6" => Ok(Self::Exit),
            other => Err(format!("Invalid option '{}'", other)),
        }
    }
}

/// An interactive session over one store
pub struct MenuSession<R, W> {
    input: R,
    output: W,
    store: TaskStore,
    config: TrackerConfig,
}

impl<R: BufRead, W: Write> MenuSession<R, W> {
    pub fn new(input: R, output: W, config: TrackerConfig) -> Self {
        Self {
            input,
            output,
            store: TaskStore::with_order(config.deadline_order),
            config,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Consumes the session, returning the store and the output sink
    pub fn into_parts(self) -> (TaskStore, W) {
        (self.store, self.output)
    }

    /// Runs until Exit is chosen or input runs out
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.read_line()? else {
                break;
            };

            let option = match choice.parse::<MenuOption>() {
                Ok(option) => option,
                Err(reason) => {
                    debug!(%reason, "unrecognised menu input");
                    writeln!(self.output, "Invalid option. Please try again.")?;
                    continue;
                }
            };

            let outcome = match option {
                MenuOption::AddTask => self.add_task(),
                MenuOption::ViewTasks => self.view_tasks(),
                MenuOption::UpdateStatus => self.update_status(),
                MenuOption::DeleteTask => self.delete_task(),
                MenuOption::Export => self.export().await,
                MenuOption::Exit => break,
            };

            match outcome {
                Ok(true) => {}
                Ok(false) => break,
                // Store errors are reported, never fatal; output errors are
                Err(TrackerError::Io(e)) if option != MenuOption::Export => {
                    return Err(TrackerError::Io(e))
                }
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }

        writeln!(self.output, "Exiting application")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nMenu:")?;
        for (index, option) in MenuOption::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, option.title())?;
        }
        write!(self.output, "Enter your option: ")?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints `label` and reads one line, without its line ending
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads raw bytes up to a newline; invalid UTF-8 is replaced, not fatal
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    // Each handler returns Ok(false) when input ended mid-prompt

    fn add_task(&mut self) -> Result<bool> {
        let Some(name) = self.prompt("Enter task name: ")? else {
            return Ok(false);
        };
        let Some(deadline) = self.prompt("Enter deadline (DD-MM-YYYY): ")? else {
            return Ok(false);
        };
        let Some(priority) = self.prompt("Enter priority (1-5) or type (High/Low): ")? else {
            return Ok(false);
        };

        let priority = match priority.trim().parse::<i64>() {
            Ok(value) => value,
            Err(_) => i64::from(Priority::from_str(&priority)?.value()),
        };

        self.store.add(&name, &deadline, priority)?;
        writeln!(self.output, "Task added successfully!")?;
        Ok(true)
    }

    fn view_tasks(&mut self) -> Result<bool> {
        if self.store.is_empty() {
            writeln!(self.output, "No tasks.")?;
            return Ok(true);
        }

        writeln!(self.output, "Current tasks:")?;
        for task in self.store.list() {
            writeln!(self.output, "{}", task)?;
        }
        Ok(true)
    }

    fn update_status(&mut self) -> Result<bool> {
        let Some(name) = self.prompt("Enter task name to update: ")? else {
            return Ok(false);
        };
        let Some(status) = self.prompt("Enter new status (Pending/Completed): ")? else {
            return Ok(false);
        };

        self.store.update_status(&name, &status)?;
        writeln!(self.output, "Task status updated successfully!")?;
        Ok(true)
    }

    fn delete_task(&mut self) -> Result<bool> {
        let Some(name) = self.prompt("Enter task name to delete: ")? else {
            return Ok(false);
        };

        self.store.delete(&name)?;
        writeln!(self.output, "Task '{}' deleted successfully!", name)?;
        Ok(true)
    }

    async fn export(&mut self) -> Result<bool> {
        let label = format!(
            "Enter export path (blank for {}): ",
            self.config.export_path.display()
        );
        let Some(path) = self.prompt(&label)? else {
            return Ok(false);
        };

        let path = match path.trim() {
            "" => self.config.export_path.clone(),
            given => PathBuf::from(given),
        };

        self.store
            .export_with(&FileExporter::new(&path), self.config.export_format)
            .await?;
        writeln!(self.output, "Tasks exported to {}.", path.display())?;
        Ok(true)
    }
}
