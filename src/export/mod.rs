use crate::{domain::Task, error::Result};
use async_trait::async_trait;
use std::{fmt, str::FromStr};

pub mod file_export;

pub use file_export::FileExporter;

/// Output formats for exported task lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// One `name,deadline,status,priority` line per task, no header
    #[default]
    Csv,
    /// Pretty-printed JSON array of task objects
    Json,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Invalid export format '{}'. Valid formats: csv, json",
                s
            )),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Destination for rendered task lists
#[async_trait]
pub trait Exporter: Send + Sync {
    /// Writes the rendered contents, replacing whatever was there before
    async fn write_all(&self, contents: &str) -> Result<()>;

    /// Human-readable name of the destination, used in log output
    fn describe(&self) -> String;
}

/// Renders tasks in the given format, in the order supplied
///
/// CSV fields are written as-is: a comma inside a name or status is not
/// quoted and will split the field when read back.
pub fn render_tasks<'a>(
    tasks: impl IntoIterator<Item = &'a Task>,
    format: ExportFormat,
) -> Result<String> {
    match format {
        ExportFormat::Csv => Ok(tasks
            .into_iter()
            .map(|task| {
                format!(
                    "{},{},{},{}\n",
                    task.name(),
                    task.deadline(),
                    task.status(),
                    task.priority()
                )
            })
            .collect()),
        ExportFormat::Json => {
            let tasks: Vec<&Task> = tasks.into_iter().collect();
            let mut json = serde_json::to_string_pretty(&tasks)?;
            json.push('\n');
            Ok(json)
        }
    }
}
