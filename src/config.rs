use crate::{
    domain::DeadlineOrder,
    error::{Result, TrackerError},
    export::ExportFormat,
};
use std::{path::PathBuf, str::FromStr};

/// Runtime settings for the tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Export destination used when the menu prompt is left blank
    pub export_path: PathBuf,
    pub deadline_order: DeadlineOrder,
    pub export_format: ExportFormat,
}

impl TrackerConfig {
    pub const DEFAULT_EXPORT_PATH: &'static str = "tasks.txt";

    pub const ENV_EXPORT_PATH: &'static str = "TASK_TRACKER_EXPORT_PATH";
    pub const ENV_DEADLINE_ORDER: &'static str = "TASK_TRACKER_DEADLINE_ORDER";
    pub const ENV_EXPORT_FORMAT: &'static str = "TASK_TRACKER_EXPORT_FORMAT";

    /// Defaults overlaid with the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each variable
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup(Self::ENV_EXPORT_PATH).filter(|p| !p.trim().is_empty()) {
            config.export_path = PathBuf::from(path);
        }

        if let Some(order) = lookup(Self::ENV_DEADLINE_ORDER) {
            config.deadline_order = parse_setting(Self::ENV_DEADLINE_ORDER, &order)?;
        }

        if let Some(format) = lookup(Self::ENV_EXPORT_FORMAT) {
            config.export_format = parse_setting(Self::ENV_EXPORT_FORMAT, &format)?;
        }

        Ok(config)
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            export_path: PathBuf::from(Self::DEFAULT_EXPORT_PATH),
            deadline_order: DeadlineOrder::default(),
            export_format: ExportFormat::default(),
        }
    }
}

fn parse_setting<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr<Err = String>,
{
    value
        .trim()
        .parse()
        .map_err(|e| TrackerError::Config(format!("{}: {}", key, e)))
}
