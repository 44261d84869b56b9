use crate::error::{Result, TrackerError};
use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::{fmt, str::FromStr, sync::OnceLock};

static DEADLINE_REGEX: OnceLock<Regex> = OnceLock::new();

fn deadline_regex() -> &'static Regex {
    DEADLINE_REGEX.get_or_init(|| {
        // DD-MM-YYYY with plausible day/month ranges; Feb 30 still passes
        Regex::new(r"^(0[1-9]|[12][0-9]|3[01])-(0[1-9]|1[0-2])-\d{4}$").unwrap()
    })
}

/// Task priority, always within 1..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Priority(u8);

impl Priority {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Priority used for the textual type "High"
    pub const HIGH: Priority = Priority(5);
    /// Priority used for the textual type "Low"
    pub const LOW: Priority = Priority(1);

    const RANGE_MESSAGE: &'static str = "Priority must be between 1 and 5.";

    /// Creates a priority, rejecting anything outside 1..=5
    pub fn new(value: i64) -> Result<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(TrackerError::Validation(Self::RANGE_MESSAGE.to_string()))
        }
    }

    /// Returns the numeric priority
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the High/Low classification for this priority
    pub fn kind(&self) -> TaskKind {
        if self.0 >= 4 {
            TaskKind::High
        } else {
            TaskKind::Low
        }
    }
}

impl FromStr for Priority {
    type Err = TrackerError;

    /// Accepts either a number or one of the textual types `High` / `Low`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(value) = s.parse::<i64>() {
            return Priority::new(value);
        }

        match s {
            "High" => Ok(Priority::HIGH),
            "Low" => Ok(Priority::LOW),
            _ => Err(TrackerError::Validation("Invalid task type.".to_string())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deadline text in `DD-MM-YYYY` form, checked by pattern only
///
/// Ordering on this type is plain string ordering, which is not calendar order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Deadline(String);

impl Deadline {
    const FORMAT_MESSAGE: &'static str = "Deadline must be in DD-MM-YYYY format.";

    pub fn parse(s: &str) -> Result<Self> {
        if deadline_regex().is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(TrackerError::Validation(Self::FORMAT_MESSAGE.to_string()))
        }
    }

    /// Returns the deadline text as entered
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Calendar date for this deadline, if it names a real day
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%d-%m-%Y").ok()
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification fixed at creation from the priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    High,
    Low,
}

impl TaskKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High Priority",
            Self::Low => "Low Priority",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A tracked task
///
/// Name, deadline and priority are fixed once built. Only the status changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    name: String,
    deadline: Deadline,
    status: String,
    priority: Priority,
    kind: TaskKind,
}

impl Task {
    pub const INITIAL_STATUS: &'static str = "Pending";

    /// Builds a task, reporting every constraint the inputs break
    pub(crate) fn new(name: &str, deadline: &str, priority: i64) -> Result<Self> {
        let mut problems = Vec::new();

        if name.trim().is_empty() {
            problems.push("Task name must not be empty.".to_string());
        }

        let priority = Priority::new(priority)
            .map_err(|e| problems.push(e.to_string()))
            .ok();
        let deadline = Deadline::parse(deadline)
            .map_err(|e| problems.push(e.to_string()))
            .ok();

        match (priority, deadline) {
            (Some(priority), Some(deadline)) if problems.is_empty() => Ok(Self {
                name: name.to_string(),
                deadline,
                status: Self::INITIAL_STATUS.to_string(),
                kind: priority.kind(),
                priority,
            }),
            _ => Err(TrackerError::Validation(problems.join(" "))),
        }
    }

    /// Returns the task name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the deadline
    pub fn deadline(&self) -> &Deadline {
        &self.deadline
    }

    /// Returns the current status text
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns the priority
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the classification fixed at creation
    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Overwrites the status; any text is accepted
    pub(crate) fn update_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Task: {}, Deadline: {}, Status: {}, Priority: {}",
            self.kind, self.name, self.deadline, self.status, self.priority
        )
    }
}
