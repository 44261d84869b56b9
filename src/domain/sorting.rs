use crate::domain::task::{Deadline, Task};
use std::cmp::Ordering;
use std::str::FromStr;

/// How deadlines are compared when ordering the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeadlineOrder {
    /// Raw `DD-MM-YYYY` string comparison, so "01-02-2024" precedes "15-01-2024"
    #[default]
    Lexicographic,
    /// Calendar comparison of the parsed dates
    Chronological,
}

impl FromStr for DeadlineOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lexicographic" | "lex" => Ok(DeadlineOrder::Lexicographic),
            "chronological" | "chrono" => Ok(DeadlineOrder::Chronological),
            _ => Err(format!(
                "Invalid deadline order '{}'. Valid orders: lexicographic, chronological",
                s
            )),
        }
    }
}

/// Sorts tasks in place: ascending deadline, then descending priority
///
/// The sort is stable, so tasks with equal deadline and priority keep the
/// order they were added in.
///
/// # Examples
/// ```
/// use task_tracker::domain::sorting::DeadlineOrder;
/// use task_tracker::TaskStore;
///
/// let mut store = TaskStore::with_order(DeadlineOrder::Chronological);
/// store.add("B", "01-02-2024", 5).unwrap();
/// store.add("A", "15-01-2024", 3).unwrap();
///
/// let names: Vec<_> = store.list().map(|t| t.name()).collect();
/// assert_eq!(names, ["A", "B"]);
/// ```
pub fn sort_tasks(tasks: &mut [Task], order: DeadlineOrder) {
    tasks.sort_by(|a, b| compare_tasks(a, b, order));
}

/// Full ordering used by the store
pub fn compare_tasks(a: &Task, b: &Task, order: DeadlineOrder) -> Ordering {
    let by_deadline = match order {
        DeadlineOrder::Lexicographic => a.deadline().cmp(b.deadline()),
        DeadlineOrder::Chronological => compare_chronological(a.deadline(), b.deadline()),
    };

    by_deadline.then_with(|| b.priority().cmp(&a.priority()))
}

/// Compare deadlines as calendar dates
///
/// Dates that pass the pattern but name no real day (30-02-2024) sort after
/// every real date and fall back to string order among themselves.
fn compare_chronological(a: &Deadline, b: &Deadline) -> Ordering {
    match (a.to_date(), b.to_date()) {
        (Some(a_date), Some(b_date)) => a_date.cmp(&b_date),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
