pub mod sorting;
pub mod task;

pub use sorting::{compare_tasks, sort_tasks, DeadlineOrder};
pub use task::{Deadline, Priority, Task, TaskKind};
