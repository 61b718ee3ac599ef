//! Merging and ordering tasks from all scanned files.

use std::fmt;

use roll_core::Task;

/// Concatenate per-file task lists and sort them by day.
///
/// The sort is stable, so tasks sharing a day keep their discovery and
/// top-to-bottom order. Undated tasks sort first. Nothing is dropped.
#[must_use]
pub fn aggregate<I>(batches: I) -> Vec<Task>
where
    I: IntoIterator<Item = Vec<Task>>,
{
    let mut tasks: Vec<Task> = batches.into_iter().flatten().collect();
    tasks.sort_by_key(|task| task.date);
    tasks
}

/// Task counts reported after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
}

impl TaskSummary {
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|task| task.complete).count(),
        }
    }
}

impl fmt::Display for TaskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} completed out of {} total tasks",
            self.completed, self.total
        )
    }
}
