//! Task checklist store.
//!
//! # Responsibility
//! - Bulk-add tasks from newline-delimited input.
//! - Track completion by position or stable id.
//!
//! # Invariants
//! - List order is insertion order and never changes on toggle.
//! - Every task added by one `add_tasks` call shares the same timestamp.

use crate::clock::{Clock, SystemClock};
use crate::error::{CoreError, CoreResult};
use crate::model::task::{Task, TaskId, TaskSummary};
use log::{debug, info};

/// Ordered, in-memory task list.
#[derive(Debug, Clone)]
pub struct TaskStore<C: Clock = SystemClock> {
    clock: C,
    tasks: Vec<Task>,
}

impl Default for TaskStore<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> TaskStore<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            tasks: Vec::new(),
        }
    }

    /// Appends one pending task per non-blank line of `raw_text`.
    ///
    /// Returns the number of tasks added; `0` when the input is blank.
    pub fn add_tasks(&mut self, raw_text: &str) -> usize {
        if raw_text.trim().is_empty() {
            return 0;
        }

        let created_at = self.clock.now();
        let before = self.tasks.len();
        self.tasks
            .extend(raw_text.lines().filter_map(|line| Task::new(line, created_at)));
        let added = self.tasks.len() - before;

        info!(
            "event=tasks_added module=task_store added={} total={}",
            added,
            self.tasks.len()
        );
        added
    }

    /// Sets the completion flag of the task at `index`.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when `index` is past the end of the list.
    pub fn set_completed(&mut self, index: usize, value: bool) -> CoreResult<()> {
        let task = self.task_mut(index)?;
        task.completed = value;
        debug!("event=task_set_completed module=task_store index={index} completed={value}");
        Ok(())
    }

    /// Flips completion of the task at `index` and returns the new flag.
    pub fn toggle(&mut self, index: usize) -> CoreResult<bool> {
        let task = self.task_mut(index)?;
        task.completed = !task.completed;
        let value = task.completed;
        debug!("event=task_toggled module=task_store index={index} completed={value}");
        Ok(value)
    }

    /// Sets completion by stable id.
    ///
    /// # Errors
    /// - `InvalidArgument` when no task carries `id`.
    pub fn set_completed_by_id(&mut self, id: TaskId, value: bool) -> CoreResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| CoreError::invalid(format!("task not found: {id}")))?;
        task.completed = value;
        Ok(())
    }

    pub fn clear(&mut self) {
        let removed = self.tasks.len();
        self.tasks.clear();
        info!("event=tasks_cleared module=task_store removed={removed}");
    }

    pub fn summary(&self) -> TaskSummary {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        TaskSummary {
            total,
            completed,
            pending: total - completed,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn task_mut(&mut self, index: usize) -> CoreResult<&mut Task> {
        let len = self.tasks.len();
        self.tasks
            .get_mut(index)
            .ok_or(CoreError::IndexOutOfRange { index, len })
    }
}
