//! Sequential task runner.
//!
//! A [`Pipeline`] holds an ordered list of [`Task`]s sharing one read-only
//! context. Tasks run one after the other; a task whose guard returns false
//! is skipped, and the first failing task stops the run. Tasks after the
//! failure are never started and stay [`TaskState::Pending`].

use std::io::Write;

use colored::Colorize;
use log::debug;

use crate::error::Result;

type Action<C> = Box<dyn Fn(&C) -> Result<()>>;
type Guard<C> = Box<dyn Fn(&C) -> bool>;

/// Lifecycle of a single task within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Running,
    Succeeded,
    Failed,
    Skipped,
}

impl TaskState {
    /// Whether the task has reached a final state in this run.
    pub fn is_terminal(self) -> bool {
        matches!(self, TaskState::Succeeded | TaskState::Failed | TaskState::Skipped)
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TaskState::Pending => "pending",
            TaskState::Running => "running",
            TaskState::Succeeded => "succeeded",
            TaskState::Failed => "failed",
            TaskState::Skipped => "skipped",
        };
        f.write_str(label)
    }
}

/// A named unit of work over a shared context `C`.
pub struct Task<C> {
    title: String,
    action: Action<C>,
    enabled: Option<Guard<C>>,
}

impl<C> Task<C> {
    pub fn new<S, F>(title: S, action: F) -> Self
    where
        S: Into<String>,
        F: Fn(&C) -> Result<()> + 'static,
    {
        Self { title: title.into(), action: Box::new(action), enabled: None }
    }

    /// Attaches a guard. It is evaluated right before the task would start,
    /// on every run.
    pub fn enabled<F>(mut self, guard: F) -> Self
    where
        F: Fn(&C) -> bool + 'static,
    {
        self.enabled = Some(Box::new(guard));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn is_enabled(&self, context: &C) -> bool {
        self.enabled.as_ref().map_or(true, |guard| guard(context))
    }
}

/// Ordered tasks together with their state in the current run.
pub struct Pipeline<C> {
    tasks: Vec<Task<C>>,
    states: Vec<TaskState>,
}

impl<C> Pipeline<C> {
    pub fn new(tasks: Vec<Task<C>>) -> Self {
        let states = vec![TaskState::Pending; tasks.len()];
        Self { tasks, states }
    }

    /// Runs every task in order, writing one status line per task to `out`.
    ///
    /// Previous states are reset first. Returns the error of the first failing
    /// task unchanged.
    pub fn run(&mut self, context: &C, out: &mut dyn Write) -> Result<()> {
        self.states.fill(TaskState::Pending);

        for (index, task) in self.tasks.iter().enumerate() {
            if !task.is_enabled(context) {
                self.states[index] = TaskState::Skipped;
                writeln!(out, "{} {} {}", "↓".yellow(), task.title, "[skipped]".dimmed())?;
                continue;
            }

            self.states[index] = TaskState::Running;
            debug!("Running task '{}'", task.title);

            match (task.action)(context) {
                Ok(()) => {
                    self.states[index] = TaskState::Succeeded;
                    writeln!(out, "{} {}", "✔".green(), task.title)?;
                }
                Err(err) => {
                    self.states[index] = TaskState::Failed;
                    if let Err(write_err) = writeln!(out, "{} {}", "✖".red(), task.title) {
                        debug!("Could not report failed task '{}': {write_err}", task.title);
                    }
                    return Err(err);
                }
            }
        }

        Ok(())
    }

    /// Titles and states, in execution order.
    pub fn states(&self) -> impl Iterator<Item = (&str, TaskState)> + '_ {
        self.tasks.iter().map(Task::title).zip(self.states.iter().copied())
    }

    pub fn state_of(&self, title: &str) -> Option<TaskState> {
        self.states().find(|(t, _)| *t == title).map(|(_, state)| state)
    }

    /// True once every task either succeeded or was skipped.
    pub fn is_complete(&self) -> bool {
        self.states
            .iter()
            .all(|state| matches!(state, TaskState::Succeeded | TaskState::Skipped))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
