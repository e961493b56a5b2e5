//! Task store contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the authoritative, insertion-ordered task collection.
//! - Apply create/update/delete/transition mutations atomically with
//!   respect to the single-threaded event model.
//!
//! # Invariants
//! - `create` preserves insertion order; callers guarantee id
//!   uniqueness (ids come from a v4 generator upstream).
//! - Mutating an absent id is a silent no-op on the silent operations
//!   and `StoreError::NotFound` on the checked ones; the store state
//!   after either call is identical.
//! - `snapshot` reflects the latest completed mutation.

use crate::model::task::{Task, TaskId, TaskPatch, WorkflowState};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error surfaced by the checked store operations.
///
/// The silent operations discard this; it exists so tests and future
/// multi-writer callers can observe a miss instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    NotFound(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Mutation and snapshot contract for a task collection.
///
/// The four silent operations are the boundary the form and drag
/// collaborators call; they never fail. The `try_` companions report
/// `NotFound` for the same inputs and are otherwise equivalent.
pub trait TaskStore {
    /// Appends a task. The caller guarantees `task.id` is not already
    /// present; the store does not deduplicate.
    fn create(&mut self, task: Task);

    /// Merges `patch` onto the matching task.
    ///
    /// # Errors
    /// `StoreError::NotFound` when no task has this id.
    fn try_update(&mut self, id: TaskId, patch: &TaskPatch) -> StoreResult<()>;

    /// Removes the matching task permanently. No tombstone is kept.
    ///
    /// # Errors
    /// `StoreError::NotFound` when no task has this id.
    fn try_delete(&mut self, id: TaskId) -> StoreResult<()>;

    /// Sets only the `state` field of the matching task. The task's
    /// position in insertion order is unaffected.
    ///
    /// # Errors
    /// `StoreError::NotFound` when no task has this id.
    fn try_transition_state(&mut self, id: TaskId, new_state: WorkflowState) -> StoreResult<()>;

    /// Read-only ordered view of the current collection.
    fn snapshot(&self) -> &[Task];

    /// Point read by stable id.
    fn get(&self, id: TaskId) -> Option<&Task>;

    /// Merges `patch` onto the matching task; silent no-op when the id
    /// is absent.
    fn update(&mut self, id: TaskId, patch: &TaskPatch) {
        if self.try_update(id, patch).is_err() {
            debug!("event=task_update_miss module=store status=noop id={id}");
        }
    }

    /// Removes the matching task; silent no-op when the id is absent,
    /// which makes repeated deletes idempotent.
    fn delete(&mut self, id: TaskId) {
        if self.try_delete(id).is_err() {
            debug!("event=task_delete_miss module=store status=noop id={id}");
        }
    }

    /// Sets only `state`; silent no-op when the id is absent. This is
    /// the operation the drag collaborator invokes on drop.
    fn transition_state(&mut self, id: TaskId, new_state: WorkflowState) {
        if self.try_transition_state(id, new_state).is_err() {
            debug!("event=task_transition_miss module=store status=noop id={id}");
        }
    }

    /// Number of tasks currently held.
    fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Returns whether the store holds no tasks.
    fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}

/// Insertion-ordered in-memory task store.
///
/// A plain `Vec` keeps list rendering stable without any secondary
/// index; boards are small enough that linear id scans are fine.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: Vec<Task>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }
}

impl TaskStore for InMemoryTaskStore {
    fn create(&mut self, task: Task) {
        debug!(
            "event=task_created module=store status=ok id={} total={}",
            task.id,
            self.tasks.len() + 1
        );
        self.tasks.push(task);
    }

    fn try_update(&mut self, id: TaskId, patch: &TaskPatch) -> StoreResult<()> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.tasks[index].apply_patch(patch);
        debug!("event=task_updated module=store status=ok id={id}");
        Ok(())
    }

    fn try_delete(&mut self, id: TaskId) -> StoreResult<()> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.tasks.remove(index);
        debug!(
            "event=task_deleted module=store status=ok id={id} total={}",
            self.tasks.len()
        );
        Ok(())
    }

    fn try_transition_state(&mut self, id: TaskId, new_state: WorkflowState) -> StoreResult<()> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.tasks[index].state = new_state;
        debug!("event=task_transitioned module=store status=ok id={id} state={new_state:?}");
        Ok(())
    }

    fn snapshot(&self) -> &[Task] {
        &self.tasks
    }

    fn get(&self, id: TaskId) -> Option<&Task> {
        self.position(id).map(|index| &self.tasks[index])
    }
}
