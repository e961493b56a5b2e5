//! Board use-case service.
//!
//! # Responsibility
//! - Provide the entry points the form and drag collaborators call.
//! - Validate drafts and patches before they reach the store, so the
//!   store only ever holds well-formed tasks.
//!
//! # Invariants
//! - Service APIs never bypass the store's mutation contract.
//! - Store-side not-found semantics pass through unchanged: edit,
//!   remove, and move are silent no-ops for unknown ids.

use crate::model::task::{
    Priority, Task, TaskId, TaskPatch, TaskValidationError, WorkflowState,
};
use crate::store::task_store::TaskStore;
use crate::view::projector::{flat_view, grouped_view, GroupedBoard};
use crate::view::state::BoardFilter;
use log::info;
use uuid::Uuid;

/// Fully validated form submission for a new task.
///
/// Defaults mirror the create form's initial values: lowest priority,
/// first workflow column, no image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub state: WorkflowState,
    pub image: Option<String>,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::Low,
            state: WorkflowState::Todo,
            image: None,
        }
    }
}

/// Use-case facade over a task store.
pub struct BoardService<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> BoardService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a task from a form draft, assigning a fresh stable id.
    ///
    /// # Contract
    /// - Returns the created id on success.
    /// - The draft's priority/state/image are taken as-is; enums are
    ///   closed and cannot carry invalid values.
    ///
    /// # Errors
    /// Validation failure for empty title or description; the store is
    /// untouched in that case.
    pub fn create_task(&mut self, draft: TaskDraft) -> Result<TaskId, TaskValidationError> {
        let mut task = Task::with_id(Uuid::new_v4(), draft.title, draft.description)?;
        task.priority = draft.priority;
        task.state = draft.state;
        task.image = draft.image;

        let id = task.id;
        self.store.create(task);
        info!(
            "event=board_create module=service status=ok id={id} total={}",
            self.store.len()
        );
        Ok(id)
    }

    /// Applies an edit-form patch to an existing task.
    ///
    /// Unknown ids are a silent no-op, matching the store contract.
    ///
    /// # Errors
    /// Validation failure when the patch blanks a required text field;
    /// the store is untouched in that case.
    pub fn edit_task(&mut self, id: TaskId, patch: &TaskPatch) -> Result<(), TaskValidationError> {
        patch.validate()?;
        self.store.update(id, patch);
        info!("event=board_edit module=service status=ok id={id}");
        Ok(())
    }

    /// Permanently removes a task. Silent no-op for unknown ids.
    pub fn remove_task(&mut self, id: TaskId) {
        self.store.delete(id);
        info!(
            "event=board_remove module=service status=ok id={id} total={}",
            self.store.len()
        );
    }

    /// Moves a task to another workflow column. This is the drop
    /// handler's entry point; only `state` changes.
    pub fn move_task(&mut self, id: TaskId, new_state: WorkflowState) {
        self.store.transition_state(id, new_state);
        info!("event=board_move module=service status=ok id={id} state={new_state:?}");
    }

    /// Point read by stable id.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    /// Read-only ordered snapshot of all current tasks.
    pub fn snapshot(&self) -> &[Task] {
        self.store.snapshot()
    }

    /// Flat list projection under the given filter selection.
    pub fn flat_view(&self, filter: &BoardFilter) -> Vec<&Task> {
        flat_view(self.store.snapshot(), filter)
    }

    /// Grouped kanban projection of the full snapshot. Filters do not
    /// apply in this mode.
    pub fn grouped_view(&self) -> GroupedBoard<'_> {
        grouped_view(self.store.snapshot())
    }
}
