//! Task record, enums, and partial-update payload.
//!
//! # Responsibility
//! - Define the canonical `Task` shape shared by store, views, and UI.
//! - Provide constructors that establish the required-field invariants.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` and `description` are non-empty after trimming.
//! - A patch never touches identity; `TaskPatch` has no id field.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task in a board.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Urgency attribute, independent of workflow position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Workflow position of a task; one column per variant in grouped view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowState {
    /// Created but not started.
    Todo,
    /// Work is in progress.
    Doing,
    /// Completed.
    Done,
}

impl WorkflowState {
    /// All workflow states in column display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::Doing, Self::Done];
}

/// Validation error for required task text fields.
///
/// Enum values and invalid inputs never reach the core: the form layer
/// constrains them before a `Task` exists. Only free text can be wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
    EmptyDescription,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::EmptyDescription => write!(f, "task description must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Canonical task record managed by the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id used for lookups, edits, and drag targeting.
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub state: WorkflowState,
    /// Opaque client-local image reference (typically a data URI).
    /// Absent key on the wire means no image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Task {
    /// Creates a task with a fresh stable id and form defaults
    /// (`Priority::Low`, `WorkflowState::Todo`, no image).
    ///
    /// # Errors
    /// Returns a validation error when `title` or `description` is
    /// empty or whitespace-only.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), title, description)
    }

    /// Creates a task with a caller-provided stable id.
    ///
    /// Used by import/test paths where identity already exists
    /// externally. The caller guarantees the id is unique within the
    /// store it will be appended to.
    ///
    /// # Errors
    /// Same validation contract as [`Task::new`].
    pub fn with_id(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            title: title.into(),
            description: description.into(),
            priority: Priority::Low,
            state: WorkflowState::Todo,
            image: None,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks the required-text invariants.
    ///
    /// # Errors
    /// Returns the first violated field, title before description.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.description.trim().is_empty() {
            return Err(TaskValidationError::EmptyDescription);
        }
        Ok(())
    }

    /// Merges present patch fields onto this task, leaving absent
    /// fields untouched. Identity is not part of the patch and can
    /// never change here.
    pub fn apply_patch(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
        if let Some(image) = &patch.image {
            self.image = Some(image.clone());
        }
    }
}

/// Partial update payload for an existing task.
///
/// Every field is optional; `None` means "leave untouched". Note the
/// asymmetry for `image`: a patch can set or replace an image but not
/// clear one, matching the edit form, which never submits an explicit
/// empty image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub state: Option<WorkflowState>,
    pub image: Option<String>,
}

impl TaskPatch {
    /// Returns whether this patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.state.is_none()
            && self.image.is_none()
    }

    /// Checks that any text fields present are non-empty, mirroring
    /// the create-path requirements for the fields a patch replaces.
    ///
    /// # Errors
    /// Returns the first violated field, title before description.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(TaskValidationError::EmptyTitle);
            }
        }
        if let Some(description) = &self.description {
            if description.trim().is_empty() {
                return Err(TaskValidationError::EmptyDescription);
            }
        }
        Ok(())
    }
}
