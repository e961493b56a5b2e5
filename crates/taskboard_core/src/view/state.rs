//! Transient view selections, owned by the rendering layer.
//!
//! # Responsibility
//! - Model filter selections, the flat/grouped mode toggle, and the
//!   current edit target as explicit single-writer state.
//!
//! # Invariants
//! - Defaults match first render: flat list, no filters, nothing in
//!   edit mode.
//! - An explicit "all" selection and no selection are the same value;
//!   the distinction is not representable.

use crate::model::task::{Priority, Task, TaskId, WorkflowState};

/// Workflow-state filter dimension for the flat view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StateFilter {
    /// No constraint; covers both the explicit "all" choice and an
    /// untouched selector.
    #[default]
    All,
    Only(WorkflowState),
}

impl StateFilter {
    pub fn accepts(self, state: WorkflowState) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => state == wanted,
        }
    }
}

/// Priority filter dimension for the flat view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn accepts(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => priority == wanted,
        }
    }
}

/// Combined filter selection for the flat view.
///
/// The two dimensions are independent and combine conjunctively; there
/// is no OR mode. The grouped view ignores this struct entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardFilter {
    pub state: StateFilter,
    pub priority: PriorityFilter,
}

impl BoardFilter {
    /// Returns whether `task` passes both filter dimensions.
    pub fn accepts(&self, task: &Task) -> bool {
        self.state.accepts(task.state) && self.priority.accepts(task.priority)
    }
}

/// Rendering mode selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Single filtered list.
    #[default]
    FlatList,
    /// Three-column kanban partition.
    Grouped,
}

impl ViewMode {
    /// Manual toggle; no side effects on the task store.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::FlatList => Self::Grouped,
            Self::Grouped => Self::FlatList,
        };
    }
}

/// All transient selections a board screen holds between events.
///
/// Owned by the rendering layer, never by the store; folding this into
/// the authoritative collection is exactly what the design avoids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardViewState {
    pub mode: ViewMode,
    pub filter: BoardFilter,
    /// Task currently shown as an inline edit form, if any.
    pub editing: Option<TaskId>,
}

impl BoardViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks one task as the inline-edit target, replacing any
    /// previous target.
    pub fn begin_edit(&mut self, id: TaskId) {
        self.editing = Some(id);
    }

    /// Leaves edit mode. Safe to call when nothing is being edited.
    pub fn end_edit(&mut self) {
        self.editing = None;
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editing == Some(id)
    }
}
