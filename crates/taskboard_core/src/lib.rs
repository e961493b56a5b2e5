//! Core domain logic for the task board.
//! This crate is the single source of truth for business invariants:
//! the task model, the insertion-ordered store with its four mutation
//! operations, and the pure flat/grouped view projections.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Task, TaskId, TaskPatch, TaskValidationError, WorkflowState};
pub use service::board_service::{BoardService, TaskDraft};
pub use store::task_store::{InMemoryTaskStore, StoreError, StoreResult, TaskStore};
pub use view::projector::{flat_view, grouped_view, GroupedBoard};
pub use view::state::{BoardFilter, BoardViewState, PriorityFilter, StateFilter, ViewMode};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
