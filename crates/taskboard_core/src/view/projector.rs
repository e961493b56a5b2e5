//! Pure projections from a store snapshot to renderable sequences.
//!
//! # Responsibility
//! - Compute the flat filtered list and the grouped kanban partition.
//!
//! # Invariants
//! - Store order is preserved within every output sequence.
//! - `grouped_view` partitions the full snapshot: no duplication, no
//!   omission, filters ignored. The asymmetry with `flat_view` is a
//!   documented contract, enforced here by the signature (no filter
//!   parameter exists to pass).

use crate::model::task::{Task, WorkflowState};
use crate::view::state::BoardFilter;

/// Flat list projection: every task passing both filter dimensions,
/// in store order.
pub fn flat_view<'a>(snapshot: &'a [Task], filter: &BoardFilter) -> Vec<&'a Task> {
    snapshot.iter().filter(|task| filter.accepts(task)).collect()
}

/// Three-column kanban partition of the full, unfiltered snapshot.
pub fn grouped_view(snapshot: &[Task]) -> GroupedBoard<'_> {
    let mut board = GroupedBoard::default();
    for task in snapshot {
        board.column_mut(task.state).push(task);
    }
    board
}

/// Result of the grouped projection: one ordered column per workflow
/// state, each preserving relative store order.
#[derive(Debug, Default)]
pub struct GroupedBoard<'a> {
    pub todo: Vec<&'a Task>,
    pub doing: Vec<&'a Task>,
    pub done: Vec<&'a Task>,
}

impl<'a> GroupedBoard<'a> {
    /// Borrow the column for a workflow state.
    pub fn column(&self, state: WorkflowState) -> &[&'a Task] {
        match state {
            WorkflowState::Todo => &self.todo,
            WorkflowState::Doing => &self.doing,
            WorkflowState::Done => &self.done,
        }
    }

    fn column_mut(&mut self, state: WorkflowState) -> &mut Vec<&'a Task> {
        match state {
            WorkflowState::Todo => &mut self.todo,
            WorkflowState::Doing => &mut self.doing,
            WorkflowState::Done => &mut self.done,
        }
    }

    /// Total tasks across all three columns.
    pub fn len(&self) -> usize {
        self.todo.len() + self.doing.len() + self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
