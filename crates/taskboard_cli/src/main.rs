//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskboard_core::{
    BoardFilter, BoardService, InMemoryTaskStore, Priority, StateFilter, TaskDraft, WorkflowState,
};

fn main() {
    println!("taskboard_core ping={}", taskboard_core::ping());
    println!("taskboard_core version={}", taskboard_core::core_version());

    // Tiny seeded walk-through of the four operations and both views.
    let mut board = BoardService::new(InMemoryTaskStore::new());
    let report = board
        .create_task(TaskDraft {
            title: "write report".to_string(),
            description: "quarterly numbers".to_string(),
            priority: Priority::High,
            ..TaskDraft::default()
        })
        .expect("seed draft is well-formed");
    board
        .create_task(TaskDraft {
            title: "file expenses".to_string(),
            description: "last trip".to_string(),
            ..TaskDraft::default()
        })
        .expect("seed draft is well-formed");

    board.move_task(report, WorkflowState::Doing);

    let todo_only = BoardFilter {
        state: StateFilter::Only(WorkflowState::Todo),
        ..BoardFilter::default()
    };
    println!("tasks total={}", board.snapshot().len());
    println!("flat todo={}", board.flat_view(&todo_only).len());

    let grouped = board.grouped_view();
    println!(
        "grouped todo={} doing={} done={}",
        grouped.todo.len(),
        grouped.doing.len(),
        grouped.done.len()
    );
}
