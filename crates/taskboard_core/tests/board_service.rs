use taskboard_core::{
    BoardFilter, BoardService, InMemoryTaskStore, Priority, StateFilter, TaskDraft, TaskPatch,
    TaskValidationError, WorkflowState,
};
use uuid::Uuid;

fn service() -> BoardService<InMemoryTaskStore> {
    BoardService::new(InMemoryTaskStore::new())
}

#[test]
fn create_task_assigns_fresh_distinct_ids() {
    let mut board = service();

    let draft = TaskDraft {
        title: "write report".to_string(),
        description: "quarterly numbers".to_string(),
        ..TaskDraft::default()
    };
    let first = board.create_task(draft.clone()).unwrap();
    let second = board.create_task(draft).unwrap();

    assert_ne!(first, second);
    assert_eq!(board.snapshot().len(), 2);
    assert_eq!(board.task(first).unwrap().title, "write report");
}

#[test]
fn create_task_carries_draft_fields() {
    let mut board = service();

    let id = board
        .create_task(TaskDraft {
            title: "design cover".to_string(),
            description: "sketch three options".to_string(),
            priority: Priority::High,
            state: WorkflowState::Doing,
            image: Some("data:image/png;base64,AAAA".to_string()),
        })
        .unwrap();

    let task = board.task(id).unwrap();
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.state, WorkflowState::Doing);
    assert_eq!(task.image.as_deref(), Some("data:image/png;base64,AAAA"));
}

#[test]
fn create_task_rejects_blank_draft_and_leaves_store_untouched() {
    let mut board = service();

    let err = board
        .create_task(TaskDraft {
            title: "   ".to_string(),
            description: "body".to_string(),
            ..TaskDraft::default()
        })
        .unwrap_err();

    assert_eq!(err, TaskValidationError::EmptyTitle);
    assert!(board.snapshot().is_empty());
}

#[test]
fn edit_task_applies_patch_and_rejects_blanking() {
    let mut board = service();
    let id = board
        .create_task(TaskDraft {
            title: "draft".to_string(),
            description: "body".to_string(),
            ..TaskDraft::default()
        })
        .unwrap();

    let patch = TaskPatch {
        title: Some("final".to_string()),
        priority: Some(Priority::Medium),
        ..TaskPatch::default()
    };
    board.edit_task(id, &patch).unwrap();
    assert_eq!(board.task(id).unwrap().title, "final");
    assert_eq!(board.task(id).unwrap().priority, Priority::Medium);

    let blanking = TaskPatch {
        title: Some(String::new()),
        ..TaskPatch::default()
    };
    let err = board.edit_task(id, &blanking).unwrap_err();
    assert_eq!(err, TaskValidationError::EmptyTitle);
    assert_eq!(board.task(id).unwrap().title, "final");
}

#[test]
fn edit_unknown_id_is_a_silent_noop() {
    let mut board = service();
    let id = board
        .create_task(TaskDraft {
            title: "kept".to_string(),
            description: "body".to_string(),
            ..TaskDraft::default()
        })
        .unwrap();
    let before = board.snapshot().to_vec();

    let patch = TaskPatch {
        title: Some("never applied".to_string()),
        ..TaskPatch::default()
    };
    board.edit_task(Uuid::new_v4(), &patch).unwrap();

    assert_eq!(board.snapshot(), &before[..]);
    assert_eq!(board.task(id).unwrap().title, "kept");
}

#[test]
fn remove_and_move_pass_through_store_semantics() {
    let mut board = service();
    let keep = board
        .create_task(TaskDraft {
            title: "keep".to_string(),
            description: "body".to_string(),
            ..TaskDraft::default()
        })
        .unwrap();
    let discard = board
        .create_task(TaskDraft {
            title: "drop".to_string(),
            description: "body".to_string(),
            ..TaskDraft::default()
        })
        .unwrap();

    board.remove_task(discard);
    assert!(board.task(discard).is_none());
    board.remove_task(discard);
    assert_eq!(board.snapshot().len(), 1);

    board.move_task(keep, WorkflowState::Done);
    assert_eq!(board.task(keep).unwrap().state, WorkflowState::Done);
    board.move_task(Uuid::new_v4(), WorkflowState::Doing);
    assert_eq!(board.snapshot().len(), 1);
}

#[test]
fn service_views_match_projector_contracts() {
    let mut board = service();
    for (title, state) in [
        ("t1", WorkflowState::Todo),
        ("t2", WorkflowState::Doing),
        ("t3", WorkflowState::Todo),
    ] {
        board
            .create_task(TaskDraft {
                title: title.to_string(),
                description: "body".to_string(),
                state,
                ..TaskDraft::default()
            })
            .unwrap();
    }

    let filter = BoardFilter {
        state: StateFilter::Only(WorkflowState::Todo),
        ..BoardFilter::default()
    };
    let flat = board.flat_view(&filter);
    let titles: Vec<_> = flat.iter().map(|task| task.title.as_str()).collect();
    assert_eq!(titles, ["t1", "t3"]);

    let grouped = board.grouped_view();
    assert_eq!(grouped.todo.len(), 2);
    assert_eq!(grouped.doing.len(), 1);
    assert_eq!(grouped.done.len(), 0);
    assert_eq!(grouped.len(), 3);
}
