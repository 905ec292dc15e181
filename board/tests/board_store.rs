//! Integration tests for the board with Store
//!
//! These run the reducer through the real store, including the feedback step
//! of form submission, and drive the shell end to end over in-memory I/O.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use std::sync::Arc;
use todo_board::shell;
use todo_board::{
    BoardState, BoardStore, Painter, TodoAction, TodoEnvironment, TodoError, TodoReducer,
    ViewConfig, ViewFilter,
};
use todo_board_runtime::{Store, StoreError};
use todo_board_testing::test_clock;

fn create_store() -> BoardStore {
    let env = TodoEnvironment::new(Arc::new(test_clock()));
    Store::new(BoardState::new(), TodoReducer::new(), env)
}

async fn submit(store: &BoardStore, title: &str, description: &str) {
    for action in [
        TodoAction::ToggleForm,
        TodoAction::SetDraftTitle {
            title: title.to_string(),
        },
        TodoAction::SetDraftDescription {
            description: description.to_string(),
        },
        TodoAction::SubmitForm,
    ] {
        assert!(store.send(action).await.is_ok());
    }
}

#[tokio::test]
async fn test_submit_form_adds_and_closes() {
    let store = create_store();
    submit(&store, "Buy milk", "2%").await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.todos.len(), 1);
    assert_eq!(state.todos.items()[0].title, "Buy milk");
    assert!(!state.todos.items()[0].is_completed());
    assert!(!state.session.form_visible);
    assert!(state.session.draft.title.is_empty());
}

#[tokio::test]
async fn test_rejected_submit_keeps_form_and_draft() {
    let store = create_store();
    submit(&store, "Buy milk", "   ").await;

    let state = store.state(Clone::clone).await;
    assert!(state.todos.is_empty());
    assert!(state.session.form_visible);
    assert_eq!(state.session.draft.title, "Buy milk");
    assert_eq!(state.session.draft.description, "   ");
}

#[tokio::test]
async fn test_complete_then_filter() {
    let store = create_store();
    submit(&store, "a", "first").await;
    submit(&store, "b", "second").await;

    assert!(store.send(TodoAction::ToggleComplete { position: 1 }).await.is_ok());
    assert!(store.send(TodoAction::ToggleFilter).await.is_ok());

    let visible: Vec<(usize, String)> = store
        .state(|s| {
            s.todos
                .visible_items(s.session.filter)
                .iter()
                .map(|v| (v.position, v.item.title.clone()))
                .collect()
        })
        .await;
    assert_eq!(visible, vec![(1, "b".to_string())]);
    assert_eq!(store.state(|s| s.session.filter).await, ViewFilter::CompletedOnly);
}

#[tokio::test]
async fn test_contract_violation_surfaces_as_store_error() {
    let store = create_store();

    let result = store.send(TodoAction::Remove { position: 0 }).await;
    assert!(matches!(
        result,
        Err(StoreError::Reducer(TodoError::PositionOutOfRange { position: 0, len: 0 }))
    ));

    let result = store.send(TodoAction::CommitEdit).await;
    assert!(matches!(result, Err(StoreError::Reducer(TodoError::NoActiveEdit))));
}

#[tokio::test]
async fn test_edit_round_trip_through_store() {
    let store = create_store();
    submit(&store, "a", "first").await;

    for action in [
        TodoAction::BeginEdit { position: 0 },
        TodoAction::SetScratchTitle {
            title: "renamed".to_string(),
        },
        TodoAction::CommitEdit,
    ] {
        assert!(store.send(action).await.is_ok());
    }

    let item = store.state(|s| s.todos.items()[0].clone()).await;
    assert_eq!(item.title, "renamed");
    assert_eq!(item.description, "first");
}

async fn run_shell(script: &str) -> (String, Result<(), shell::ShellError>, BoardStore) {
    let store = create_store();
    let view = ViewConfig::default().with_local_time(false);
    let mut painter = Painter::new(Vec::new(), false);
    let result = shell::run(&store, &view, script.as_bytes(), &mut painter).await;
    let output = String::from_utf8_lossy(&painter.into_inner()).into_owned();
    (output, result, store)
}

#[tokio::test]
async fn test_shell_session() {
    let script = "\
form
title Buy milk
desc 2%
submit
form
title Walk dog
desc park
submit
toggle 2
filter
delete 1
dump
quit
toggle 1
";
    let (output, result, store) = run_shell(script).await;
    assert!(result.is_ok());

    let state = store.state(Clone::clone).await;
    assert_eq!(state.todos.len(), 1);
    assert_eq!(state.todos.items()[0].title, "Buy milk");
    assert!(!state.todos.items()[0].is_completed());

    assert!(output.contains("  1. [x] Walk dog"));
    assert!(output.contains("Completed on: 2025-01-01 00:00:00"));
    assert!(output.contains("\"title\": \"Buy milk\""));
}

#[tokio::test]
async fn test_shell_reports_typos_and_continues() {
    let (output, result, store) = run_shell("toggle 3\nsave\nbogus\nform\ntitle x\n").await;
    assert!(result.is_ok());

    assert!(output.contains("error: there is no row 3 on screen"));
    assert!(output.contains("error: no note is being edited"));
    assert!(output.contains("error: unknown command `bogus`"));
    assert_eq!(store.state(|s| s.session.draft.title.clone()).await, "x");
}

#[tokio::test]
async fn test_shell_help() {
    let (output, result, _store) = run_shell("help\n").await;
    assert!(result.is_ok());
    assert!(output.contains(shell::HELP));
}
