//! Property tests for the note list
//!
//! Random lists are built from `(title, description, completed)` triples so
//! every property runs against mixed completed and open notes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use proptest::prelude::*;
use todo_board::{TodoItem, TodoStore, ViewFilter};
use todo_board_core::environment::Clock;
use todo_board_testing::test_clock;

fn text() -> impl Strategy<Value = String> {
    "[a-z][a-z ]{0,11}"
}

fn blank() -> impl Strategy<Value = String> {
    "[ \t]{0,4}"
}

fn list() -> impl Strategy<Value = Vec<(String, String, bool)>> {
    prop::collection::vec((text(), text(), any::<bool>()), 0..8)
}

fn build(entries: &[(String, String, bool)]) -> TodoStore {
    let mut store = TodoStore::new();
    for (position, (title, description, completed)) in entries.iter().enumerate() {
        assert!(store.add(title.clone(), description.clone()));
        if *completed {
            assert_eq!(store.toggle_complete(position, test_clock().now()), Ok(true));
        }
    }
    store
}

proptest! {
    #[test]
    fn add_appends_one_open_note(entries in list(), title in text(), description in text()) {
        let mut store = build(&entries);
        let before = store.len();

        prop_assert!(store.add(title.clone(), description.clone()));
        prop_assert_eq!(store.len(), before + 1);
        prop_assert_eq!(store.get(before), Some(&TodoItem::new(title, description)));
        prop_assert!(store.get(before).is_some_and(|item| item.completed_at().is_none()));
    }

    #[test]
    fn add_with_blank_field_is_ignored(entries in list(), filled in text(), empty in blank()) {
        let mut store = build(&entries);
        let before = store.clone();

        prop_assert!(!store.add(empty.clone(), filled.clone()));
        prop_assert!(!store.add(filled, empty.clone()));
        prop_assert!(!store.add(empty.clone(), empty));
        prop_assert_eq!(store, before);
    }

    #[test]
    fn toggle_twice_restores(entries in list(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!entries.is_empty());
        let mut store = build(&entries);
        let position = pick.index(entries.len());
        let was_completed = entries[position].2;

        let completed = store.toggle_complete(position, test_clock().now()).unwrap();
        prop_assert_eq!(completed, !was_completed);
        prop_assert_eq!(store.items()[position].completed_at().is_some(), completed);

        let completed = store.toggle_complete(position, test_clock().now()).unwrap();
        prop_assert_eq!(completed, was_completed);
        prop_assert_eq!(store.items()[position].completed_at().is_some(), completed);
    }

    #[test]
    fn open_note_toggled_twice_has_no_timestamp(title in text(), description in text()) {
        let mut store = TodoStore::new();
        store.add(title, description);
        store.toggle_complete(0, test_clock().now()).unwrap();
        store.toggle_complete(0, test_clock().now()).unwrap();
        prop_assert_eq!(store.items()[0].completed_at(), None);
    }

    #[test]
    fn completed_filter_is_ordered_subsequence(entries in list()) {
        let store = build(&entries);

        let all: Vec<usize> = store.visible_items(ViewFilter::All).iter().map(|v| v.position).collect();
        prop_assert_eq!(all, (0..entries.len()).collect::<Vec<_>>());

        let completed: Vec<usize> = store
            .visible_items(ViewFilter::CompletedOnly)
            .iter()
            .map(|v| v.position)
            .collect();
        let expected: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.2)
            .map(|(position, _)| position)
            .collect();
        prop_assert_eq!(completed, expected);
    }

    #[test]
    fn remove_shifts_successor(entries in list(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!entries.is_empty());
        let mut store = build(&entries);
        let position = pick.index(entries.len());
        let successor = store.get(position + 1).cloned();

        let removed = store.remove(position).unwrap();
        prop_assert_eq!(removed.title.as_str(), entries[position].0.as_str());
        prop_assert_eq!(store.len(), entries.len() - 1);
        prop_assert_eq!(store.get(position).cloned(), successor);
    }

    #[test]
    fn cancelled_edit_leaves_note(entries in list(), pick in any::<prop::sample::Index>(), scratch in text()) {
        prop_assume!(!entries.is_empty());
        let mut store = build(&entries);
        let position = pick.index(entries.len());
        let before = store.items().to_vec();

        store.begin_edit(position).unwrap();
        store.set_scratch_title(scratch).unwrap();
        prop_assert!(store.cancel_edit());
        prop_assert_eq!(store.items(), before.as_slice());
    }

    #[test]
    fn committed_edit_keeps_completion(
        entries in list(),
        pick in any::<prop::sample::Index>(),
        title in ".{0,12}",
        description in ".{0,12}",
    ) {
        prop_assume!(!entries.is_empty());
        let mut store = build(&entries);
        let position = pick.index(entries.len());
        let completed_at = store.items()[position].completed_at();

        store.begin_edit(position).unwrap();
        store.set_scratch_title(title.clone()).unwrap();
        store.set_scratch_description(description.clone()).unwrap();
        prop_assert_eq!(store.commit_edit(), Ok(position));

        let item = &store.items()[position];
        prop_assert_eq!(&item.title, &title);
        prop_assert_eq!(&item.description, &description);
        prop_assert_eq!(item.completed_at(), completed_at);
    }
}

#[test]
fn scenario_add_to_empty_list() {
    let mut store = TodoStore::new();
    assert!(store.add("Buy milk".to_string(), "2%".to_string()));

    assert_eq!(
        store.items(),
        &[TodoItem::new("Buy milk".to_string(), "2%".to_string())]
    );
    assert!(!store.items()[0].is_completed());
    assert_eq!(store.items()[0].completed_at(), None);
}

#[test]
fn scenario_complete_then_filter() {
    let mut store = TodoStore::new();
    store.add("Buy milk".to_string(), "2%".to_string());

    assert_eq!(store.toggle_complete(0, test_clock().now()), Ok(true));
    assert!(store.items()[0].completed_at().is_some());
    assert_eq!(store.visible_items(ViewFilter::CompletedOnly).len(), 1);
    assert_eq!(store.visible_items(ViewFilter::All).len(), 1);
}

#[test]
fn scenario_remove_first_of_two() {
    let mut store = TodoStore::new();
    store.add("first".to_string(), "1".to_string());
    store.add("second".to_string(), "2".to_string());

    assert!(store.remove(0).is_ok());
    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].title, "second");
}
