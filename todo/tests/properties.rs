//! Property-based tests for the list algebra and the persisted layout.

use proptest::prelude::*;
use std::sync::Arc;
use todolist::{
    PersistenceBridge, TodoAction, TodoEnvironment, TodoId, TodoItem, TodoList, TodoReducer,
};
use todolist_core::environment::RandomIdGenerator;
use todolist_core::reducer::Reducer;
use todolist_core::storage::MemoryStorage;

fn env() -> TodoEnvironment {
    TodoEnvironment::new(Arc::new(RandomIdGenerator))
}

/// Trimmed, non-empty content within the length bound
fn contents() -> impl Strategy<Value = String> {
    "[a-z]{1,10}( [a-z]{1,10}){0,2}"
}

/// Lists with unique per-index ids and valid content
fn todo_lists(size: std::ops::Range<usize>) -> impl Strategy<Value = TodoList> {
    prop::collection::vec((contents(), any::<bool>()), size).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (content, done))| TodoItem {
                id: TodoId::from(format!("id-{i}")),
                content,
                done,
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn add_prepends_and_preserves_the_tail(
        list in todo_lists(0..8),
        content in contents(),
    ) {
        let mut next = list.clone();
        TodoReducer::new().reduce(
            &mut next,
            TodoAction::Add { content: format!("  {content} ") },
            &env(),
        );

        prop_assert_eq!(next.len(), list.len() + 1);
        prop_assert_eq!(next.items()[0].content.as_str(), content.as_str());
        prop_assert!(!next.items()[0].done);
        prop_assert_eq!(&next.items()[1..], list.items());
    }

    #[test]
    fn blank_add_is_identity(
        list in todo_lists(0..8),
        blank in "[ \t]{0,10}",
    ) {
        let mut next = list.clone();
        TodoReducer::new().reduce(&mut next, TodoAction::Add { content: blank }, &env());

        prop_assert_eq!(next, list);
    }

    #[test]
    fn toggle_twice_is_identity(
        list in todo_lists(1..8),
        index in any::<prop::sample::Index>(),
    ) {
        let id = list.items()[index.index(list.len())].id.clone();
        let reducer = TodoReducer::new();

        let mut next = list.clone();
        reducer.reduce(&mut next, TodoAction::Toggle { id: id.clone() }, &env());
        reducer.reduce(&mut next, TodoAction::Toggle { id }, &env());

        prop_assert_eq!(next, list);
    }

    #[test]
    fn remove_drops_exactly_the_matching_item(
        list in todo_lists(1..8),
        index in any::<prop::sample::Index>(),
    ) {
        let position = index.index(list.len());
        let id = list.items()[position].id.clone();

        let mut next = list.clone();
        TodoReducer::new().reduce(&mut next, TodoAction::Remove { id: id.clone() }, &env());

        prop_assert_eq!(next.len(), list.len() - 1);
        prop_assert!(!next.contains(&id));

        // Relative order of the remaining items is preserved.
        let mut expected = list.items().to_vec();
        expected.remove(position);
        prop_assert_eq!(next.items(), expected.as_slice());
    }

    #[test]
    fn remove_of_an_absent_id_is_identity(list in todo_lists(0..8)) {
        let mut next = list.clone();
        TodoReducer::new().reduce(
            &mut next,
            TodoAction::Remove { id: TodoId::from("absent") },
            &env(),
        );

        prop_assert_eq!(next, list);
    }

    #[test]
    fn save_then_load_round_trips(list in todo_lists(0..8)) {
        let bridge = PersistenceBridge::new(Arc::new(MemoryStorage::new()));
        bridge.save(&list).map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(bridge.load(), list);
    }

    #[test]
    fn ids_stay_unique_across_any_add_sequence(contents in prop::collection::vec(contents(), 1..20)) {
        let reducer = TodoReducer::new();
        let env = env();

        let mut list = TodoList::new();
        for content in contents {
            reducer.reduce(&mut list, TodoAction::Add { content }, &env);
        }

        let mut seen = std::collections::HashSet::new();
        prop_assert!(list.items().iter().all(|item| seen.insert(item.id.clone())));
    }
}
