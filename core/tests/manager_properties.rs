//! Property and scenario tests for the todo manager

use proptest::prelude::*;
use std::collections::HashSet;
use tickbox_core::{Optional, TodoId, TodoManager};
use tickbox_testing::helpers::{init_test_logging, snapshot};
use tickbox_testing::properties::{Op, description, ops};
use tickbox_testing::{FixedIds, ManagerTest};

#[test]
fn toggle_delete_scenario() {
    init_test_logging();

    ManagerTest::new()
        .given_todo("A", false)
        .given_todo("B", true)
        .when(|manager| {
            assert_eq!(
                snapshot(manager),
                vec![(0, "A".to_string(), false), (1, "B".to_string(), true)]
            );

            manager.update_state(TodoId::new(0));
            assert_eq!(
                snapshot(manager),
                vec![(0, "A".to_string(), true), (1, "B".to_string(), true)]
            );

            manager.delete(TodoId::new(1));
        })
        .then_manager(|manager| {
            assert_eq!(snapshot(manager), vec![(0, "A".to_string(), true)]);
        })
        .run();
}

#[test]
fn add_after_delete_skips_old_id_with_custom_ids() {
    ManagerTest::with_ids(FixedIds::new([5]))
        .given_todo("A", false)
        .when(|manager| {
            manager.delete(TodoId::new(5));
            manager.add("A");
        })
        .then_todos(|todos| {
            assert_eq!(todos.len(), 1);
            assert_eq!(todos[0].id, TodoId::new(6));
        })
        .run();
}

proptest! {
    #[test]
    fn keys_match_ids_and_list_is_sorted(ops in ops()) {
        let mut manager = TodoManager::new();
        for op in &ops {
            op.apply(&mut manager);
        }

        let listed: Vec<TodoId> = manager.list().map(|t| t.id).collect();
        prop_assert!(listed.windows(2).all(|w| w[0] < w[1]));

        for id in listed {
            prop_assert_eq!(manager.get(id).map(|t| t.id), Optional::some(id));
        }
    }

    #[test]
    fn no_two_items_share_description_and_flag_after_adds(
        adds in prop::collection::vec((description(), any::<bool>()), 0..30)
    ) {
        let mut manager = TodoManager::new();
        for (d, c) in &adds {
            manager.add_with_state(d.clone(), *c);
        }

        let distinct: HashSet<(String, bool)> = adds.into_iter().collect();
        prop_assert_eq!(manager.len(), distinct.len());
    }

    #[test]
    fn identifiers_are_never_reused(ops in ops()) {
        let mut manager = TodoManager::new();
        let mut issued = Vec::new();

        for op in &ops {
            if let Op::Add(d, c) = op {
                if let Some(id) = manager.add_with_state(d.clone(), *c).into_option() {
                    issued.push(id);
                }
            } else {
                op.apply(&mut manager);
            }
        }

        prop_assert!(issued.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn toggle_twice_is_identity(ops in ops(), id in 0..12_u64) {
        let mut manager = TodoManager::new();
        for op in &ops {
            op.apply(&mut manager);
        }
        let before = snapshot(&manager);

        manager.update_state(TodoId::new(id));
        manager.update_state(TodoId::new(id));

        prop_assert_eq!(snapshot(&manager), before);
    }

    #[test]
    fn deleted_item_is_gone(ops in ops(), id in 0..12_u64) {
        let mut manager = TodoManager::new();
        for op in &ops {
            op.apply(&mut manager);
        }

        manager.delete(TodoId::new(id));

        prop_assert!(!manager.get(TodoId::new(id)).has_value());
    }
}
