//! Todo Reducer
//!
//! `todo` handles a single item, `todos` the whole list and delegates item
//! updates to `todo`.

use std::rc::Rc;

use crate::actions::TodoAction;
use crate::domain_models::{Todo, TodoList};

/// Reducer for one todo item.
///
/// Only a toggle aimed at this item's id produces a new item; everything else
/// returns the same `Rc`.
pub fn todo(state: Rc<Todo>, action: &TodoAction) -> Rc<Todo> {
    match action {
        TodoAction::ToggleTodo { id } if state.id == *id => Rc::new(state.toggled()),
        _ => state,
    }
}

/// Reducer for the todo list
pub fn todos(mut state: TodoList, action: &TodoAction) -> TodoList {
    match action {
        TodoAction::AddTodo { id, text } => {
            state.push(Rc::new(Todo::new(*id, text.clone())));
            state
        }
        TodoAction::ToggleTodo { .. } => state.into_iter().map(|item| todo(item, action)).collect(),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::VisibilityFilter;
    use pretty_assertions::assert_eq;

    fn item(id: u64, text: &str, completed: bool) -> Rc<Todo> {
        Rc::new(Todo {
            id,
            text: text.to_string(),
            completed,
        })
    }

    fn two_items() -> TodoList {
        vec![item(0, "Learn Redux", false), item(1, "Go shopping", false)]
    }

    fn unknown_actions() -> Vec<TodoAction> {
        vec![
            TodoAction::Unrecognized("bla".to_string()),
            TodoAction::Unrecognized(String::new()),
            TodoAction::SetVisibilityFilter {
                filter: VisibilityFilter::ShowCompleted,
            },
        ]
    }

    #[test]
    fn test_add_todo() {
        let state_before = Vec::new();
        let action = TodoAction::AddTodo {
            id: 0,
            text: "Learn Redux".to_string(),
        };

        let state_after = todos(state_before, &action);
        assert_eq!(state_after, vec![item(0, "Learn Redux", false)]);
    }

    #[test]
    fn test_add_appends_and_keeps_existing_items() {
        let before = two_items();
        let kept: Vec<Rc<Todo>> = before.iter().map(Rc::clone).collect();

        let after = todos(
            before,
            &TodoAction::AddTodo {
                id: 2,
                text: "Cook".to_string(),
            },
        );

        assert_eq!(after.len(), kept.len() + 1);
        for (old, new) in kept.iter().zip(&after) {
            assert!(Rc::ptr_eq(old, new));
        }
        assert_eq!(*after[2], Todo::new(2, "Cook"));
    }

    #[test]
    fn test_toggle_todo() {
        let state_after = todos(two_items(), &TodoAction::ToggleTodo { id: 1 });

        assert_eq!(
            state_after,
            vec![item(0, "Learn Redux", false), item(1, "Go shopping", true)]
        );
    }

    #[test]
    fn test_toggle_replaces_only_matching_item() {
        let before = two_items();
        let kept: Vec<Rc<Todo>> = before.iter().map(Rc::clone).collect();

        let after = todos(before, &TodoAction::ToggleTodo { id: 0 });

        assert!(!Rc::ptr_eq(&kept[0], &after[0]));
        assert!(Rc::ptr_eq(&kept[1], &after[1]));
        assert!(after[0].completed);
        assert_eq!(after[0].text, kept[0].text);
    }

    #[test]
    fn test_toggle_twice_restores_value() {
        let before = two_items();
        let original = Rc::clone(&before[1]);

        let once = todos(before, &TodoAction::ToggleTodo { id: 1 });
        let twice = todos(once, &TodoAction::ToggleTodo { id: 1 });

        assert_eq!(*twice[1], *original);
    }

    #[test]
    fn test_toggle_unknown_id_keeps_every_item() {
        let before = two_items();
        let kept: Vec<Rc<Todo>> = before.iter().map(Rc::clone).collect();

        let after = todos(before, &TodoAction::ToggleTodo { id: 99 });
        assert!(kept.iter().zip(&after).all(|(old, new)| Rc::ptr_eq(old, new)));
    }

    #[test]
    fn test_unknown_action_returns_same_list() {
        for action in unknown_actions() {
            let before = two_items();
            let buffer = before.as_ptr();

            let after = todos(before, &action);
            assert!(std::ptr::eq(after.as_ptr(), buffer));
        }
    }

    #[test]
    fn test_item_reducer_ignores_other_ids_and_kinds() {
        let current = item(3, "Read", false);

        let other_id = todo(Rc::clone(&current), &TodoAction::ToggleTodo { id: 4 });
        assert!(Rc::ptr_eq(&current, &other_id));

        for action in unknown_actions() {
            let same = todo(Rc::clone(&current), &action);
            assert!(Rc::ptr_eq(&current, &same));
        }
    }
}
