//! Selectors
//!
//! Derived data computed from state, never stored in it.

use std::rc::Rc;

use crate::domain_models::{Todo, TodoList, VisibilityFilter};

/// The todos that pass `filter`, in list order. Items are shared with the
/// input, not copied.
pub fn visible_todos(todos: &[Rc<Todo>], filter: VisibilityFilter) -> TodoList {
    todos
        .iter()
        .filter(|todo| filter.matches(todo))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TodoList {
        vec![
            Rc::new(Todo::new(0, "a")),
            Rc::new(Todo::new(1, "b").toggled()),
            Rc::new(Todo::new(2, "c")),
            Rc::new(Todo::new(3, "d").toggled()),
        ]
    }

    fn ids(todos: &[Rc<Todo>]) -> Vec<u64> {
        todos.iter().map(|todo| todo.id).collect()
    }

    #[test]
    fn test_show_all_keeps_everything() {
        let todos = sample();
        let visible = visible_todos(&todos, VisibilityFilter::ShowAll);

        assert_eq!(ids(&visible), vec![0, 1, 2, 3]);
        assert!(todos.iter().zip(&visible).all(|(a, b)| Rc::ptr_eq(a, b)));
    }

    #[test]
    fn test_show_completed_and_active_preserve_order() {
        let todos = sample();

        assert_eq!(ids(&visible_todos(&todos, VisibilityFilter::ShowCompleted)), vec![1, 3]);
        assert_eq!(ids(&visible_todos(&todos, VisibilityFilter::ShowActive)), vec![0, 2]);
    }

    #[test]
    fn test_empty_list() {
        assert!(visible_todos(&[], VisibilityFilter::ShowCompleted).is_empty());
    }
}
