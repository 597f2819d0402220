//! Root reducer of the todo application

use todo_store::{combine_reducers, CombineReducers, StateTree, Store};

use super::todo_reducer::todos;
use super::visibility_filter_reducer::visibility_filter;
use crate::actions::TodoAction;

/// Slice holding the [`TodoList`](crate::TodoList)
pub const TODOS: &str = "todos";
/// Slice holding the [`VisibilityFilter`](crate::VisibilityFilter)
pub const VISIBILITY_FILTER: &str = "visibilityFilter";

pub type TodoStore = Store<StateTree, TodoAction>;

/// The root reducer: `todos` and `visibilityFilter`, each owned by its own
/// reducer.
pub fn todo_app() -> CombineReducers<TodoAction> {
    combine_reducers()
        .slice(TODOS, todos)
        .slice(VISIBILITY_FILTER, visibility_filter)
}

pub fn create_todo_store() -> TodoStore {
    Store::new(todo_app())
}
