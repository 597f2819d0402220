//! Typed view of the todo application state

use serde::Serialize;
use todo_store::{StateError, StateTree};

use crate::domain_models::{TodoList, VisibilityFilter};
use crate::reducers::app_reducer::{TODOS, VISIBILITY_FILTER};
use crate::selectors::visible_todos;

/// Snapshot of the two slices of the todo application.
///
/// Serializes to the same shape as the state tree:
/// `{ "todos": [...], "visibilityFilter": "SHOW_ALL" }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoState {
    pub todos: TodoList,
    pub visibility_filter: VisibilityFilter,
}

impl TodoState {
    pub fn from_tree(tree: &StateTree) -> Result<Self, StateError> {
        Ok(Self {
            todos: tree.try_get::<TodoList>(TODOS)?.clone(),
            visibility_filter: *tree.try_get::<VisibilityFilter>(VISIBILITY_FILTER)?,
        })
    }

    /// The todos the current filter lets through
    pub fn visible_todos(&self) -> TodoList {
        visible_todos(&self.todos, self.visibility_filter)
    }
}
