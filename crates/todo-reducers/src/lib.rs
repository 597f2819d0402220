//! Todo list reducers
//!
//! The todo application built on `todo-store`:
//! - a todo list slice (`todos`) and a visibility filter slice
//!   (`visibilityFilter`) combined into one root reducer, [`todo_app`]
//! - a standalone counter reducer
//! - selectors and action creators used by the presentation layer
//!
//! ```rust,ignore
//! use todo_reducers::{create_todo_store, TodoActionCreators, TodoState};
//!
//! let store = create_todo_store();
//! let mut actions = TodoActionCreators::new();
//!
//! store.dispatch(actions.add_todo("Learn"));
//! let state = TodoState::from_tree(&store.get_state())?;
//! ```

pub mod actions;
pub mod domain_models;
pub mod reducers;
pub mod selectors;
pub mod state;

pub use actions::{ActionError, CounterAction, TodoAction, TodoActionCreators};
pub use domain_models::{Todo, TodoList, VisibilityFilter};
pub use reducers::app_reducer::{create_todo_store, todo_app, TodoStore, TODOS, VISIBILITY_FILTER};
pub use reducers::counter_reducer::{counter, create_counter_store, CounterStore};
pub use selectors::visible_todos;
pub use state::TodoState;
