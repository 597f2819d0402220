//! # todo-store
//!
//! A small unidirectional state container.
//!
//! ```text
//! Action ──→ Store::dispatch ──→ Reducer(state, action) ──→ new State
//!                                                              │
//!            listeners ←── notify (registration order) ←───────┘
//! ```
//!
//! - [`Reducer`]: pure `(state, action) -> state` function
//! - [`combine_reducers`]: builds one reducer over a [`StateTree`] where
//!   every named slice is owned by its own reducer
//! - [`Store`]: owns the current state and the listener registry, and is the
//!   only place where state is replaced
//!
//! ## Usage
//!
//! ```rust,ignore
//! use todo_store::{combine_reducers, Store};
//!
//! let root = combine_reducers()
//!     .slice("todos", todos)
//!     .slice("visibilityFilter", visibility_filter);
//!
//! let store = Store::new(root);
//! let unsubscribe = store.subscribe(|| println!("state changed"));
//!
//! store.dispatch(TodoAction::ToggleTodo { id: 0 });
//! unsubscribe.call();
//! ```
//!
//! The store is single-threaded: `dispatch` runs the reducer and the whole
//! notification pass before it returns. Hosts with several threads must
//! funnel all store access through one owner.

mod action;
mod combine;
mod reducer;
mod store;
mod subscription;

pub use action::{Action, INIT_ACTION_KIND};
pub use combine::{combine_reducers, CombineReducers, Slice, StateError, StateTree};
pub use reducer::Reducer;
pub use store::{Store, WeakStore};
pub use subscription::Unsubscribe;
