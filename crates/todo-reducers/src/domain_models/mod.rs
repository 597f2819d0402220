//! Domain models
//!
//! Pure domain types, separate from how the store composes them.

pub mod todo;
pub mod visibility_filter;

pub use todo::{Todo, TodoList};
pub use visibility_filter::VisibilityFilter;
