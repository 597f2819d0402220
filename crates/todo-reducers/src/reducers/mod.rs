//! Reducers
//!
//! One module per slice, plus the root reducer that combines them.

pub mod app_reducer;
pub mod counter_reducer;
pub mod todo_reducer;
pub mod visibility_filter_reducer;
