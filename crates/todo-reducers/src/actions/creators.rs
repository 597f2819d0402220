//! Action creators
//!
//! Build well-formed todo actions so the presentation layer never assembles
//! records by hand.

use super::TodoAction;
use crate::domain_models::VisibilityFilter;

/// Creates todo actions and hands out todo ids.
///
/// Ids start at 0 and increase by one per [`TodoActionCreators::add_todo`].
#[derive(Debug, Default)]
pub struct TodoActionCreators {
    next_id: u64,
}

impl TodoActionCreators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue numbering from `next_id`, e.g. after preloading todos
    pub fn starting_at(next_id: u64) -> Self {
        Self { next_id }
    }

    pub fn add_todo(&mut self, text: impl Into<String>) -> TodoAction {
        let id = self.next_id;
        self.next_id += 1;
        TodoAction::AddTodo {
            id,
            text: text.into(),
        }
    }

    pub fn toggle_todo(id: u64) -> TodoAction {
        TodoAction::ToggleTodo { id }
    }

    pub fn set_visibility_filter(filter: VisibilityFilter) -> TodoAction {
        TodoAction::SetVisibilityFilter { filter }
    }

    /// The id the next `add_todo` will use
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
