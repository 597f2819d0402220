use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// A single todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// The todo list slice. Items are shared so unchanged items keep their
/// identity across state transitions.
pub type TodoList = Vec<Rc<Todo>>;

impl Todo {
    /// A new, not yet completed item
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Copy of this item with `completed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}
