//! Todo list actions
//!
//! Actions travel as plain records `{ "type": "ADD_TODO", ...payload }`.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Value};
use todo_store::{Action, INIT_ACTION_KIND};

use super::ActionError;
use crate::domain_models::VisibilityFilter;

pub const ADD_TODO: &str = "ADD_TODO";
pub const TOGGLE_TODO: &str = "TOGGLE_TODO";
pub const SET_VISIBILITY_FILTER: &str = "SET_VISIBILITY_FILTER";

/// Actions of the todo application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a new item
    AddTodo { id: u64, text: String },
    /// Flip `completed` of the item with this id
    ToggleTodo { id: u64 },
    /// Change which items are visible
    SetVisibilityFilter { filter: VisibilityFilter },
    /// Any other kind; every reducer ignores it
    Unrecognized(String),
}

/// Wire shape of the recognized kinds
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
enum KnownTodoAction {
    AddTodo { id: u64, text: String },
    ToggleTodo { id: u64 },
    SetVisibilityFilter { filter: VisibilityFilter },
}

impl From<KnownTodoAction> for TodoAction {
    fn from(action: KnownTodoAction) -> Self {
        match action {
            KnownTodoAction::AddTodo { id, text } => TodoAction::AddTodo { id, text },
            KnownTodoAction::ToggleTodo { id } => TodoAction::ToggleTodo { id },
            KnownTodoAction::SetVisibilityFilter { filter } => {
                TodoAction::SetVisibilityFilter { filter }
            }
        }
    }
}

impl TodoAction {
    /// Decode an action record.
    ///
    /// A record without a string `type`, or with a type this application
    /// does not know, becomes [`TodoAction::Unrecognized`]. A known type
    /// with a broken payload is an error.
    pub fn from_json(value: &Value) -> Result<Self, ActionError> {
        let Some(kind) = value.get("type").and_then(Value::as_str) else {
            log::debug!("Action record without type: {}", value);
            return Ok(TodoAction::Unrecognized(String::new()));
        };

        if ![ADD_TODO, TOGGLE_TODO, SET_VISIBILITY_FILTER].contains(&kind) {
            log::debug!("Unrecognized action type {}", kind);
            return Ok(TodoAction::Unrecognized(kind.to_string()));
        }

        serde_json::from_value::<KnownTodoAction>(value.clone())
            .map(TodoAction::from)
            .map_err(|source| ActionError::InvalidPayload {
                kind: kind.to_string(),
                source,
            })
    }

    /// Parse and decode an action record from JSON text
    pub fn from_json_str(input: &str) -> Result<Self, ActionError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json(&value)
    }

    /// Encode as an action record
    pub fn to_json(&self) -> Value {
        match self {
            TodoAction::AddTodo { id, text } => json!({ "type": ADD_TODO, "id": id, "text": text }),
            TodoAction::ToggleTodo { id } => json!({ "type": TOGGLE_TODO, "id": id }),
            TodoAction::SetVisibilityFilter { filter } => {
                json!({ "type": SET_VISIBILITY_FILTER, "filter": filter })
            }
            TodoAction::Unrecognized(kind) => json!({ "type": kind }),
        }
    }
}

impl Action for TodoAction {
    fn kind(&self) -> &str {
        match self {
            TodoAction::AddTodo { .. } => ADD_TODO,
            TodoAction::ToggleTodo { .. } => TOGGLE_TODO,
            TodoAction::SetVisibilityFilter { .. } => SET_VISIBILITY_FILTER,
            TodoAction::Unrecognized(kind) => kind,
        }
    }

    fn init() -> Self {
        TodoAction::Unrecognized(INIT_ACTION_KIND.to_string())
    }
}

impl Serialize for TodoAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
