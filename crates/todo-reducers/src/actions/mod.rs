//! Actions module
//!
//! Every action type implements [`todo_store::Action`]. Each enum carries an
//! `Unrecognized` variant for kinds no reducer handles, which is also what
//! the store's initialization action and malformed JSON records decode to.

pub mod counter;
pub mod creators;
pub mod todo;

pub use counter::CounterAction;
pub use creators::TodoActionCreators;
pub use todo::TodoAction;

use thiserror::Error;

/// Errors raised while decoding an action record
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Action is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid payload for {kind}: {source}")]
    InvalidPayload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}
