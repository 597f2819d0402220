use todo_store::{Action, INIT_ACTION_KIND};

/// Actions of the standalone counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    Unrecognized(String),
}

impl Action for CounterAction {
    fn kind(&self) -> &str {
        match self {
            CounterAction::Increment => "INCREMENT",
            CounterAction::Decrement => "DECREMENT",
            CounterAction::Unrecognized(kind) => kind,
        }
    }

    fn init() -> Self {
        CounterAction::Unrecognized(INIT_ACTION_KIND.to_string())
    }
}
