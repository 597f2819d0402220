//! Counter Reducer

use todo_store::Store;

use crate::actions::CounterAction;

pub type CounterStore = Store<i64, CounterAction>;

/// Reducer for a plain counter, starting at 0
pub fn counter(state: i64, action: &CounterAction) -> i64 {
    match action {
        CounterAction::Increment => state + 1,
        CounterAction::Decrement => state - 1,
        CounterAction::Unrecognized(_) => state,
    }
}

pub fn create_counter_store() -> CounterStore {
    Store::new(counter)
}
