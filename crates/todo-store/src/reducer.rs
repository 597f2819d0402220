//! Reducer contract

/// Reducer - pure function that produces the next state from the prior state
/// and an action.
///
/// Rules every reducer follows:
/// - an absent prior state is `S::default()`, so `Default` defines the
///   initial value of a slice
/// - no side effects, no dispatching
/// - unrecognized actions return the prior state unchanged
///
/// Any `Fn(S, &A) -> S` is a reducer, so plain functions can be used directly:
///
/// ```rust,ignore
/// fn counter(state: i64, action: &CounterAction) -> i64 {
///     match action {
///         CounterAction::Increment => state + 1,
///         _ => state,
///     }
/// }
/// ```
pub trait Reducer<S, A> {
    fn reduce(&self, state: S, action: &A) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(S, &A) -> S,
{
    fn reduce(&self, state: S, action: &A) -> S {
        self(state, action)
    }
}
