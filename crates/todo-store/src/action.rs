//! Action contract

use std::fmt;

/// Kind of the action a store dispatches to itself while it is constructed.
pub const INIT_ACTION_KIND: &str = "@@store/INIT";

/// An action describes an intended state transition.
///
/// Actions are transient: the store hands them to the reducer and never keeps
/// them. Reducers must treat any kind they do not recognize as a no-op.
pub trait Action: fmt::Debug {
    /// The discriminant of this action, e.g. `"ADD_TODO"`
    fn kind(&self) -> &str;

    /// Build the initialization action (kind [`INIT_ACTION_KIND`]).
    ///
    /// No reducer may recognize it, so running it lets every reducer fall
    /// back to its default state.
    fn init() -> Self;
}
