//! Visibility filter model
//!
//! Which todos the list shows.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::Todo;

/// Closed set of filter modes.
///
/// Parses from the wire name (`SHOW_COMPLETED`) or the short name
/// (`completed`), case-insensitively. Displays as the wire name.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(ascii_case_insensitive)]
pub enum VisibilityFilter {
    /// Show every todo
    #[default]
    #[strum(to_string = "SHOW_ALL", serialize = "all")]
    ShowAll,
    /// Show todos that are not completed
    #[strum(to_string = "SHOW_ACTIVE", serialize = "active")]
    ShowActive,
    /// Show completed todos only
    #[strum(to_string = "SHOW_COMPLETED", serialize = "completed")]
    ShowCompleted,
}

impl VisibilityFilter {
    /// Check if a todo passes this filter
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            VisibilityFilter::ShowAll => true,
            VisibilityFilter::ShowActive => !todo.completed,
            VisibilityFilter::ShowCompleted => todo.completed,
        }
    }

    /// Get the display label for this filter
    pub fn label(&self) -> &'static str {
        match self {
            VisibilityFilter::ShowAll => "All",
            VisibilityFilter::ShowActive => "Active",
            VisibilityFilter::ShowCompleted => "Completed",
        }
    }
}
