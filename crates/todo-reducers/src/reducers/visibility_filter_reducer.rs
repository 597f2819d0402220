//! Visibility Filter Reducer

use crate::actions::TodoAction;
use crate::domain_models::VisibilityFilter;

/// Reducer for the visibility filter, defaulting to `SHOW_ALL`
pub fn visibility_filter(state: VisibilityFilter, action: &TodoAction) -> VisibilityFilter {
    match action {
        TodoAction::SetVisibilityFilter { filter } => *filter,
        _ => state,
    }
}
