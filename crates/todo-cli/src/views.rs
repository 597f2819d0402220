//! Text rendering of the todo state

use std::fmt::Write;

use strum::IntoEnumIterator;
use todo_reducers::{TodoState, VisibilityFilter};

/// Render the visible todos followed by the filter footer.
///
/// ```text
/// [ ] 0 Learn
/// [x] 1 Shop
/// Show: [All] Active Completed
/// ```
pub fn render(state: &TodoState) -> String {
    let mut out = String::new();

    let visible = state.visible_todos();
    if visible.is_empty() {
        out.push_str("(nothing to show)\n");
    }
    for todo in &visible {
        let mark = if todo.completed { 'x' } else { ' ' };
        let _ = writeln!(out, "[{}] {} {}", mark, todo.id, todo.text);
    }

    out.push_str(&footer(state.visibility_filter));
    out
}

/// The active filter is shown in brackets
fn footer(active: VisibilityFilter) -> String {
    let links: Vec<String> = VisibilityFilter::iter()
        .map(|filter| {
            if filter == active {
                format!("[{}]", filter.label())
            } else {
                filter.label().to_string()
            }
        })
        .collect();
    format!("Show: {}", links.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::rc::Rc;
    use todo_reducers::Todo;

    fn state(filter: VisibilityFilter) -> TodoState {
        TodoState {
            todos: vec![
                Rc::new(Todo::new(0, "Learn")),
                Rc::new(Todo::new(1, "Shop").toggled()),
            ],
            visibility_filter: filter,
        }
    }

    #[test]
    fn test_render_all() {
        assert_eq!(
            render(&state(VisibilityFilter::ShowAll)),
            "[ ] 0 Learn\n[x] 1 Shop\nShow: [All] Active Completed"
        );
    }

    #[test]
    fn test_render_completed() {
        assert_eq!(
            render(&state(VisibilityFilter::ShowCompleted)),
            "[x] 1 Shop\nShow: All Active [Completed]"
        );
    }

    #[test]
    fn test_render_empty() {
        let empty = TodoState {
            todos: Vec::new(),
            visibility_filter: VisibilityFilter::ShowActive,
        };
        assert_eq!(render(&empty), "(nothing to show)\nShow: All [Active] Completed");
    }
}
