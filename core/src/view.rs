//! Plain-text rendering of the list state.

use std::fmt;

use crate::controller::TodoListState;
use crate::messages::Locale;

/// The list view of a state in one locale. `Display` writes the full view.
#[derive(Debug, Clone, Copy)]
pub struct ListView<'a> {
    pub state: &'a TodoListState,
    pub locale: Locale,
}

impl fmt::Display for ListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { state, locale } = *self;
        writeln!(f, "{}", locale.heading())?;

        if let Some(failure) = state.last_error {
            writeln!(f, "! {}", locale.error_message(failure.kind))?;
        }

        if state.draft_title.is_empty() {
            writeln!(f, "> ({})", locale.draft_prompt())?;
        } else {
            writeln!(f, "> {}", state.draft_title)?;
        }

        if state.is_loading {
            return writeln!(f, "{}", locale.loading_indicator());
        }
        if state.items.is_empty() {
            return writeln!(f, "{}", locale.empty_indicator());
        }
        for (index, item) in state.items.iter().enumerate() {
            let mark = if item.completed { 'x' } else { ' ' };
            writeln!(f, "{:>3}. [{mark}] {}", index + 1, item.title)?;
        }
        Ok(())
    }
}

/// Render the list view: heading, error banner, draft, then the loading
/// indicator, the empty-state indicator, or one numbered line per item.
///
/// Item numbers are 1-based positions into `state.items`.
pub fn render(state: &TodoListState, locale: Locale) -> String {
    ListView { state, locale }.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::OperationFailure;
    use crate::messages::ErrorKind;
    use crate::types::{TodoId, TodoItem};

    #[test]
    fn empty_list_shows_empty_indicator() {
        let out = render(&TodoListState::default(), Locale::English);
        assert!(out.lines().any(|line| line == "No todos"), "{out}");
    }

    #[test]
    fn loading_hides_items() {
        let state = TodoListState {
            items: vec![TodoItem {
                id: TodoId::Number(1),
                title: "A".to_string(),
                completed: false,
            }],
            is_loading: true,
            ..TodoListState::default()
        };
        let out = render(&state, Locale::Japanese);
        assert!(out.contains("読み込み中..."));
        assert!(!out.contains("[ ] A"));
    }

    #[test]
    fn items_are_numbered_with_completion_marks() {
        let state = TodoListState {
            items: vec![
                TodoItem {
                    id: TodoId::Number(7),
                    title: "Buy milk".to_string(),
                    completed: true,
                },
                TodoItem {
                    id: TodoId::Number(3),
                    title: "Walk dog".to_string(),
                    completed: false,
                },
            ],
            draft_title: "Call mom".to_string(),
            last_error: Some(OperationFailure {
                kind: ErrorKind::DeleteFailed,
                status: Some(500),
            }),
            ..TodoListState::default()
        };
        let out = render(&state, Locale::English);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Todo List",
                "! Failed to delete todo",
                "> Call mom",
                "  1. [x] Buy milk",
                "  2. [ ] Walk dog",
            ]
        );
    }

    #[test]
    fn list_view_formats_like_render() {
        let state = TodoListState::default();
        let view = ListView {
            state: &state,
            locale: Locale::Japanese,
        };
        assert_eq!(format!("{view}"), render(&state, Locale::Japanese));
        assert!(view.to_string().ends_with("Todoがありません\n"));
    }
}
