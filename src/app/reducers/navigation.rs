//! Navigation sub-reducer: pane focus, cursors and confirming the item under the cursor.

use std::time::Instant;

use crate::action::Action;
use crate::effect::Effect;
use crate::focused_pane::FocusedPane;
use crate::state::AppState;
use crate::ui_state::UiState;

pub fn reduce_navigation(
    state: &mut AppState,
    action: &Action,
    _now: Instant,
) -> Option<Vec<Effect>> {
    match action {
        Action::FocusNext => {
            state.ui.focused_pane = state.ui.focused_pane.next();
            Some(vec![])
        }
        Action::FocusPrevious => {
            state.ui.focused_pane = state.ui.focused_pane.prev();
            Some(vec![])
        }

        Action::SelectNext => {
            move_cursor(state, 1);
            Some(vec![])
        }
        Action::SelectPrevious => {
            move_cursor(state, -1);
            Some(vec![])
        }
        Action::SelectFirst => {
            move_cursor(state, isize::MIN);
            Some(vec![])
        }
        Action::SelectLast => {
            move_cursor(state, isize::MAX);
            Some(vec![])
        }

        Action::ConfirmSelection => {
            let next = match state.ui.focused_pane {
                FocusedPane::Namespaces => match state.ui.namespace_cursor {
                    0 => Some(Action::SelectNamespace(None)),
                    idx => state
                        .catalog
                        .namespaces
                        .get(idx - 1)
                        .cloned()
                        .map(|ns| Action::SelectNamespace(Some(ns))),
                },
                FocusedPane::Tables => state.table_under_cursor().cloned().map(Action::SelectTable),
                FocusedPane::Detail => None,
            };
            Some(next.map_or_else(Vec::new, |a| vec![Effect::DispatchActions(vec![a])]))
        }

        _ => None,
    }
}

fn move_cursor(state: &mut AppState, delta: isize) {
    match state.ui.focused_pane {
        // +1 for the "All Namespaces" entry
        FocusedPane::Namespaces => UiState::move_cursor(
            &mut state.ui.namespace_cursor,
            state.catalog.namespaces.len() + 1,
            delta,
        ),
        FocusedPane::Tables => {
            let len = state.visible_tables().len();
            UiState::move_cursor(&mut state.ui.table_cursor, len, delta);
        }
        FocusedPane::Detail => {
            state.ui.detail_scroll = match delta {
                isize::MIN => 0,
                d if d < 0 => state.ui.detail_scroll.saturating_sub(1),
                isize::MAX => u16::MAX,
                _ => state.ui.detail_scroll.saturating_add(1),
            };
        }
    }
}
