use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use lakeview_app::action::Action;
use lakeview_app::detail_tab::DetailTab;
use lakeview_app::input_mode::InputMode;
use lakeview_app::state::AppState;

use super::Event;

pub fn handle_event(event: Event, state: &AppState) -> Action {
    match event {
        Event::Init => Action::Render,
        Event::Resize(w, h) => Action::Resize(w, h),
        Event::Key(key) => handle_key_event(key, state),
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match state.ui.input_mode {
        InputMode::Normal => handle_normal_mode(key),
        InputMode::Search => handle_search_mode(key),
        InputMode::QueryEditor => handle_query_editor_mode(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrevious,
        KeyCode::Enter => Action::ConfirmSelection,
        KeyCode::Char('/') => Action::EnterSearch,
        KeyCode::Char('r') => Action::RefreshAll,
        KeyCode::Esc | KeyCode::Char('x') => Action::DismissError,

        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
        KeyCode::Char('g') | KeyCode::Home => Action::SelectFirst,
        KeyCode::Char('G') | KeyCode::End => Action::SelectLast,

        // Detail panels
        KeyCode::Char('p') => Action::RefreshPreview,
        KeyCode::Char('l') => Action::CyclePreviewLimit,
        KeyCode::Char('i') => Action::EnterQueryEditor,
        KeyCode::Char('s') => Action::LoadStatistics,
        KeyCode::Char('[') => Action::PreviousTab,
        KeyCode::Char(']') => Action::NextTab,
        KeyCode::Char(c) => DetailTab::from_digit(c).map_or(Action::None, Action::SelectTab),

        _ => Action::None,
    }
}

fn handle_search_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('u'), m) if m.contains(KeyModifiers::CONTROL) => Action::SearchClear,
        (KeyCode::Esc | KeyCode::Enter, _) => Action::ExitSearch,
        (KeyCode::Backspace, _) => Action::SearchBackspace,
        (KeyCode::Char(c), _) => Action::SearchInput(c),
        _ => Action::None,
    }
}

fn handle_query_editor_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('u'), m) if m.contains(KeyModifiers::CONTROL) => Action::QueryClear,
        (KeyCode::Enter, _) => Action::ExecuteQuery,
        (KeyCode::Esc, _) => Action::ExitQueryEditor,
        (KeyCode::Backspace, _) => Action::QueryBackspace,
        (KeyCode::Char(c), _) => Action::QueryInput(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lakeview_app::settings::Settings;
    use rstest::rstest;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn state_in(mode: InputMode) -> AppState {
        let mut state = AppState::new(Settings::default());
        state.ui.input_mode = mode;
        state
    }

    mod normal_mode {
        use super::*;

        #[rstest]
        #[case(KeyCode::Char('q'), Action::Quit)]
        #[case(KeyCode::Tab, Action::FocusNext)]
        #[case(KeyCode::BackTab, Action::FocusPrevious)]
        #[case(KeyCode::Char('j'), Action::SelectNext)]
        #[case(KeyCode::Up, Action::SelectPrevious)]
        #[case(KeyCode::Char('G'), Action::SelectLast)]
        #[case(KeyCode::Enter, Action::ConfirmSelection)]
        #[case(KeyCode::Char('/'), Action::EnterSearch)]
        #[case(KeyCode::Char('r'), Action::RefreshAll)]
        #[case(KeyCode::Char('l'), Action::CyclePreviewLimit)]
        #[case(KeyCode::Char('s'), Action::LoadStatistics)]
        #[case(KeyCode::Esc, Action::DismissError)]
        #[case(KeyCode::Char(']'), Action::NextTab)]
        #[case(KeyCode::Char('3'), Action::SelectTab(DetailTab::Preview))]
        #[case(KeyCode::Char('9'), Action::None)]
        fn maps_key(#[case] code: KeyCode, #[case] expected: Action) {
            let state = state_in(InputMode::Normal);

            assert_eq!(handle_event(Event::Key(key(code)), &state), expected);
        }
    }

    mod search_mode {
        use super::*;

        #[test]
        fn letters_go_to_search_box() {
            let state = state_in(InputMode::Search);

            let action = handle_event(Event::Key(key(KeyCode::Char('q'))), &state);

            assert_eq!(action, Action::SearchInput('q'));
        }

        #[test]
        fn ctrl_u_clears() {
            let state = state_in(InputMode::Search);

            assert_eq!(handle_event(Event::Key(ctrl('u')), &state), Action::SearchClear);
        }

        #[test]
        fn enter_leaves_search() {
            let state = state_in(InputMode::Search);

            let action = handle_event(Event::Key(key(KeyCode::Enter)), &state);

            assert_eq!(action, Action::ExitSearch);
        }
    }

    mod query_editor_mode {
        use super::*;

        #[test]
        fn enter_executes() {
            let state = state_in(InputMode::QueryEditor);

            let action = handle_event(Event::Key(key(KeyCode::Enter)), &state);

            assert_eq!(action, Action::ExecuteQuery);
        }

        #[test]
        fn digits_are_text_not_tabs() {
            let state = state_in(InputMode::QueryEditor);

            let action = handle_event(Event::Key(key(KeyCode::Char('1'))), &state);

            assert_eq!(action, Action::QueryInput('1'));
        }
    }

    #[test]
    fn ctrl_c_quits_in_every_mode() {
        for mode in [InputMode::Normal, InputMode::Search, InputMode::QueryEditor] {
            let state = state_in(mode);
            assert_eq!(handle_event(Event::Key(ctrl('c')), &state), Action::Quit);
        }
    }
}
