pub mod fixtures;

use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use lakeview::app::action::Action;
use lakeview::app::effect::Effect;
use lakeview::app::reducer::reduce;
use lakeview::app::settings::Settings;
use lakeview::app::state::AppState;
use lakeview::app::view::compose;
use lakeview::ui::components::layout::MainLayout;

pub const TEST_WIDTH: u16 = 120;
pub const TEST_HEIGHT: u16 = 40;

const FIXED_TIME_MS: u128 = 0;

pub fn create_test_state() -> AppState {
    AppState::new(Settings::default())
}

pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).unwrap()
}

/// Feeds actions through the reducer in order and collects every effect.
pub fn dispatch(state: &mut AppState, actions: Vec<Action>, now: Instant) -> Vec<Effect> {
    actions
        .into_iter()
        .flat_map(|action| reduce(state, action, now))
        .collect()
}

pub fn render_to_string(terminal: &mut Terminal<TestBackend>, state: &AppState) -> String {
    let screen = compose(state);
    terminal
        .draw(|frame| MainLayout::render(frame, &screen, FIXED_TIME_MS))
        .unwrap();

    buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        if y < buffer.area.height - 1 {
            result.push('\n');
        }
    }
    result
}
