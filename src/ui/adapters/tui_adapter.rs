use std::time::Instant;

use color_eyre::eyre::Result;

use lakeview_app::ports::Renderer;
use lakeview_app::view::Screen;
use crate::components::layout::MainLayout;
use crate::tui::TuiRunner;

/// [`Renderer`] that draws onto the real terminal.
pub struct TuiAdapter<'a> {
    tui: &'a mut TuiRunner,
    started_at: Instant,
}

impl<'a> TuiAdapter<'a> {
    /// `started_at` anchors spinner animation so frames advance smoothly across draws.
    pub fn new(tui: &'a mut TuiRunner, started_at: Instant) -> Self {
        Self { tui, started_at }
    }
}

impl Renderer for TuiAdapter<'_> {
    fn draw(&mut self, screen: &Screen) -> Result<()> {
        let time_ms = self.started_at.elapsed().as_millis();
        self.tui.terminal().draw(|frame| {
            MainLayout::render(frame, screen, time_ms);
        })?;
        Ok(())
    }
}
