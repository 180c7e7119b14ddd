use color_eyre::eyre::Result;

use crate::view::Screen;

/// Commits a composed screen to some display surface.
pub trait Renderer {
    fn draw(&mut self, screen: &Screen) -> Result<()>;
}
