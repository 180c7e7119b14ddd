pub mod handler;

use crossterm::event::KeyEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Init,
    Key(KeyEvent),
    Resize(u16, u16),
}
