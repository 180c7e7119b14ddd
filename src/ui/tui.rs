use std::io::{Stdout, stdout};

use color_eyre::eyre::Result;
use crossterm::event::{Event as TermEvent, EventStream, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    is_raw_mode_enabled,
};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::event::Event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal and a reader task that forwards key presses and resizes.
///
/// No tick is produced; the main loop wakes on input, backend responses or the
/// next render deadline.
pub struct TuiRunner {
    terminal: Tui,
    events: UnboundedReceiver<Event>,
    sender: UnboundedSender<Event>,
    reader: Option<JoinHandle<()>>,
    shutdown: CancellationToken,
}

impl TuiRunner {
    pub fn new() -> Result<Self> {
        let (sender, events) = mpsc::unbounded_channel();
        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(stdout()))?,
            events,
            sender,
            reader: None,
            shutdown: CancellationToken::new(),
        })
    }

    pub fn enter(&mut self) -> Result<()> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen)?;
        self.terminal.clear()?;
        self.reader = Some(spawn_reader(self.sender.clone(), self.shutdown.clone()));
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.shutdown.cancel();
        if let Some(reader) = self.reader.take() {
            reader.abort();
        }
        restore_terminal()
    }

    pub async fn next_event(&mut self) -> Option<Event> {
        self.events.recv().await
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

/// Leaves raw mode and the alternate screen. Safe to call more than once, which
/// the panic hook relies on.
pub fn restore_terminal() -> Result<()> {
    if is_raw_mode_enabled()? {
        execute!(stdout(), LeaveAlternateScreen)?;
        disable_raw_mode()?;
    }
    Ok(())
}

fn spawn_reader(sender: UnboundedSender<Event>, shutdown: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut stream = EventStream::new();
        if sender.send(Event::Init).is_err() {
            return;
        }

        loop {
            let next = tokio::select! {
                () = shutdown.cancelled() => break,
                next = stream.next() => next,
            };
            let event = match next {
                Some(Ok(raw)) => match translate(raw) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(e)) => {
                    warn!(error = %e, "terminal event stream failed");
                    break;
                }
                None => break,
            };
            if sender.send(event).is_err() {
                break;
            }
        }
        debug!("terminal reader stopped");
    })
}

/// Keeps key presses (and repeats) and resizes; everything else is ignored.
fn translate(raw: TermEvent) -> Option<Event> {
    match raw {
        TermEvent::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            Some(Event::Key(key))
        }
        TermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    }
}
