use crossterm::event::{self, Event, KeyEvent};
use std::io;

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Blocking reader for terminal events.
///
/// Everything runs on the UI thread: one event is read, applied, and drawn
/// before the next one is read.
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Wait for the next event the app cares about.
    pub fn next(&self) -> io::Result<AppEvent> {
        loop {
            if let Some(event) = translate(event::read()?) {
                return Ok(event);
            }
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => Some(AppEvent::Key(key)),
        Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
        _ => None,
    }
}
