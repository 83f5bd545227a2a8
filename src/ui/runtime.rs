use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;

/// Run the interactive board until the user quits.
///
/// Each iteration draws the current state, then blocks for one event and
/// applies it. State is only touched on this thread.
pub fn run(mut app: App) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new();
    tracing::info!("Board started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next()? {
            AppEvent::Key(key) => handle_key(&mut app, key),
            AppEvent::Resize(cols, rows) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
        }
    }

    drop(guard);
    tracing::info!("Board closed");
    Ok(())
}
