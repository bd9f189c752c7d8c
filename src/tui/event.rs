use crossterm::event::{self, KeyEvent, KeyEventKind};

use crate::error::Result;

/// Terminal events the app reacts to
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize event
    Resize,
}

/// Block until the next key press or resize
pub fn read_event() -> Result<Event> {
    loop {
        match event::read()? {
            event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                return Ok(Event::Key(key));
            }
            event::Event::Resize(_, _) => return Ok(Event::Resize),
            _ => {}
        }
    }
}
