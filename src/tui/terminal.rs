use std::io::{self, stdout, IsTerminal, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::Result;

pub type CrosstermTerminal = ratatui::Terminal<CrosstermBackend<Stdout>>;

/// Terminal wrapper owning raw mode and the alternate screen.
/// Both are released on drop and on panic.
pub struct Terminal {
    terminal: CrosstermTerminal,
}

impl Terminal {
    /// Enter raw mode and the alternate screen
    pub fn new() -> Result<Self> {
        if !stdout().is_terminal() {
            return Err(io::Error::new(io::ErrorKind::Unsupported, "stdout is not a terminal").into());
        }
        install_panic_hook();
        enable_raw_mode()?;
        if let Err(err) = execute!(stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let terminal = Self::setup().inspect_err(|_| {
            let _ = Self::restore();
        })?;
        Ok(Self { terminal })
    }

    fn setup() -> Result<CrosstermTerminal> {
        let backend = CrosstermBackend::new(stdout());
        let terminal = ratatui::Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore() -> Result<()> {
        disable_raw_mode()?;
        execute!(stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Draw frame using provided closure
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = Self::restore();
    }
}

/// Restore the terminal before the existing panic hook prints its report
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = Terminal::restore();
        previous(info);
    }));
}
