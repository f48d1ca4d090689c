//! Terminal management with RAII cleanup.
//!
//! `TerminalManager` puts the terminal into full-screen mode (raw mode,
//! alternate screen, mouse capture, bracketed paste) and puts it back when it
//! is dropped, whether the portfolio exits normally or through an error.
//!
//! # Example
//!
//! ```no_run
//! use folio::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> folio::error::FolioResult<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     manager.terminal().draw(|_frame| {})?;
//!     // restored when `manager` is dropped
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, layout::Size, Terminal};
use std::io::{self, Stdout};

use crate::error::FolioResult;

/// Restores the terminal when dropped. Cleanup runs at most once.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the UI.
///
/// The panic hook from [`setup_panic_hook`] covers the paths where `Drop`
/// never runs; install it before creating the manager.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enter full-screen mode and clear the screen.
    ///
    /// If setup fails half way, whatever was enabled is rolled back before the
    /// error is returned.
    pub fn new() -> FolioResult<Self> {
        enable_raw_mode()?;
        // From here on the guard undoes raw mode if anything below fails.
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    pub fn size(&self) -> FolioResult<Size> {
        Ok(self.terminal.size()?)
    }

    /// Restore the terminal now instead of on drop.
    pub fn restore(&mut self) -> FolioResult<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()?;
        Ok(())
    }
}
