//! Entering and leaving full-screen mode.

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to the alternate screen and turn on mouse capture (wheel, clicks,
/// hover) and bracketed paste (for the contact form).
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(
        writer,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )
}

/// Undo [`enter_tui_mode`] and raw mode.
///
/// Errors are ignored; this runs from `Drop` and from the panic hook, and is
/// safe to call more than once.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(
        writer,
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen,
        Show
    );
    let _ = writer.flush();
}

/// Best-effort restore of stdout, for the panic path.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
