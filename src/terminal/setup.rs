//! Terminal setup and teardown functions.
//!
//! Low-level functions for entering and leaving TUI mode. `leave_tui_mode`
//! is safe to call multiple times and never panics.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode.
///
/// Enables raw mode and switches to the alternate screen so the user's
/// terminal content is preserved underneath the dashboard.
///
/// # Errors
///
/// Returns an error if any terminal command fails.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(writer, EnterAlternateScreen)
}

/// Leave TUI mode and restore the terminal to its normal state.
///
/// Cleanup order:
/// 1. Disables raw mode
/// 2. Leaves the alternate screen (restores original content)
/// 3. Shows the cursor
///
/// All errors are ignored; this runs on every exit path including panics.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen);
    let _ = execute!(writer, Show);
    let _ = writer.flush();
}

/// Restore the terminal after a panic or error.
///
/// More aggressive variant of [`leave_tui_mode`] that writes directly to
/// stdout, for use from contexts that no longer own the writer.
pub fn emergency_restore() {
    let mut stdout = io::stdout();
    leave_tui_mode(&mut stdout);
}
