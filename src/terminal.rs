//! Raw mode and alternate screen setup with guaranteed teardown.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Keeps the terminal in raw mode on the alternate screen while alive.
///
/// Dropping the guard restores the terminal, so an error or panic after
/// [`TerminalGuard::enter`] never leaves the shell in raw mode.
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    /// Enable raw mode and switch to the alternate screen
    pub fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        // From here on, Drop undoes whatever part of the setup succeeded
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }

    /// Restore the terminal and report any failure
    pub fn restore(mut self) -> Result<()> {
        self.active = false;
        leave(&mut io::stdout()).context("Failed to restore terminal")
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = leave(&mut io::stdout());
        }
    }
}

/// Leave the alternate screen, show the cursor, then disable raw mode.
///
/// Raw mode is disabled even when writing the escape sequences fails.
fn leave<W: Write>(out: &mut W) -> io::Result<()> {
    let screen = execute!(out, LeaveAlternateScreen, cursor::Show);
    let raw = terminal::disable_raw_mode();
    screen.and(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_writes_screen_and_cursor_sequences() {
        let mut out = Vec::new();
        // Raw mode was never enabled in the test process, so disabling is a no-op
        leave(&mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        let screen = written.find("\x1b[?1049l").unwrap();
        let cursor = written.find("\x1b[?25h").unwrap();
        assert!(screen < cursor);
    }
}
