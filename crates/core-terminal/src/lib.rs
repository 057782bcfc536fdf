//! Terminal backend: screen lifecycle and crossterm input.
//!
//! `CrosstermBackend` owns raw mode and the alternate screen; `TerminalGuard`
//! restores the terminal when it goes out of scope, including on early
//! return. `CrosstermInput` is the blocking [`core_events::InputSource`]
//! reading from the same terminal.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Hide,
    cursor::Show,
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use std::io::stdout;

mod input;
pub use input::{CrosstermInput, map_event};

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    fn set_title(&mut self, title: &str) -> Result<()>;
    /// Current size as `(cols, rows)`.
    fn size(&self) -> Result<(u16, u16)>;
}

pub struct CrosstermBackend {
    entered: bool,
}

/// Leaves the terminal on drop.
pub struct TerminalGuard<'a> {
    backend: &'a mut CrosstermBackend,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }

    /// Enter, set the window title, and return a guard that leaves on drop.
    pub fn enter_guard(&mut self, title: &str) -> Result<TerminalGuard<'_>> {
        self.enter()?;
        self.set_title(title)?;
        Ok(TerminalGuard { backend: self })
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode().context("enable raw mode")?;
            execute!(stdout(), EnterAlternateScreen, Hide).context("enter alternate screen")?;
            self.entered = true;
            tracing::debug!(target: "runtime", "terminal_entered");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            execute!(stdout(), LeaveAlternateScreen, Show)?;
            disable_raw_mode()?;
            self.entered = false;
            tracing::debug!(target: "runtime", "terminal_left");
        }
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(stdout(), SetTitle(title))?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        crossterm::terminal::size().context("query terminal size")
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

impl TerminalGuard<'_> {
    pub fn backend(&self) -> &CrosstermBackend {
        self.backend
    }
}

impl Drop for TerminalGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = self.backend.leave() {
            tracing::error!(target: "runtime", error = %e, "terminal_restore_failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_starts_outside_terminal_mode() {
        let mut b = CrosstermBackend::new();
        assert!(!b.is_entered());
        // Leaving without entering touches nothing.
        b.leave().unwrap();
        assert!(!b.is_entered());
    }
}
