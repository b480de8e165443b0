//! Terminal ownership for the monitor.
//!
//! [`TerminalSession`] takes the terminal over for the whole run: raw
//! mode, the alternate screen, and a hidden cursor. Drop gives all three
//! back, so the shell is intact after a panic or an early return. Size
//! probing lives in [`size`]; a session probes on begin so a monitor
//! started on a size-less terminal (piped stdout, CI) still comes up with
//! the fallback dimensions.

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use std::io::stdout;
use tracing::debug;

pub mod size;
pub use size::{TerminalSize, probe_size};

/// Exclusive hold on the terminal between `begin` and drop.
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen under `title`. Returns the
    /// size seen at entry alongside the session.
    pub fn begin(title: &str) -> Result<(Self, TerminalSize)> {
        let size = probe_size();
        execute!(stdout(), SetTitle(title)).context("setting terminal title")?;
        enable_raw_mode().context("entering raw mode")?;
        execute!(stdout(), EnterAlternateScreen, Hide)
            .context("entering the alternate screen")?;
        debug!(
            target: "terminal",
            cols = size.cols,
            rows = size.rows,
            "session begun"
        );
        Ok((Self { active: true }, size))
    }

    /// Current terminal size; falls back like [`probe_size`].
    pub fn size(&self) -> TerminalSize {
        probe_size()
    }

    /// Hand the terminal back. Idempotent; drop calls it too.
    pub fn end(&mut self) -> Result<()> {
        if self.active {
            execute!(stdout(), LeaveAlternateScreen, Show)?;
            disable_raw_mode()?;
            self.active = false;
            debug!(target: "terminal", "session ended");
        }
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.end();
    }
}
