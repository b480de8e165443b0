//! Terminal size probing with environment fallback.
//!
//! `crossterm::terminal::size()` can fail or report nonsense when stdout is
//! not a tty (piped builds, CI). When it does, `LINES` and `COLUMNS` are
//! consulted, then hard defaults.

use tracing::debug;

pub const DEFAULT_COLS: u16 = 80;
pub const DEFAULT_ROWS: u16 = 24;

/// Dimensions outside this open interval are treated as bogus.
const MIN_VALID: u16 = 2;
const MAX_VALID: u16 = 29999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub cols: u16,
    pub rows: u16,
}

fn plausible(value: u16) -> bool {
    (MIN_VALID..=MAX_VALID).contains(&value)
}

/// Resolve one dimension: the probed value if plausible, else the
/// environment value if plausible, else the default. A probe of `0`
/// counts as missing.
pub fn normalize(probed: u16, env_value: Option<u16>, default: u16) -> u16 {
    if plausible(probed) {
        return probed;
    }
    match env_value {
        Some(v) if plausible(v) => v,
        _ => default,
    }
}

fn env_dimension(name: &str) -> Option<u16> {
    std::env::var(name).ok()?.trim().parse().ok()
}

/// Current terminal size, falling back to `LINES`/`COLUMNS` and then to
/// 80x24.
pub fn probe_size() -> TerminalSize {
    let (probed_cols, probed_rows) = crossterm::terminal::size().unwrap_or((0, 0));
    let size = TerminalSize {
        cols: normalize(probed_cols, env_dimension("COLUMNS"), DEFAULT_COLS),
        rows: normalize(probed_rows, env_dimension("LINES"), DEFAULT_ROWS),
    };
    debug!(target: "terminal.size", cols = size.cols, rows = size.rows, "size probed");
    size
}
