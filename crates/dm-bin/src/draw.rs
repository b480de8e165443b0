//! Frame emission: a composed [`Frame`] painted onto the alternate screen.

use anyhow::Result;
use core_diag::Severity;
use core_view::{Frame, STATS_LABEL_WIDTH, StatsLine};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{Write, stdout};

fn severity_color(severity: Severity) -> Option<Color> {
    match severity {
        Severity::Error => Some(Color::Red),
        Severity::Warning => Some(Color::Yellow),
        Severity::Note => Some(Color::Cyan),
        Severity::Unknown => None,
    }
}

/// Split a formatted stats line into the colored "errors" label and the
/// rest. The layout itself lives in [`StatsLine::format`]; this only picks
/// the seam.
fn stats_segments(stats: &StatsLine) -> (String, String) {
    let line = stats.format();
    let seam = STATS_LABEL_WIDTH.min(line.len());
    let (label, rest) = line.split_at(seam);
    (label.to_string(), rest.to_string())
}

fn draw_stats<W: Write>(out: &mut W, stats: &StatsLine) -> Result<()> {
    let (label, rest) = stats_segments(stats);
    queue!(
        out,
        SetForegroundColor(Color::Red),
        Print(label),
        ResetColor,
        Print(rest),
    )?;
    Ok(())
}

/// Repaint the whole screen from `frame`. Records start two rows below
/// the stats line; wrapped records take one screen row per text line.
pub fn draw(frame: &Frame) -> Result<()> {
    let mut out = stdout();
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    draw_stats(&mut out, &frame.stats)?;

    let mut row: u16 = 2;
    for record in &frame.records {
        let color = severity_color(record.severity);
        if let Some(color) = color {
            queue!(out, SetForegroundColor(color))?;
        }
        for line in &record.lines {
            queue!(out, MoveTo(0, row), Print(line))?;
            row = row.saturating_add(1);
        }
        if color.is_some() {
            queue!(out, ResetColor)?;
        }
    }
    out.flush()?;
    Ok(())
}
