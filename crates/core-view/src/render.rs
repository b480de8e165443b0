//! Record formatting: shortened path, aligned columns, word wrap.
//!
//! `render_record` is a pure function from a record and a terminal width
//! to a finite sequence of text lines. Character emission, cursor motion,
//! and color escapes belong to the caller.

use core_collections::tokens;
use core_diag::{DiagnosticRecord, Severity};
use unicode_width::UnicodeWidthStr;

/// Column widths of the fixed prefix: path, line number, severity label.
pub const PATH_COLUMN_WIDTH: usize = 30;
pub const LINE_COLUMN_WIDTH: usize = 4;
pub const SEVERITY_COLUMN_WIDTH: usize = 10;

/// Width of the fixed prefix; continuation lines are padded to it so
/// wrapped description text aligns under the description column.
pub const PREFIX_WIDTH: usize =
    PATH_COLUMN_WIDTH + LINE_COLUMN_WIDTH + SEVERITY_COLUMN_WIDTH;

/// The description column never shrinks below this, whatever the terminal
/// reports.
pub const MIN_DESCRIPTION_WIDTH: usize = 50;

/// Trailing path segments kept by [`shorten_path`].
const SHOW_LAST_PATH_PARTS: usize = 2;

/// One record formatted for display: its severity (for the caller's color
/// choice) and one or more text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRecord {
    pub severity: Severity,
    pub lines: Vec<String>,
}

/// Keep only the last two path segments, marking the truncation with a
/// leading `.../`.
pub fn shorten_path(path: &str) -> String {
    let Ok(parts) = tokens::split(path, &['/']) else {
        return String::new();
    };
    let from = parts.count().saturating_sub(SHOW_LAST_PATH_PARTS);
    let tail = tokens::join_from(&parts, from, '/').unwrap_or_default();
    let truncated = parts
        .iter()
        .take(from)
        .flatten()
        .any(|part| !part.is_empty());
    if truncated {
        format!(".../{tail}")
    } else if path.starts_with('/') {
        format!("/{tail}")
    } else {
        tail
    }
}

/// Greedy word-by-word wrap. Words are space-separated and never split; a
/// word wider than `width` overflows its own line rather than breaking.
pub fn wrap_description(description: &str, width: usize) -> Vec<String> {
    let Ok(words) = tokens::split(description, &[' ']) else {
        return vec![String::new()];
    };
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in words.values() {
        if word.is_empty() {
            continue;
        }
        if !line.is_empty() && line.width() + 1 + word.width() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

/// Effective description column width for a terminal `cols` wide.
pub fn description_width(cols: usize) -> usize {
    cols.saturating_sub(MIN_DESCRIPTION_WIDTH + 4)
        .max(MIN_DESCRIPTION_WIDTH)
}

/// Format one record for a terminal `cols` wide. The first line carries
/// the aligned path / line-number / severity prefix; continuation lines
/// are padded to [`PREFIX_WIDTH`].
pub fn render_record(record: &DiagnosticRecord, cols: usize) -> RenderedRecord {
    let prefix = format!(
        "{:<pw$}{:<lw$}{:<sw$}",
        shorten_path(record.path()),
        record.line_number(),
        record.severity_label().trim(),
        pw = PATH_COLUMN_WIDTH,
        lw = LINE_COLUMN_WIDTH,
        sw = SEVERITY_COLUMN_WIDTH,
    );
    let description = record.description();
    let wrapped = wrap_description(description.trim(), description_width(cols));

    let mut lines = Vec::with_capacity(wrapped.len());
    let mut chunks = wrapped.into_iter();
    if let Some(first) = chunks.next() {
        lines.push(format!("{prefix}{first}"));
    }
    for chunk in chunks {
        lines.push(format!("{:<pad$}{chunk}", "", pad = PREFIX_WIDTH));
    }
    RenderedRecord {
        severity: record.severity(),
        lines,
    }
}
