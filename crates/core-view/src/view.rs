//! Frame composition: stats header plus the visible record slice.

use crate::render::{RenderedRecord, render_record};
use crate::scroll::visible_window;
use core_diag::DiagnosticStore;
use tracing::trace;

/// Rows reserved above the record area: stats line plus a blank spacer.
pub const STATS_ROWS: usize = 2;

/// Rows the record area loses to the header and the bottom row the
/// terminal cannot fill.
pub const FRAME_RESERVED_ROWS: usize = 3;

/// Below this terminal height only the stats line is rendered.
pub const MIN_FRAME_ROWS: usize = 20;

/// Width of the leading "errors" label column. Emitters that style the
/// label separately split a formatted stats line at exactly this point.
pub const STATS_LABEL_WIDTH: usize = 10;

/// Record rows available for scroll arithmetic at a given terminal height.
pub fn scroll_rows(terminal_rows: usize) -> usize {
    terminal_rows.saturating_sub(STATS_ROWS).max(1)
}

/// Counters shown on the stats line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsLine {
    pub errors: usize,
    pub others: usize,
    pub auto_refresh: bool,
    pub offset: usize,
}

impl StatsLine {
    pub fn format(&self) -> String {
        format!(
            "{:<lw$}{:<8}{:<10}{:<8}{:<15}{:<6}{:<10}{}",
            "errors",
            self.errors,
            "others",
            self.others,
            "auto refresh",
            if self.auto_refresh { "on" } else { "off" },
            "scroll",
            self.offset,
            lw = STATS_LABEL_WIDTH,
        )
    }
}

/// One composed frame, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub stats: StatsLine,
    pub records: Vec<RenderedRecord>,
}

/// Compose the frame for the current store contents, scroll offset, and
/// terminal size. Terminals of [`MIN_FRAME_ROWS`] rows or fewer get the
/// stats line only.
pub fn compose_frame(
    store: &DiagnosticStore,
    offset: usize,
    cols: usize,
    rows: usize,
    auto_refresh: bool,
) -> Frame {
    let stats = StatsLine {
        errors: store.error_count(),
        others: store.other_count(),
        auto_refresh,
        offset,
    };
    let mut records = Vec::new();

    if rows > MIN_FRAME_ROWS {
        let content_rows = rows.saturating_sub(FRAME_RESERVED_ROWS);
        let window = visible_window(offset, content_rows, store.error_count(), store.other_count());
        if let Some(range) = window.errors {
            for record in store.errors().iter_range(range.from, range.to) {
                records.push(render_record(record, cols));
            }
        }
        if let Some(range) = window.others {
            for record in store.others().iter_range(range.from, range.to) {
                records.push(render_record(record, cols));
            }
        }
    }

    trace!(
        target: "view.frame",
        offset,
        rows,
        cols,
        visible = records.len(),
        "frame composed"
    );
    Frame { stats, records }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_diag::{DiagnosticStore, Severity};

    fn seeded_store(errors: usize, others: usize) -> DiagnosticStore {
        let mut store = DiagnosticStore::new(0, 0);
        for i in 0..errors {
            let line = format!("/p/e.c:{i}:1: error: e{i}\n");
            store.ingest(line.as_bytes());
        }
        for i in 0..others {
            let line = format!("/p/o.c:{i}:1: warning: o{i}\n");
            store.ingest(line.as_bytes());
        }
        store
    }

    #[test]
    fn stats_reflect_store_and_state() {
        let store = seeded_store(2, 3);
        let frame = compose_frame(&store, 1, 100, 40, true);
        assert_eq!(frame.stats.errors, 2);
        assert_eq!(frame.stats.others, 3);
        assert_eq!(frame.stats.offset, 1);
        let line = frame.stats.format();
        assert!(line.contains("errors"));
        assert!(line.contains("on"));
    }

    #[test]
    fn errors_render_before_others() {
        let store = seeded_store(2, 2);
        let frame = compose_frame(&store, 0, 100, 40, true);
        assert_eq!(frame.records.len(), 4);
        assert_eq!(frame.records[0].severity, Severity::Error);
        assert_eq!(frame.records[1].severity, Severity::Error);
        assert_eq!(frame.records[2].severity, Severity::Warning);
        assert_eq!(frame.records[3].severity, Severity::Warning);
    }

    #[test]
    fn offset_skips_leading_records() {
        let store = seeded_store(3, 5);
        // Offset 2: the last error, then the whole others queue.
        let frame = compose_frame(&store, 2, 100, 23, true);
        assert_eq!(frame.records.len(), 6);
        assert_eq!(frame.records[0].severity, Severity::Error);
        assert!(frame.records[0].lines[0].contains("e2"));
        assert!(frame.records[1].lines[0].contains("o0"));
        assert!(frame.records[5].lines[0].contains("o4"));
    }

    #[test]
    fn tiny_terminal_renders_stats_only() {
        let store = seeded_store(1, 1);
        let frame = compose_frame(&store, 0, 80, MIN_FRAME_ROWS, true);
        assert_eq!(frame.stats.errors, 1);
        assert!(frame.records.is_empty());
    }

    #[test]
    fn scroll_rows_floor() {
        assert_eq!(scroll_rows(24), 22);
        assert_eq!(scroll_rows(1), 1);
    }
}
