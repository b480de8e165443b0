//! Viewport offset arithmetic over the virtual concatenation
//! errors ++ others.
//!
//! The offset is a single scalar in `[0, total - 1]` (pinned to 0 when
//! empty) and is recomputed from the queues' current sizes on every move;
//! it is never stored redundantly against them, so it stays consistent
//! while the queues mutate between renders.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    PageUp,
    PageDown,
}

/// Compute the next offset for one movement. `viewport_rows` is the number
/// of record rows visible at once; `total` is the current virtual length.
pub fn step(
    current: usize,
    direction: ScrollDirection,
    viewport_rows: usize,
    total: usize,
) -> usize {
    if total == 0 {
        return 0;
    }
    match direction {
        ScrollDirection::Down => (current + 1).min(total - 1),
        ScrollDirection::Up => current.saturating_sub(1),
        ScrollDirection::PageDown => (current + viewport_rows.saturating_sub(1)).min(total - 1),
        ScrollDirection::PageUp => {
            if current > viewport_rows {
                current - viewport_rows + 1
            } else {
                0
            }
        }
    }
}

/// Scroll position plus the viewport height it was computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    offset: usize,
    viewport_rows: usize,
}

impl ScrollState {
    pub fn new(viewport_rows: usize) -> Self {
        Self {
            offset: 0,
            viewport_rows,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    /// Track a terminal resize; the offset is left alone and re-clamped by
    /// the next movement or window computation.
    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows;
    }

    /// Apply one movement against the current total. Returns the new
    /// offset.
    pub fn scroll(&mut self, direction: ScrollDirection, total: usize) -> usize {
        self.offset = step(self.offset, direction, self.viewport_rows, total);
        self.offset
    }
}

/// Inclusive positional range within one physical queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRange {
    pub from: usize,
    pub to: usize,
}

/// Which sub-ranges of the two physical queues fall inside the viewport
/// `[offset, offset + rows - 1]` of the virtual concatenation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleWindow {
    pub errors: Option<SegmentRange>,
    pub others: Option<SegmentRange>,
}

/// Two-segment viewport computation. The record at virtual position
/// `errors_count` (the first of the others queue) must be drawn exactly
/// once: an offset past the errors queue addresses others directly, an
/// offset inside it spills the remaining rows onto the head of others.
pub fn visible_window(
    offset: usize,
    rows: usize,
    errors_count: usize,
    others_count: usize,
) -> VisibleWindow {
    let mut window = VisibleWindow::default();
    if rows == 0 {
        return window;
    }

    if offset > errors_count {
        let from = offset - errors_count;
        if from < others_count {
            window.others = Some(SegmentRange {
                from,
                to: (from + rows - 1).min(others_count - 1),
            });
        }
        return window;
    }

    if offset < errors_count {
        window.errors = Some(SegmentRange {
            from: offset,
            to: (offset + rows - 1).min(errors_count - 1),
        });
    }
    let overflow = (offset + rows).saturating_sub(errors_count);
    if overflow > 0 && others_count > 0 {
        window.others = Some(SegmentRange {
            from: 0,
            to: (overflow - 1).min(others_count - 1),
        });
    }
    window
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_clamps_at_last_record() {
        assert_eq!(step(6, ScrollDirection::Down, 10, 8), 7);
        assert_eq!(step(7, ScrollDirection::Down, 10, 8), 7);
    }

    #[test]
    fn up_clamps_at_zero() {
        assert_eq!(step(1, ScrollDirection::Up, 10, 8), 0);
        assert_eq!(step(0, ScrollDirection::Up, 10, 8), 0);
    }

    #[test]
    fn page_moves_by_viewport_minus_one() {
        assert_eq!(step(0, ScrollDirection::PageDown, 5, 20), 4);
        assert_eq!(step(4, ScrollDirection::PageDown, 5, 20), 8);
        assert_eq!(step(8, ScrollDirection::PageUp, 5, 20), 4);
    }

    #[test]
    fn page_down_clamps_at_end() {
        assert_eq!(step(18, ScrollDirection::PageDown, 5, 20), 19);
    }

    #[test]
    fn page_up_at_or_below_one_page_goes_to_top() {
        assert_eq!(step(5, ScrollDirection::PageUp, 5, 20), 0);
        assert_eq!(step(3, ScrollDirection::PageUp, 5, 20), 0);
    }

    #[test]
    fn empty_total_pins_to_zero() {
        for dir in [
            ScrollDirection::Up,
            ScrollDirection::Down,
            ScrollDirection::PageUp,
            ScrollDirection::PageDown,
        ] {
            assert_eq!(step(3, dir, 5, 0), 0);
        }
    }

    #[test]
    fn window_spanning_both_queues() {
        // errors=3 others=5, offset=2 height=4: one error record left
        // (position 2), then the first three others.
        let w = visible_window(2, 4, 3, 5);
        assert_eq!(w.errors, Some(SegmentRange { from: 2, to: 2 }));
        assert_eq!(w.others, Some(SegmentRange { from: 0, to: 2 }));
    }

    #[test]
    fn window_entirely_in_errors() {
        let w = visible_window(0, 2, 5, 5);
        assert_eq!(w.errors, Some(SegmentRange { from: 0, to: 1 }));
        assert_eq!(w.others, None);
    }

    #[test]
    fn window_entirely_in_others() {
        let w = visible_window(7, 3, 3, 10);
        assert_eq!(w.errors, None);
        assert_eq!(w.others, Some(SegmentRange { from: 4, to: 6 }));
    }

    #[test]
    fn boundary_record_drawn_exactly_once() {
        // Offset exactly at errors_count: the full viewport comes from the
        // head of others, starting at its first record.
        let w = visible_window(3, 4, 3, 5);
        assert_eq!(w.errors, None);
        assert_eq!(w.others, Some(SegmentRange { from: 0, to: 3 }));
    }

    #[test]
    fn window_clamps_to_queue_sizes() {
        let w = visible_window(0, 100, 2, 3);
        assert_eq!(w.errors, Some(SegmentRange { from: 0, to: 1 }));
        assert_eq!(w.others, Some(SegmentRange { from: 0, to: 2 }));
    }

    #[test]
    fn window_on_empty_store() {
        assert_eq!(visible_window(0, 10, 0, 0), VisibleWindow::default());
    }

    #[test]
    fn offset_past_total_yields_nothing() {
        assert_eq!(visible_window(9, 4, 2, 3), VisibleWindow::default());
    }

    #[test]
    fn scroll_state_tracks_offset() {
        let mut st = ScrollState::new(5);
        assert_eq!(st.scroll(ScrollDirection::Down, 8), 1);
        assert_eq!(st.scroll(ScrollDirection::PageDown, 8), 5);
        assert_eq!(st.scroll(ScrollDirection::PageDown, 8), 7);
        assert_eq!(st.scroll(ScrollDirection::Up, 8), 6);
        assert_eq!(st.offset(), 6);
    }
}
