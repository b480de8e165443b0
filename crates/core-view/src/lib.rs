//! Scroll engine and pure frame rendering.
//!
//! Scrolling treats the two retention queues as one virtual sequence
//! (errors first, then others) addressed by a single offset. The renderer
//! turns records into aligned, word-wrapped text lines for a given
//! terminal width; it performs no I/O, so the same frame can be composed
//! for a terminal, a test, or a dump.

pub mod render;
pub mod scroll;
pub mod view;

pub use render::{RenderedRecord, render_record, shorten_path, wrap_description};
pub use scroll::{ScrollDirection, ScrollState, SegmentRange, VisibleWindow, step, visible_window};
pub use view::{Frame, MIN_FRAME_ROWS, STATS_LABEL_WIDTH, StatsLine, compose_frame, scroll_rows};
