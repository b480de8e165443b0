//! Retention store and stream parser.
//!
//! The store owns both bounded queues and the whole ingest path; callers
//! hold it as explicit state and drive it with `ingest` and reads, never
//! concurrently. One ingest call processes one transport chunk to
//! completion.
//!
//! Chunk handling, in order:
//! 1. A chunk not starting with `/` (not a plausible absolute path) is
//!    discarded whole.
//! 2. A chunk containing the literal [`FLUSH_TOKEN`] is an in-band command:
//!    both queues are flushed and nothing else is parsed from it.
//! 3. Otherwise the chunk splits on newline; each line is coarsely
//!    classified (unknown lines skipped), colon-split, dropped when it has
//!    fewer than five fields, and finally routed on the severity *field*:
//!    errors to the errors queue, everything else (including a field that
//!    classifies as unknown) to the others queue.
//!
//! A line split across two transport reads is not reassembled; the
//! fragments fail the leading-`/` gate or the field-count check and are
//! dropped.

use crate::record::DiagnosticRecord;
use crate::severity::Severity;
use core_collections::{BoundedQueue, QueueFull, tokens};
use tracing::{debug, trace, warn};

/// In-band control token: any chunk containing it clears both queues.
pub const FLUSH_TOKEN: &str = "/flush/";

/// What one ingest call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub errors_added: usize,
    pub others_added: usize,
    /// Records rejected by a full queue or malformed lines skipped after
    /// the coarse classifier accepted them.
    pub dropped: usize,
    pub flushed: bool,
}

#[derive(Debug)]
pub struct DiagnosticStore {
    errors: BoundedQueue<DiagnosticRecord>,
    others: BoundedQueue<DiagnosticRecord>,
}

impl DiagnosticStore {
    /// Create a store with per-queue caps; `0` means unlimited.
    pub fn new(max_errors: usize, max_others: usize) -> Self {
        Self {
            errors: BoundedQueue::new(max_errors),
            others: BoundedQueue::new(max_others),
        }
    }

    pub fn errors(&self) -> &BoundedQueue<DiagnosticRecord> {
        &self.errors
    }

    pub fn others(&self) -> &BoundedQueue<DiagnosticRecord> {
        &self.others
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn other_count(&self) -> usize {
        self.others.len()
    }

    /// Size of the virtual concatenation errors ++ others.
    pub fn total(&self) -> usize {
        self.errors.len() + self.others.len()
    }

    /// Drop every retained record. Both queues stay usable.
    pub fn flush(&mut self) {
        debug!(
            target: "diag.store",
            errors = self.errors.len(),
            others = self.others.len(),
            "flush"
        );
        self.errors.flush();
        self.others.flush();
    }

    /// Parse one raw transport chunk and retain its diagnostic lines.
    pub fn ingest(&mut self, chunk: &[u8]) -> IngestSummary {
        let mut summary = IngestSummary::default();
        let text = String::from_utf8_lossy(chunk);

        if !text.starts_with('/') {
            trace!(target: "diag.store", len = chunk.len(), "chunk discarded, not a path");
            return summary;
        }
        if text.contains(FLUSH_TOKEN) {
            self.flush();
            summary.flushed = true;
            return summary;
        }
        let Ok(lines) = tokens::split(&text, &['\n']) else {
            return summary;
        };

        for line in lines.values() {
            // Coarse pre-filter on the whole line; the routing decision
            // below re-classifies the severity field alone.
            if Severity::classify(line) == Severity::Unknown {
                continue;
            }
            let Some(record) = DiagnosticRecord::from_line(line) else {
                summary.dropped += 1;
                trace!(target: "diag.store", line, "malformed line dropped");
                continue;
            };
            match record.severity() {
                Severity::Error => match self.errors.enqueue(record) {
                    Ok(_) => summary.errors_added += 1,
                    Err(QueueFull(_rejected)) => {
                        summary.dropped += 1;
                        warn!(target: "diag.store", "errors queue full, record dropped");
                    }
                },
                _ => match self.others.enqueue(record) {
                    Ok(_) => summary.others_added += 1,
                    Err(QueueFull(_rejected)) => {
                        summary.dropped += 1;
                        warn!(target: "diag.store", "others queue full, record dropped");
                    }
                },
            }
        }

        if summary.errors_added > 0 || summary.others_added > 0 || summary.dropped > 0 {
            debug!(
                target: "diag.store",
                errors_added = summary.errors_added,
                others_added = summary.others_added,
                dropped = summary.dropped,
                "chunk ingested"
            );
        }
        summary
    }
}
