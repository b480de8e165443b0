//! Diagnostic ingestion, classification, and bounded retention.
//!
//! Raw bytes from the build-output pipe flow through
//! [`DiagnosticStore::ingest`], which tokenizes them into
//! [`DiagnosticRecord`]s and routes each record into one of two bounded
//! FIFO queues: errors first, everything else second. The rendering layer
//! reads the queues positionally and never mutates them; the contract with
//! the outer loop is that ingest and render calls are delivered serially.

pub mod record;
pub mod severity;
pub mod store;

pub use record::DiagnosticRecord;
pub use severity::Severity;
pub use store::{DiagnosticStore, FLUSH_TOKEN, IngestSummary};
