//! Structured diagnostic records.
//!
//! One record is one diagnostic line split on `:` into a token array with
//! fixed field indices. The expected wire shape is
//! `path:line:col:severity:description`; colons inside the description
//! produce extra tokens which stay part of the record, so
//! [`DiagnosticRecord::description`] joins them back instead of discarding
//! them.

use crate::severity::Severity;
use core_collections::{GrowArray, tokens};

pub const PATH_FIELD: usize = 0;
pub const LINE_FIELD: usize = 1;
pub const COLUMN_FIELD: usize = 2;
pub const SEVERITY_FIELD: usize = 3;
pub const DESCRIPTION_FIELD: usize = 4;

/// A line parses into a record only with at least this many fields.
pub const MIN_FIELDS: usize = 5;

#[derive(Debug)]
pub struct DiagnosticRecord {
    fields: GrowArray<String>,
}

impl DiagnosticRecord {
    /// Parse one line into a record. Lines with fewer than [`MIN_FIELDS`]
    /// colon-delimited fields are malformed and yield `None`.
    pub fn from_line(line: &str) -> Option<Self> {
        let fields = tokens::split(line, &[':']).ok()?;
        if fields.count() < MIN_FIELDS {
            return None;
        }
        Some(Self { fields })
    }

    fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn path(&self) -> &str {
        self.field(PATH_FIELD)
    }

    pub fn line_number(&self) -> &str {
        self.field(LINE_FIELD)
    }

    pub fn column(&self) -> &str {
        self.field(COLUMN_FIELD)
    }

    /// The raw severity field, surrounding whitespace included.
    pub fn severity_label(&self) -> &str {
        self.field(SEVERITY_FIELD)
    }

    /// Authoritative severity, classified from the severity field alone.
    /// This can disagree with a coarse whole-line classification.
    pub fn severity(&self) -> Severity {
        Severity::classify(self.severity_label())
    }

    /// Description text: field 4 and every later field joined back with
    /// `:`, reconstructing colons the splitter consumed.
    pub fn description(&self) -> String {
        tokens::join_from(&self.fields, DESCRIPTION_FIELD, ':').unwrap_or_default()
    }

    pub fn field_count(&self) -> usize {
        self.fields.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "/src/lib/parser.c:73:27: warning: unused variable 'list' [-Wunused-variable]";

    #[test]
    fn parses_wire_format_fields() {
        let rec = DiagnosticRecord::from_line(LINE).unwrap();
        assert_eq!(rec.path(), "/src/lib/parser.c");
        assert_eq!(rec.line_number(), "73");
        assert_eq!(rec.column(), "27");
        assert_eq!(rec.severity_label(), " warning");
        assert_eq!(rec.severity(), Severity::Warning);
        assert_eq!(rec.description(), " unused variable 'list' [-Wunused-variable]");
    }

    #[test]
    fn too_few_fields_is_malformed() {
        assert!(DiagnosticRecord::from_line("a.c:12: error").is_none());
        assert!(DiagnosticRecord::from_line("no delimiters at all").is_none());
    }

    #[test]
    fn extra_fields_round_trip_through_description() {
        let rec = DiagnosticRecord::from_line(
            "a.c:1:2: error: expected ';' before ':' token",
        )
        .unwrap();
        assert_eq!(rec.field_count(), 6);
        assert_eq!(rec.description(), " expected ';' before ':' token");
    }

    #[test]
    fn severity_field_can_disagree_with_the_whole_line() {
        // Coarse classification sees "error" in the description; the
        // severity field itself says warning.
        let rec =
            DiagnosticRecord::from_line("a.c:5:1: warning: error handling is wrong").unwrap();
        assert_eq!(rec.severity(), Severity::Warning);
    }
}
