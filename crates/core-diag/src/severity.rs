//! Line-level severity classification.

/// Severity of one diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
    Unknown,
}

impl Severity {
    /// Classify a line by case-sensitive substring match, first hit in
    /// priority order `error` > `warning` > `note`. Anything else, an
    /// empty line included, is [`Severity::Unknown`].
    pub fn classify(line: &str) -> Self {
        if line.contains("error") {
            Severity::Error
        } else if line.contains("warning") {
            Severity::Warning
        } else if line.contains("note") {
            Severity::Note
        } else {
            Severity::Unknown
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
            Severity::Unknown => "unknown",
        }
    }
}
