//! Severity levels for diagnostics.

use std::fmt;

/// The severity level of a diagnostic.
///
/// Any [`Severity::Error`] rejects the description; warnings are only logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The description cannot be turned into a diagram.
    Error,

    /// The description is usable but probably not what the author meant.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
