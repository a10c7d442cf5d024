//! The ParseError type returned when a description is rejected.

use std::fmt;

use crate::error::Diagnostic;

/// A type alias for `Result<T, Diagnostic>`.
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// Error type of [`parse`](crate::parse).
///
/// Wraps every diagnostic produced for the description.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Create a new parse error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{first}")?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_error_from_diagnostic() {
        let err: ParseError = Diagnostic::error("invalid label type")
            .with_code(ErrorCode::E101)
            .into();

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.to_string(), "error[E101]: invalid label type");
    }

    #[test]
    fn test_parse_error_display_multiple() {
        let err = ParseError::new(vec![
            Diagnostic::error("unknown component `X`"),
            Diagnostic::error("unknown component `Y`"),
            Diagnostic::error("unknown component `Z`"),
        ]);

        assert_eq!(err.to_string(), "error: unknown component `X` (+2 more)");
    }
}
