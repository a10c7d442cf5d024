//! Collector for accumulating diagnostics while a description is elaborated.
//!
//! Every problem in a description is reported at once instead of stopping at
//! the first one.

use log::warn;

use crate::error::{Diagnostic, ParseError};

/// Accumulates diagnostics and decides whether elaboration succeeded.
///
/// ```text
/// let mut collector = DiagnosticCollector::new();
///
/// collector.emit(
///     Diagnostic::error("unknown component `foo`")
///         .with_code(ErrorCode::E200)
///         .with_label(span, "not a declared component")
/// );
///
/// let diagram = collector.finish(diagram)?;
/// ```
#[derive(Debug, Default)]
pub(crate) struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub(crate) fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection.
    ///
    /// - If any error was emitted, returns `Err(ParseError)` with all
    ///   diagnostics, warnings included.
    /// - Otherwise returns `value`; warnings are logged.
    pub(crate) fn finish<T>(self, value: T) -> Result<T, ParseError> {
        if self.has_errors {
            return Err(ParseError::new(self.diagnostics));
        }

        for diagnostic in &self.diagnostics {
            warn!("{diagnostic}");
        }
        Ok(value)
    }
}
