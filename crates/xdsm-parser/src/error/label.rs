//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A message attached to a span of the description source.
///
/// - **Primary labels** mark where the problem is.
/// - **Secondary labels** point at related locations, such as the first
///   definition of a duplicated component.
///
/// ```text
/// error[E300]: component `solver` is defined more than once
///   --> diagram.toml:9:8
///    |
///  9 | name = "solver"
///    |        ^^^^^^^^ duplicate definition
///    |
///  3 | name = "solver"
///    |        -------- first defined here
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub(crate) fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub(crate) fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}
