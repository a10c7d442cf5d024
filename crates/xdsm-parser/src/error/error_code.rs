//! Error codes for the description diagnostics.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Description syntax and value errors
//! - `E2xx` - Reference errors
//! - `E3xx` - Model errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Description Errors (E1xx)
    // =========================================================================
    /// Invalid description.
    ///
    /// The text is not valid TOML or does not have the expected tables and
    /// fields.
    E100,

    /// Invalid label type.
    ///
    /// A label must be a string or an array of strings.
    E101,

    // =========================================================================
    // Reference Errors (E2xx)
    // =========================================================================
    /// Unknown component.
    ///
    /// An input, output, connection or process chain names a component that
    /// is not declared.
    E200,

    // =========================================================================
    // Model Errors (E3xx)
    // =========================================================================
    /// Duplicate component.
    ///
    /// Two components share the same name.
    E300,

    /// Self connection.
    ///
    /// A connection has the same source and target.
    E301,
}

impl ErrorCode {
    /// Returns the code as it is printed, e.g. `E200`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
        }
    }

    /// Returns a short description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "invalid description",
            ErrorCode::E101 => "invalid label type",
            ErrorCode::E200 => "unknown component",
            ErrorCode::E300 => "duplicate component",
            ErrorCode::E301 => "self connection",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_as_str() {
        for code in [
            ErrorCode::E100,
            ErrorCode::E101,
            ErrorCode::E200,
            ErrorCode::E300,
            ErrorCode::E301,
        ] {
            assert_eq!(code.to_string(), code.as_str());
            assert!(!code.description().is_empty());
        }
    }
}
