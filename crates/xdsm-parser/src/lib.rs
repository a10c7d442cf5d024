//! # XDSM Parser
//!
//! Parser for TOML descriptions of XDSM diagrams. This crate turns a
//! description file into the semantic [`Diagram`] of `xdsm-core`.
//!
//! ## Usage
//!
//! ```
//! # use xdsm_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         [[component]]
//!         name = "opt"
//!         style = "Optimization"
//!         label = "Optimizer"
//!
//!         [[component]]
//!         name = "F"
//!         style = "Function"
//!         label = "F"
//!
//!         [[connection]]
//!         source = "opt"
//!         target = "F"
//!         label = "$x$"
//!     "#;
//!
//!     let diagram = parse(source)?;
//!     assert_eq!(diagram.components().len(), 2);
//!     Ok(())
//! }
//! ```

mod description;
mod elaborate;
pub mod error;
mod span;

pub use span::Span;

use log::{debug, info};

use xdsm_core::semantic::Diagram;

use description::Description;
use elaborate::Builder;
use error::{Diagnostic, ErrorCode, ParseError};

/// Parse description text into a semantic diagram.
///
/// 1. **Deserialize** - Read the TOML tables into a raw description
/// 2. **Elaborate** - Resolve references, check labels and build the model
///
/// # Errors
///
/// Returns a [`ParseError`] holding one diagnostic per problem found. TOML
/// syntax errors stop at the first problem; elaboration reports all of them.
pub fn parse(source: &str) -> Result<Diagram, ParseError> {
    info!("Parsing diagram description");

    let description: Description = toml::from_str(source).map_err(|err| {
        let mut diagnostic = Diagnostic::error(format!(
            "invalid description: {}",
            err.message().trim_end()
        ))
        .with_code(ErrorCode::E100);
        if let Some(span) = err.span() {
            diagnostic = diagnostic.with_label(span.into(), "here");
        }
        ParseError::from(diagnostic)
    })?;
    debug!("Description deserialized");

    Builder::new().build(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_syntax_error() {
        let err = parse("[[component]\nname = ").unwrap_err();

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E100));
        assert!(err.to_string().starts_with("error[E100]: invalid description"));
    }

    #[test]
    fn test_parse_missing_field() {
        let err = parse("[[component]]\nname = \"a\"\nlabel = \"A\"\n").unwrap_err();

        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E100));
        assert!(err.diagnostics()[0].message().contains("style"));
    }

    #[test]
    fn test_parse_invalid_side() {
        let source = r#"
            [[component]]
            name = "a"
            style = "Function"
            label = "A"

            [[output]]
            component = "a"
            label = "y"
            side = "top"
        "#;

        let err = parse(source).unwrap_err();

        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E100));
    }

    #[test]
    fn test_parse_empty_description() {
        let diagram = parse("").unwrap();

        assert!(diagram.components().is_empty());
    }
}
