//! Error and diagnostic system for the description parser.
//!
//! Problems are reported as [`Diagnostic`]s carrying an [`ErrorCode`], one or
//! more labeled spans into the description and optional help text. All
//! diagnostics of one parse are returned together in a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use xdsm_parser::error::{Diagnostic, ErrorCode};
//! # use xdsm_parser::Span;
//!
//! let diag = Diagnostic::error("component `solver` is defined more than once")
//!     .with_code(ErrorCode::E300)
//!     .with_label(Span::new(100..108), "duplicate definition")
//!     .with_secondary_label(Span::new(20..28), "first defined here")
//!     .with_help("rename one of the components");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;
pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
