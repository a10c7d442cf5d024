//! Export functionality for XDSM diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning built [`Fragments`] into output files. It is the final stage in
//! the processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Description / fluent calls
//!     ↓ parse
//! Semantic Diagram
//!     ↓ layout, edges, process
//! Fragments
//!     ↓ export (this module)
//! Output Files
//! ```
//!
//! # Available Backends
//!
//! - [`tikz`] - TikZ picture plus standalone LaTeX document via
//!   [`tikz::TikzBuilder`] and [`tikz::Tikz`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering rendering failures and I/O
//! errors. [`Error`] converts into [`XdsmError::Export`] at the crate
//! boundary.
//!
//! [`XdsmError::Export`]: crate::XdsmError::Export

/// TikZ export backend.
pub mod tikz;

use crate::fragments::Fragments;

/// Abstraction for diagram export backends.
///
/// See the [`tikz`] module for the built-in TikZ implementation.
pub trait Exporter {
    /// Exports the fragments of one diagram.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the fragments can not be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_fragments(&mut self, fragments: &Fragments) -> Result<(), Error>;
}

/// Errors that can occur during diagram export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or configuration failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
