//! Error types for XDSM operations.
//!
//! This module provides the main error type [`XdsmError`] which wraps the
//! error conditions of parsing, building and exporting a diagram.

use std::io;

use thiserror::Error;

use xdsm_core::semantic::ModelError;
use xdsm_parser::error::ParseError;

/// The main error type for XDSM operations.
///
/// Every variant names the offending element so an authoring mistake can be
/// located from the message alone.
#[derive(Debug, Error)]
pub enum XdsmError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Unknown component `{name}` referenced by {context}")]
    UnknownComponent { name: String, context: String },

    #[error(
        "Grid cell ({row}, {col}) is already occupied by `{existing}`, can not place `{incoming}`"
    )]
    CellCollision {
        row: usize,
        col: usize,
        existing: String,
        incoming: String,
    },

    #[error(
        "Node name `{name}` is used twice, at ({existing_row}, {existing_col}) and ({row}, {col})"
    )]
    NodeNameCollision {
        name: String,
        existing_row: usize,
        existing_col: usize,
        row: usize,
        col: usize,
    },

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for XdsmError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl XdsmError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }

    /// Create a new `UnknownComponent` error.
    pub fn unknown_component(name: impl ToString, context: impl Into<String>) -> Self {
        Self::UnknownComponent {
            name: name.to_string(),
            context: context.into(),
        }
    }
}
