//! CLI logic for the XDSM diagram tool.
//!
//! Reads a TOML description, lays it out and writes the TikZ picture (plus
//! an optional standalone LaTeX document) into the output directory.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::PathBuf};

use log::info;

use xdsm::{XdsmBuilder, XdsmError};

/// Run the XDSM CLI application
///
/// Returns the paths of the files written.
///
/// # Errors
///
/// Returns `XdsmError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Description errors
/// - Layout errors
/// - Export errors
pub fn run(args: &Args) -> Result<Vec<PathBuf>, XdsmError> {
    let name = args.output_name();
    info!(
        input_path = args.input,
        output_dir = args.output_dir,
        name = name;
        "Processing diagram"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = XdsmBuilder::new(app_config);
    let diagram = builder.parse(&source)?;
    let written = builder.export(&diagram, &args.output_dir, &name)?;

    for path in &written {
        info!(output_file = path.display().to_string(); "File exported");
    }

    Ok(written)
}
