//! Command-line argument definitions for the XDSM CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control the input description, where the TikZ
//! files are written, configuration file selection, and logging verbosity.

use std::path::Path;

use clap::Parser;

/// Command-line arguments for the XDSM diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input description (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Directory the `.tikz` and `.tex` files are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    /// Base name of the output files; defaults to the input file stem
    #[arg(short, long)]
    pub name: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Base name of the output files.
    pub fn output_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            Path::new(&self.input)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "xdsm".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_options() {
        let args = Args::parse_from([
            "xdsm",
            "demos/mdf.toml",
            "-o",
            "build",
            "--name",
            "sellar",
            "-c",
            "conf.toml",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.input, "demos/mdf.toml");
        assert_eq!(args.output_dir, "build");
        assert_eq!(args.output_name(), "sellar");
        assert_eq!(args.config.as_deref(), Some("conf.toml"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_output_name_defaults_to_input_stem() {
        let args = Args::parse_from(["xdsm", "demos/mdf.toml"]);

        assert_eq!(args.output_dir, ".");
        assert_eq!(args.output_name(), "mdf");
        assert_eq!(args.log_level, "info");
    }
}
