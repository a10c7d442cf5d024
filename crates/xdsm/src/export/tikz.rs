//! TikZ export backend.
//!
//! Writes `<name>.tikz`, a `tikzpicture` that inputs the XDSM style sheet,
//! and optionally `<name>.tex`, a minimal `article` that inputs the picture
//! and can be typeset on its own.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, error, info};

use crate::{
    config::{ExportConfig, StyleConfig},
    export::{self, Exporter},
    fragments::Fragments,
};

/// Render the `tikzpicture` of a diagram.
///
/// `styles_path` is passed to `\input` and must define the XDSM node, edge
/// and process styles (`MatrixSetup`, `DataLine`, `ProcessHVA`, ...).
pub fn render_picture(fragments: &Fragments, styles_path: &str) -> String {
    format!(
        r"
%%% Preamble Requirements %%%
% \usepackage{{geometry}}
% \usepackage{{amsfonts}}
% \usepackage{{amsmath}}
% \usepackage{{amssymb}}
% \usepackage{{sfmath}}
% \usepackage{{tikz}}

% \usetikzlibrary{{arrows,chains,positioning,scopes,shapes.geometric,shapes.misc,shadows}}
%%% End Preamble Requirements %%%

\input{{{styles_path}}}
\begin{{tikzpicture}}

\matrix[MatrixSetup]{{
{nodes}}};

% XDSM process chains
{process}

\begin{{pgfonlayer}}{{data}}
\path
{edges}
\end{{pgfonlayer}}

\end{{tikzpicture}}
",
        nodes = fragments.nodes(),
        process = fragments.process(),
        edges = fragments.edges(),
    )
}

/// Render a standalone LaTeX document that inputs `picture_file`.
pub fn render_document(picture_file: &str) -> String {
    format!(
        r"
\documentclass{{article}}
\usepackage{{geometry}}
\usepackage{{amsfonts}}
\usepackage{{amsmath}}
\usepackage{{amssymb}}
\usepackage{{sfmath}}
\usepackage{{tikz}}

% TikZ libraries used by the XDSM styles
\usetikzlibrary{{arrows,chains,positioning,scopes,shapes.geometric,shapes.misc,shadows}}

% Crop the page to the picture
\usepackage[active,tightpage]{{preview}}
\PreviewEnvironment{{tikzpicture}}
\setlength{{\PreviewBorder}}{{5pt}}

\begin{{document}}

\input{{ {picture_file} }}

\end{{document}}
"
    )
}

/// Builder for [`Tikz`] exporters.
///
/// # Examples
///
/// ```no_run
/// use xdsm::export::tikz::TikzBuilder;
///
/// let exporter = TikzBuilder::new("out", "mdf")
///     .with_styles_path("../styles/diagram_styles")
///     .with_standalone(false)
///     .build()
///     .expect("valid exporter");
/// ```
#[derive(Debug, Clone)]
pub struct TikzBuilder {
    output_dir: PathBuf,
    name: String,
    styles_path: String,
    standalone: bool,
}

impl TikzBuilder {
    /// Create a builder writing `<output_dir>/<name>.tikz`.
    pub fn new(output_dir: impl AsRef<Path>, name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            name: name.into(),
            styles_path: StyleConfig::default().diagram_styles_path().to_string(),
            standalone: ExportConfig::default().standalone(),
        }
    }

    /// Take the style sheet path from `config`.
    pub fn with_style(self, config: &StyleConfig) -> Self {
        self.with_styles_path(config.diagram_styles_path())
    }

    /// Take the export options from `config`.
    pub fn with_export(self, config: &ExportConfig) -> Self {
        self.with_standalone(config.standalone())
    }

    pub fn with_styles_path(mut self, path: impl Into<String>) -> Self {
        self.styles_path = path.into();
        self
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Validate the settings and create the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the file name is empty or
    /// contains a path separator.
    pub fn build(self) -> Result<Tikz, export::Error> {
        if self.name.is_empty() {
            return Err(export::Error::Render(
                "output file name can not be empty".to_string(),
            ));
        }
        if self.name.contains(['/', '\\']) {
            return Err(export::Error::Render(format!(
                "output file name `{}` must not contain a path separator",
                self.name
            )));
        }

        Ok(Tikz {
            output_dir: self.output_dir,
            name: self.name,
            styles_path: self.styles_path,
            standalone: self.standalone,
            written: Vec::new(),
        })
    }
}

/// TikZ exporter writing into a directory.
#[derive(Debug)]
pub struct Tikz {
    output_dir: PathBuf,
    name: String,
    styles_path: String,
    standalone: bool,
    written: Vec<PathBuf>,
}

impl Tikz {
    /// Path of the picture file.
    pub fn picture_path(&self) -> PathBuf {
        self.output_dir.join(self.picture_file())
    }

    /// Path of the standalone document.
    pub fn document_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.tex", self.name))
    }

    /// Files written so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn picture_file(&self) -> String {
        format!("{}.tikz", self.name)
    }

    fn write_file(&mut self, path: PathBuf, content: &str) -> Result<(), export::Error> {
        info!(path = path.display().to_string(); "Writing file");
        if let Err(err) = fs::write(&path, content) {
            error!(path = path.display().to_string(), err:err; "Failed to write file");
            return Err(export::Error::Io(err));
        }
        self.written.push(path);
        Ok(())
    }
}

impl Exporter for Tikz {
    fn export_fragments(&mut self, fragments: &Fragments) -> Result<(), export::Error> {
        fs::create_dir_all(&self.output_dir)?;

        let picture = render_picture(fragments, &self.styles_path);
        debug!("TikZ picture rendered");
        self.write_file(self.picture_path(), &picture)?;

        if self.standalone {
            let document = render_document(&self.picture_file());
            self.write_file(self.document_path(), &document)?;
        }

        Ok(())
    }
}
