//! XDSM - Extended Design Structure Matrix diagrams rendered as TikZ.
//!
//! Lays out components, data connections, external inputs and outputs, and
//! process chains on a square matrix and emits the TikZ markup that draws
//! them. Diagrams are either built fluently through
//! [`semantic::Diagram`] or parsed from a TOML description.

pub mod config;
pub mod edges;
pub mod export;
pub mod fragments;
pub mod layout;
pub mod process;

mod error;

pub use xdsm_core::{identifier, label, semantic, style};

pub use error::XdsmError;

use std::path::Path;

use log::{debug, info, trace};

use config::AppConfig;
use export::Exporter;
use fragments::Fragments;
use layout::GridPositions;

/// Builder for parsing, laying out and exporting XDSM diagrams.
///
/// # Examples
///
/// ```
/// use xdsm::{XdsmBuilder, semantic::Diagram, style::Style};
///
/// let mut diagram = Diagram::new();
/// diagram
///     .add_component("opt", Style::Optimization, "Optimizer")?
///     .add_component("F", Style::Function, "F")?
///     .connect("opt", "F", "x")?
///     .add_process(["opt", "F"], true);
///
/// let builder = XdsmBuilder::default();
/// let fragments = builder.build(&diagram)?;
/// assert!(fragments.nodes().contains(r"\node [DataInter] (opt-F) {x};"));
/// # Ok::<(), xdsm::XdsmError>(())
/// ```
#[derive(Debug, Default)]
pub struct XdsmBuilder {
    config: AppConfig,
}

impl XdsmBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a TOML description into a semantic diagram.
    ///
    /// # Errors
    ///
    /// Returns [`XdsmError::Parse`] carrying every diagnostic found, together
    /// with the source text for reporting.
    pub fn parse(&self, source: &str) -> Result<semantic::Diagram, XdsmError> {
        info!("Parsing diagram");

        let diagram =
            xdsm_parser::parse(source).map_err(|err| XdsmError::new_parse_error(err, source))?;

        debug!("Diagram parsed successfully");
        trace!(diagram:?; "Parsed diagram");

        Ok(diagram)
    }

    /// Build the node grid, edges and process chains of `diagram`.
    ///
    /// The diagram is not modified; building twice yields identical output.
    ///
    /// # Errors
    ///
    /// Returns [`XdsmError::UnknownComponent`] for references to missing
    /// components and [`XdsmError::CellCollision`] for connections sharing a
    /// grid cell (unless overwriting is enabled in the layout config).
    pub fn build(&self, diagram: &semantic::Diagram) -> Result<Fragments, XdsmError> {
        info!(
            components = diagram.components().len(),
            connections = diagram.connections().len();
            "Building diagram"
        );

        let positions = GridPositions::compute(diagram);
        let nodes = layout::build_node_grid(diagram, &positions, self.config.layout())?;
        let edges = edges::build_edges(diagram, &positions)?;
        let process = process::build_process_chains(diagram)?;

        debug!(size = positions.size(); "Diagram built");
        Ok(Fragments::new(nodes, edges, process))
    }

    /// Render `diagram` into a TikZ picture string.
    ///
    /// # Errors
    ///
    /// See [`XdsmBuilder::build`].
    pub fn render_tikz(&self, diagram: &semantic::Diagram) -> Result<String, XdsmError> {
        let fragments = self.build(diagram)?;
        Ok(export::tikz::render_picture(
            &fragments,
            self.config.style().diagram_styles_path(),
        ))
    }

    /// Build `diagram` and write `<name>.tikz` (and `<name>.tex` when
    /// standalone export is enabled) into `output_dir`.
    ///
    /// Returns the paths of the written files.
    ///
    /// # Errors
    ///
    /// Returns build errors as for [`XdsmBuilder::build`] and
    /// [`XdsmError::Export`] when the files can not be written.
    pub fn export(
        &self,
        diagram: &semantic::Diagram,
        output_dir: impl AsRef<Path>,
        name: &str,
    ) -> Result<Vec<std::path::PathBuf>, XdsmError> {
        let fragments = self.build(diagram)?;

        let mut exporter = export::tikz::TikzBuilder::new(output_dir, name)
            .with_style(self.config.style())
            .with_export(self.config.export())
            .build()?;
        exporter.export_fragments(&fragments)?;

        info!(files = exporter.written().len(); "Diagram exported");
        Ok(exporter.written().to_vec())
    }
}
