//! Grid layout of XDSM diagrams.
//!
//! Components sit on the diagonal of a square matrix in the order they were
//! added. Optional bands around them hold the diagram's external data:
//!
//! ```text
//!           col 0        cols ...          last col
//! row 0     (unused)     inputs            (unused)
//! rows ...  left outputs components/data   right outputs
//! ```
//!
//! The input row only exists if the diagram has inputs, the left output
//! column only if it has left outputs and the right output column only if it
//! has right outputs. Data passed from component `a` to component `b` sits in
//! the row of `a` and the column of `b`.

mod grid;

pub use grid::{Grid, Node};

use std::collections::HashMap;

use log::{debug, info};

use xdsm_core::{
    identifier::Id,
    semantic::{Diagram, Side},
};

use crate::{config::LayoutConfig, error::XdsmError};

/// Row and column of every component, plus the size of the grid.
///
/// Computed fresh from a [`Diagram`] for every build and shared by the node
/// grid and the edge builder so both agree on where things are.
#[derive(Debug, Clone)]
pub struct GridPositions {
    size: usize,
    rows: HashMap<Id, usize>,
    cols: HashMap<Id, usize>,
}

impl GridPositions {
    /// Assign every component of `diagram` its diagonal cell.
    pub fn compute(diagram: &Diagram) -> Self {
        let row_offset = usize::from(diagram.has_inputs());
        let col_offset = usize::from(diagram.has_outputs(Side::Left));
        let trailing = usize::from(diagram.has_outputs(Side::Right));

        let components = diagram.components();
        let size = components.len() + row_offset + col_offset + trailing;

        let mut rows = HashMap::with_capacity(components.len());
        let mut cols = HashMap::with_capacity(components.len());
        for (index, component) in components.iter().enumerate() {
            rows.insert(component.id(), index + row_offset);
            cols.insert(component.id(), index + col_offset);
        }

        debug!(
            size = size,
            row_offset = row_offset,
            col_offset = col_offset;
            "Grid positions computed"
        );
        Self { size, rows, cols }
    }

    /// Number of rows (and columns) of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row of the component named `id`.
    pub fn row(&self, id: Id) -> Option<usize> {
        self.rows.get(&id).copied()
    }

    /// Column of the component named `id`.
    pub fn col(&self, id: Id) -> Option<usize> {
        self.cols.get(&id).copied()
    }

    /// Index of the last column, where right outputs go.
    pub fn last_col(&self) -> usize {
        self.size.saturating_sub(1)
    }

    /// Row of `id`, or an [`XdsmError::UnknownComponent`] built from `context`.
    pub(crate) fn require_row(
        &self,
        id: Id,
        context: impl FnOnce() -> String,
    ) -> Result<usize, XdsmError> {
        self.row(id)
            .ok_or_else(|| XdsmError::unknown_component(id, context()))
    }

    /// Column of `id`, or an [`XdsmError::UnknownComponent`] built from `context`.
    pub(crate) fn require_col(
        &self,
        id: Id,
        context: impl FnOnce() -> String,
    ) -> Result<usize, XdsmError> {
        self.col(id)
            .ok_or_else(|| XdsmError::unknown_component(id, context()))
    }
}

/// Place every node of `diagram` into a [`Grid`].
///
/// # Errors
///
/// - [`XdsmError::UnknownComponent`] if a connection, input or output refers
///   to a component that does not exist.
/// - [`XdsmError::CellCollision`] if two connections map to the same cell and
///   [`LayoutConfig::allow_cell_overwrite`] is off.
/// - [`XdsmError::NodeNameCollision`] if a generated node name (`a-b`,
///   `output_a`, ...) equals the name of a component.
pub fn place_nodes(
    diagram: &Diagram,
    positions: &GridPositions,
    config: &LayoutConfig,
) -> Result<Grid, XdsmError> {
    let overwrite = config.allow_cell_overwrite();
    let mut grid = Grid::new(positions.size());

    for component in diagram.components() {
        let id = component.id();
        let context = || format!("component `{id}`");
        let row = positions.require_row(id, context)?;
        let col = positions.require_col(id, context)?;
        let node = Node::new(
            id,
            component.style(),
            component.is_stacked(),
            component.is_faded(),
            component.label(),
        );
        grid.place(row, col, node, overwrite)?;
    }

    for connection in diagram.connections() {
        let node_id = connection.node_id();
        let row = positions.require_row(connection.source(), || {
            format!("the source of connection `{node_id}`")
        })?;
        let col = positions.require_col(connection.target(), || {
            format!("the target of connection `{node_id}`")
        })?;
        let node = Node::new(
            node_id,
            connection.style(),
            connection.is_stacked(),
            connection.is_faded(),
            connection.label(),
        );
        grid.place(row, col, node, overwrite)?;
    }

    for side in [Side::Left, Side::Right] {
        for output in diagram.outputs(side) {
            let row = positions.require_row(output.owner(), || format!("a {side} output"))?;
            let col = match side {
                Side::Left => 0,
                Side::Right => positions.last_col(),
            };
            let node = Node::new(
                output.node_id(),
                output.style(),
                output.is_stacked(),
                false,
                output.label(),
            );
            grid.place(row, col, node, overwrite)?;
        }
    }

    for input in diagram.inputs() {
        let col = positions.require_col(input.owner(), || "an input".to_string())?;
        let node = Node::new(
            input.node_id(),
            input.style(),
            input.is_stacked(),
            false,
            input.label(),
        );
        grid.place(0, col, node, overwrite)?;
    }

    Ok(grid)
}

/// Build the node matrix markup of `diagram`.
///
/// # Errors
///
/// See [`place_nodes`].
pub fn build_node_grid(
    diagram: &Diagram,
    positions: &GridPositions,
    config: &LayoutConfig,
) -> Result<String, XdsmError> {
    let grid = place_nodes(diagram, positions, config)?;
    info!(size = grid.size(); "Node grid built");
    Ok(grid.to_markup(config.row_comments()))
}
