//! The node matrix and its TikZ serialization.

use std::{collections::HashMap, fmt};

use log::warn;

use xdsm_core::{identifier::Id, label::Label, style::Style};

use crate::error::XdsmError;

/// Separator between the cells of one matrix row.
const CELL_SEPARATOR: &str = "&\n";

/// Terminator of a matrix row.
const ROW_END: &str = "\\\\\n";

/// A TikZ node placed in one grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: Id,
    options: String,
    label: String,
}

impl Node {
    /// Create a node, resolving style modifiers and label formatting.
    pub fn new(name: Id, style: &Style, stacked: bool, faded: bool, label: &Label) -> Self {
        Self {
            name,
            options: style.to_options(stacked, faded),
            label: label.to_string(),
        }
    }

    /// Get the node name other directives refer to.
    pub fn name(&self) -> Id {
        self.name
    }

    /// Get the TikZ option list, e.g. `DataInter,stack`.
    pub fn options(&self) -> &str {
        &self.options
    }

    /// Get the formatted label text.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r"\node [{}] ({}) {{{}}};",
            self.options, self.name, self.label
        )
    }
}

/// Square matrix of optional nodes, stored row-major.
///
/// Node names are unique across the grid; every name maps to the cell that
/// holds it.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Node>>,
    names: HashMap<Id, (usize, usize)>,
}

impl Grid {
    /// Create an empty `size` x `size` grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            names: HashMap::new(),
        }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the node at `(row, col)`, if any.
    pub fn get(&self, row: usize, col: usize) -> Option<&Node> {
        self.cells.get(self.index(row, col)?)?.as_ref()
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Node>]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Put `node` into the cell at `(row, col)`.
    ///
    /// # Errors
    ///
    /// - [`XdsmError::NodeNameCollision`] if another cell already holds a
    ///   node with the same name, e.g. a component named `a-b` next to the
    ///   connection `a -> b`.
    /// - [`XdsmError::CellCollision`] if the cell is occupied and
    ///   `allow_overwrite` is false. With `allow_overwrite` the previous node
    ///   is replaced and a warning is logged.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid; positions are derived
    /// from the same model the grid was sized from.
    pub fn place(
        &mut self,
        row: usize,
        col: usize,
        node: Node,
        allow_overwrite: bool,
    ) -> Result<(), XdsmError> {
        let index = self
            .index(row, col)
            .unwrap_or_else(|| panic!("cell ({row}, {col}) outside of {0}x{0} grid", self.size));
        let name = node.name();
        if let Some(&(existing_row, existing_col)) = self.names.get(&name) {
            if (existing_row, existing_col) != (row, col) {
                return Err(XdsmError::NodeNameCollision {
                    name: name.to_string(),
                    existing_row,
                    existing_col,
                    row,
                    col,
                });
            }
        }

        let cell = &mut self.cells[index];
        if let Some(existing) = cell {
            if !allow_overwrite {
                return Err(XdsmError::CellCollision {
                    row,
                    col,
                    existing: existing.name().to_string(),
                    incoming: node.name().to_string(),
                });
            }
            warn!(
                row = row,
                col = col,
                existing = existing.name().to_string(),
                incoming = node.name().to_string();
                "Overwriting occupied grid cell"
            );
            self.names.remove(&existing.name());
        }

        *cell = Some(node);
        self.names.insert(name, (row, col));
        Ok(())
    }

    /// Serialize the grid into the body of a TikZ `\matrix`.
    ///
    /// Rows are emitted top to bottom, cells joined by `&` and rows closed
    /// with `\\`. Empty cells stay empty.
    pub fn to_markup(&self, row_comments: bool) -> String {
        let mut markup = String::new();
        if self.size == 0 {
            return markup;
        }

        for (i, row) in self.rows().enumerate() {
            if row_comments {
                markup.push_str(&format!("%Row {i}\n"));
            }
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.as_ref().map(Node::to_string).unwrap_or_default())
                .collect();
            markup.push_str(&cells.join(CELL_SEPARATOR));
            markup.push_str(ROW_END);
        }
        markup
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }
}
