//! The three markup pieces built from a diagram.

/// Node grid, edge paths and process chains of one diagram.
///
/// All three are built from the same model, so every name referenced by an
/// edge or a chain names a node of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragments {
    nodes: String,
    edges: String,
    process: String,
}

impl Fragments {
    pub fn new(nodes: String, edges: String, process: String) -> Self {
        Self {
            nodes,
            edges,
            process,
        }
    }

    /// Body of the TikZ `\matrix`.
    pub fn nodes(&self) -> &str {
        &self.nodes
    }

    /// Body of the data-layer `\path`, terminated by `;`.
    pub fn edges(&self) -> &str {
        &self.edges
    }

    /// Process chain groups; empty if the diagram has none.
    pub fn process(&self) -> &str {
        &self.process
    }
}
