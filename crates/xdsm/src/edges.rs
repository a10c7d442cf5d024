//! Data-flow edges between grid nodes.
//!
//! Every off-diagonal node is joined to the components it belongs to by
//! `DataLine` edges through node centers. Horizontal edges run along a row,
//! vertical edges along a column:
//!
//! - connection `a -> b`: horizontal `a` to `a-b`, vertical `a-b` to `b`
//! - output of `a` (either side): horizontal `a` to the output node
//! - input of `a`: vertical `a` to the input node

use std::fmt;

use log::{debug, info};

use xdsm_core::{
    identifier::Id,
    semantic::{Diagram, Side},
};

use crate::{error::XdsmError, layout::GridPositions};

/// A single `DataLine` edge between the centers of two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    start: Id,
    end: Id,
}

impl Edge {
    pub fn new(start: Id, end: Id) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}.center) edge [DataLine] ({}.center)",
            self.start, self.end
        )
    }
}

/// Horizontal and vertical edges of a diagram, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeSet {
    horizontal: Vec<Edge>,
    vertical: Vec<Edge>,
}

impl EdgeSet {
    pub fn horizontal(&self) -> &[Edge] {
        &self.horizontal
    }

    pub fn vertical(&self) -> &[Edge] {
        &self.vertical
    }

    /// Total number of edges.
    pub fn len(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render the edges as the body of a TikZ `\path`, terminated by `;`.
    pub fn to_markup(&self) -> String {
        let join = |edges: &[Edge]| {
            edges
                .iter()
                .map(Edge::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            "% Horizontal edges\n{}\n% Vertical edges\n{};",
            join(&self.horizontal),
            join(&self.vertical)
        )
    }
}

/// Collect the edges of `diagram`.
///
/// `positions` must come from the same diagram; it is used to reject
/// references to components that do not exist.
///
/// # Errors
///
/// Returns [`XdsmError::UnknownComponent`] if a connection, output or input
/// refers to a missing component.
pub fn collect_edges(diagram: &Diagram, positions: &GridPositions) -> Result<EdgeSet, XdsmError> {
    let mut edges = EdgeSet::default();

    for connection in diagram.connections() {
        let node = connection.node_id();
        positions.require_row(connection.source(), || {
            format!("the source of connection `{node}`")
        })?;
        positions.require_col(connection.target(), || {
            format!("the target of connection `{node}`")
        })?;

        edges.horizontal.push(Edge::new(connection.source(), node));
        edges.vertical.push(Edge::new(node, connection.target()));
    }

    for side in [Side::Left, Side::Right] {
        for output in diagram.outputs(side) {
            positions.require_row(output.owner(), || format!("a {side} output"))?;
            edges
                .horizontal
                .push(Edge::new(output.owner(), output.node_id()));
        }
    }

    for input in diagram.inputs() {
        positions.require_col(input.owner(), || "an input".to_string())?;
        edges.vertical.push(Edge::new(input.owner(), input.node_id()));
    }

    debug!(
        horizontal = edges.horizontal.len(),
        vertical = edges.vertical.len();
        "Edges collected"
    );
    Ok(edges)
}

/// Build the edge path markup of `diagram`.
///
/// # Errors
///
/// See [`collect_edges`].
pub fn build_edges(diagram: &Diagram, positions: &GridPositions) -> Result<String, XdsmError> {
    let edges = collect_edges(diagram, positions)?;
    info!(edges = edges.len(); "Edges built");
    Ok(edges.to_markup())
}

#[cfg(test)]
mod tests {
    use xdsm_core::style::Style;

    use super::*;

    fn diagram() -> Diagram {
        let mut diagram = Diagram::new();
        diagram
            .add_component("A", Style::Optimization, "A")
            .unwrap()
            .add_component("B", Style::Function, "B")
            .unwrap();
        diagram
    }

    #[test]
    fn test_edge_markup() {
        let edge = Edge::new(Id::new("A"), Id::new("A-B"));

        assert_eq!(edge.to_string(), "(A.center) edge [DataLine] (A-B.center)");
    }

    #[test]
    fn test_edges_of_every_kind() {
        let mut diagram = diagram();
        diagram
            .connect("A", "B", "x")
            .unwrap()
            .add_output("B", "y", Side::Right)
            .add_output("A", "x*", Side::Left)
            .add_input("B", "b0");
        let positions = GridPositions::compute(&diagram);

        let markup = build_edges(&diagram, &positions).unwrap();

        let expected = [
            "% Horizontal edges",
            "(A.center) edge [DataLine] (A-B.center)",
            "(A.center) edge [DataLine] (left_output_A.center)",
            "(B.center) edge [DataLine] (right_output_B.center)",
            "% Vertical edges",
            "(A-B.center) edge [DataLine] (B.center)",
            "(B.center) edge [DataLine] (output_B.center);",
        ]
        .join("\n");
        assert_eq!(markup, expected);
    }

    #[test]
    fn test_no_edges() {
        let diagram = diagram();
        let positions = GridPositions::compute(&diagram);

        let edges = collect_edges(&diagram, &positions).unwrap();

        assert!(edges.is_empty());
        assert_eq!(edges.to_markup(), "% Horizontal edges\n\n% Vertical edges\n;");
    }

    #[test]
    fn test_unknown_output_owner() {
        let mut diagram = diagram();
        diagram.add_output("Q", "q", Side::Left);
        let positions = GridPositions::compute(&diagram);

        let err = collect_edges(&diagram, &positions).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Unknown component `Q` referenced by a left output"
        );
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use xdsm_core::style::Style;

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// A component count and index pairs for connections, inputs and both
    /// output sides. Indices are reduced modulo the component count.
    fn wiring_strategy()
    -> impl Strategy<Value = (usize, Vec<(usize, usize)>, Vec<usize>, Vec<usize>, Vec<usize>)> {
        (
            2usize..8,
            prop::collection::vec((0usize..64, 0usize..64), 0..12),
            prop::collection::vec(0usize..64, 0..6),
            prop::collection::vec(0usize..64, 0..6),
            prop::collection::vec(0usize..64, 0..6),
        )
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Edge count is twice the connections plus one per output and input.
    fn check_edge_count(
        count: usize,
        pairs: Vec<(usize, usize)>,
        inputs: Vec<usize>,
        lefts: Vec<usize>,
        rights: Vec<usize>,
    ) -> Result<(), TestCaseError> {
        let name = |i: usize| format!("c{}", i % count);

        let mut diagram = Diagram::new();
        for i in 0..count {
            diagram
                .add_component(name(i).as_str(), Style::Function, "c")
                .unwrap();
        }
        for (source, target) in pairs {
            // Self pairs are rejected by the model and do not count.
            let _ = diagram.connect(name(source).as_str(), name(target).as_str(), "d");
        }
        for i in inputs {
            diagram.add_input(name(i).as_str(), "in");
        }
        for i in lefts {
            diagram.add_output(name(i).as_str(), "out", Side::Left);
        }
        for i in rights {
            diagram.add_output(name(i).as_str(), "out", Side::Right);
        }

        let positions = GridPositions::compute(&diagram);
        let edges = collect_edges(&diagram, &positions)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        let expected = 2 * diagram.connections().len()
            + diagram.outputs(Side::Left).len()
            + diagram.outputs(Side::Right).len()
            + diagram.inputs().len();
        prop_assert_eq!(edges.len(), expected);
        prop_assert_eq!(
            edges.vertical().len(),
            diagram.connections().len() + diagram.inputs().len()
        );
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn edge_count((count, pairs, inputs, lefts, rights) in wiring_strategy()) {
            check_edge_count(count, pairs, inputs, lefts, rights)?;
        }
    }
}
