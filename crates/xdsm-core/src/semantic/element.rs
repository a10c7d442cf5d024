//! Diagram element types for the semantic model.

use std::fmt;

use serde::Deserialize;

use crate::{identifier::Id, label::Label, style::Style};

/// A component placed on the diagonal of the matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    id: Id,
    style: Style,
    label: Label,
    stacked: bool,
    faded: bool,
}

impl Component {
    /// Create a new Component that is neither stacked nor faded.
    pub fn new(id: Id, style: Style, label: impl Into<Label>) -> Self {
        Self {
            id,
            style,
            label: label.into(),
            stacked: false,
            faded: false,
        }
    }

    /// Mark the component as stacked.
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    /// Mark the component as faded.
    pub fn with_faded(mut self, faded: bool) -> Self {
        self.faded = faded;
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn is_stacked(&self) -> bool {
        self.stacked
    }

    pub fn is_faded(&self) -> bool {
        self.faded
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// External data entering the diagram above a component.
///
/// Inputs occupy the first row of the grid, in the column of their owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    owner: Id,
    style: Style,
    label: Label,
    stacked: bool,
}

impl Input {
    /// Prefix of the generated node name of an input.
    pub const NODE_PREFIX: &'static str = "output_";

    /// Create a new Input with the default [`Style::DataIO`] style.
    pub fn new(owner: Id, label: impl Into<Label>) -> Self {
        Self {
            owner,
            style: Style::io_default(),
            label: label.into(),
            stacked: false,
        }
    }

    /// Replace the node style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Mark the input as stacked.
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    /// Get the owning component's identifier.
    pub fn owner(&self) -> Id {
        self.owner
    }

    /// Name of the grid node generated for this input.
    pub fn node_id(&self) -> Id {
        self.owner.with_prefix(Self::NODE_PREFIX)
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn is_stacked(&self) -> bool {
        self.stacked
    }
}

/// Side of the grid an [`Output`] is drawn on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    /// Prefix of the generated node names of outputs on this side.
    pub fn node_prefix(self) -> &'static str {
        match self {
            Side::Left => "left_output_",
            Side::Right => "right_output_",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Data leaving the diagram beside a component.
///
/// Left outputs occupy the first column of the grid, right outputs the last
/// one, both in the row of their owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    owner: Id,
    side: Side,
    style: Style,
    label: Label,
    stacked: bool,
}

impl Output {
    /// Create a new Output with the default [`Style::DataIO`] style.
    pub fn new(owner: Id, label: impl Into<Label>, side: Side) -> Self {
        Self {
            owner,
            side,
            style: Style::io_default(),
            label: label.into(),
            stacked: false,
        }
    }

    /// Replace the node style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Mark the output as stacked.
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    /// Get the owning component's identifier.
    pub fn owner(&self) -> Id {
        self.owner
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Name of the grid node generated for this output.
    pub fn node_id(&self) -> Id {
        self.owner.with_prefix(self.side.node_prefix())
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn is_stacked(&self) -> bool {
        self.stacked
    }
}

/// Data passed from one component to another.
///
/// A connection is drawn as an off-diagonal node at the intersection of the
/// source's row and the target's column.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    source: Id,
    target: Id,
    style: Style,
    label: Label,
    stacked: bool,
    faded: bool,
}

impl Connection {
    /// Create a new Connection with the default [`Style::DataInter`] style.
    ///
    /// Self connections are rejected when the connection is added to a
    /// [`Diagram`](crate::semantic::Diagram), not here.
    pub fn new(source: Id, target: Id, label: impl Into<Label>) -> Self {
        Self {
            source,
            target,
            style: Style::connection_default(),
            label: label.into(),
            stacked: false,
            faded: false,
        }
    }

    /// Replace the node style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Mark the connection as stacked.
    pub fn with_stacked(mut self, stacked: bool) -> Self {
        self.stacked = stacked;
        self
    }

    /// Mark the connection as faded.
    pub fn with_faded(mut self, faded: bool) -> Self {
        self.faded = faded;
        self
    }

    /// Get the source component Id of this connection.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target component Id of this connection.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Name of the off-diagonal node generated for this connection.
    pub fn node_id(&self) -> Id {
        Id::connection(self.source, self.target)
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn is_stacked(&self) -> bool {
        self.stacked
    }

    pub fn is_faded(&self) -> bool {
        self.faded
    }
}

/// An ordered execution sequence linking components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessChain {
    members: Vec<Id>,
    directed: bool,
}

impl ProcessChain {
    /// Create a new ProcessChain.
    ///
    /// # Arguments
    ///
    /// * `members` - Component identifiers in execution order
    /// * `directed` - Whether links between members are drawn with arrows
    pub fn new(members: Vec<Id>, directed: bool) -> Self {
        Self { members, directed }
    }

    pub fn members(&self) -> &[Id] {
        &self.members
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }
}
