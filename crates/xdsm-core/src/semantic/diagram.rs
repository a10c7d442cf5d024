//! The diagram registry and its mutation API.

use indexmap::IndexMap;
use log::{debug, trace};
use thiserror::Error;

use crate::{
    identifier::Id,
    label::Label,
    semantic::element::{Component, Connection, Input, Output, ProcessChain, Side},
    style::Style,
};

/// Errors raised while mutating a [`Diagram`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Can not connect component `{name}` to itself")]
    SelfConnection { name: String },

    #[error("Component `{name}` is defined more than once")]
    DuplicateComponent { name: String },
}

/// An XDSM diagram: components in diagonal order plus everything attached
/// to them.
///
/// Inputs and outputs are keyed by their owner. Registering a second one for
/// the same owner (and side) replaces the first but keeps its position in
/// registration order.
///
/// # Examples
///
/// ```
/// use xdsm_core::{
///     semantic::{Diagram, ModelError, Side},
///     style::Style,
/// };
///
/// fn build() -> Result<Diagram, ModelError> {
///     let mut diagram = Diagram::new();
///     diagram
///         .add_component("opt", Style::Optimization, "Optimizer")?
///         .add_component("F", Style::Function, "F")?
///         .connect("opt", "F", "x")?
///         .connect("F", "opt", "f")?
///         .add_input("opt", "x_0")
///         .add_output("opt", "x^*", Side::Left)
///         .add_process(["opt", "F", "opt"], true);
///     Ok(diagram)
/// }
///
/// let diagram = build().unwrap();
/// assert_eq!(diagram.components().len(), 2);
/// assert_eq!(diagram.connections().len(), 2);
///
/// let mut diagram = Diagram::new();
/// assert!(diagram.connect("a", "a", "loop").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    components: Vec<Component>,
    connections: Vec<Connection>,
    inputs: IndexMap<Id, Input>,
    left_outputs: IndexMap<Id, Output>,
    right_outputs: IndexMap<Id, Output>,
    processes: Vec<ProcessChain>,
}

impl Diagram {
    /// Create an empty diagram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component with default modifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateComponent`] if a component with the
    /// same name already exists.
    pub fn add_component(
        &mut self,
        name: impl Into<Id>,
        style: Style,
        label: impl Into<Label>,
    ) -> Result<&mut Self, ModelError> {
        self.add_component_with(Component::new(name.into(), style, label))
    }

    /// Append a fully configured component.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateComponent`] if a component with the
    /// same name already exists.
    pub fn add_component_with(&mut self, component: Component) -> Result<&mut Self, ModelError> {
        if self.component(component.id()).is_some() {
            return Err(ModelError::DuplicateComponent {
                name: component.id().to_string(),
            });
        }

        debug!(
            component = component.id().to_string(),
            position = self.components.len();
            "Adding component"
        );
        self.components.push(component);
        Ok(self)
    }

    /// Register the input of a component, replacing any previous one.
    pub fn add_input(&mut self, name: impl Into<Id>, label: impl Into<Label>) -> &mut Self {
        self.add_input_with(Input::new(name.into(), label))
    }

    /// Register a fully configured input, replacing any previous one.
    pub fn add_input_with(&mut self, input: Input) -> &mut Self {
        trace!(owner = input.owner().to_string(); "Registering input");
        self.inputs.insert(input.owner(), input);
        self
    }

    /// Register the output of a component on `side`, replacing any previous
    /// output on that side.
    pub fn add_output(
        &mut self,
        name: impl Into<Id>,
        label: impl Into<Label>,
        side: Side,
    ) -> &mut Self {
        self.add_output_with(Output::new(name.into(), label, side))
    }

    /// Register a fully configured output, replacing any previous output of
    /// the same owner on the same side.
    pub fn add_output_with(&mut self, output: Output) -> &mut Self {
        trace!(
            owner = output.owner().to_string(),
            side = output.side().to_string();
            "Registering output"
        );
        let outputs = match output.side() {
            Side::Left => &mut self.left_outputs,
            Side::Right => &mut self.right_outputs,
        };
        outputs.insert(output.owner(), output);
        self
    }

    /// Connect two components with the default connection style.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::SelfConnection`] if `source` and `target` are
    /// the same component.
    pub fn connect(
        &mut self,
        source: impl Into<Id>,
        target: impl Into<Id>,
        label: impl Into<Label>,
    ) -> Result<&mut Self, ModelError> {
        self.connect_with(Connection::new(source.into(), target.into(), label))
    }

    /// Append a fully configured connection.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::SelfConnection`] if the connection's source and
    /// target are the same component.
    pub fn connect_with(&mut self, connection: Connection) -> Result<&mut Self, ModelError> {
        if connection.source() == connection.target() {
            return Err(ModelError::SelfConnection {
                name: connection.source().to_string(),
            });
        }

        trace!(
            source = connection.source().to_string(),
            target = connection.target().to_string();
            "Adding connection"
        );
        self.connections.push(connection);
        Ok(self)
    }

    /// Append a process chain.
    ///
    /// Member names are checked when process chains are built, not here.
    pub fn add_process<I, N>(&mut self, members: I, directed: bool) -> &mut Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Id>,
    {
        let members = members.into_iter().map(Into::into).collect();
        self.processes.push(ProcessChain::new(members, directed));
        self
    }

    /// Look up a component by name.
    pub fn component(&self, id: Id) -> Option<&Component> {
        self.components.iter().find(|component| component.id() == id)
    }

    /// Components in diagonal order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Connections in registration order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Inputs in registration order.
    pub fn inputs(&self) -> impl ExactSizeIterator<Item = &Input> {
        self.inputs.values()
    }

    /// Outputs on `side` in registration order.
    pub fn outputs(&self, side: Side) -> impl ExactSizeIterator<Item = &Output> {
        match side {
            Side::Left => self.left_outputs.values(),
            Side::Right => self.right_outputs.values(),
        }
    }

    /// Process chains in registration order.
    pub fn processes(&self) -> &[ProcessChain] {
        &self.processes
    }

    pub fn has_inputs(&self) -> bool {
        !self.inputs.is_empty()
    }

    pub fn has_outputs(&self, side: Side) -> bool {
        match side {
            Side::Left => !self.left_outputs.is_empty(),
            Side::Right => !self.right_outputs.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_components() -> Diagram {
        let mut diagram = Diagram::new();
        diagram
            .add_component("A", Style::Function, "A")
            .unwrap()
            .add_component("B", Style::Function, "B")
            .unwrap()
            .add_component("C", Style::Function, "C")
            .unwrap();
        diagram
    }

    #[test]
    fn test_components_keep_insertion_order() {
        let diagram = three_components();

        let names: Vec<String> = diagram
            .components()
            .iter()
            .map(|c| c.id().to_string())
            .collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn test_duplicate_component_rejected() {
        let mut diagram = three_components();

        let err = diagram
            .add_component("B", Style::MDA, "again")
            .unwrap_err();

        assert_eq!(
            err,
            ModelError::DuplicateComponent {
                name: "B".to_string()
            }
        );
        assert_eq!(diagram.components().len(), 3);
    }

    #[test]
    fn test_self_connection_rejected() {
        let mut diagram = three_components();

        let err = diagram.connect("A", "A", "loop").unwrap_err();

        assert_eq!(err.to_string(), "Can not connect component `A` to itself");
        assert!(diagram.connections().is_empty());
    }

    #[test]
    fn test_parallel_connections_are_kept() {
        let mut diagram = three_components();
        diagram
            .connect("A", "B", "x")
            .unwrap()
            .connect("A", "B", "y")
            .unwrap();

        assert_eq!(diagram.connections().len(), 2);
    }

    #[test]
    fn test_input_overwrite_keeps_position() {
        let mut diagram = three_components();
        diagram
            .add_input("A", "first")
            .add_input("B", "b")
            .add_input("A", "second");

        let inputs: Vec<(String, String)> = diagram
            .inputs()
            .map(|i| (i.owner().to_string(), i.label().to_string()))
            .collect();
        assert_eq!(
            inputs,
            [
                ("A".to_string(), "second".to_string()),
                ("B".to_string(), "b".to_string())
            ]
        );
    }

    #[test]
    fn test_outputs_are_kept_per_side() {
        let mut diagram = three_components();
        diagram
            .add_output("A", "left", Side::Left)
            .add_output("A", "right", Side::Right);

        assert!(diagram.has_outputs(Side::Left));
        assert!(diagram.has_outputs(Side::Right));
        assert_eq!(diagram.outputs(Side::Left).len(), 1);
        assert_eq!(diagram.outputs(Side::Right).len(), 1);
        assert!(!diagram.has_inputs());
    }

    #[test]
    fn test_process_membership_not_checked_on_add() {
        let mut diagram = three_components();
        diagram.add_process(["A", "Z"], false);

        assert_eq!(diagram.processes().len(), 1);
        assert!(!diagram.processes()[0].is_directed());
        assert_eq!(diagram.processes()[0].members()[1], "Z");
    }
}
