//! Elaboration: turns a raw [`Description`] into a semantic [`Diagram`].
//!
//! Every reference is resolved against the declared components and every
//! label is checked. Problems are collected rather than returned one by one.

use std::collections::HashMap;

use log::{debug, trace};
use toml::{Spanned, Value};

use xdsm_core::{
    identifier::Id,
    label::Label,
    semantic::{Component, Connection, Diagram, Input, Output},
    style::Style,
};

use crate::{
    description::{
        ComponentDecl, ConnectionDecl, Description, InputDecl, OutputDecl, ProcessDecl,
    },
    error::{self, Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    span::Span,
};

/// Builds a [`Diagram`] from a [`Description`], collecting diagnostics.
pub(crate) struct Builder {
    diagram: Diagram,
    collector: DiagnosticCollector,
    /// Declared component names and where they were first declared.
    declared: HashMap<String, Span>,
}

impl Builder {
    pub(crate) fn new() -> Self {
        Self {
            diagram: Diagram::new(),
            collector: DiagnosticCollector::new(),
            declared: HashMap::new(),
        }
    }

    /// Consume the builder, returning the diagram or every error found.
    pub(crate) fn build(mut self, description: Description) -> Result<Diagram, ParseError> {
        debug!(
            components = description.components.len(),
            connections = description.connections.len();
            "Elaborating description"
        );

        for component in description.components {
            self.add_component(component);
        }
        for input in description.inputs {
            self.add_input(input);
        }
        for output in description.outputs {
            self.add_output(output);
        }
        for connection in description.connections {
            self.add_connection(connection);
        }
        for process in description.processes {
            self.add_process(process);
        }

        self.collector.finish(self.diagram)
    }

    fn add_component(&mut self, decl: ComponentDecl) {
        let name = decl.name.get_ref();
        let span = Span::from(decl.name.span());

        if let Some(first) = self.declared.get(name) {
            self.collector.emit(
                Diagnostic::error(format!("component `{name}` is defined more than once"))
                    .with_code(ErrorCode::E300)
                    .with_label(span, "duplicate definition")
                    .with_secondary_label(*first, "first defined here")
                    .with_help("rename one of the components"),
            );
            return;
        }
        self.declared.insert(name.clone(), span);

        let Some(label) = self.label(&decl.label) else {
            return;
        };

        trace!(component = name.as_str(); "Elaborating component");
        let component = Component::new(Id::new(name), decl.style, label)
            .with_stacked(decl.stacked)
            .with_faded(decl.faded);
        if let Err(err) = self.diagram.add_component_with(component) {
            self.collector
                .emit(Diagnostic::error(err.to_string()).with_label(span, "rejected here"));
        }
    }

    fn add_input(&mut self, decl: InputDecl) {
        let owner = self.resolve(&decl.component);
        let label = self.label(&decl.label);
        let (Some(owner), Some(label)) = (owner, label) else {
            return;
        };

        let input = Input::new(owner, label)
            .with_style(decl.style.unwrap_or_else(Style::io_default))
            .with_stacked(decl.stacked);
        self.diagram.add_input_with(input);
    }

    fn add_output(&mut self, decl: OutputDecl) {
        let owner = self.resolve(&decl.component);
        let label = self.label(&decl.label);
        let (Some(owner), Some(label)) = (owner, label) else {
            return;
        };

        let output = Output::new(owner, label, decl.side)
            .with_style(decl.style.unwrap_or_else(Style::io_default))
            .with_stacked(decl.stacked);
        self.diagram.add_output_with(output);
    }

    fn add_connection(&mut self, decl: ConnectionDecl) {
        if decl.source.get_ref() == decl.target.get_ref() {
            self.collector.emit(
                Diagnostic::error(format!(
                    "can not connect component `{}` to itself",
                    decl.source.get_ref()
                ))
                .with_code(ErrorCode::E301)
                .with_label(decl.target.span().into(), "same as the source")
                .with_secondary_label(decl.source.span().into(), "source"),
            );
            return;
        }

        let source = self.resolve(&decl.source);
        let target = self.resolve(&decl.target);
        let label = self.label(&decl.label);
        let (Some(source), Some(target), Some(label)) = (source, target, label) else {
            return;
        };

        let connection = Connection::new(source, target, label)
            .with_style(decl.style.unwrap_or_else(Style::connection_default))
            .with_stacked(decl.stacked)
            .with_faded(decl.faded);
        if let Err(err) = self.diagram.connect_with(connection) {
            self.collector.emit(
                Diagnostic::error(err.to_string())
                    .with_code(ErrorCode::E301)
                    .with_label(decl.target.span().into(), "rejected here"),
            );
        }
    }

    fn add_process(&mut self, decl: ProcessDecl) {
        let members = decl.members.get_ref();
        if members.is_empty() {
            self.collector.emit(
                Diagnostic::warning("process chain has no members")
                    .with_label(decl.members.span().into(), "empty chain"),
            );
        }

        let mut resolved = Vec::with_capacity(members.len());
        for member in members {
            if let Some(id) = self.resolve(member) {
                resolved.push(id);
            }
        }

        if resolved.len() == members.len() {
            self.diagram.add_process(resolved, decl.directed);
        }
    }

    /// Resolve a component reference, reporting unknown names.
    fn resolve(&mut self, name: &Spanned<String>) -> Option<Id> {
        if self.declared.contains_key(name.get_ref()) {
            return Some(Id::new(name.get_ref()));
        }

        self.collector.emit(
            Diagnostic::error(format!("unknown component `{}`", name.get_ref()))
                .with_code(ErrorCode::E200)
                .with_label(name.span().into(), "not a declared component")
                .with_help("declare it in a `[[component]]` table first"),
        );
        None
    }

    /// Convert a label value, reporting values of the wrong type.
    fn label(&mut self, value: &Spanned<Value>) -> Option<Label> {
        match label_from_value(value) {
            Ok(label) => Some(label),
            Err(diagnostic) => {
                self.collector.emit(diagnostic);
                None
            }
        }
    }
}

/// Interpret a TOML value as a [`Label`].
///
/// Strings become single labels and arrays of strings multi-line labels.
fn label_from_value(value: &Spanned<Value>) -> error::Result<Label> {
    let span = Span::from(value.span());
    let invalid = |found: String| {
        Diagnostic::error(format!(
            "invalid label type: expected a string or an array of strings, found {found}"
        ))
        .with_code(ErrorCode::E101)
        .with_label(span, "invalid label")
    };

    match value.get_ref() {
        Value::String(text) => Ok(Label::Text(text.clone())),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(line) => Ok(line.clone()),
                other => Err(invalid(format!("an array containing {}", other.type_str()))),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Label::Lines),
        other => Err(invalid(other.type_str().to_string())),
    }
}
