//! Execution-order process chains.
//!
//! Each chain becomes a TikZ `chains` scope on the `process` layer. The first
//! member starts the chain; every later member is joined to its predecessor
//! with an arrowed (`ProcessHVA`) or plain (`ProcessHV`) link.

use std::fmt;

use log::{debug, info};

use xdsm_core::{
    identifier::Id,
    semantic::{Diagram, ProcessChain},
};

use crate::error::XdsmError;

const CHAIN_BEGIN: &str = "{ [start chain=process]\n \\begin{pgfonlayer}{process} \n";
const CHAIN_END: &str = "\\end{pgfonlayer}\n}\n";

/// One `\chainin` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainLink {
    /// First member of a chain.
    Start(Id),
    /// Later member joined to its predecessor.
    Join { member: Id, directed: bool },
}

impl fmt::Display for ChainLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainLink::Start(member) => write!(f, r"\chainin ({member});"),
            ChainLink::Join {
                member,
                directed: true,
            } => write!(f, r"\chainin ({member}) [join=by ProcessHVA];"),
            ChainLink::Join {
                member,
                directed: false,
            } => write!(f, r"\chainin ({member}) [join=by ProcessHV];"),
        }
    }
}

/// Resolve the links of one chain, checking every member exists.
///
/// `index` is the position of the chain in the diagram and only used for
/// error reporting.
///
/// # Errors
///
/// Returns [`XdsmError::UnknownComponent`] naming the first missing member.
pub fn chain_links(
    diagram: &Diagram,
    chain: &ProcessChain,
    index: usize,
) -> Result<Vec<ChainLink>, XdsmError> {
    chain
        .members()
        .iter()
        .enumerate()
        .map(|(position, &member)| {
            if diagram.component(member).is_none() {
                return Err(XdsmError::unknown_component(
                    member,
                    format!("process chain {index}"),
                ));
            }
            Ok(if position == 0 {
                ChainLink::Start(member)
            } else {
                ChainLink::Join {
                    member,
                    directed: chain.is_directed(),
                }
            })
        })
        .collect()
}

/// Build the process chain markup of `diagram`.
///
/// Chains are emitted in registration order, each as its own `{ ... }` group.
/// A diagram without chains produces an empty string.
///
/// # Errors
///
/// See [`chain_links`].
pub fn build_process_chains(diagram: &Diagram) -> Result<String, XdsmError> {
    let mut markup = String::new();

    for (index, chain) in diagram.processes().iter().enumerate() {
        let links = chain_links(diagram, chain, index)?;
        debug!(index = index, links = links.len(); "Process chain resolved");

        markup.push_str(CHAIN_BEGIN);
        for link in &links {
            markup.push_str(&link.to_string());
            markup.push('\n');
        }
        markup.push_str(CHAIN_END);
    }

    info!(chains = diagram.processes().len(); "Process chains built");
    Ok(markup)
}

#[cfg(test)]
mod tests {
    use xdsm_core::style::Style;

    use super::*;

    fn abc() -> Diagram {
        let mut diagram = Diagram::new();
        diagram
            .add_component("A", Style::MDA, "A")
            .unwrap()
            .add_component("B", Style::Function, "B")
            .unwrap()
            .add_component("C", Style::Function, "C")
            .unwrap();
        diagram
    }

    #[test]
    fn test_directed_chain() {
        let mut diagram = abc();
        diagram.add_process(["A", "B", "C"], true);

        let markup = build_process_chains(&diagram).unwrap();

        let expected = concat!(
            "{ [start chain=process]\n",
            " \\begin{pgfonlayer}{process} \n",
            "\\chainin (A);\n",
            "\\chainin (B) [join=by ProcessHVA];\n",
            "\\chainin (C) [join=by ProcessHVA];\n",
            "\\end{pgfonlayer}\n",
            "}\n",
        );
        assert_eq!(markup, expected);
    }

    #[test]
    fn test_undirected_chain_links() {
        let mut diagram = abc();
        diagram.add_process(["C", "A"], false);

        let links = chain_links(&diagram, &diagram.processes()[0], 0).unwrap();

        assert_eq!(
            links,
            [
                ChainLink::Start(Id::new("C")),
                ChainLink::Join {
                    member: Id::new("A"),
                    directed: false
                },
            ]
        );
        assert_eq!(links[1].to_string(), r"\chainin (A) [join=by ProcessHV];");
    }

    #[test]
    fn test_chains_are_separate_groups() {
        let mut diagram = abc();
        diagram
            .add_process(["A", "B"], true)
            .add_process(["B", "C"], false);

        let markup = build_process_chains(&diagram).unwrap();

        assert_eq!(markup.matches("[start chain=process]").count(), 2);
        assert_eq!(markup.matches(r"\chainin (B)").count(), 2);
    }

    #[test]
    fn test_unknown_member() {
        let mut diagram = abc();
        diagram
            .add_process(["A", "B"], true)
            .add_process(["A", "Z"], true);

        let err = build_process_chains(&diagram).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Unknown component `Z` referenced by process chain 1"
        );
    }

    #[test]
    fn test_no_chains() {
        assert_eq!(build_process_chains(&abc()).unwrap(), "");
    }
}
