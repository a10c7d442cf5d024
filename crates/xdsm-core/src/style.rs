//! TikZ node styles used by XDSM diagrams.
//!
//! The names match the styles defined in the XDSM style sheet that the
//! rendered picture `\input`s. Any other name is carried through verbatim as
//! [`Style::Custom`].

use std::{convert::Infallible, fmt, str::FromStr};

use serde::Deserialize;

/// Style modifier marking a node as repeated (drawn as a stack).
pub const STACK_MODIFIER: &str = "stack";

/// Style modifier marking a node as de-emphasized.
pub const FADED_MODIFIER: &str = "faded";

/// Node style of a diagram element.
///
/// # Examples
///
/// ```
/// use xdsm_core::style::Style;
///
/// let style: Style = "Optimization".parse().unwrap();
/// assert_eq!(style, Style::Optimization);
/// assert_eq!(style.to_options(true, false), "Optimization,stack");
///
/// let custom: Style = "MyStyle".parse().unwrap();
/// assert_eq!(custom, Style::Custom("MyStyle".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Style {
    Optimization,
    SubOptimization,
    MDA,
    DOE,
    ImplicitFunction,
    Function,
    Group,
    ImplicitGroup,
    Metamodel,
    /// Data passed between two components (off-diagonal nodes).
    DataInter,
    /// Data entering or leaving the diagram (inputs and outputs).
    DataIO,
    /// Any style name not known to this crate.
    Custom(String),
}

impl Style {
    /// Default style of connection nodes.
    pub fn connection_default() -> Self {
        Style::DataInter
    }

    /// Default style of input and output nodes.
    pub fn io_default() -> Self {
        Style::DataIO
    }

    /// Returns the TikZ style name.
    pub fn name(&self) -> &str {
        match self {
            Style::Optimization => "Optimization",
            Style::SubOptimization => "SubOptimization",
            Style::MDA => "MDA",
            Style::DOE => "DOE",
            Style::ImplicitFunction => "ImplicitFunction",
            Style::Function => "Function",
            Style::Group => "Group",
            Style::ImplicitGroup => "ImplicitGroup",
            Style::Metamodel => "Metamodel",
            Style::DataInter => "DataInter",
            Style::DataIO => "DataIO",
            Style::Custom(name) => name,
        }
    }

    /// Returns the TikZ option list for a node of this style, with the
    /// `stack` and `faded` modifiers appended when requested.
    pub fn to_options(&self, stacked: bool, faded: bool) -> String {
        let mut options = self.name().to_string();
        if stacked {
            options.push(',');
            options.push_str(STACK_MODIFIER);
        }
        if faded {
            options.push(',');
            options.push_str(FADED_MODIFIER);
        }
        options
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Optimization" => Style::Optimization,
            "SubOptimization" => Style::SubOptimization,
            "MDA" => Style::MDA,
            "DOE" => Style::DOE,
            "ImplicitFunction" => Style::ImplicitFunction,
            "Function" => Style::Function,
            "Group" => Style::Group,
            "ImplicitGroup" => Style::ImplicitGroup,
            "Metamodel" => Style::Metamodel,
            "DataInter" => Style::DataInter,
            "DataIO" => Style::DataIO,
            other => Style::Custom(other.to_string()),
        })
    }
}

impl From<String> for Style {
    fn from(name: String) -> Self {
        match name.parse() {
            Ok(style) => style,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for Style {
    fn from(name: &str) -> Self {
        Style::from(name.to_string())
    }
}
