//! Raw TOML description of a diagram.
//!
//! These types mirror the tables of the description file one to one. Names
//! and labels keep their source spans so later phases can point at them.
//!
//! ```toml
//! [[component]]
//! name = "opt"
//! style = "Optimization"
//! label = ["Optimizer", "$x$"]
//!
//! [[input]]
//! component = "opt"
//! label = "$x^{(0)}$"
//!
//! [[output]]
//! component = "opt"
//! label = "$x^*$"
//! side = "left"
//!
//! [[connection]]
//! source = "opt"
//! target = "F"
//! label = "$x$"
//!
//! [[process]]
//! members = ["opt", "F", "opt"]
//! directed = true
//! ```

use serde::Deserialize;
use toml::{Spanned, Value};

use xdsm_core::{semantic::Side, style::Style};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Description {
    #[serde(default, rename = "component")]
    pub(crate) components: Vec<ComponentDecl>,

    #[serde(default, rename = "input")]
    pub(crate) inputs: Vec<InputDecl>,

    #[serde(default, rename = "output")]
    pub(crate) outputs: Vec<OutputDecl>,

    #[serde(default, rename = "connection")]
    pub(crate) connections: Vec<ConnectionDecl>,

    #[serde(default, rename = "process")]
    pub(crate) processes: Vec<ProcessDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ComponentDecl {
    pub(crate) name: Spanned<String>,
    pub(crate) style: Style,
    pub(crate) label: Spanned<Value>,
    #[serde(default)]
    pub(crate) stacked: bool,
    #[serde(default)]
    pub(crate) faded: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct InputDecl {
    pub(crate) component: Spanned<String>,
    pub(crate) label: Spanned<Value>,
    #[serde(default)]
    pub(crate) style: Option<Style>,
    #[serde(default)]
    pub(crate) stacked: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct OutputDecl {
    pub(crate) component: Spanned<String>,
    pub(crate) label: Spanned<Value>,
    #[serde(default)]
    pub(crate) style: Option<Style>,
    #[serde(default)]
    pub(crate) stacked: bool,
    #[serde(default)]
    pub(crate) side: Side,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConnectionDecl {
    pub(crate) source: Spanned<String>,
    pub(crate) target: Spanned<String>,
    pub(crate) label: Spanned<Value>,
    #[serde(default)]
    pub(crate) style: Option<Style>,
    #[serde(default)]
    pub(crate) stacked: bool,
    #[serde(default)]
    pub(crate) faded: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ProcessDecl {
    pub(crate) members: Spanned<Vec<Spanned<String>>>,
    #[serde(default = "default_directed")]
    pub(crate) directed: bool,
}

fn default_directed() -> bool {
    true
}
