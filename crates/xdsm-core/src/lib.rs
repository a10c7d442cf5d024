//! XDSM Core Types and Definitions
//!
//! This crate provides the foundational types for Extended Design Structure
//! Matrix diagrams. It includes:
//!
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Styles**: TikZ node styles and their modifiers ([`style`] module)
//! - **Labels**: Single and multi-line node labels ([`label::Label`])
//! - **Semantic**: The diagram model and its mutation API ([`semantic`] module)

pub mod identifier;
pub mod label;
pub mod semantic;
pub mod style;
