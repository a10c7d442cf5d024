//! Semantic diagram model.
//!
//! The model is the single owner of everything a diagram declares. Layout,
//! edge and process-chain output are derived from it on demand and never
//! stored back.
//!
//! # Pipeline Position
//!
//! ```text
//! Description (TOML) / fluent API
//!     ↓ parse / mutate
//! Semantic Model (these types)
//!     ↓ layout, edges, process chains
//! Fragments
//!     ↓ export
//! TikZ
//! ```
//!
//! # Organization
//!
//! - [`diagram`] - The [`Diagram`] registry and its mutation API
//! - [`element`] - Diagram elements: [`Component`], [`Input`], [`Output`], [`Connection`], [`ProcessChain`]

pub mod diagram;
pub mod element;

pub use diagram::*;
pub use element::*;
