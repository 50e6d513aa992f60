//! Graph definition and frozen element index
//!
//! This module implements:
//! - A mutable, insertion-ordered directed graph (`DiGraph`)
//! - The frozen base graph that fixes node/edge array positions (`BaseGraph`)
//! - Element, kind and orientation types shared with arrays and operators

pub mod base;
pub mod digraph;
pub mod types;

// Re-export main types
pub use base::BaseGraph;
pub use digraph::{AttrMap, DiGraph};
pub use types::{Element, ElementKind, Layout, NodeKey, Orientation};
