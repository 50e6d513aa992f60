//! Core type definitions shared by graphs, arrays and operators

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Anything usable as a node identifier.
///
/// Blanket-implemented, so integers, strings and tuples all qualify.
pub trait NodeKey: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> NodeKey for T {}

/// Whether a variable lives on nodes or on edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Edge,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Node => "node",
            ElementKind::Edge => "edge",
        }
    }

    /// Name of the array type bound to this kind, used in error messages
    pub fn array_name(&self) -> &'static str {
        match self {
            ElementKind::Node => "NodeArray",
            ElementKind::Edge => "EdgeArray",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A node or a directed edge of the base graph
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element<N> {
    Node(N),
    Edge(N, N),
}

impl<N> Element<N> {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Node(_) => ElementKind::Node,
            Element::Edge(_, _) => ElementKind::Edge,
        }
    }

    /// Get the node if this is a node element
    pub fn as_node(&self) -> Option<&N> {
        match self {
            Element::Node(n) => Some(n),
            _ => None,
        }
    }

    /// Get the endpoints if this is an edge element
    pub fn as_edge(&self) -> Option<(&N, &N)> {
        match self {
            Element::Edge(u, v) => Some((u, v)),
            _ => None,
        }
    }
}

impl<N: fmt::Debug> fmt::Display for Element<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Node(n) => write!(f, "{:?}", n),
            Element::Edge(u, v) => write!(f, "({:?}, {:?})", u, v),
        }
    }
}

/// Column or row addressing of a 2-D buffer, or the transpose state of an operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Normal,
    Transposed,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Normal => Orientation::Transposed,
            Orientation::Transposed => Orientation::Normal,
        }
    }

    pub fn is_transposed(self) -> bool {
        self == Orientation::Transposed
    }
}

/// Buffer layout of an array: plain 1-D or a 2-D column vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Layout {
    #[default]
    Flat,
    Column,
}
