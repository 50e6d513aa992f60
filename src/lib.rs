//! GraphArray
//!
//! Vectors and matrices defined on the nodes and edges of a fixed directed
//! graph. Values keep their node/edge meaning through arithmetic, and two
//! variables combine only when they live on the very same base graph.
//!
//! # Architecture
//!
//! - `graph`: mutable `DiGraph` definitions and the frozen `BaseGraph` that
//!   fixes every node/edge array position
//! - `array`: `GraphArray`, the node- or edge-valued variable, with
//!   elementwise arithmetic, inner products, transposition and conversions
//! - `matrix`: sparse `AdjacencyMatrix` and `IncidenceMatrix` operators
//! - `functions`: `exp`, `log`, `sum`, `min`, `max`, `argmin`, `argmax`
//!
//! ## Example Usage
//!
//! ```rust
//! use grapharray::{BaseGraph, Element, ElementMap, GraphArray, GraphOperator, IncidenceMatrix};
//!
//! let graph = BaseGraph::from_edges(vec![(0, 2), (0, 4), (2, 4), (2, 6), (4, 6)]).freeze_shared();
//!
//! let flow = ElementMap::edges(vec![
//!     ((0, 2), 6.0),
//!     ((0, 4), 4.0),
//!     ((2, 4), 3.0),
//!     ((2, 6), 1.0),
//!     ((4, 6), 2.0),
//! ]);
//! let flow = GraphArray::edge_array(&graph, flow).unwrap();
//!
//! // Net inflow at each node
//! let incidence = IncidenceMatrix::new(&graph).unwrap();
//! let balance = incidence.multiply(&flow).unwrap();
//! assert_eq!(balance.get(&Element::Node(0)).unwrap(), -10.0);
//! assert_eq!(balance.get(&Element::Node(6)).unwrap(), 3.0);
//!
//! let doubled = balance.mul(2.0).unwrap();
//! assert_eq!(doubled.get(&Element::Node(4)).unwrap(), 10.0);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod array;
pub mod config;
pub mod error;
pub mod functions;
pub mod graph;
pub mod matrix;

// Re-export main types for convenience
pub use array::{BinaryOp, ElementMap, GraphArray, InitValue, Operand};
pub use config::{GraphArrayConfig, DEFAULT_VALUE_ATTRIBUTE};
pub use error::{GraphError, GraphResult};
pub use graph::{AttrMap, BaseGraph, DiGraph, Element, ElementKind, Layout, NodeKey, Orientation};
pub use matrix::{
    AdjacencyMatrix, GraphOperator, IncidenceMatrix, IncidenceMode, SparseFormat, SparseMatrix,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
