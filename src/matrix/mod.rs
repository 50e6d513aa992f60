//! Sparse operators defined on a base graph
//!
//! Implements:
//! - Compressed sparse storage (`SparseMatrix`)
//! - Weighted adjacency matrix (node -> node)
//! - Oriented incidence matrix (edge -> node, node -> edge once transposed)

pub mod adjacency;
pub mod incidence;
pub mod sparse;

pub use adjacency::AdjacencyMatrix;
pub use incidence::{IncidenceMatrix, IncidenceMode};
pub use sparse::{SparseFormat, SparseMatrix};

use crate::array::GraphArray;
use crate::error::{GraphError, GraphResult};
use crate::graph::{BaseGraph, ElementKind, NodeKey, Orientation};
use ndarray::Array1;
use std::sync::Arc;

/// A sparse matrix whose rows and columns follow the frozen ordering of a
/// base graph, multiplying one kind of array into another.
pub trait GraphOperator<N: NodeKey> {
    fn base_graph(&self) -> &Arc<BaseGraph<N>>;

    /// Current (possibly transposed) matrix
    fn matrix(&self) -> &SparseMatrix;

    fn orientation(&self) -> Orientation;

    /// Short name used in error messages
    fn name(&self) -> &'static str;

    /// Kind of array accepted by `multiply` in the current orientation
    fn input_kind(&self) -> ElementKind;

    /// Kind of array produced by `multiply` in the current orientation
    fn output_kind(&self) -> ElementKind;

    /// Transpose in place and return `self`
    fn transpose(&mut self) -> &mut Self
    where
        Self: Sized;

    fn is_transposed(&self) -> bool {
        self.orientation().is_transposed()
    }

    /// Matrix-vector product.
    ///
    /// `array` must be of `input_kind()` and live on the same base graph. The
    /// result is of `output_kind()` with the layout and orientation of
    /// `array`.
    fn multiply(&self, array: &GraphArray<N>) -> GraphResult<GraphArray<N>> {
        let expected = self.input_kind();
        if array.kind() != expected {
            let prefix = if self.is_transposed() { "transposed " } else { "" };
            return Err(GraphError::type_mismatch(
                format!("{} for {}{}", expected.array_name(), prefix, self.name()),
                array.kind().array_name(),
            ));
        }
        if !BaseGraph::same_graph(self.base_graph(), array.base_graph()) {
            return Err(GraphError::CrossGraph);
        }

        let input = Array1::from(array.values());
        let output = self.matrix().dot(input.view())?;
        GraphArray::from_parts(
            Arc::clone(self.base_graph()),
            self.output_kind(),
            output.to_vec(),
            array.layout(),
            array.orientation(),
        )
    }
}
