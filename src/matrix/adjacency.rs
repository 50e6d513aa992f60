//! Weighted adjacency matrix

use super::sparse::{SparseFormat, SparseMatrix};
use super::GraphOperator;
use crate::array::GraphArray;
use crate::config::GraphArrayConfig;
use crate::error::{GraphError, GraphResult};
use crate::graph::{BaseGraph, ElementKind, NodeKey, Orientation};
use ndarray::{Array1, Array2};
use std::sync::Arc;
use tracing::{debug, trace};

/// N x N matrix whose `(u, v)` entry is the weight of edge `(u, v)`
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix<N: NodeKey> {
    base_graph: Arc<BaseGraph<N>>,
    matrix: SparseMatrix,
    orientation: Orientation,
}

impl<N: NodeKey> AdjacencyMatrix<N> {
    /// Build a CSR adjacency matrix from edge weights
    pub fn new(weights: &GraphArray<N>) -> GraphResult<Self> {
        Self::with_format(weights, SparseFormat::default())
    }

    /// Build with the storage format from `config`
    pub fn with_config(weights: &GraphArray<N>, config: &GraphArrayConfig) -> GraphResult<Self> {
        Self::with_format(weights, config.sparse_format)
    }

    /// Build with an explicit storage format
    pub fn with_format(weights: &GraphArray<N>, format: SparseFormat) -> GraphResult<Self> {
        if weights.kind() != ElementKind::Edge {
            return Err(GraphError::type_mismatch(
                "EdgeArray of weights",
                weights.kind().array_name(),
            ));
        }

        let base_graph = weights.base_graph();
        let n = base_graph.node_count();
        let edges = base_graph.ordered_edges()?;
        let mut triplets = Vec::with_capacity(edges.len());
        for ((u, v), w) in edges.iter().zip(weights.values()) {
            triplets.push((base_graph.node_index(u)?, base_graph.node_index(v)?, w));
        }
        let matrix = SparseMatrix::from_triplets(n, n, &triplets, format)?;

        debug!(
            "Built {}x{} adjacency matrix ({:?}, {} stored entries)",
            n,
            n,
            format,
            matrix.nnz()
        );

        Ok(AdjacencyMatrix {
            base_graph: Arc::clone(base_graph),
            matrix,
            orientation: Orientation::Normal,
        })
    }

    /// Entry at `(u, v)` of the current matrix
    pub fn get(&self, u: &N, v: &N) -> GraphResult<f64> {
        let i = self.base_graph.node_index(u)?;
        let j = self.base_graph.node_index(v)?;
        self.matrix
            .get(i, j)
            .ok_or_else(|| GraphError::Shape(format!("({}, {}) outside the matrix", i, j)))
    }

    /// Dense row of a node, columns in node order
    pub fn row(&self, node: &N) -> GraphResult<Array1<f64>> {
        let i = self.base_graph.node_index(node)?;
        self.matrix
            .row(i)
            .ok_or_else(|| GraphError::Shape(format!("row {} outside the matrix", i)))
    }

    /// Dense column of a node, rows in node order
    pub fn col(&self, node: &N) -> GraphResult<Array1<f64>> {
        let j = self.base_graph.node_index(node)?;
        self.matrix
            .col(j)
            .ok_or_else(|| GraphError::Shape(format!("column {} outside the matrix", j)))
    }

    pub fn to_dense(&self) -> Array2<f64> {
        self.matrix.to_dense()
    }

    pub fn format(&self) -> SparseFormat {
        self.matrix.format()
    }
}

impl<N: NodeKey> GraphOperator<N> for AdjacencyMatrix<N> {
    fn base_graph(&self) -> &Arc<BaseGraph<N>> {
        &self.base_graph
    }

    fn matrix(&self) -> &SparseMatrix {
        &self.matrix
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn name(&self) -> &'static str {
        "adjacency matrix"
    }

    fn input_kind(&self) -> ElementKind {
        ElementKind::Node
    }

    fn output_kind(&self) -> ElementKind {
        ElementKind::Node
    }

    fn transpose(&mut self) -> &mut Self {
        self.matrix.transpose();
        self.orientation = self.orientation.flipped();
        trace!("Transposed adjacency matrix ({:?})", self.orientation);
        self
    }
}
