//! Oriented node-edge incidence matrix
//!
//! The column of edge `(u, v)` holds -1 at row `u` and +1 at row `v`.
//! Self-loops get an empty column.
//!
//! Two modes, switched by `transpose` and nothing else:
//! - `Divergence`: edge array in, node array out (net inflow at each node)
//! - `Gradient`: node array in, edge array out (head minus tail on each edge)

use super::sparse::{SparseFormat, SparseMatrix};
use super::GraphOperator;
use crate::config::GraphArrayConfig;
use crate::error::GraphResult;
use crate::graph::{BaseGraph, ElementKind, NodeKey, Orientation};
use ndarray::Array2;
use std::sync::Arc;
use tracing::{debug, trace};

/// Which product the incidence matrix currently computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncidenceMode {
    Divergence,
    Gradient,
}

impl IncidenceMode {
    pub fn input_kind(self) -> ElementKind {
        match self {
            IncidenceMode::Divergence => ElementKind::Edge,
            IncidenceMode::Gradient => ElementKind::Node,
        }
    }

    pub fn output_kind(self) -> ElementKind {
        match self {
            IncidenceMode::Divergence => ElementKind::Node,
            IncidenceMode::Gradient => ElementKind::Edge,
        }
    }
}

/// N x E oriented incidence matrix
#[derive(Debug, Clone)]
pub struct IncidenceMatrix<N: NodeKey> {
    base_graph: Arc<BaseGraph<N>>,
    matrix: SparseMatrix,
    orientation: Orientation,
}

impl<N: NodeKey> IncidenceMatrix<N> {
    /// Build a CSR incidence matrix of a frozen graph
    pub fn new(base_graph: &Arc<BaseGraph<N>>) -> GraphResult<Self> {
        Self::with_format(base_graph, SparseFormat::default())
    }

    /// Build with the storage format from `config`
    pub fn with_config(base_graph: &Arc<BaseGraph<N>>, config: &GraphArrayConfig) -> GraphResult<Self> {
        Self::with_format(base_graph, config.sparse_format)
    }

    /// Build with an explicit storage format
    pub fn with_format(base_graph: &Arc<BaseGraph<N>>, format: SparseFormat) -> GraphResult<Self> {
        let edges = base_graph.ordered_edges()?;
        let mut triplets = Vec::with_capacity(2 * edges.len());
        for (j, (u, v)) in edges.iter().enumerate() {
            if u == v {
                continue;
            }
            triplets.push((base_graph.node_index(u)?, j, -1.0));
            triplets.push((base_graph.node_index(v)?, j, 1.0));
        }
        let matrix =
            SparseMatrix::from_triplets(base_graph.node_count(), edges.len(), &triplets, format)?;

        debug!(
            "Built {}x{} incidence matrix ({:?}, {} stored entries)",
            base_graph.node_count(),
            edges.len(),
            format,
            matrix.nnz()
        );

        Ok(IncidenceMatrix {
            base_graph: Arc::clone(base_graph),
            matrix,
            orientation: Orientation::Normal,
        })
    }

    pub fn mode(&self) -> IncidenceMode {
        match self.orientation {
            Orientation::Normal => IncidenceMode::Divergence,
            Orientation::Transposed => IncidenceMode::Gradient,
        }
    }

    pub fn to_dense(&self) -> Array2<f64> {
        self.matrix.to_dense()
    }

    pub fn format(&self) -> SparseFormat {
        self.matrix.format()
    }
}

impl<N: NodeKey> GraphOperator<N> for IncidenceMatrix<N> {
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
        "incidence matrix"
    }

    fn input_kind(&self) -> ElementKind {
        self.mode().input_kind()
    }

    fn output_kind(&self) -> ElementKind {
        self.mode().output_kind()
    }

    fn transpose(&mut self) -> &mut Self {
        self.matrix.transpose();
        self.orientation = self.orientation.flipped();
        trace!("Incidence matrix switched to {:?}", self.mode());
        self
    }
}
