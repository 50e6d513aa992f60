//! Variables defined on the nodes or edges of a base graph
//!
//! A `GraphArray` owns a dense buffer whose positions follow the frozen
//! node (or edge) ordering of its base graph. Node arrays and edge arrays
//! are the two `ElementKind`s of the same type.
//!
//! Buffer shapes:
//! - `Layout::Flat`: `[n]`, whatever the orientation
//! - `Layout::Column`: `[n, 1]`, or `[1, n]` once transposed

pub mod convert;
pub mod init;
pub mod ops;

pub use init::{ElementMap, InitValue};
pub use ops::{BinaryOp, Operand};

use crate::error::{GraphError, GraphResult};
use crate::graph::{BaseGraph, Element, ElementKind, Layout, NodeKey, Orientation};
use ndarray::{ArrayD, ArrayViewD, IxDyn};
use std::sync::Arc;
use tracing::trace;

/// Node-valued or edge-valued variable on a base graph
#[derive(Debug, Clone)]
pub struct GraphArray<N: NodeKey> {
    base_graph: Arc<BaseGraph<N>>,
    kind: ElementKind,
    data: ArrayD<f64>,
    layout: Layout,
    orientation: Orientation,
}

impl<N: NodeKey> GraphArray<N> {
    /// Create a 1-D array
    pub fn new(
        base_graph: &Arc<BaseGraph<N>>,
        kind: ElementKind,
        init: impl Into<InitValue<N>>,
    ) -> GraphResult<Self> {
        Self::with_layout(base_graph, kind, init, Layout::Flat)
    }

    /// Create an array with an explicit layout
    pub fn with_layout(
        base_graph: &Arc<BaseGraph<N>>,
        kind: ElementKind,
        init: impl Into<InitValue<N>>,
        layout: Layout,
    ) -> GraphResult<Self> {
        if !base_graph.is_frozen() {
            return Err(GraphError::InvalidState(
                "base graph must be frozen before creating arrays".to_string(),
            ));
        }
        let values = Self::initial_values(base_graph, kind, init.into())?;
        Self::from_parts(Arc::clone(base_graph), kind, values, layout, Orientation::Normal)
    }

    /// Variable on the nodes
    pub fn node_array(base_graph: &Arc<BaseGraph<N>>, init: impl Into<InitValue<N>>) -> GraphResult<Self> {
        Self::new(base_graph, ElementKind::Node, init)
    }

    /// Variable on the edges
    pub fn edge_array(base_graph: &Arc<BaseGraph<N>>, init: impl Into<InitValue<N>>) -> GraphResult<Self> {
        Self::new(base_graph, ElementKind::Edge, init)
    }

    /// Node variable stored as an `[n, 1]` column
    pub fn node_column(base_graph: &Arc<BaseGraph<N>>, init: impl Into<InitValue<N>>) -> GraphResult<Self> {
        Self::with_layout(base_graph, ElementKind::Node, init, Layout::Column)
    }

    /// Edge variable stored as an `[n, 1]` column
    pub fn edge_column(base_graph: &Arc<BaseGraph<N>>, init: impl Into<InitValue<N>>) -> GraphResult<Self> {
        Self::with_layout(base_graph, ElementKind::Edge, init, Layout::Column)
    }

    fn initial_values(
        base_graph: &Arc<BaseGraph<N>>,
        kind: ElementKind,
        init: InitValue<N>,
    ) -> GraphResult<Vec<f64>> {
        let len = base_graph.element_count(kind);
        match init {
            InitValue::Scalar(value) => Ok(vec![value; len]),
            InitValue::Raw(values) => {
                if values.len() != len {
                    return Err(GraphError::Shape(format!(
                        "expected {} values for a {}, got {}",
                        len,
                        kind.array_name(),
                        values.len()
                    )));
                }
                Ok(values)
            }
            InitValue::Array(other) => {
                if other.kind != kind {
                    return Err(GraphError::type_mismatch(
                        kind.array_name(),
                        other.kind.array_name(),
                    ));
                }
                if !BaseGraph::same_graph(base_graph, &other.base_graph) {
                    return Err(GraphError::CrossGraph);
                }
                Ok(other.into_values())
            }
            InitValue::Map(map) => {
                if map.kind() != kind {
                    return Err(GraphError::type_mismatch(
                        format!("{} mapping", kind),
                        format!("{} mapping", map.kind()),
                    ));
                }
                let values = match &map {
                    ElementMap::Nodes(m) => base_graph
                        .ordered_nodes()?
                        .iter()
                        .map(|n| {
                            m.get(n)
                                .copied()
                                .ok_or_else(|| GraphError::not_found(ElementKind::Node, n))
                        })
                        .collect::<GraphResult<Vec<f64>>>()?,
                    ElementMap::Edges(m) => base_graph
                        .ordered_edges()?
                        .iter()
                        .map(|e| {
                            m.get(e)
                                .copied()
                                .ok_or_else(|| GraphError::not_found(ElementKind::Edge, e))
                        })
                        .collect::<GraphResult<Vec<f64>>>()?,
                };
                // every element was found, so a longer map carries unknown keys
                if map.len() != values.len() {
                    return Err(GraphError::Shape(format!(
                        "mapping has {} keys but the graph has {} {}s",
                        map.len(),
                        values.len(),
                        kind
                    )));
                }
                Ok(values)
            }
        }
    }

    /// Assemble an array from values already in index order.
    ///
    /// The buffer shape is derived from `layout` and `orientation`.
    pub(crate) fn from_parts(
        base_graph: Arc<BaseGraph<N>>,
        kind: ElementKind,
        values: Vec<f64>,
        layout: Layout,
        orientation: Orientation,
    ) -> GraphResult<Self> {
        let n = values.len();
        let shape = match (layout, orientation) {
            (Layout::Flat, _) => vec![n],
            (Layout::Column, Orientation::Normal) => vec![n, 1],
            (Layout::Column, Orientation::Transposed) => vec![1, n],
        };
        let data = ArrayD::from_shape_vec(IxDyn(&shape), values)
            .map_err(|e| GraphError::Shape(e.to_string()))?;
        Ok(GraphArray {
            base_graph,
            kind,
            data,
            layout,
            orientation,
        })
    }

    /// Base graph on which this array is defined
    pub fn base_graph(&self) -> &Arc<BaseGraph<N>> {
        &self.base_graph
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Whether the buffer is a 2-D column/row
    pub fn is_2d(&self) -> bool {
        self.layout == Layout::Column
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_transposed(&self) -> bool {
        self.orientation.is_transposed()
    }

    /// Shape of the underlying buffer
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Read-only view of the buffer
    pub fn view(&self) -> ArrayViewD<'_, f64> {
        self.data.view()
    }

    /// Copy of the buffer
    pub fn to_ndarray(&self) -> ArrayD<f64> {
        self.data.clone()
    }

    /// Values in index order
    pub fn values(&self) -> Vec<f64> {
        self.data.iter().copied().collect()
    }

    /// Values in index order, reusing the buffer when it is contiguous
    pub(crate) fn into_values(self) -> Vec<f64> {
        if self.data.is_standard_layout() {
            self.data.into_raw_vec()
        } else {
            self.data.iter().copied().collect()
        }
    }

    /// Elements in index order
    pub fn elements(&self) -> GraphResult<Vec<Element<N>>> {
        self.base_graph.elements(self.kind)
    }

    fn position(&self, element: &Element<N>) -> GraphResult<IxDyn> {
        if element.kind() != self.kind {
            return Err(GraphError::type_mismatch(
                format!("{} key", self.kind),
                format!("{} key", element.kind()),
            ));
        }
        let i = self.base_graph.element_index(element)?;
        Ok(match (self.layout, self.orientation) {
            (Layout::Flat, _) => IxDyn(&[i]),
            (Layout::Column, Orientation::Normal) => IxDyn(&[i, 0]),
            (Layout::Column, Orientation::Transposed) => IxDyn(&[0, i]),
        })
    }

    /// Value on a node or edge
    pub fn get(&self, element: &Element<N>) -> GraphResult<f64> {
        let pos = self.position(element)?;
        self.data
            .get(&pos)
            .copied()
            .ok_or_else(|| GraphError::Shape(format!("position of {} outside the buffer", element)))
    }

    /// Overwrite the value on a node or edge
    pub fn set(&mut self, element: &Element<N>, value: f64) -> GraphResult<()> {
        let pos = self.position(element)?;
        let slot = self
            .data
            .get_mut(&pos)
            .ok_or_else(|| GraphError::Shape(format!("position of {} outside the buffer", element)))?;
        *slot = value;
        Ok(())
    }

    /// Transpose in place and return `self`.
    ///
    /// This mutates the array: a column becomes a row and vice versa, and
    /// the orientation flag toggles. A flat buffer keeps its shape.
    pub fn transpose(&mut self) -> &mut Self {
        let data = std::mem::replace(&mut self.data, ArrayD::zeros(IxDyn(&[0])));
        self.data = data.reversed_axes();
        self.orientation = self.orientation.flipped();
        trace!(
            "Transposed {} to shape {:?}",
            self.kind.array_name(),
            self.data.shape()
        );
        self
    }

    /// New array with `f` applied to every value; kind and shape are kept
    pub fn map_values<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        GraphArray {
            base_graph: Arc::clone(&self.base_graph),
            kind: self.kind,
            data: self.data.mapv(f),
            layout: self.layout,
            orientation: self.orientation,
        }
    }

    /// Check that `other` can be combined with `self`
    pub(crate) fn check_compatible(&self, other: &Self) -> GraphResult<()> {
        if other.kind != self.kind {
            return Err(GraphError::type_mismatch(
                self.kind.array_name(),
                other.kind.array_name(),
            ));
        }
        if !BaseGraph::same_graph(&self.base_graph, &other.base_graph) {
            return Err(GraphError::CrossGraph);
        }
        Ok(())
    }
}

impl<N: NodeKey> PartialEq for GraphArray<N> {
    /// Same kind, same base graph instance, same layout and equal values in
    /// index order. Orientation is ignored for every layout.
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.layout == other.layout
            && BaseGraph::same_graph(&self.base_graph, &other.base_graph)
            && self.data.iter().eq(other.data.iter())
    }
}
