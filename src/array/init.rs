//! Initial value sources and element-keyed mappings

use super::GraphArray;
use crate::graph::{Element, ElementKind, NodeKey};
use indexmap::IndexMap;
use ndarray::Array1;

/// Values keyed by node or by edge.
///
/// Equality ignores key order.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementMap<N: NodeKey> {
    Nodes(IndexMap<N, f64>),
    Edges(IndexMap<(N, N), f64>),
}

impl<N: NodeKey> ElementMap<N> {
    /// Build a node mapping
    pub fn nodes<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, f64)>,
    {
        ElementMap::Nodes(entries.into_iter().collect())
    }

    /// Build an edge mapping
    pub fn edges<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ((N, N), f64)>,
    {
        ElementMap::Edges(entries.into_iter().collect())
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            ElementMap::Nodes(_) => ElementKind::Node,
            ElementMap::Edges(_) => ElementKind::Edge,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ElementMap::Nodes(m) => m.len(),
            ElementMap::Edges(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value stored for an element, if any
    pub fn get(&self, element: &Element<N>) -> Option<f64> {
        match (self, element) {
            (ElementMap::Nodes(m), Element::Node(n)) => m.get(n).copied(),
            (ElementMap::Edges(m), Element::Edge(u, v)) => {
                m.get(&(u.clone(), v.clone())).copied()
            }
            _ => None,
        }
    }

    /// Iterate `(element, value)` pairs in insertion order
    pub fn iter(&self) -> Box<dyn Iterator<Item = (Element<N>, f64)> + '_> {
        match self {
            ElementMap::Nodes(m) => Box::new(m.iter().map(|(n, v)| (Element::Node(n.clone()), *v))),
            ElementMap::Edges(m) => Box::new(
                m.iter()
                    .map(|((u, w), v)| (Element::Edge(u.clone(), w.clone()), *v)),
            ),
        }
    }
}

/// Source of the initial values of a new array
#[derive(Debug, Clone)]
pub enum InitValue<N: NodeKey> {
    /// Same value everywhere
    Scalar(f64),
    /// One value per element; must cover every element of the array's kind
    Map(ElementMap<N>),
    /// Copy of another array of the same kind on the same graph
    Array(GraphArray<N>),
    /// Values in index order; only the length is checked
    Raw(Vec<f64>),
}

impl<N: NodeKey> From<f64> for InitValue<N> {
    fn from(value: f64) -> Self {
        InitValue::Scalar(value)
    }
}

impl<N: NodeKey> From<ElementMap<N>> for InitValue<N> {
    fn from(map: ElementMap<N>) -> Self {
        InitValue::Map(map)
    }
}

impl<N: NodeKey> From<GraphArray<N>> for InitValue<N> {
    fn from(array: GraphArray<N>) -> Self {
        InitValue::Array(array)
    }
}

/// Copies the source buffer once; pass the array by value to avoid the copy
impl<N: NodeKey> From<&GraphArray<N>> for InitValue<N> {
    fn from(array: &GraphArray<N>) -> Self {
        InitValue::Array(array.clone())
    }
}

impl<N: NodeKey> From<Vec<f64>> for InitValue<N> {
    fn from(values: Vec<f64>) -> Self {
        InitValue::Raw(values)
    }
}

impl<N: NodeKey> From<Array1<f64>> for InitValue<N> {
    fn from(values: Array1<f64>) -> Self {
        InitValue::Raw(values.iter().copied().collect())
    }
}
