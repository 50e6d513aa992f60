//! Mutable directed graph used as the definition of a base graph
//!
//! Implements:
//! - Nodes kept in first-insertion order
//! - Directed edges kept per source node, in insertion order
//! - Numeric attributes on nodes and edges

use super::types::{Element, ElementKind, NodeKey};
use crate::error::{GraphError, GraphResult};
use indexmap::IndexMap;

/// Attribute storage for a node or an edge
pub type AttrMap = IndexMap<String, f64>;

/// In-memory directed graph
///
/// Uses insertion-ordered maps:
/// - nodes: N -> attributes
/// - succ: N -> (successor -> edge attributes)
///
/// Edges iterate source by source in node order, and within a source in the
/// order they were added. Adding an edge that already exists keeps it once.
#[derive(Debug, Clone)]
pub struct DiGraph<N: NodeKey> {
    nodes: IndexMap<N, AttrMap>,
    succ: IndexMap<N, IndexMap<N, AttrMap>>,
    edge_count: usize,
}

impl<N: NodeKey> DiGraph<N> {
    /// Create a new empty graph
    pub fn new() -> Self {
        DiGraph {
            nodes: IndexMap::new(),
            succ: IndexMap::new(),
            edge_count: 0,
        }
    }

    /// Create a graph from a list of edges
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        graph.add_edges_from(edges);
        graph
    }

    /// Add a node; returns false if it was already present
    pub fn add_node(&mut self, node: N) -> bool {
        if self.nodes.contains_key(&node) {
            return false;
        }
        self.succ.insert(node.clone(), IndexMap::new());
        self.nodes.insert(node, AttrMap::new());
        true
    }

    /// Add a directed edge, creating missing endpoints.
    ///
    /// Returns false if the edge was already present.
    pub fn add_edge(&mut self, source: N, target: N) -> bool {
        self.add_node(source.clone());
        self.add_node(target.clone());

        let out = self.succ.entry(source).or_default();
        if out.contains_key(&target) {
            return false;
        }
        out.insert(target, AttrMap::new());
        self.edge_count += 1;
        true
    }

    /// Add several edges at once
    pub fn add_edges_from<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = (N, N)>,
    {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }

    pub fn has_node(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn has_edge(&self, source: &N, target: &N) -> bool {
        self.succ
            .get(source)
            .map_or(false, |out| out.contains_key(target))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterate nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.keys()
    }

    /// Iterate edges source by source
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.succ
            .iter()
            .flat_map(|(u, out)| out.keys().map(move |v| (u, v)))
    }

    /// Get outgoing neighbors of a node
    pub fn successors(&self, node: &N) -> GraphResult<impl Iterator<Item = &N> + '_> {
        self.succ
            .get(node)
            .map(|out| out.keys())
            .ok_or_else(|| GraphError::not_found(ElementKind::Node, node))
    }

    pub fn node_attrs(&self, node: &N) -> Option<&AttrMap> {
        self.nodes.get(node)
    }

    pub fn edge_attrs(&self, source: &N, target: &N) -> Option<&AttrMap> {
        self.succ.get(source).and_then(|out| out.get(target))
    }

    /// Set a node attribute
    pub fn set_node_attr(&mut self, node: &N, key: impl Into<String>, value: f64) -> GraphResult<()> {
        let attrs = self
            .nodes
            .get_mut(node)
            .ok_or_else(|| GraphError::not_found(ElementKind::Node, node))?;
        attrs.insert(key.into(), value);
        Ok(())
    }

    /// Set an edge attribute
    pub fn set_edge_attr(
        &mut self,
        source: &N,
        target: &N,
        key: impl Into<String>,
        value: f64,
    ) -> GraphResult<()> {
        let attrs = self
            .succ
            .get_mut(source)
            .and_then(|out| out.get_mut(target))
            .ok_or_else(|| {
                GraphError::not_found(ElementKind::Edge, (source, target))
            })?;
        attrs.insert(key.into(), value);
        Ok(())
    }

    /// Look up an attribute on either kind of element
    pub fn element_attr(&self, element: &Element<N>, key: &str) -> Option<f64> {
        let attrs = match element {
            Element::Node(n) => self.node_attrs(n),
            Element::Edge(u, v) => self.edge_attrs(u, v),
        };
        attrs.and_then(|a| a.get(key).copied())
    }
}

impl<N: NodeKey> Default for DiGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}
