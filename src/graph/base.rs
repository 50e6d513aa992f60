//! Frozen base graph on which arrays are defined
//!
//! A `BaseGraph` works (1) as the key deciding whether two variables are
//! defined on the same network and (2) as the holder of the node and edge
//! orderings. It holds no variables itself.

use super::digraph::DiGraph;
use super::types::{Element, ElementKind, NodeKey};
use crate::error::{GraphError, GraphResult};
use indexmap::IndexSet;
use std::sync::Arc;
use tracing::debug;

/// Dense orderings assigned at freeze time.
///
/// The position of an element inside its set is its array index.
#[derive(Debug, Clone)]
struct GraphIndex<N: NodeKey> {
    nodes: IndexSet<N>,
    edges: IndexSet<(N, N)>,
}

/// Directed graph plus the node/edge orderings used by every array on it
#[derive(Debug, Clone)]
pub struct BaseGraph<N: NodeKey> {
    graph: DiGraph<N>,
    index: Option<GraphIndex<N>>,
}

impl<N: NodeKey> BaseGraph<N> {
    /// Create an empty, unfrozen base graph
    pub fn new() -> Self {
        Self::from_graph(DiGraph::new())
    }

    /// Create an unfrozen base graph from a list of edges
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N)>,
    {
        Self::from_graph(DiGraph::from_edges(edges))
    }

    /// Wrap an existing graph definition, attributes included
    pub fn from_graph(graph: DiGraph<N>) -> Self {
        BaseGraph { graph, index: None }
    }

    pub fn add_node(&mut self, node: N) -> GraphResult<bool> {
        self.ensure_mutable("add a node")?;
        Ok(self.graph.add_node(node))
    }

    pub fn add_edge(&mut self, source: N, target: N) -> GraphResult<bool> {
        self.ensure_mutable("add an edge")?;
        Ok(self.graph.add_edge(source, target))
    }

    pub fn add_edges_from<I>(&mut self, edges: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = (N, N)>,
    {
        self.ensure_mutable("add edges")?;
        self.graph.add_edges_from(edges);
        Ok(())
    }

    fn ensure_mutable(&self, action: &str) -> GraphResult<()> {
        if self.is_frozen() {
            return Err(GraphError::ImmutableGraph(action.to_string()));
        }
        Ok(())
    }

    /// Freeze the graph and map nodes / edges to array indices.
    ///
    /// Must be called before the graph is used to build arrays. Freezing an
    /// already frozen graph changes nothing.
    pub fn freeze(&mut self) {
        if self.index.is_some() {
            return;
        }
        let nodes: IndexSet<N> = self.graph.nodes().cloned().collect();
        let edges: IndexSet<(N, N)> = self
            .graph
            .edges()
            .map(|(u, v)| (u.clone(), v.clone()))
            .collect();
        debug!(
            "Froze base graph with {} nodes and {} edges",
            nodes.len(),
            edges.len()
        );
        self.index = Some(GraphIndex { nodes, edges });
    }

    /// Freeze and move into a shared handle
    pub fn freeze_shared(mut self) -> Arc<Self> {
        self.freeze();
        Arc::new(self)
    }

    pub fn is_frozen(&self) -> bool {
        self.index.is_some()
    }

    fn index(&self) -> GraphResult<&GraphIndex<N>> {
        self.index
            .as_ref()
            .ok_or_else(|| GraphError::InvalidState("base graph is not frozen".to_string()))
    }

    /// Nodes in array order
    pub fn ordered_nodes(&self) -> GraphResult<&IndexSet<N>> {
        Ok(&self.index()?.nodes)
    }

    /// Edges in array order
    pub fn ordered_edges(&self) -> GraphResult<&IndexSet<(N, N)>> {
        Ok(&self.index()?.edges)
    }

    /// Array index of a node
    pub fn node_index(&self, node: &N) -> GraphResult<usize> {
        self.index()?
            .nodes
            .get_index_of(node)
            .ok_or_else(|| GraphError::not_found(ElementKind::Node, node))
    }

    /// Array index of an edge
    pub fn edge_index(&self, source: &N, target: &N) -> GraphResult<usize> {
        let index = self.index()?;
        // IndexSet lookups need an owned tuple key
        let key = (source.clone(), target.clone());
        index
            .edges
            .get_index_of(&key)
            .ok_or_else(|| GraphError::not_found(ElementKind::Edge, &key))
    }

    /// Array index of any element
    pub fn element_index(&self, element: &Element<N>) -> GraphResult<usize> {
        match element {
            Element::Node(n) => self.node_index(n),
            Element::Edge(u, v) => self.edge_index(u, v),
        }
    }

    /// Element stored at array position `i`
    pub fn element_at(&self, kind: ElementKind, i: usize) -> GraphResult<Element<N>> {
        let index = self.index()?;
        let element = match kind {
            ElementKind::Node => index.nodes.get_index(i).cloned().map(Element::Node),
            ElementKind::Edge => index
                .edges
                .get_index(i)
                .map(|(u, v)| Element::Edge(u.clone(), v.clone())),
        };
        element.ok_or_else(|| {
            GraphError::Shape(format!("{} position {} is out of range", kind, i))
        })
    }

    /// All elements of a kind, in array order
    pub fn elements(&self, kind: ElementKind) -> GraphResult<Vec<Element<N>>> {
        let index = self.index()?;
        Ok(match kind {
            ElementKind::Node => index.nodes.iter().cloned().map(Element::Node).collect(),
            ElementKind::Edge => index
                .edges
                .iter()
                .map(|(u, v)| Element::Edge(u.clone(), v.clone()))
                .collect(),
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn element_count(&self, kind: ElementKind) -> usize {
        match kind {
            ElementKind::Node => self.node_count(),
            ElementKind::Edge => self.edge_count(),
        }
    }

    /// Underlying graph definition (read-only)
    pub fn graph(&self) -> &DiGraph<N> {
        &self.graph
    }

    /// Whether two handles point at the very same base graph.
    ///
    /// Structurally identical graphs frozen separately are never the same.
    pub fn same_graph(a: &Arc<Self>, b: &Arc<Self>) -> bool {
        Arc::ptr_eq(a, b)
    }
}

impl<N: NodeKey> Default for BaseGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}
