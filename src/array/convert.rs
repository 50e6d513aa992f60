//! Conversions from arrays to mappings and attributed graphs

use super::{ElementMap, GraphArray};
use crate::config::GraphArrayConfig;
use crate::error::{GraphError, GraphResult};
use crate::graph::{DiGraph, ElementKind, NodeKey};
use std::fmt;

impl<N: NodeKey> GraphArray<N> {
    /// Values keyed by node or edge
    pub fn to_mapping(&self) -> GraphResult<ElementMap<N>> {
        let values = self.data.iter().copied();
        Ok(match self.kind {
            ElementKind::Node => {
                ElementMap::Nodes(self.base_graph.ordered_nodes()?.iter().cloned().zip(values).collect())
            }
            ElementKind::Edge => {
                ElementMap::Edges(self.base_graph.ordered_edges()?.iter().cloned().zip(values).collect())
            }
        })
    }

    /// Copy of the base graph with each value stored as a `"value"` attribute
    pub fn to_attributed_graph(&self, target: ElementKind) -> GraphResult<DiGraph<N>> {
        self.to_attributed_graph_with(target, &GraphArrayConfig::default())
    }

    /// Copy of the base graph with each value stored under
    /// `config.value_attribute`.
    ///
    /// `target` must match the array kind: node values cannot become edge
    /// attributes.
    pub fn to_attributed_graph_with(
        &self,
        target: ElementKind,
        config: &GraphArrayConfig,
    ) -> GraphResult<DiGraph<N>> {
        if target != self.kind {
            return Err(GraphError::InvalidArgument(format!(
                "cannot assign {} values to {} attributes",
                self.kind, target
            )));
        }

        let mut graph = self.base_graph.graph().clone();
        let key = config.value_attribute.as_str();
        match self.to_mapping()? {
            ElementMap::Nodes(values) => {
                for (node, value) in values {
                    graph.set_node_attr(&node, key, value)?;
                }
            }
            ElementMap::Edges(values) => {
                for ((u, v), value) in values {
                    graph.set_edge_attr(&u, &v, key, value)?;
                }
            }
        }
        Ok(graph)
    }

    /// Attributed graph for the array's own kind
    pub fn as_graph(&self) -> GraphResult<DiGraph<N>> {
        self.to_attributed_graph(self.kind)
    }
}

impl<N: NodeKey> fmt::Display for GraphArray<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = self.elements().map_err(|_| fmt::Error)?;
        writeln!(f, "index\tvalue")?;
        for (element, value) in elements.iter().zip(self.data.iter()) {
            writeln!(f, "{}\t{}", element, value)?;
        }
        Ok(())
    }
}
