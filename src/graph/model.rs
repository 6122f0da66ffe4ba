//! Graph representation
//!
//! [`Graph`] is the wire shape: nodes with layout positions and a flat edge
//! list. Algorithms work on an [`IndexedGraph`], which resolves every node id
//! to a dense index once so the hot loops compare integers instead of strings.
//!
//! # Traversal Rule
//!
//! An edge can be followed from a node when the node is its source, or when
//! the edge is undirected and the node is its target. Directed edges only flow
//! source to target. Incident edges are found by a linear scan in the order the
//! edges were declared, which also fixes every tie-break in the algorithms.
//!
//! # Weights
//!
//! Edge weights are `i32` on the wire and widened to `i64` wherever they are
//! summed, so path and tree totals cannot overflow and never reach
//! [`crate::config::UNREACHABLE`].

use crate::config::MAX_GRAPH_NODES;
use crate::errors::VisualizerError;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl GraphNode {
    /// Node labelled with its own id at the origin
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        GraphNode {
            label: id.clone(),
            id,
            x: 0.0,
            y: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub weight: i32,
    #[serde(default)]
    pub is_directed: bool,
}

impl GraphEdge {
    pub fn undirected(source: impl Into<String>, target: impl Into<String>, weight: i32) -> Self {
        GraphEdge {
            source: source.into(),
            target: target.into(),
            weight,
            is_directed: false,
        }
    }

    pub fn directed(source: impl Into<String>, target: impl Into<String>, weight: i32) -> Self {
        GraphEdge {
            is_directed: true,
            ..Self::undirected(source, target, weight)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

/// A [`Graph`] with node ids resolved to indices
#[derive(Debug)]
pub struct IndexedGraph<'a> {
    graph: &'a Graph,
    index: FxHashMap<&'a str, usize>,
    endpoints: Vec<(usize, usize)>,
}

impl<'a> IndexedGraph<'a> {
    /// Index the graph, rejecting duplicate ids, edges to unknown nodes and
    /// graphs over [`MAX_GRAPH_NODES`]
    pub fn new(graph: &'a Graph) -> Result<Self, VisualizerError> {
        if graph.nodes.len() > MAX_GRAPH_NODES {
            return Err(VisualizerError::GraphTooLarge {
                nodes: graph.nodes.len(),
                limit: MAX_GRAPH_NODES,
            });
        }

        let mut index = FxHashMap::default();
        for (i, node) in graph.nodes.iter().enumerate() {
            if index.insert(node.id.as_str(), i).is_some() {
                return Err(VisualizerError::DuplicateNode {
                    id: node.id.clone(),
                });
            }
        }

        let resolve = |id: &str| {
            index
                .get(id)
                .copied()
                .ok_or_else(|| VisualizerError::UnknownNode { id: id.to_string() })
        };
        let endpoints = graph
            .edges
            .iter()
            .map(|e| Ok((resolve(&e.source)?, resolve(&e.target)?)))
            .collect::<Result<Vec<_>, VisualizerError>>()?;

        Ok(IndexedGraph {
            graph,
            index,
            endpoints,
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edges.len()
    }

    /// Id of the node at `node`
    pub fn id(&self, node: usize) -> &'a str {
        &self.graph.nodes[node].id
    }

    /// Owned ids for a list of node indices
    pub fn ids(&self, nodes: &[usize]) -> Vec<String> {
        nodes.iter().map(|&n| self.id(n).to_string()).collect()
    }

    pub fn edge(&self, edge: usize) -> &'a GraphEdge {
        &self.graph.edges[edge]
    }

    /// (source, target) indices of an edge
    pub fn endpoints(&self, edge: usize) -> (usize, usize) {
        self.endpoints[edge]
    }

    /// Resolve a node id to its index
    pub fn lookup(&self, id: &str) -> Result<usize, VisualizerError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| VisualizerError::UnknownNode { id: id.to_string() })
    }

    /// The node reached by following `edge` from `node`, if the edge allows it
    pub fn neighbor_via(&self, edge: usize, node: usize) -> Option<usize> {
        let (source, target) = self.endpoints[edge];
        if source == node {
            Some(target)
        } else if target == node && !self.graph.edges[edge].is_directed {
            Some(source)
        } else {
            None
        }
    }

    /// `(edge, neighbor)` pairs traversable from `node`, in edge order
    pub fn incident(&self, node: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.endpoints.len()).filter_map(move |e| self.neighbor_via(e, node).map(|n| (e, n)))
    }

    /// `(edge, target)` pairs for directed edges leaving `node`
    pub fn directed_successors(&self, node: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.endpoints
            .iter()
            .enumerate()
            .filter(move |(e, (source, _))| *source == node && self.graph.edges[*e].is_directed)
            .map(|(e, (_, target))| (e, *target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        Graph {
            nodes: vec![GraphNode::new("A"), GraphNode::new("B"), GraphNode::new("C")],
            edges: vec![
                GraphEdge::undirected("A", "B", 1),
                GraphEdge::directed("B", "C", 2),
                GraphEdge::directed("C", "A", 3),
            ],
        }
    }

    #[test]
    fn test_incident_follows_direction() {
        let graph = sample();
        let indexed = IndexedGraph::new(&graph).unwrap();

        let from_b: Vec<_> = indexed.incident(1).collect();
        assert_eq!(from_b, vec![(0, 0), (1, 2)]);

        // C -> A is directed, so A cannot walk back to C
        let from_a: Vec<_> = indexed.incident(0).collect();
        assert_eq!(from_a, vec![(0, 1)]);
    }

    #[test]
    fn test_directed_successors_skip_undirected() {
        let graph = sample();
        let indexed = IndexedGraph::new(&graph).unwrap();

        assert_eq!(indexed.directed_successors(0).count(), 0);
        assert_eq!(indexed.directed_successors(1).collect::<Vec<_>>(), vec![(1, 2)]);
    }

    #[test]
    fn test_unknown_edge_endpoint() {
        let mut graph = sample();
        graph.edges.push(GraphEdge::undirected("A", "Z", 1));

        let err = IndexedGraph::new(&graph).unwrap_err();
        assert_eq!(err, VisualizerError::UnknownNode { id: "Z".to_string() });
    }

    #[test]
    fn test_duplicate_node() {
        let mut graph = sample();
        graph.nodes.push(GraphNode::new("B"));

        assert!(matches!(
            IndexedGraph::new(&graph),
            Err(VisualizerError::DuplicateNode { .. })
        ));
    }

    #[test]
    fn test_graph_too_large() {
        let graph = Graph {
            nodes: (0..=MAX_GRAPH_NODES).map(|i| GraphNode::new(i.to_string())).collect(),
            edges: Vec::new(),
        };
        assert_eq!(
            IndexedGraph::new(&graph).unwrap_err(),
            VisualizerError::GraphTooLarge {
                nodes: MAX_GRAPH_NODES + 1,
                limit: MAX_GRAPH_NODES
            }
        );
    }

    #[test]
    fn test_weight_outside_i32_is_rejected() {
        let result: Result<GraphEdge, _> =
            serde_json::from_str(r#"{"source":"A","target":"B","weight":9223372036854775807}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_edge_deserializes_defaults() {
        let edge: GraphEdge = serde_json::from_str(r#"{"source":"A","target":"B"}"#).unwrap();
        assert_eq!(edge, GraphEdge::undirected("A", "B", 0));

        let edge: GraphEdge =
            serde_json::from_str(r#"{"source":"A","target":"B","weight":4,"isDirected":true}"#)
                .unwrap();
        assert!(edge.is_directed);
    }
}
