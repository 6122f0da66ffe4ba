//! Typed result payloads, one per algorithm family
//!
//! On the wire the result is an object tagged with `kind`, e.g.
//! `{"kind": "shortestPath", "shortestPath": ["A", "D"], "distance": 2, ...}`.

use super::model::GraphEdge;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// BFS and DFS
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraversalResult {
    pub visit_order: Vec<String>,
    pub nodes_visited: usize,
}

/// Dijkstra
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortestPathResult {
    /// Start to end inclusive; empty when the end node is unreachable
    pub shortest_path: Vec<String>,
    pub distance: Option<i64>,
    /// Tentative distances when the search stopped, reachable nodes only
    pub all_distances: BTreeMap<String, i64>,
}

/// Prim and Kruskal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpanningTreeResult {
    pub mst_edges: Vec<GraphEdge>,
    pub total_weight: i64,
    /// False when the graph is disconnected and the tree is partial
    pub complete: bool,
}

/// Both topological sort variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologicalResult {
    pub topological_order: Vec<String>,
    pub has_cycle: bool,
}

/// Floyd-Warshall; only finite distances are listed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllPairsResult {
    pub all_pairs_distances: BTreeMap<String, BTreeMap<String, i64>>,
}

/// Connected components, numbered in discovery order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentsResult {
    pub components: Vec<Vec<String>>,
    pub component_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GraphResult {
    Traversal(TraversalResult),
    ShortestPath(ShortestPathResult),
    SpanningTree(SpanningTreeResult),
    Topological(TopologicalResult),
    AllPairs(AllPairsResult),
    Components(ComponentsResult),
}
