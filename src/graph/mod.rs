//! Graph-algorithm engine
//!
//! - [`model`]: wire types and the [`model::IndexedGraph`] the algorithms run on
//! - [`results`]: one typed result per algorithm family
//! - [`traversal`]: BFS, DFS and connected components
//! - [`shortest_path`]: Dijkstra and Floyd-Warshall
//! - [`spanning_tree`]: Prim and Kruskal
//! - [`topological`]: DFS and indegree topological sorts
//!
//! Every run indexes the request graph, records steps through a fresh
//! [`GraphRecorder`], and returns the steps with a [`GraphResult`]. Nothing is
//! shared between runs.

pub mod model;
pub mod results;
pub mod shortest_path;
pub mod spanning_tree;
pub mod topological;
pub mod traversal;

use crate::config::EngineConfig;
use crate::errors::{Family, VisualizerError};
use crate::request::{GraphRequest, GraphResponse};
use crate::snapshot::GraphRecorder;
use model::{Graph, IndexedGraph};
use results::GraphResult;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphAlgorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Prim,
    Kruskal,
    TopologicalDfs,
    TopologicalIndegree,
    FloydWarshall,
    ConnectedComponents,
}

impl GraphAlgorithm {
    pub const ALL: [GraphAlgorithm; 9] = [
        GraphAlgorithm::Bfs,
        GraphAlgorithm::Dfs,
        GraphAlgorithm::Dijkstra,
        GraphAlgorithm::Prim,
        GraphAlgorithm::Kruskal,
        GraphAlgorithm::TopologicalDfs,
        GraphAlgorithm::TopologicalIndegree,
        GraphAlgorithm::FloydWarshall,
        GraphAlgorithm::ConnectedComponents,
    ];

    /// Selector used in requests
    pub fn key(self) -> &'static str {
        match self {
            GraphAlgorithm::Bfs => "bfs",
            GraphAlgorithm::Dfs => "dfs",
            GraphAlgorithm::Dijkstra => "dijkstra",
            GraphAlgorithm::Prim => "prim",
            GraphAlgorithm::Kruskal => "kruskal",
            GraphAlgorithm::TopologicalDfs => "topological-dfs",
            GraphAlgorithm::TopologicalIndegree => "topological-indegree",
            GraphAlgorithm::FloydWarshall => "floyd-warshall",
            GraphAlgorithm::ConnectedComponents => "connected-components",
        }
    }

    /// Display name reported in responses
    pub fn name(self) -> &'static str {
        match self {
            GraphAlgorithm::Bfs => "Breadth-First Search",
            GraphAlgorithm::Dfs => "Depth-First Search",
            GraphAlgorithm::Dijkstra => "Dijkstra's Shortest Path",
            GraphAlgorithm::Prim => "Prim's Minimum Spanning Tree",
            GraphAlgorithm::Kruskal => "Kruskal's Minimum Spanning Tree",
            GraphAlgorithm::TopologicalDfs => "Topological Sort (DFS)",
            GraphAlgorithm::TopologicalIndegree => "Topological Sort (Indegree)",
            GraphAlgorithm::FloydWarshall => "Floyd-Warshall All Pairs Shortest Paths",
            GraphAlgorithm::ConnectedComponents => "Connected Components",
        }
    }

    pub fn needs_start(self) -> bool {
        matches!(
            self,
            GraphAlgorithm::Bfs
                | GraphAlgorithm::Dfs
                | GraphAlgorithm::Dijkstra
                | GraphAlgorithm::Prim
        )
    }

    pub fn needs_end(self) -> bool {
        self == GraphAlgorithm::Dijkstra
    }
}

impl fmt::Display for GraphAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GraphAlgorithm {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        GraphAlgorithm::ALL
            .into_iter()
            .find(|a| a.key() == key)
            .ok_or(VisualizerError::UnknownAlgorithm {
                family: Family::Graph,
                key: s.to_string(),
            })
    }
}

/// Run the algorithm named in the request
pub fn run(request: &GraphRequest, config: &EngineConfig) -> Result<GraphResponse, VisualizerError> {
    let algorithm: GraphAlgorithm = request.algorithm.parse()?;
    execute(
        &request.graph,
        algorithm,
        request.start_node.as_deref(),
        request.end_node.as_deref(),
        config,
    )
}

/// Run `algorithm` over `graph`
///
/// `start` and `end` are only consulted by the algorithms that need them;
/// empty ids count as missing.
pub fn execute(
    graph: &Graph,
    algorithm: GraphAlgorithm,
    start: Option<&str>,
    end: Option<&str>,
    config: &EngineConfig,
) -> Result<GraphResponse, VisualizerError> {
    let indexed = IndexedGraph::new(graph)?;
    let start_node = || match start.filter(|id| !id.is_empty()) {
        Some(id) => indexed.lookup(id),
        None => Err(VisualizerError::MissingStartNode {
            algorithm: algorithm.key().to_string(),
        }),
    };
    let end_node = || match end.filter(|id| !id.is_empty()) {
        Some(id) => indexed.lookup(id),
        None => Err(VisualizerError::MissingEndNode {
            algorithm: algorithm.key().to_string(),
        }),
    };

    debug!(
        algorithm = algorithm.key(),
        nodes = indexed.node_count(),
        edges = indexed.edge_count(),
        "graph run started"
    );

    let mut rec = GraphRecorder::new(&indexed, config);
    let result = match algorithm {
        GraphAlgorithm::Bfs => {
            GraphResult::Traversal(traversal::bfs(&indexed, start_node()?, &mut rec)?)
        }
        GraphAlgorithm::Dfs => {
            GraphResult::Traversal(traversal::dfs(&indexed, start_node()?, &mut rec)?)
        }
        GraphAlgorithm::Dijkstra => {
            let (from, to) = (start_node()?, end_node()?);
            GraphResult::ShortestPath(shortest_path::dijkstra(&indexed, from, to, &mut rec)?)
        }
        GraphAlgorithm::Prim => {
            GraphResult::SpanningTree(spanning_tree::prim(&indexed, start_node()?, &mut rec)?)
        }
        GraphAlgorithm::Kruskal => {
            GraphResult::SpanningTree(spanning_tree::kruskal(&indexed, &mut rec)?)
        }
        GraphAlgorithm::TopologicalDfs => {
            GraphResult::Topological(topological::topological_dfs(&indexed, &mut rec)?)
        }
        GraphAlgorithm::TopologicalIndegree => {
            GraphResult::Topological(topological::topological_indegree(&indexed, &mut rec)?)
        }
        GraphAlgorithm::FloydWarshall => {
            GraphResult::AllPairs(shortest_path::floyd_warshall(&indexed, &mut rec)?)
        }
        GraphAlgorithm::ConnectedComponents => {
            GraphResult::Components(traversal::connected_components(&indexed, &mut rec)?)
        }
    };

    debug!(
        algorithm = algorithm.key(),
        steps = rec.history().emitted(),
        history_bytes = rec.history().memory_usage(),
        "graph run finished"
    );

    Ok(GraphResponse {
        steps: rec.into_steps(),
        algorithm_name: algorithm.name().to_string(),
        result,
    })
}
