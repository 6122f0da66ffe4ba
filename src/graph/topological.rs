// Topological sorting: DFS post-order and Kahn's indegree method
//
// Only directed edges are arcs here; undirected edges are ignored.

use super::model::IndexedGraph;
use super::results::TopologicalResult;
use crate::errors::VisualizerError;
use crate::snapshot::GraphRecorder;
use std::collections::VecDeque;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    /// On the current DFS path; reaching it again means a cycle
    Open,
    Closed,
}

struct PostOrder {
    marks: Vec<Mark>,
    visited: Vec<usize>,
    finished: Vec<usize>,
    has_cycle: bool,
}

impl PostOrder {
    fn visit(
        &mut self,
        graph: &IndexedGraph<'_>,
        node: usize,
        rec: &mut GraphRecorder<'_>,
    ) -> Result<(), VisualizerError> {
        self.marks[node] = Mark::Open;
        self.visited.push(node);
        rec.emit(&self.visited, &[], format!("Visiting node {}", graph.id(node)))?;

        for (edge, next) in graph.directed_successors(node) {
            match self.marks[next] {
                Mark::Unvisited => self.visit(graph, next, rec)?,
                Mark::Open => {
                    self.has_cycle = true;
                    rec.emit(
                        &self.visited,
                        &[edge],
                        format!(
                            "Cycle detected: edge {} -> {} returns to a node still in progress",
                            graph.id(node),
                            graph.id(next)
                        ),
                    )?;
                }
                Mark::Closed => {}
            }
        }

        self.marks[node] = Mark::Closed;
        self.finished.push(node);
        rec.emit(&self.visited, &[], format!("Added {} to stack", graph.id(node)))?;
        Ok(())
    }
}

/// DFS topological sort; the order is the reverse of the finishing order
///
/// A back edge marks the graph cyclic and the order is reported empty.
pub fn topological_dfs(
    graph: &IndexedGraph<'_>,
    rec: &mut GraphRecorder<'_>,
) -> Result<TopologicalResult, VisualizerError> {
    rec.emit(&[], &[], "Starting Topological Sort (DFS)")?;

    let n = graph.node_count();
    let mut walk = PostOrder {
        marks: vec![Mark::Unvisited; n],
        visited: Vec::new(),
        finished: Vec::new(),
        has_cycle: false,
    };
    for node in 0..n {
        if walk.marks[node] == Mark::Unvisited {
            walk.visit(graph, node, rec)?;
        }
    }

    let order: Vec<usize> = if walk.has_cycle {
        Vec::new()
    } else {
        walk.finished.iter().rev().copied().collect()
    };
    conclude(graph, rec, &order, walk.has_cycle)?;

    Ok(TopologicalResult {
        topological_order: graph.ids(&order),
        has_cycle: walk.has_cycle,
    })
}

/// Kahn's algorithm with a FIFO of zero-indegree nodes
///
/// When a cycle exists the nodes on it never reach indegree zero; the order
/// then holds only the acyclic prefix and `has_cycle` is set.
pub fn topological_indegree(
    graph: &IndexedGraph<'_>,
    rec: &mut GraphRecorder<'_>,
) -> Result<TopologicalResult, VisualizerError> {
    let n = graph.node_count();
    let mut indegree = vec![0i64; n];
    for e in 0..graph.edge_count() {
        if graph.edge(e).is_directed {
            indegree[graph.endpoints(e).1] += 1;
        }
    }

    rec.emit_with_distances(
        &[],
        &[],
        "Starting Topological Sort (Indegree method)",
        &indegree,
    )?;

    let mut queue: VecDeque<usize> = (0..n).filter(|&v| indegree[v] == 0).collect();
    let mut order = Vec::new();

    while let Some(node) = queue.pop_front() {
        order.push(node);
        rec.emit_with_distances(
            &order,
            &[],
            format!("Processed node {}", graph.id(node)),
            &indegree,
        )?;

        for (_, next) in graph.directed_successors(node) {
            indegree[next] -= 1;
            if indegree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    let has_cycle = order.len() != n;
    conclude(graph, rec, &order, has_cycle)?;

    Ok(TopologicalResult {
        topological_order: graph.ids(&order),
        has_cycle,
    })
}

fn conclude(
    graph: &IndexedGraph<'_>,
    rec: &mut GraphRecorder<'_>,
    order: &[usize],
    has_cycle: bool,
) -> Result<(), VisualizerError> {
    if has_cycle {
        warn!("graph has a cycle, no topological order exists");
        rec.emit(
            order,
            &[],
            "Graph has a cycle! Topological sort not possible.",
        )
    } else {
        rec.emit(
            order,
            &[],
            format!("Topological order: {}", graph.ids(order).join(" -> ")),
        )
    }
}
