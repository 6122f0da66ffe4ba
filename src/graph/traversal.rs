// Breadth-first, depth-first and connected-component traversals

use super::model::IndexedGraph;
use super::results::{ComponentsResult, TraversalResult};
use crate::errors::VisualizerError;
use crate::snapshot::GraphRecorder;
use std::collections::VecDeque;

/// Breadth-first search with a FIFO frontier
///
/// Nodes are marked when discovered, so each node is queued once.
pub fn bfs(
    graph: &IndexedGraph<'_>,
    start: usize,
    rec: &mut GraphRecorder<'_>,
) -> Result<TraversalResult, VisualizerError> {
    let mut seen = vec![false; graph.node_count()];
    let mut discovered = vec![start];
    let mut visit_order = Vec::new();
    let mut queue = VecDeque::from([start]);
    seen[start] = true;

    rec.emit(&[], &[], format!("Starting BFS from node {}", graph.id(start)))?;

    while let Some(node) = queue.pop_front() {
        visit_order.push(node);
        rec.emit(&[node], &[], format!("Visiting node {}", graph.id(node)))?;

        for (edge, neighbor) in graph.incident(node) {
            if seen[neighbor] {
                continue;
            }
            seen[neighbor] = true;
            discovered.push(neighbor);
            queue.push_back(neighbor);
            rec.emit(
                &discovered,
                &[edge],
                format!(
                    "Discovered node {} from {}",
                    graph.id(neighbor),
                    graph.id(node)
                ),
            )?;
        }
    }

    rec.emit(&discovered, &[], "BFS complete!")?;

    Ok(TraversalResult {
        visit_order: graph.ids(&visit_order),
        nodes_visited: discovered.len(),
    })
}

/// Recursive preorder depth-first search
pub fn dfs(
    graph: &IndexedGraph<'_>,
    start: usize,
    rec: &mut GraphRecorder<'_>,
) -> Result<TraversalResult, VisualizerError> {
    rec.emit(&[], &[], format!("Starting DFS from node {}", graph.id(start)))?;

    let mut walk = DepthFirst::new(graph.node_count());
    walk.visit(graph, start, rec)?;

    rec.emit(&walk.visited, &[], "DFS complete!")?;

    Ok(TraversalResult {
        visit_order: graph.ids(&walk.visited),
        nodes_visited: walk.visited.len(),
    })
}

struct DepthFirst {
    seen: Vec<bool>,
    visited: Vec<usize>,
}

impl DepthFirst {
    fn new(node_count: usize) -> Self {
        DepthFirst {
            seen: vec![false; node_count],
            visited: Vec::new(),
        }
    }

    fn visit(
        &mut self,
        graph: &IndexedGraph<'_>,
        node: usize,
        rec: &mut GraphRecorder<'_>,
    ) -> Result<(), VisualizerError> {
        self.seen[node] = true;
        self.visited.push(node);
        rec.emit(&self.visited, &[], format!("Visiting node {}", graph.id(node)))?;

        for (edge, neighbor) in graph.incident(node) {
            // a deeper call may have reached this neighbor already
            if self.seen[neighbor] {
                continue;
            }
            rec.emit(
                &self.visited,
                &[edge],
                format!("Exploring edge {} -> {}", graph.id(node), graph.id(neighbor)),
            )?;
            self.visit(graph, neighbor, rec)?;
        }
        Ok(())
    }

    /// Silent walk used to collect one component
    fn collect(&mut self, graph: &IndexedGraph<'_>, node: usize, component: &mut Vec<usize>) {
        self.seen[node] = true;
        self.visited.push(node);
        component.push(node);

        for (_, neighbor) in graph.incident(node) {
            if !self.seen[neighbor] {
                self.collect(graph, neighbor, component);
            }
        }
    }
}

/// Repeated DFS from each still-unvisited node, in node order
pub fn connected_components(
    graph: &IndexedGraph<'_>,
    rec: &mut GraphRecorder<'_>,
) -> Result<ComponentsResult, VisualizerError> {
    rec.emit(&[], &[], "Finding connected components")?;

    let mut walk = DepthFirst::new(graph.node_count());
    let mut components = Vec::new();

    for node in 0..graph.node_count() {
        if walk.seen[node] {
            continue;
        }
        let mut component = Vec::new();
        walk.collect(graph, node, &mut component);

        let ids = graph.ids(&component);
        rec.emit(
            &walk.visited,
            &[],
            format!("Found component {}: {}", components.len() + 1, ids.join(", ")),
        )?;
        components.push(ids);
    }

    rec.emit(
        &walk.visited,
        &[],
        format!("Total components found: {}", components.len()),
    )?;

    Ok(ComponentsResult {
        component_count: components.len(),
        components,
    })
}
