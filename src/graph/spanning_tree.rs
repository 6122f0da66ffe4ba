// Minimum spanning trees: Prim from a start node, Kruskal over sorted edges

use super::model::IndexedGraph;
use super::results::SpanningTreeResult;
use crate::errors::VisualizerError;
use crate::snapshot::GraphRecorder;
use tracing::warn;

/// Prim's algorithm by repeated scan of the edge list
///
/// Each round takes the lightest edge leaving the tree; among equal weights
/// the edge declared first wins. Stops early on a disconnected graph.
pub fn prim(
    graph: &IndexedGraph<'_>,
    start: usize,
    rec: &mut GraphRecorder<'_>,
) -> Result<SpanningTreeResult, VisualizerError> {
    let n = graph.node_count();
    let mut in_tree = vec![false; n];
    let mut tree_nodes = vec![start];
    let mut mst_edges = Vec::new();
    let mut total_weight = 0i64;
    in_tree[start] = true;

    rec.emit(
        &tree_nodes,
        &[],
        format!("Starting Prim's algorithm from {}", graph.id(start)),
    )?;

    while tree_nodes.len() < n {
        // (edge, node it brings into the tree)
        let mut best: Option<(usize, usize)> = None;
        for e in 0..graph.edge_count() {
            let (source, target) = graph.endpoints(e);
            let joining = if in_tree[source] && !in_tree[target] {
                target
            } else if !graph.edge(e).is_directed && in_tree[target] && !in_tree[source] {
                source
            } else {
                continue;
            };

            let lighter = match best {
                Some((b, _)) => graph.edge(e).weight < graph.edge(b).weight,
                None => true,
            };
            if lighter {
                best = Some((e, joining));
            }
        }

        let Some((edge, joining)) = best else {
            break;
        };

        in_tree[joining] = true;
        tree_nodes.push(joining);
        mst_edges.push(edge);
        total_weight += i64::from(graph.edge(edge).weight);

        let added = graph.edge(edge);
        rec.emit(
            &tree_nodes,
            &mst_edges,
            format!(
                "Added edge {}-{} (weight: {})",
                added.source, added.target, added.weight
            ),
        )?;
    }

    let complete = tree_nodes.len() == n;
    finish(graph, rec, &tree_nodes, &mst_edges, total_weight, complete)
}

/// Kruskal's algorithm with a union-find forest
///
/// Edges are stably sorted by weight, so equal weights keep declaration order.
/// Edge direction is ignored.
pub fn kruskal(
    graph: &IndexedGraph<'_>,
    rec: &mut GraphRecorder<'_>,
) -> Result<SpanningTreeResult, VisualizerError> {
    let n = graph.node_count();
    let mut order: Vec<usize> = (0..graph.edge_count()).collect();
    order.sort_by_key(|&e| graph.edge(e).weight);

    let mut forest = UnionFind::new(n);
    let mut mst_edges = Vec::new();
    let mut total_weight = 0i64;

    rec.emit(&[], &[], "Starting Kruskal's algorithm")?;

    for e in order {
        let (source, target) = graph.endpoints(e);
        let edge = graph.edge(e);

        if forest.union(source, target) {
            mst_edges.push(e);
            total_weight += i64::from(edge.weight);
            rec.emit(
                &[source, target],
                &mst_edges,
                format!(
                    "Added edge {}-{} (weight: {}) to MST",
                    edge.source, edge.target, edge.weight
                ),
            )?;
        } else {
            rec.emit(
                &[source, target],
                &[e],
                format!(
                    "Skipped edge {}-{} (weight: {}): would create cycle",
                    edge.source, edge.target, edge.weight
                ),
            )?;
        }
    }

    let all: Vec<usize> = (0..n).collect();
    let complete = n == 0 || mst_edges.len() == n - 1;
    finish(graph, rec, &all, &mst_edges, total_weight, complete)
}

fn finish(
    graph: &IndexedGraph<'_>,
    rec: &mut GraphRecorder<'_>,
    nodes: &[usize],
    mst_edges: &[usize],
    total_weight: i64,
    complete: bool,
) -> Result<SpanningTreeResult, VisualizerError> {
    if complete {
        rec.emit(
            nodes,
            mst_edges,
            format!("MST complete! Total weight: {}", total_weight),
        )?;
    } else {
        warn!(
            edges = mst_edges.len(),
            nodes = graph.node_count(),
            "graph is disconnected, spanning tree is partial"
        );
        rec.emit(
            nodes,
            mst_edges,
            format!(
                "Graph is disconnected: partial spanning forest with total weight {}",
                total_weight
            ),
        )?;
    }

    Ok(SpanningTreeResult {
        mst_edges: mst_edges.iter().map(|&e| graph.edge(e).clone()).collect(),
        total_weight,
        complete,
    })
}

/// Disjoint sets with path compression and union by rank
#[derive(Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merge the sets of `a` and `b`; false if they were already joined
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_find_rejects_cycle() {
        let mut forest = UnionFind::new(4);
        assert!(forest.union(0, 1));
        assert!(forest.union(2, 3));
        assert!(forest.union(1, 3));
        assert!(!forest.union(0, 2));
        assert_eq!(forest.find(0), forest.find(3));
    }

    #[test]
    fn test_find_compresses_paths() {
        let mut forest = UnionFind::new(3);
        forest.parent = vec![0, 0, 1];
        assert_eq!(forest.find(2), 0);
        assert_eq!(forest.parent[2], 0);
    }
}
