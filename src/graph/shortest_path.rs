// Single-source (Dijkstra) and all-pairs (Floyd-Warshall) shortest paths

use super::model::IndexedGraph;
use super::results::{AllPairsResult, ShortestPathResult};
use crate::config::UNREACHABLE;
use crate::errors::VisualizerError;
use crate::snapshot::GraphRecorder;
use std::collections::BTreeMap;
use tracing::debug;

/// Array-based O(V^2) Dijkstra that stops once `end` is finalized
///
/// The next node is picked by a linear scan in node order, so ties go to the
/// node declared first. An unreachable end is reported as an empty path.
pub fn dijkstra(
    graph: &IndexedGraph<'_>,
    start: usize,
    end: usize,
    rec: &mut GraphRecorder<'_>,
) -> Result<ShortestPathResult, VisualizerError> {
    let n = graph.node_count();
    let mut dist = vec![UNREACHABLE; n];
    // (previous node, edge taken from it)
    let mut prev: Vec<Option<(usize, usize)>> = vec![None; n];
    let mut finalized = vec![false; n];
    dist[start] = 0;

    rec.emit_with_distances(
        &[],
        &[],
        format!(
            "Starting Dijkstra's algorithm from {} to {}",
            graph.id(start),
            graph.id(end)
        ),
        &dist,
    )?;

    loop {
        let next = (0..n)
            .filter(|&v| !finalized[v] && dist[v] != UNREACHABLE)
            .min_by_key(|&v| dist[v]);
        let Some(current) = next else {
            break;
        };

        finalized[current] = true;
        rec.emit_with_distances(
            &[current],
            &[],
            format!(
                "Processing node {} with distance {}",
                graph.id(current),
                dist[current]
            ),
            &dist,
        )?;

        if current == end {
            break;
        }

        for (edge, neighbor) in graph.incident(current) {
            if finalized[neighbor] {
                continue;
            }
            let alt = dist[current] + i64::from(graph.edge(edge).weight);
            if alt < dist[neighbor] {
                dist[neighbor] = alt;
                prev[neighbor] = Some((current, edge));
                rec.emit_with_distances(
                    &[current, neighbor],
                    &[edge],
                    format!("Updated distance to {}: {}", graph.id(neighbor), alt),
                    &dist,
                )?;
            }
        }
    }

    let distance = (dist[end] != UNREACHABLE).then_some(dist[end]);
    let mut path = Vec::new();
    let mut path_edges = Vec::new();
    if distance.is_some() {
        let mut node = end;
        path.push(node);
        while let Some((from, edge)) = prev[node] {
            path.push(from);
            path_edges.push(edge);
            node = from;
        }
        path.reverse();
        path_edges.reverse();
    }

    match distance {
        Some(d) => rec.emit_with_distances(
            &path,
            &path_edges,
            format!("Shortest path found! Distance: {}", d),
            &dist,
        )?,
        None => {
            debug!(
                start = graph.id(start),
                end = graph.id(end),
                "end node unreachable"
            );
            rec.emit_with_distances(
                &[],
                &[],
                format!("No path from {} to {}", graph.id(start), graph.id(end)),
                &dist,
            )?
        }
    }

    Ok(ShortestPathResult {
        shortest_path: graph.ids(&path),
        distance,
        all_distances: dist
            .iter()
            .enumerate()
            .filter(|(_, d)| **d != UNREACHABLE)
            .map(|(i, d)| (graph.id(i).to_string(), *d))
            .collect(),
    })
}

/// Floyd-Warshall over a dense matrix
///
/// Undirected edges are mirrored; parallel edges keep the lighter weight.
/// Relaxation saturates at `i64::MIN` when a negative cycle is present.
pub fn floyd_warshall(
    graph: &IndexedGraph<'_>,
    rec: &mut GraphRecorder<'_>,
) -> Result<AllPairsResult, VisualizerError> {
    let n = graph.node_count();
    let mut dist = vec![vec![UNREACHABLE; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0;
    }
    for e in 0..graph.edge_count() {
        let (source, target) = graph.endpoints(e);
        let edge = graph.edge(e);
        let weight = i64::from(edge.weight);
        dist[source][target] = dist[source][target].min(weight);
        if !edge.is_directed {
            dist[target][source] = dist[target][source].min(weight);
        }
    }

    rec.emit_with(&[], &[], "Starting Floyd-Warshall algorithm", |g| {
        labelled_pairs(g, &dist)
    })?;

    for k in 0..n {
        for i in 0..n {
            if dist[i][k] == UNREACHABLE {
                continue;
            }
            for j in 0..n {
                if dist[k][j] == UNREACHABLE {
                    continue;
                }
                // negative cycles can drive entries down without bound
                let through = dist[i][k].saturating_add(dist[k][j]);
                if dist[i][j] > through {
                    dist[i][j] = through;
                    rec.emit_with(
                        &[i, k, j],
                        &[],
                        format!(
                            "Updated distance from {} to {} via {}: {}",
                            graph.id(i),
                            graph.id(j),
                            graph.id(k),
                            through
                        ),
                        |g| labelled_pairs(g, &dist),
                    )?;
                }
            }
        }
    }

    let all: Vec<usize> = (0..n).collect();
    rec.emit_with(&all, &[], "Floyd-Warshall complete!", |g| {
        labelled_pairs(g, &dist)
    })?;

    let mut all_pairs_distances = BTreeMap::new();
    for (i, row) in dist.iter().enumerate() {
        let reachable: BTreeMap<String, i64> = row
            .iter()
            .enumerate()
            .filter(|(_, d)| **d != UNREACHABLE)
            .map(|(j, d)| (graph.id(j).to_string(), *d))
            .collect();
        all_pairs_distances.insert(graph.id(i).to_string(), reachable);
    }

    Ok(AllPairsResult {
        all_pairs_distances,
    })
}

/// Finite matrix entries keyed `"from->to"`
fn labelled_pairs(graph: &IndexedGraph<'_>, dist: &[Vec<i64>]) -> BTreeMap<String, i64> {
    let mut pairs = BTreeMap::new();
    for (i, row) in dist.iter().enumerate() {
        for (j, &d) in row.iter().enumerate() {
            if d != UNREACHABLE {
                pairs.insert(format!("{}->{}", graph.id(i), graph.id(j)), d);
            }
        }
    }
    pairs
}
