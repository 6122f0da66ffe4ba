//! Graph-domain steps
//!
//! Algorithms address nodes and edges by index; the [`GraphRecorder`] turns
//! those indices back into owned ids and edge copies when a step is frozen.

use super::{History, TraceStep};
use crate::config::{EngineConfig, UNREACHABLE};
use crate::errors::VisualizerError;
use crate::graph::model::{GraphEdge, IndexedGraph};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::mem::size_of;

/// One frozen state of a graph algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStep {
    pub step_number: usize,
    pub visited_nodes: Vec<String>,
    pub highlighted_edges: Vec<GraphEdge>,
    pub description: String,
    /// Per-node distance or indegree; unreachable nodes are left out
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub node_distances: BTreeMap<String, i64>,
}

impl TraceStep for GraphStep {
    fn estimated_size(&self) -> usize {
        let nodes: usize = self.visited_nodes.iter().map(|n| n.len() + 24).sum();
        let edges: usize = self
            .highlighted_edges
            .iter()
            .map(|e| size_of::<GraphEdge>() + e.source.len() + e.target.len())
            .sum();
        let distances: usize = self
            .node_distances
            .keys()
            .map(|k| k.len() + 24 + size_of::<i64>())
            .sum();
        size_of::<Self>() + nodes + edges + distances + self.description.len()
    }
}

/// Step log for one graph run
#[derive(Debug)]
pub struct GraphRecorder<'g> {
    graph: &'g IndexedGraph<'g>,
    history: History<GraphStep>,
}

impl<'g> GraphRecorder<'g> {
    pub fn new(graph: &'g IndexedGraph<'g>, config: &EngineConfig) -> Self {
        GraphRecorder {
            graph,
            history: History::from_config(config),
        }
    }

    pub fn emit(
        &mut self,
        nodes: &[usize],
        edges: &[usize],
        description: impl Into<String>,
    ) -> Result<(), VisualizerError> {
        self.emit_with(nodes, edges, description, |_| BTreeMap::new())
    }

    /// Record a step carrying one value per node
    ///
    /// Entries equal to [`UNREACHABLE`] are omitted.
    pub fn emit_with_distances(
        &mut self,
        nodes: &[usize],
        edges: &[usize],
        description: impl Into<String>,
        distances: &[i64],
    ) -> Result<(), VisualizerError> {
        self.emit_with(nodes, edges, description, |graph| {
            distances
                .iter()
                .enumerate()
                .filter(|(_, d)| **d != UNREACHABLE)
                .map(|(i, d)| (graph.id(i).to_string(), *d))
                .collect()
        })
    }

    /// Record a step whose value map is built lazily
    ///
    /// `values` only runs when steps are being kept.
    pub fn emit_with(
        &mut self,
        nodes: &[usize],
        edges: &[usize],
        description: impl Into<String>,
        values: impl FnOnce(&IndexedGraph<'g>) -> BTreeMap<String, i64>,
    ) -> Result<(), VisualizerError> {
        let graph = self.graph;
        self.history.push_with(|step_number| GraphStep {
            step_number,
            visited_nodes: nodes.iter().map(|&n| graph.id(n).to_string()).collect(),
            highlighted_edges: edges.iter().map(|&e| graph.edge(e).clone()).collect(),
            description: description.into(),
            node_distances: values(graph),
        })
    }

    pub fn history(&self) -> &History<GraphStep> {
        &self.history
    }

    pub fn into_steps(self) -> Vec<GraphStep> {
        self.history.into_steps()
    }
}
