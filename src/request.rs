//! Request and response shapes
//!
//! These are the JSON documents exchanged with a client. Field names are
//! camelCase on the wire. Requests are assumed to be pre-validated; the engines
//! only refuse input they could not run at all (see [`crate::errors`]).

use crate::errors::Family;
use crate::graph::results::GraphResult;
use crate::graph::{model::Graph, GraphAlgorithm};
use crate::snapshot::{ArrayStep, GraphStep};
use crate::sorting::SortAlgorithm;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortRequest {
    #[serde(alias = "array")]
    pub values: Vec<i32>,
    pub algorithm: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortResponse {
    pub steps: Vec<ArrayStep>,
    pub algorithm_name: String,
    pub comparisons: u64,
    pub swaps: u64,
    pub elapsed_milliseconds: u64,
    /// Final state of the sequence, present even when steps were not recorded
    pub sorted: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphRequest {
    pub graph: Graph,
    pub algorithm: String,
    #[serde(default)]
    pub start_node: Option<String>,
    #[serde(default)]
    pub end_node: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphResponse {
    pub steps: Vec<GraphStep>,
    pub algorithm_name: String,
    pub result: GraphResult,
}

/// One entry of the algorithm listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub needs_start_node: bool,
    pub needs_end_node: bool,
}

/// Every algorithm a family offers, in menu order
pub fn catalog(family: Family) -> Vec<AlgorithmInfo> {
    match family {
        Family::Sorting => SortAlgorithm::ALL
            .iter()
            .map(|a| AlgorithmInfo {
                key: a.key(),
                name: a.name(),
                needs_start_node: false,
                needs_end_node: false,
            })
            .collect(),
        Family::Graph => GraphAlgorithm::ALL
            .iter()
            .map(|a| AlgorithmInfo {
                key: a.key(),
                name: a.name(),
                needs_start_node: a.needs_start(),
                needs_end_node: a.needs_end(),
            })
            .collect(),
    }
}
