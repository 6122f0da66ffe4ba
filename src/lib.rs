//! # Introduction
//!
//! stepviz runs classic sorting and graph algorithms against user input and
//! records a frozen step after every comparison, mutation or visit, so a
//! viewer can replay the execution one atomic change at a time.
//!
//! ## Execution pipeline
//!
//! ```text
//! Request → Engine (sorting | graph) → Recorder → History → Response
//! ```
//!
//! 1. [`request`]: JSON request/response shapes and the algorithm catalog.
//! 2. [`sorting`]: ten sorts over an integer sequence, with comparison and
//!    swap counters and elapsed time.
//! 3. [`graph`]: traversal, shortest path, spanning tree, topological sort
//!    and component algorithms, each with a typed result.
//! 4. [`snapshot`]: step types, per-run recorders and the step [`snapshot::History`]
//!    with its memory ceiling.
//! 5. [`config`] / [`errors`]: run settings and the error type.
//!
//! ## Isolation
//!
//! Every run allocates its own working copy, recorder and counters and returns
//! them by value. There is no shared or global state, so runs can execute
//! concurrently without coordination.
//!
//! ```
//! use stepviz::config::EngineConfig;
//! use stepviz::sorting::{sort, SortAlgorithm};
//!
//! let run = sort(&[5, 2, 4, 6, 1, 3], SortAlgorithm::Bubble, &EngineConfig::default()).unwrap();
//! assert_eq!(run.sorted, vec![1, 2, 3, 4, 5, 6]);
//! assert_eq!((run.comparisons, run.swaps), (15, 9));
//! ```

pub mod config;
pub mod errors;
pub mod graph;
pub mod request;
pub mod snapshot;
pub mod sorting;
