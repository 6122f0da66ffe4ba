//! Step history for replaying algorithm runs
//!
//! Every run owns one [`History`] and appends a frozen step after each
//! comparison, mutation or visit it wants a viewer to see:
//! - [`array`]: [`ArrayStep`] and [`ArrayRecorder`] for the sorting engine
//! - [`graph`]: [`GraphStep`] and [`GraphRecorder`] for the graph engine
//!
//! # Memory Limit
//!
//! Steps hold full copies of the state they describe, so a quadratic sort over
//! a long input can produce a very large history. Each step reports an
//! estimated size and the history refuses pushes past its ceiling, aborting the
//! run with [`VisualizerError::HistoryLimitExceeded`].
//!
//! A disabled history (summary mode) stores nothing but still hands out step
//! numbers, so an algorithm behaves identically whether or not it is recorded.

pub mod array;
pub mod graph;

pub use array::{ArrayRecorder, ArrayStep, Highlight};
pub use graph::{GraphRecorder, GraphStep};

use crate::config::EngineConfig;
use crate::errors::VisualizerError;

/// A recorded step that can estimate its own footprint
pub trait TraceStep {
    /// Rough size of this step in bytes
    fn estimated_size(&self) -> usize;
}

/// Ordered, append-only list of steps for one run
#[derive(Debug)]
pub struct History<S> {
    steps: Vec<S>,
    recording: bool,
    emitted: usize,
    max_memory: usize,
    current_memory: usize,
}

impl<S: TraceStep> History<S> {
    pub fn new(max_memory: usize) -> Self {
        History {
            steps: Vec::new(),
            recording: true,
            emitted: 0,
            max_memory,
            current_memory: 0,
        }
    }

    /// History that counts steps without storing them
    pub fn disabled() -> Self {
        History {
            recording: false,
            ..Self::new(0)
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        if config.record_steps {
            Self::new(config.history_limit)
        } else {
            Self::disabled()
        }
    }

    /// Ordinal (1-based) the next pushed step will carry
    pub fn next_number(&self) -> usize {
        self.emitted + 1
    }

    /// Number of steps emitted so far, stored or not
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Add a step to history
    pub fn push(&mut self, step: S) -> Result<(), VisualizerError> {
        if !self.recording {
            self.emitted += 1;
            return Ok(());
        }

        let step_size = step.estimated_size();
        if self.current_memory + step_size > self.max_memory {
            return Err(VisualizerError::HistoryLimitExceeded {
                current: self.current_memory,
                limit: self.max_memory,
            });
        }

        self.current_memory += step_size;
        self.emitted += 1;
        self.steps.push(step);
        Ok(())
    }

    /// Record a step only if the history keeps steps
    ///
    /// `build` receives the step number and is not called in summary mode.
    pub fn push_with(&mut self, build: impl FnOnce(usize) -> S) -> Result<(), VisualizerError> {
        if !self.recording {
            self.emitted += 1;
            return Ok(());
        }
        let step = build(self.next_number());
        self.push(step)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }

    /// Number of stored steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Estimated bytes held by the stored steps
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn into_steps(self) -> Vec<S> {
        self.steps
    }
}
