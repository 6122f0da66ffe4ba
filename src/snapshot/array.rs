//! Sequence-domain steps
//!
//! An [`ArrayStep`] freezes the working array at the moment of the call, so
//! later mutations never leak into earlier steps. The [`ArrayRecorder`] pairs
//! the step history with the comparison and swap counters of one run; the
//! algorithm bumps the counters itself next to the operation being measured.

use super::{History, TraceStep};
use crate::config::EngineConfig;
use crate::errors::VisualizerError;
use serde::{Deserialize, Serialize};
use std::mem::size_of;

/// Color tag a viewer uses for the highlighted indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    /// Comparisons and plain moves
    #[default]
    Yellow,
    /// Scans and range announcements
    Blue,
    /// Swaps
    Red,
    /// Final placements
    Green,
    /// Pivot selection
    Purple,
}

/// One frozen state of the array being sorted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayStep {
    pub step_number: usize,
    pub array: Vec<i32>,
    pub description: String,
    pub highlight_indices: Vec<usize>,
    #[serde(default)]
    pub highlight_color: Highlight,
}

impl TraceStep for ArrayStep {
    fn estimated_size(&self) -> usize {
        size_of::<Self>()
            + self.array.len() * size_of::<i32>()
            + self.highlight_indices.len() * size_of::<usize>()
            + self.description.len()
    }
}

/// Step log plus counters for one sorting run
#[derive(Debug)]
pub struct ArrayRecorder {
    history: History<ArrayStep>,
    pub comparisons: u64,
    pub swaps: u64,
}

impl ArrayRecorder {
    pub fn new(config: &EngineConfig) -> Self {
        ArrayRecorder {
            history: History::from_config(config),
            comparisons: 0,
            swaps: 0,
        }
    }

    /// Record the array with a yellow highlight
    pub fn emit(
        &mut self,
        array: &[i32],
        description: impl Into<String>,
        highlight: &[usize],
    ) -> Result<(), VisualizerError> {
        self.emit_colored(array, description, highlight, Highlight::Yellow)
    }

    pub fn emit_colored(
        &mut self,
        array: &[i32],
        description: impl Into<String>,
        highlight: &[usize],
        color: Highlight,
    ) -> Result<(), VisualizerError> {
        self.history.push_with(|step_number| ArrayStep {
            step_number,
            array: array.to_vec(),
            description: description.into(),
            highlight_indices: highlight.to_vec(),
            highlight_color: color,
        })
    }

    pub fn history(&self) -> &History<ArrayStep> {
        &self.history
    }

    /// Consume the recorder, returning (steps, comparisons, swaps)
    pub fn finish(self) -> (Vec<ArrayStep>, u64, u64) {
        (self.history.into_steps(), self.comparisons, self.swaps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_copies_array() {
        let mut recorder = ArrayRecorder::new(&EngineConfig::default());
        let mut arr = vec![3, 1, 2];

        recorder.emit(&arr, "Initial array", &[]).unwrap();
        arr.swap(0, 1);
        recorder
            .emit_colored(&arr, "Swapped", &[0, 1], Highlight::Red)
            .unwrap();

        let (steps, _, _) = recorder.finish();
        assert_eq!(steps[0].array, vec![3, 1, 2]);
        assert_eq!(steps[1].array, vec![1, 3, 2]);
        assert_eq!(steps[0].highlight_color, Highlight::Yellow);
        assert_eq!(steps[1].highlight_color, Highlight::Red);
        assert_eq!(steps[1].step_number, 2);
    }

    #[test]
    fn test_step_serializes_camel_case() {
        let step = ArrayStep {
            step_number: 1,
            array: vec![1],
            description: "Initial array".to_string(),
            highlight_indices: vec![0],
            highlight_color: Highlight::Purple,
        };
        let json = serde_json::to_value(&step).unwrap();

        assert_eq!(json["stepNumber"], 1);
        assert_eq!(json["highlightIndices"][0], 0);
        assert_eq!(json["highlightColor"], "purple");
    }
}
