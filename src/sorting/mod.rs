//! Sequence-sorting engine
//!
//! Each algorithm works on a private copy of the input and records a step
//! around every comparison and mutation through an [`ArrayRecorder`]:
//! - [`exchange`]: bubble, selection, insertion and shell sort
//! - [`divide`]: merge, quick and heap sort
//! - [`distribution`]: counting, bucket and radix sort
//!
//! # Run Shape
//!
//! Every run starts with an "Initial array" step and ends with a green
//! "Array sorted!" step whose snapshot is the ascending order of the input.
//! Counters are bumped by the algorithm body next to the operation they
//! measure; the distribution sorts never swap.

pub mod distribution;
pub mod divide;
pub mod exchange;

use crate::config::EngineConfig;
use crate::errors::{Family, VisualizerError};
use crate::request::{SortRequest, SortResponse};
use crate::snapshot::{ArrayRecorder, Highlight};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
    Shell,
    Counting,
    Bucket,
    Radix,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 10] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
        SortAlgorithm::Shell,
        SortAlgorithm::Counting,
        SortAlgorithm::Bucket,
        SortAlgorithm::Radix,
    ];

    /// Selector used in requests
    pub fn key(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
            SortAlgorithm::Heap => "heap",
            SortAlgorithm::Shell => "shell",
            SortAlgorithm::Counting => "counting",
            SortAlgorithm::Bucket => "bucket",
            SortAlgorithm::Radix => "radix",
        }
    }

    /// Display name reported in responses
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
            SortAlgorithm::Heap => "Heap Sort",
            SortAlgorithm::Shell => "Shell Sort",
            SortAlgorithm::Counting => "Counting Sort",
            SortAlgorithm::Bucket => "Bucket Sort",
            SortAlgorithm::Radix => "Radix Sort",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        SortAlgorithm::ALL
            .into_iter()
            .find(|a| a.key() == key)
            .ok_or(VisualizerError::UnknownAlgorithm {
                family: Family::Sorting,
                key: s.to_string(),
            })
    }
}

/// Run the algorithm named in the request
pub fn run(request: &SortRequest, config: &EngineConfig) -> Result<SortResponse, VisualizerError> {
    let algorithm: SortAlgorithm = request.algorithm.parse()?;
    sort(&request.values, algorithm, config)
}

/// Sort a copy of `values`, recording every step
pub fn sort(
    values: &[i32],
    algorithm: SortAlgorithm,
    config: &EngineConfig,
) -> Result<SortResponse, VisualizerError> {
    if values.is_empty() {
        return Err(VisualizerError::EmptyInput);
    }

    let mut arr = values.to_vec();
    let mut rec = ArrayRecorder::new(config);
    let started = Instant::now();
    debug!(algorithm = algorithm.key(), len = arr.len(), "sort started");

    rec.emit(&arr, "Initial array", &[])?;

    match algorithm {
        SortAlgorithm::Bubble => exchange::bubble_sort(&mut arr, &mut rec)?,
        SortAlgorithm::Selection => exchange::selection_sort(&mut arr, &mut rec)?,
        SortAlgorithm::Insertion => exchange::insertion_sort(&mut arr, &mut rec)?,
        SortAlgorithm::Shell => exchange::shell_sort(&mut arr, &mut rec)?,
        SortAlgorithm::Merge => divide::merge_sort(&mut arr, &mut rec)?,
        SortAlgorithm::Quick => divide::quick_sort(&mut arr, &mut rec)?,
        SortAlgorithm::Heap => divide::heap_sort(&mut arr, &mut rec)?,
        SortAlgorithm::Counting => {
            distribution::counting_sort(&mut arr, &mut rec, config.max_value_range)?
        }
        SortAlgorithm::Bucket => distribution::bucket_sort(&mut arr, &mut rec)?,
        SortAlgorithm::Radix => distribution::radix_sort(&mut arr, &mut rec)?,
    }

    rec.emit_colored(&arr, "Array sorted!", &[], Highlight::Green)?;

    let elapsed_milliseconds = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    debug!(
        algorithm = algorithm.key(),
        steps = rec.history().emitted(),
        history_bytes = rec.history().memory_usage(),
        comparisons = rec.comparisons,
        swaps = rec.swaps,
        "sort finished"
    );

    let (steps, comparisons, swaps) = rec.finish();
    Ok(SortResponse {
        steps,
        algorithm_name: algorithm.name().to_string(),
        comparisons,
        swaps,
        elapsed_milliseconds,
        sorted: arr,
    })
}

/// Smallest and largest element
pub(crate) fn bounds(arr: &[i32]) -> Option<(i32, i32)> {
    let min = *arr.iter().min()?;
    let max = *arr.iter().max()?;
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm_keys() {
        for algorithm in SortAlgorithm::ALL {
            assert_eq!(algorithm.key().parse::<SortAlgorithm>(), Ok(algorithm));
        }
        assert_eq!(" Quick ".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Quick));
    }

    #[test]
    fn test_unknown_algorithm() {
        let err = "bogo".parse::<SortAlgorithm>().unwrap_err();
        assert_eq!(
            err,
            VisualizerError::UnknownAlgorithm {
                family: Family::Sorting,
                key: "bogo".to_string()
            }
        );
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = sort(&[], SortAlgorithm::Bubble, &EngineConfig::default()).unwrap_err();
        assert_eq!(err, VisualizerError::EmptyInput);
    }

    #[test]
    fn test_steps_are_numbered_from_one() {
        let response = sort(&[2, 1], SortAlgorithm::Selection, &EngineConfig::default()).unwrap();
        let numbers: Vec<usize> = response.steps.iter().map(|s| s.step_number).collect();
        let expected: Vec<usize> = (1..=response.steps.len()).collect();
        assert_eq!(numbers, expected);
        assert_eq!(response.steps[0].description, "Initial array");
    }

    #[test]
    fn test_summary_mode_keeps_counters() {
        let values = [5, 2, 4, 6, 1, 3];
        let full = sort(&values, SortAlgorithm::Heap, &EngineConfig::default()).unwrap();
        let summary = sort(&values, SortAlgorithm::Heap, &EngineConfig::summary()).unwrap();

        assert!(summary.steps.is_empty());
        assert_eq!(summary.sorted, full.sorted);
        assert_eq!(summary.comparisons, full.comparisons);
        assert_eq!(summary.swaps, full.swaps);
    }

    #[test]
    fn test_history_limit_aborts_run() {
        let config = EngineConfig {
            history_limit: 512,
            ..EngineConfig::default()
        };
        let values: Vec<i32> = (0..64).rev().collect();
        let err = sort(&values, SortAlgorithm::Bubble, &config).unwrap_err();
        assert!(matches!(err, VisualizerError::HistoryLimitExceeded { .. }));
    }
}
