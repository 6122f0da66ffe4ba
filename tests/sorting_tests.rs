// Integration tests for the sorting engine

use std::fs;
use std::path::Path;

use stepviz::config::EngineConfig;
use stepviz::errors::VisualizerError;
use stepviz::request::SortRequest;
use stepviz::snapshot::Highlight;
use stepviz::sorting::{run, sort, SortAlgorithm};

fn cases() -> Vec<Vec<i32>> {
    vec![
        vec![5, 2, 4, 6, 1, 3],
        vec![1],
        vec![2, 1],
        vec![1, 2, 3, 4, 5, 6, 7],
        vec![9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
        vec![4, 4, 1, 4, 1, 1],
        vec![7, 7, 7, 7],
        vec![-5, 3, -12, 0, 8, -1, 3],
        vec![170, 45, 75, 90, 802, 24, 2, 66],
        vec![i32::MIN, 0, i32::MAX, -1],
    ]
}

fn sorted_copy(values: &[i32]) -> Vec<i32> {
    let mut expected = values.to_vec();
    expected.sort();
    expected
}

fn is_permutation(a: &[i32], b: &[i32]) -> bool {
    sorted_copy(a) == sorted_copy(b)
}

#[test]
fn test_every_algorithm_sorts_every_case() {
    for algorithm in SortAlgorithm::ALL {
        for values in cases() {
            // counting sort refuses ranges this wide
            if algorithm == SortAlgorithm::Counting && values.contains(&i32::MAX) {
                continue;
            }
            let response = sort(&values, algorithm, &EngineConfig::default())
                .unwrap_or_else(|e| panic!("{} failed on {:?}: {}", algorithm, values, e));
            let expected = sorted_copy(&values);

            assert_eq!(response.sorted, expected, "{} on {:?}", algorithm, values);

            let last = response.steps.last().expect("no steps recorded");
            assert_eq!(last.array, expected, "{} final snapshot", algorithm);
            assert_eq!(last.description, "Array sorted!");
            assert_eq!(last.highlight_color, Highlight::Green);

            let first = &response.steps[0];
            assert_eq!(first.array, values, "{} initial snapshot", algorithm);
            assert_eq!(first.description, "Initial array");
        }
    }
}

#[test]
fn test_step_numbers_are_dense() {
    for algorithm in SortAlgorithm::ALL {
        let response = sort(&[3, 1, 2, 5, 4], algorithm, &EngineConfig::default()).unwrap();
        for (i, step) in response.steps.iter().enumerate() {
            assert_eq!(step.step_number, i + 1, "{} step {}", algorithm, i);
        }
    }
}

#[test]
fn test_in_place_algorithms_keep_a_permutation() {
    let input = vec![38, 27, 43, 3, 9, 82, 10, -4, 27, 0];
    let in_place = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Quick,
        SortAlgorithm::Heap,
        SortAlgorithm::Bucket,
        SortAlgorithm::Radix,
    ];

    for algorithm in in_place {
        let response = sort(&input, algorithm, &EngineConfig::default()).unwrap();
        for step in &response.steps {
            assert!(
                is_permutation(&step.array, &input),
                "{} step {} is not a permutation: {:?}",
                algorithm,
                step.step_number,
                step.array
            );
        }
    }
}

#[test]
fn test_counting_placements_fill_the_output() {
    let input = vec![38, 27, 43, 3, 9, 82, 10, -4, 27, 0];
    let expected = sorted_copy(&input);
    let response = sort(&input, SortAlgorithm::Counting, &EngineConfig::default()).unwrap();

    let placements: Vec<_> = response
        .steps
        .iter()
        .filter(|s| s.description.starts_with("Placing"))
        .collect();
    assert_eq!(placements.len(), input.len());

    // each placement shows the output buffer: filled slots hold their final
    // value, the rest are still zero
    let mut filled = vec![false; input.len()];
    for step in placements {
        filled[step.highlight_indices[0]] = true;
        for (slot, &value) in step.array.iter().enumerate() {
            let want = if filled[slot] { expected[slot] } else { 0 };
            assert_eq!(value, want, "step {} slot {}", step.step_number, slot);
        }
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let values = vec![6, -2, 9, 0, 6, 3, 14, -7];
    for algorithm in SortAlgorithm::ALL {
        let first = sort(&values, algorithm, &EngineConfig::default()).unwrap();
        let second = sort(&values, algorithm, &EngineConfig::default()).unwrap();

        assert_eq!(first.steps.len(), second.steps.len(), "{}", algorithm);
        assert_eq!(first.comparisons, second.comparisons, "{}", algorithm);
        assert_eq!(first.swaps, second.swaps, "{}", algorithm);
        assert_eq!(
            first.steps.last().unwrap().array,
            second.steps.last().unwrap().array,
            "{}",
            algorithm
        );
        assert_eq!(first.steps, second.steps, "{}", algorithm);
    }
}

#[test]
fn test_input_is_not_mutated() {
    let values = vec![3, 2, 1];
    let response = sort(&values, SortAlgorithm::Quick, &EngineConfig::default()).unwrap();
    assert_eq!(values, vec![3, 2, 1]);
    assert_eq!(response.sorted, vec![1, 2, 3]);
}

#[test]
fn test_summary_mode_matches_full_counters() {
    let values = vec![12, -3, 7, 7, 0, 45, 2, 19, -8];
    for algorithm in SortAlgorithm::ALL {
        let full = sort(&values, algorithm, &EngineConfig::default()).unwrap();
        let summary = sort(&values, algorithm, &EngineConfig::summary()).unwrap();

        assert!(summary.steps.is_empty(), "{}", algorithm);
        assert_eq!(summary.sorted, full.sorted, "{}", algorithm);
        assert_eq!(summary.comparisons, full.comparisons, "{}", algorithm);
        assert_eq!(summary.swaps, full.swaps, "{}", algorithm);
    }
}

#[test]
fn test_bubble_reference_counts() {
    let response = sort(&[5, 2, 4, 6, 1, 3], SortAlgorithm::Bubble, &EngineConfig::default())
        .unwrap();
    assert_eq!(response.swaps, 9);
    assert_eq!(response.comparisons, 15);
    assert_eq!(response.algorithm_name, "Bubble Sort");
}

#[test]
fn test_bubble_on_sorted_input_makes_one_pass() {
    let response = sort(&[1, 2, 3, 4, 5], SortAlgorithm::Bubble, &EngineConfig::default())
        .unwrap();
    assert_eq!(response.comparisons, 4);
    assert_eq!(response.swaps, 0);
}

#[test]
fn test_counting_sort_refuses_huge_range() {
    let err = sort(
        &[i32::MIN, i32::MAX],
        SortAlgorithm::Counting,
        &EngineConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, VisualizerError::ValueRangeTooLarge { .. }));
}

#[test]
fn test_empty_input_is_rejected() {
    for algorithm in SortAlgorithm::ALL {
        assert_eq!(
            sort(&[], algorithm, &EngineConfig::default()).unwrap_err(),
            VisualizerError::EmptyInput
        );
    }
}

#[test]
fn test_history_limit_aborts_run() {
    let config = EngineConfig {
        history_limit: 1024,
        ..EngineConfig::default()
    };
    let values: Vec<i32> = (0..200).rev().collect();
    let err = sort(&values, SortAlgorithm::Bubble, &config).unwrap_err();
    assert!(matches!(err, VisualizerError::HistoryLimitExceeded { .. }));

    // the same run fits when nothing is stored
    let summary = EngineConfig {
        history_limit: 1024,
        ..EngineConfig::summary()
    };
    assert!(sort(&values, SortAlgorithm::Bubble, &summary).is_ok());
}

#[test]
fn test_demo_sort_request() {
    let path = Path::new("demos/sort_request.json");
    let source = fs::read_to_string(path).expect("Failed to read demo file");
    let request: SortRequest = serde_json::from_str(&source).expect("Invalid request");

    let response = run(&request, &EngineConfig::default()).expect("Run failed");
    assert_eq!(response.algorithm_name, "Quick Sort");
    assert_eq!(response.sorted, vec![-4, 0, 3, 9, 10, 27, 27, 38, 43, 82]);
}

#[test]
fn test_response_wire_format() {
    let request = SortRequest {
        values: vec![2, 1],
        algorithm: "insertion".to_string(),
    };
    let response = run(&request, &EngineConfig::default()).unwrap();
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["algorithmName"], "Insertion Sort");
    assert!(json["elapsedMilliseconds"].is_u64());
    let step = &json["steps"][0];
    assert_eq!(step["stepNumber"], 1);
    assert_eq!(step["array"], serde_json::json!([2, 1]));
    assert_eq!(step["highlightColor"], "yellow");
    assert!(step["highlightIndices"].is_array());
}

#[test]
fn test_unknown_algorithm_key() {
    let request = SortRequest {
        values: vec![1],
        algorithm: "bogo".to_string(),
    };
    let err = run(&request, &EngineConfig::default()).unwrap_err();
    assert!(err.to_string().contains("bogo"));
}
