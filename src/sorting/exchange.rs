// Comparison sorts that move elements by adjacent exchange or shifting

use crate::errors::VisualizerError;
use crate::snapshot::{ArrayRecorder, Highlight};

/// Bubble sort with early exit once a pass makes no swap
pub fn bubble_sort(arr: &mut [i32], rec: &mut ArrayRecorder) -> Result<(), VisualizerError> {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            rec.comparisons += 1;
            rec.emit(
                arr,
                format!("Comparing {} and {}", arr[j], arr[j + 1]),
                &[j, j + 1],
            )?;

            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                rec.swaps += 1;
                swapped = true;
                rec.emit_colored(
                    arr,
                    format!("Swapped {} and {}", arr[j + 1], arr[j]),
                    &[j, j + 1],
                    Highlight::Red,
                )?;
            }
        }
        if !swapped {
            break;
        }
    }
    Ok(())
}

pub fn selection_sort(arr: &mut [i32], rec: &mut ArrayRecorder) -> Result<(), VisualizerError> {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        rec.emit_colored(
            arr,
            format!("Finding minimum from index {}", i),
            &[i],
            Highlight::Blue,
        )?;

        for j in i + 1..n {
            rec.comparisons += 1;
            rec.emit(
                arr,
                format!("Comparing {} with current minimum {}", arr[j], arr[min_idx]),
                &[min_idx, j],
            )?;
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }

        if min_idx != i {
            arr.swap(i, min_idx);
            rec.swaps += 1;
            rec.emit_colored(
                arr,
                format!("Swapped {} with {}", arr[min_idx], arr[i]),
                &[i, min_idx],
                Highlight::Red,
            )?;
        }
    }
    Ok(())
}

/// Insertion sort; every shift counts as a swap
pub fn insertion_sort(arr: &mut [i32], rec: &mut ArrayRecorder) -> Result<(), VisualizerError> {
    for i in 1..arr.len() {
        let key = arr[i];
        rec.emit_colored(
            arr,
            format!("Inserting {} into sorted portion", key),
            &[i],
            Highlight::Blue,
        )?;

        let mut j = i;
        while j > 0 {
            rec.comparisons += 1;
            if arr[j - 1] <= key {
                break;
            }
            arr[j] = arr[j - 1];
            rec.swaps += 1;
            rec.emit(arr, format!("Moving {} to the right", arr[j]), &[j - 1, j])?;
            j -= 1;
        }

        arr[j] = key;
        rec.emit_colored(
            arr,
            format!("Inserted {} at position {}", key, j),
            &[j],
            Highlight::Green,
        )?;
    }
    Ok(())
}

/// Shell sort with the halving gap sequence n/2, n/4, ..., 1
pub fn shell_sort(arr: &mut [i32], rec: &mut ArrayRecorder) -> Result<(), VisualizerError> {
    let n = arr.len();
    let mut gap = n / 2;
    while gap > 0 {
        rec.emit(arr, format!("Current gap: {}", gap), &[])?;

        for i in gap..n {
            let temp = arr[i];
            let mut j = i;
            while j >= gap {
                rec.comparisons += 1;
                if arr[j - gap] <= temp {
                    break;
                }
                arr[j] = arr[j - gap];
                rec.swaps += 1;
                rec.emit(
                    arr,
                    format!("Moving {} forward by gap {}", arr[j], gap),
                    &[j - gap, j],
                )?;
                j -= gap;
            }

            arr[j] = temp;
            if j != i {
                rec.emit_colored(
                    arr,
                    format!("Inserted {} at position {}", temp, j),
                    &[j],
                    Highlight::Green,
                )?;
            }
        }

        gap /= 2;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    type SortFn = fn(&mut [i32], &mut ArrayRecorder) -> Result<(), VisualizerError>;

    fn run(sort: SortFn, input: &[i32]) -> (Vec<i32>, ArrayRecorder) {
        let mut arr = input.to_vec();
        let mut rec = ArrayRecorder::new(&EngineConfig::default());
        sort(&mut arr, &mut rec).unwrap();
        (arr, rec)
    }

    #[test]
    fn test_bubble_counts_inversions() {
        let (arr, rec) = run(bubble_sort, &[5, 2, 4, 6, 1, 3]);
        assert_eq!(arr, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(rec.swaps, 9);
        assert_eq!(rec.comparisons, 15);
        // one step per comparison plus one per swap
        assert_eq!(rec.history().len(), 24);
    }

    #[test]
    fn test_bubble_stops_after_clean_pass() {
        let (arr, rec) = run(bubble_sort, &[1, 2, 3, 4]);
        assert_eq!(arr, vec![1, 2, 3, 4]);
        assert_eq!(rec.comparisons, 3);
        assert_eq!(rec.swaps, 0);
    }

    #[test]
    fn test_selection_skips_noop_swaps() {
        let (arr, rec) = run(selection_sort, &[1, 3, 2]);
        assert_eq!(arr, vec![1, 2, 3]);
        assert_eq!(rec.swaps, 1);
        assert_eq!(rec.comparisons, 3);
        let scans = rec
            .history()
            .iter()
            .filter(|s| s.description.starts_with("Finding minimum"))
            .count();
        assert_eq!(scans, 2);
    }

    #[test]
    fn test_insertion_shifts_are_swaps() {
        let (arr, rec) = run(insertion_sort, &[3, 2, 1]);
        assert_eq!(arr, vec![1, 2, 3]);
        assert_eq!(rec.swaps, 3);
    }

    #[test]
    fn test_shell_announces_each_gap() {
        let (arr, rec) = run(shell_sort, &[9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(arr, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let gaps: Vec<String> = rec
            .history()
            .iter()
            .filter(|s| s.description.starts_with("Current gap"))
            .map(|s| s.description.clone())
            .collect();
        assert_eq!(gaps, vec!["Current gap: 4", "Current gap: 2", "Current gap: 1"]);
    }
}
