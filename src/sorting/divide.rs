// Divide-and-conquer and heap based sorts

use crate::errors::VisualizerError;
use crate::snapshot::{ArrayRecorder, Highlight};

/// Top-down merge sort
///
/// Merging copies both halves out first, so the snapshot shows each element
/// landing in its merged position. Merge sort performs no swaps.
pub fn merge_sort(arr: &mut [i32], rec: &mut ArrayRecorder) -> Result<(), VisualizerError> {
    if arr.is_empty() {
        return Ok(());
    }
    let last = arr.len() - 1;
    split(arr, 0, last, rec)
}

fn split(
    arr: &mut [i32],
    left: usize,
    right: usize,
    rec: &mut ArrayRecorder,
) -> Result<(), VisualizerError> {
    if left >= right {
        return Ok(());
    }

    let mid = left + (right - left) / 2;
    let range: Vec<usize> = (left..=right).collect();
    rec.emit_colored(
        arr,
        format!("Dividing array from {} to {}", left, right),
        &range,
        Highlight::Blue,
    )?;

    split(arr, left, mid, rec)?;
    split(arr, mid + 1, right, rec)?;
    merge(arr, left, mid, right, rec)
}

fn merge(
    arr: &mut [i32],
    left: usize,
    mid: usize,
    right: usize,
    rec: &mut ArrayRecorder,
) -> Result<(), VisualizerError> {
    let left_half = arr[left..=mid].to_vec();
    let right_half = arr[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < left_half.len() && j < right_half.len() {
        rec.comparisons += 1;
        // <= keeps equal keys in their original order
        if left_half[i] <= right_half[j] {
            arr[k] = left_half[i];
            i += 1;
        } else {
            arr[k] = right_half[j];
            j += 1;
        }
        rec.emit_colored(
            arr,
            format!("Merging {} into position {}", arr[k], k),
            &[k],
            Highlight::Green,
        )?;
        k += 1;
    }

    for &value in left_half[i..].iter().chain(&right_half[j..]) {
        arr[k] = value;
        rec.emit(arr, format!("Copying remaining element {}", value), &[k])?;
        k += 1;
    }
    Ok(())
}

/// Quick sort with the Lomuto partition (pivot is the last element)
pub fn quick_sort(arr: &mut [i32], rec: &mut ArrayRecorder) -> Result<(), VisualizerError> {
    if arr.len() < 2 {
        return Ok(());
    }
    let last = arr.len() - 1;
    quick(arr, 0, last, rec)
}

fn quick(
    arr: &mut [i32],
    low: usize,
    high: usize,
    rec: &mut ArrayRecorder,
) -> Result<(), VisualizerError> {
    if low >= high {
        return Ok(());
    }

    let pivot = partition(arr, low, high, rec)?;
    if pivot > low {
        quick(arr, low, pivot - 1, rec)?;
    }
    quick(arr, pivot + 1, high, rec)
}

fn partition(
    arr: &mut [i32],
    low: usize,
    high: usize,
    rec: &mut ArrayRecorder,
) -> Result<usize, VisualizerError> {
    let pivot = arr[high];
    rec.emit_colored(
        arr,
        format!("Pivot selected: {}", pivot),
        &[high],
        Highlight::Purple,
    )?;

    let mut store = low;
    for j in low..high {
        rec.comparisons += 1;
        rec.emit(
            arr,
            format!("Comparing {} with pivot {}", arr[j], pivot),
            &[j, high],
        )?;

        if arr[j] < pivot {
            arr.swap(store, j);
            rec.swaps += 1;
            rec.emit_colored(
                arr,
                format!("Swapped {} and {}", arr[j], arr[store]),
                &[store, j],
                Highlight::Red,
            )?;
            store += 1;
        }
    }

    arr.swap(store, high);
    rec.swaps += 1;
    rec.emit_colored(
        arr,
        format!("Placed pivot {} at position {}", pivot, store),
        &[store],
        Highlight::Green,
    )?;

    Ok(store)
}

/// Heap sort: bottom-up max-heap build, then repeated extract-max
pub fn heap_sort(arr: &mut [i32], rec: &mut ArrayRecorder) -> Result<(), VisualizerError> {
    let n = arr.len();
    for i in (0..n / 2).rev() {
        sift_down(arr, n, i, rec)?;
    }
    rec.emit_colored(arr, "Max heap built", &[], Highlight::Blue)?;

    for end in (1..n).rev() {
        arr.swap(0, end);
        rec.swaps += 1;
        rec.emit_colored(
            arr,
            format!("Moved max element {} to position {}", arr[end], end),
            &[0, end],
            Highlight::Red,
        )?;

        sift_down(arr, end, 0, rec)?;
    }
    Ok(())
}

/// Restore the max-heap property below `root` within `arr[..len]`
fn sift_down(
    arr: &mut [i32],
    len: usize,
    mut root: usize,
    rec: &mut ArrayRecorder,
) -> Result<(), VisualizerError> {
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < len {
            rec.comparisons += 1;
            if arr[left] > arr[largest] {
                largest = left;
            }
        }
        if right < len {
            rec.comparisons += 1;
            if arr[right] > arr[largest] {
                largest = right;
            }
        }

        if largest == root {
            return Ok(());
        }

        arr.swap(root, largest);
        rec.swaps += 1;
        rec.emit(
            arr,
            format!("Heapifying: swapped {} with {}", arr[largest], arr[root]),
            &[root, largest],
        )?;
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    #[test]
    fn test_merge_is_stable_and_swap_free() {
        let mut arr = vec![4, 1, 3, 1, 2];
        let mut rec = ArrayRecorder::new(&EngineConfig::default());
        merge_sort(&mut arr, &mut rec).unwrap();

        assert_eq!(arr, vec![1, 1, 2, 3, 4]);
        assert_eq!(rec.swaps, 0);
        assert!(rec
            .history()
            .iter()
            .any(|s| s.description == "Dividing array from 0 to 4"));
    }

    #[test]
    fn test_quick_places_every_pivot() {
        let mut arr = vec![3, 6, 1, 5, 2, 4];
        let mut rec = ArrayRecorder::new(&EngineConfig::default());
        quick_sort(&mut arr, &mut rec).unwrap();

        assert_eq!(arr, vec![1, 2, 3, 4, 5, 6]);
        let pivots = rec
            .history()
            .iter()
            .filter(|s| s.highlight_color == Highlight::Purple)
            .count();
        let placements = rec
            .history()
            .iter()
            .filter(|s| s.description.starts_with("Placed pivot"))
            .count();
        assert_eq!(pivots, placements);
    }

    #[test]
    fn test_quick_handles_sorted_and_duplicates() {
        for input in [vec![1, 2, 3, 4, 5], vec![2, 2, 2, 2], vec![5, 4, 3, 2, 1]] {
            let mut arr = input.clone();
            let mut rec = ArrayRecorder::new(&EngineConfig::default());
            quick_sort(&mut arr, &mut rec).unwrap();

            let mut expected = input;
            expected.sort();
            assert_eq!(arr, expected);
        }
    }

    #[test]
    fn test_heap_moves_each_max_once() {
        let mut arr = vec![5, 2, 4, 6, 1, 3];
        let mut rec = ArrayRecorder::new(&EngineConfig::default());
        heap_sort(&mut arr, &mut rec).unwrap();

        assert_eq!(arr, vec![1, 2, 3, 4, 5, 6]);
        let extractions = rec
            .history()
            .iter()
            .filter(|s| s.description.starts_with("Moved max element"))
            .count();
        assert_eq!(extractions, 5);
    }
}
