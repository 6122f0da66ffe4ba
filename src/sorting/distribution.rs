// Non-comparison sorts: counting, bucket and radix
//
// None of these swap, so the swap counter stays at zero.

use super::bounds;
use crate::config::{BUCKET_COUNT, RADIX};
use crate::errors::VisualizerError;
use crate::snapshot::{ArrayRecorder, Highlight};

/// Position of `value` in a table starting at `min`
fn offset(value: i32, min: i32) -> usize {
    (i64::from(value) - i64::from(min)) as usize
}

/// Stable counting sort over the range `min..=max`
///
/// Refuses ranges wider than `max_range` rather than allocating the table.
pub fn counting_sort(
    arr: &mut [i32],
    rec: &mut ArrayRecorder,
    max_range: usize,
) -> Result<(), VisualizerError> {
    let Some((min, max)) = bounds(arr) else {
        return Ok(());
    };

    let range = (i64::from(max) - i64::from(min) + 1) as u64;
    if range > max_range as u64 {
        return Err(VisualizerError::ValueRangeTooLarge {
            range,
            limit: max_range,
        });
    }

    let mut count = vec![0usize; range as usize];
    for (i, &value) in arr.iter().enumerate() {
        count[offset(value, min)] += 1;
        rec.emit(arr, format!("Counting {}", value), &[i])?;
    }

    for i in 1..count.len() {
        count[i] += count[i - 1];
    }

    // Walking backwards keeps equal values in input order
    let mut output = vec![0; arr.len()];
    for &value in arr.iter().rev() {
        let slot = offset(value, min);
        count[slot] -= 1;
        let position = count[slot];
        output[position] = value;
        rec.emit(
            &output,
            format!("Placing {} at output position {}", value, position),
            &[position],
        )?;
    }

    arr.copy_from_slice(&output);
    Ok(())
}

/// Bucket sort over five equal-width value buckets
///
/// After each bucket is sorted the snapshot is the finished prefix followed by
/// the untouched contents of the remaining buckets.
pub fn bucket_sort(arr: &mut [i32], rec: &mut ArrayRecorder) -> Result<(), VisualizerError> {
    let Some((min, max)) = bounds(arr) else {
        return Ok(());
    };
    let span = i64::from(max) - i64::from(min) + 1;

    let mut buckets: Vec<Vec<i32>> = vec![Vec::new(); BUCKET_COUNT];
    for (i, &value) in arr.iter().enumerate() {
        let scaled = (i64::from(value) - i64::from(min)) * BUCKET_COUNT as i64 / span;
        let bucket = (scaled as usize).min(BUCKET_COUNT - 1);
        buckets[bucket].push(value);
        rec.emit(arr, format!("Adding {} to bucket {}", value, bucket), &[i])?;
    }

    let mut placed = 0;
    for b in 0..BUCKET_COUNT {
        let mut compared = 0u64;
        buckets[b].sort_by(|x, y| {
            compared += 1;
            x.cmp(y)
        });
        rec.comparisons += compared;

        let len = buckets[b].len();
        arr[placed..placed + len].copy_from_slice(&buckets[b]);
        let mut rest = placed + len;
        for pending in &buckets[b + 1..] {
            arr[rest..rest + pending.len()].copy_from_slice(pending);
            rest += pending.len();
        }

        let range: Vec<usize> = (placed..placed + len).collect();
        rec.emit_colored(
            arr,
            format!("Sorted bucket {} and added to result", b),
            &range,
            Highlight::Green,
        )?;
        placed += len;
    }
    Ok(())
}

/// LSD radix sort, one stable counting pass per base-10 digit
///
/// Negative input is sorted by keys shifted up by the minimum, so every key is
/// non-negative and the digit count is taken from the largest key.
pub fn radix_sort(arr: &mut [i32], rec: &mut ArrayRecorder) -> Result<(), VisualizerError> {
    let Some((min, _)) = bounds(arr) else {
        return Ok(());
    };
    let base = i64::from(min).min(0);
    if base < 0 {
        rec.emit(
            arr,
            format!("Shifting keys by {} to sort negative values", -base),
            &[],
        )?;
    }

    let max_key = arr.iter().map(|&v| i64::from(v) - base).max().unwrap_or(0);
    let mut exp = 1i64;
    while max_key / exp > 0 {
        sort_by_digit(arr, exp, base);
        rec.emit(arr, format!("Sorted by digit at position {}", exp), &[])?;
        exp *= RADIX;
    }
    Ok(())
}

fn sort_by_digit(arr: &mut [i32], exp: i64, base: i64) {
    let digit = |value: i32| (((i64::from(value) - base) / exp) % RADIX) as usize;

    let mut count = [0usize; RADIX as usize];
    for &value in arr.iter() {
        count[digit(value)] += 1;
    }
    for i in 1..count.len() {
        count[i] += count[i - 1];
    }

    let mut output = vec![0; arr.len()];
    for &value in arr.iter().rev() {
        let d = digit(value);
        count[d] -= 1;
        output[count[d]] = value;
    }
    arr.copy_from_slice(&output);
}
