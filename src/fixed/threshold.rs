//! 1343. Number of Sub-arrays of Size K and Average Greater than or Equal to Threshold

use std::ops::ControlFlow;

use crate::error::WindowError;
use crate::window::{fold_windows, RunningSum};

/// Counts the length-`k` windows of `arr` whose mean is at least `threshold`.
///
/// Compares `sum >= k * threshold` in `i64`, so no division and no rounding.
pub fn num_of_subarrays(arr: &[i32], k: usize, threshold: i32) -> Result<u64, WindowError> {
    let target = k as i64 * threshold as i64;
    fold_windows(arr, k, RunningSum::new(), 0u64, |count, window| {
        ControlFlow::Continue(count + u64::from(window.sum >= target))
    })
}
