//! 2461. Maximum Sum of Distinct Subarrays With Length K

use std::ops::ControlFlow;

use crate::error::{check_window, WindowError};
use crate::window::{fold_windows, FrequencySum};

/// Largest sum over length-`k` windows whose elements are pairwise distinct.
///
/// Returns 0 when no window qualifies. The answer also never drops below 0,
/// so qualifying windows with a negative sum are reported as 0.
pub fn maximum_subarray_sum(nums: &[i32], k: usize) -> Result<i64, WindowError> {
    // The map is sized from `k`, so reject it before allocating.
    check_window(k, nums.len())?;

    fold_windows(nums, k, FrequencySum::with_capacity(k), 0i64, |best, window| {
        if window.distinct() == k {
            ControlFlow::Continue(best.max(window.sum))
        } else {
            ControlFlow::Continue(best)
        }
    })
}
