//! Variable-length windows.
//!
//! Unlike the fixed-size exercises, the left edge here moves only when the
//! window stops satisfying its condition, so the window grows and shrinks.

use rustc_hash::FxHashMap;

// =============================================================================
// 713. Subarray Product Less Than K
// =============================================================================

/// Counts contiguous subarrays of `nums` whose product is strictly below `k`.
///
/// A zero makes every subarray containing it qualify, so the running product
/// is restarted just after the most recent zero and the subarrays reaching
/// back over it are added separately. With `k == 1` only subarrays holding a
/// zero qualify, and with `k == 0` none do.
pub fn num_subarray_product_less_than_k(nums: &[u32], k: u64) -> u64 {
    if k == 0 {
        return 0;
    }

    let limit = k as u128;
    let mut count = 0u64;
    let mut product = 1u128;
    let mut left = 0usize;
    let mut last_zero: Option<usize> = None;

    for (right, &x) in nums.iter().enumerate() {
        if x == 0 {
            last_zero = Some(right);
            product = 1;
            left = right + 1;
            count += right as u64 + 1;
            continue;
        }

        product *= x as u128;
        while left <= right && product >= limit {
            product /= nums[left] as u128;
            left += 1;
        }

        let through_zero = last_zero.map_or(0, |z| z as u64 + 1);
        count += (right + 1 - left) as u64 + through_zero;
    }

    count
}

// =============================================================================
// 3. Longest Substring Without Repeating Characters
// =============================================================================

pub fn length_of_longest_substring(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    let mut seen: FxHashMap<char, usize> = FxHashMap::default();
    let mut longest = 0;
    let mut left = 0;

    for (right, &c) in chars.iter().enumerate() {
        *seen.entry(c).or_insert(0) += 1;
        while seen[&c] > 1 {
            if let Some(count) = seen.get_mut(&chars[left]) {
                *count -= 1;
            }
            left += 1;
        }
        longest = longest.max(right + 1 - left);
    }

    longest
}
