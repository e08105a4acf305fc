//! Brute-force definitions of every exercise.
//!
//! Each window is rebuilt from scratch with `slice::windows`, so these run in
//! O(n * k). They exist to check the incremental versions against, in the
//! property tests, the benchmark and the case runner's `--verify` mode.

use itertools::Itertools;

use crate::error::{check_window, WindowError};
use crate::fixed::is_vowel;

fn window_sum(window: &[i32]) -> i64 {
    window.iter().map(|&x| x as i64).sum()
}

pub fn max_vowels(s: &str, k: usize) -> Result<u32, WindowError> {
    check_window(k, s.len())?;
    Ok(s.as_bytes()
        .windows(k)
        .map(|w| w.iter().filter(|c| is_vowel(c)).count() as u32)
        .max()
        .unwrap_or(0))
}

pub fn minimum_recolors(blocks: &str, k: usize) -> Result<u32, WindowError> {
    check_window(k, blocks.len())?;
    Ok(blocks
        .as_bytes()
        .windows(k)
        .map(|w| w.iter().filter(|&&b| b != b'B').count() as u32)
        .min()
        .unwrap_or(0))
}

pub fn num_of_subarrays(arr: &[i32], k: usize, threshold: i32) -> Result<u64, WindowError> {
    check_window(k, arr.len())?;
    let count = arr
        .windows(k)
        .filter(|w| window_sum(w) as f64 / k as f64 >= threshold as f64)
        .count();
    Ok(count as u64)
}

/// Tries every split of `k` cards between the front and the back of the row.
pub fn max_score(cards: &[i32], k: usize) -> Result<i64, WindowError> {
    check_window(k, cards.len())?;
    let n = cards.len();
    Ok((0..=k)
        .map(|front| window_sum(&cards[..front]) + window_sum(&cards[n - (k - front)..]))
        .max()
        .unwrap_or(0))
}

pub fn maximum_subarray_sum(nums: &[i32], k: usize) -> Result<i64, WindowError> {
    check_window(k, nums.len())?;
    Ok(nums
        .windows(k)
        .filter(|w| w.iter().all_unique())
        .map(window_sum)
        .fold(0, i64::max))
}

pub fn find_max_average(nums: &[i32], k: usize) -> Result<f64, WindowError> {
    check_window(k, nums.len())?;
    let best = nums.windows(k).map(window_sum).max().unwrap_or(0);
    Ok(best as f64 / k as f64)
}

pub fn num_subarray_product_less_than_k(nums: &[u32], k: u64) -> u64 {
    let limit = k as u128;
    let mut count = 0;
    for start in 0..nums.len() {
        let mut product = 1u128;
        for &x in &nums[start..] {
            product = product.saturating_mul(x as u128);
            if product < limit {
                count += 1;
            }
        }
    }
    count
}

pub fn length_of_longest_substring(s: &str) -> usize {
    let chars: Vec<char> = s.chars().collect();
    (1..=chars.len())
        .rev()
        .find(|&len| chars.windows(len).any(|w| w.iter().all_unique()))
        .unwrap_or(0)
}
