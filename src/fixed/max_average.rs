//! 643. Maximum Average Subarray I

use std::ops::ControlFlow;

use crate::error::WindowError;
use crate::window::{fold_windows, RunningSum};

pub fn find_max_average(nums: &[i32], k: usize) -> Result<f64, WindowError> {
    let best = fold_windows(nums, k, RunningSum::new(), i64::MIN, |best, window| {
        ControlFlow::Continue(best.max(window.sum))
    })?;
    Ok(best as f64 / k as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert_eq!(find_max_average(&[1, 12, -5, -6, 50, 3], 4), Ok(12.75));
        assert_eq!(find_max_average(&[5], 1), Ok(5.0));
    }

    #[test]
    fn test_all_negative() {
        assert_eq!(find_max_average(&[-4, -2, -8], 2), Ok(-3.0));
    }

    #[test]
    fn test_whole_sequence() {
        assert_eq!(find_max_average(&[1, 2, 3, 4], 4), Ok(2.5));
    }

    #[test]
    fn test_invalid_k() {
        assert!(find_max_average(&[1, 2], 0).is_err());
    }
}
