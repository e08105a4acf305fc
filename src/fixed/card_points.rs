//! 1423. Maximum Points You Can Obtain from Cards

use std::ops::ControlFlow;

use crate::error::{check_window, WindowError};
use crate::window::{fold_windows, RunningSum};

/// Best total from taking exactly `k` cards, each from either end of the row.
///
/// The cards left behind always form one contiguous block of `n - k`, so the
/// answer is the total minus the cheapest such block.
pub fn max_score(cards: &[i32], k: usize) -> Result<i64, WindowError> {
    check_window(k, cards.len())?;

    let total: i64 = cards.iter().map(|&c| c as i64).sum();
    let kept = cards.len() - k;
    if kept == 0 {
        return Ok(total);
    }

    let cheapest = fold_windows(cards, kept, RunningSum::new(), i64::MAX, |min, window| {
        ControlFlow::Continue(min.min(window.sum))
    })?;
    Ok(total - cheapest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert_eq!(max_score(&[1, 2, 3, 4, 5, 6, 1], 3), Ok(12));
        assert_eq!(max_score(&[2, 2, 2], 2), Ok(4));
        assert_eq!(max_score(&[9, 7, 7, 9, 7, 7, 9], 7), Ok(55));
        assert_eq!(max_score(&[1, 1000, 1], 1), Ok(1));
        assert_eq!(max_score(&[1, 79, 80, 1, 1, 1, 200, 1], 3), Ok(202));
    }

    #[test]
    fn test_take_everything() {
        assert_eq!(max_score(&[-3, 4, -1], 3), Ok(0));
    }

    #[test]
    fn test_single_card() {
        assert_eq!(max_score(&[5, -2, 8], 1), Ok(8));
    }

    #[test]
    fn test_invalid_k() {
        assert_eq!(
            max_score(&[1, 2, 3], 0),
            Err(WindowError::InvalidWindow { k: 0, len: 3 })
        );
        assert!(max_score(&[1, 2, 3], 4).is_err());
    }
}
