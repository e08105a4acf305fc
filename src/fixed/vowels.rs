//! 1456. Maximum Number of Vowels in a Substring of Given Length

use std::ops::ControlFlow;

use crate::error::WindowError;
use crate::window::{fold_windows, PredicateCount};

pub fn is_vowel(c: &u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u')
}

/// Largest number of lowercase ASCII vowels in any length-`k` substring of `s`.
///
/// The scan stops as soon as a window made only of vowels is seen, since no
/// later window can beat `k`.
pub fn max_vowels(s: &str, k: usize) -> Result<u32, WindowError> {
    fold_windows(s.as_bytes(), k, PredicateCount::new(is_vowel), 0u32, |best, window| {
        let best = best.max(window.count);
        if best as usize == k {
            ControlFlow::Break(best)
        } else {
            ControlFlow::Continue(best)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert_eq!(max_vowels("abciiidef", 3), Ok(3));
        assert_eq!(max_vowels("aeiou", 2), Ok(2));
        assert_eq!(max_vowels("leetcode", 3), Ok(2));
        assert_eq!(max_vowels("rhythms", 4), Ok(0));
    }

    #[test]
    fn test_single_char_window() {
        assert_eq!(max_vowels("xyz", 1), Ok(0));
        assert_eq!(max_vowels("xaz", 1), Ok(1));
    }

    #[test]
    fn test_whole_string_window() {
        assert_eq!(max_vowels("banana", 6), Ok(3));
    }

    #[test]
    fn test_uppercase_is_not_counted() {
        assert_eq!(max_vowels("AEIOU", 5), Ok(0));
    }

    #[test]
    fn test_invalid_k() {
        assert_eq!(
            max_vowels("abc", 4),
            Err(WindowError::InvalidWindow { k: 4, len: 3 })
        );
        assert!(max_vowels("abc", 0).is_err());
    }
}
