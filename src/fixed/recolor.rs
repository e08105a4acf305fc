//! 2379. Minimum Recolors to Get K Consecutive Black Blocks

use std::ops::ControlFlow;

use crate::error::WindowError;
use crate::window::{fold_windows, PredicateCount};

/// Fewest blocks that must be painted black so that some run of `k`
/// consecutive blocks is entirely `'B'`.
///
/// Anything other than `'B'` counts as needing a repaint.
pub fn minimum_recolors(blocks: &str, k: usize) -> Result<u32, WindowError> {
    let not_black = PredicateCount::new(|block: &u8| *block != b'B');
    fold_windows(blocks.as_bytes(), k, not_black, u32::MAX, |fewest, window| {
        ControlFlow::Continue(fewest.min(window.count))
    })
}
