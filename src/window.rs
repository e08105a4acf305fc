//! Generic fixed-size window fold.
//!
//! Every exercise in this crate walks a sequence once, admitting the element
//! entering the window on the right and evicting the one leaving on the left.
//! [`fold_windows`] owns that loop; an exercise only supplies the running
//! [`Aggregate`] and a combine step that reads the aggregate once per full
//! window.

use std::hash::Hash;
use std::ops::ControlFlow;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::error::{check_window, WindowError};

// =============================================================================
// Aggregates: admit/evict summaries of the current window
// =============================================================================

pub trait Aggregate<T> {
    /// Adds `item`, which just entered the window on the right.
    fn admit(&mut self, item: &T);

    /// Removes `item`, which is leaving the window on the left.
    fn evict(&mut self, item: &T);
}

/// Running sum, widened to `i64` so `n * i32::MAX` never overflows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningSum {
    pub sum: i64,
}

impl RunningSum {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Copy + Into<i64>> Aggregate<T> for RunningSum {
    fn admit(&mut self, item: &T) {
        self.sum += (*item).into();
    }

    fn evict(&mut self, item: &T) {
        self.sum -= (*item).into();
    }
}

/// Number of window elements satisfying a predicate.
#[derive(Debug, Clone, Copy)]
pub struct PredicateCount<P> {
    pub count: u32,
    predicate: P,
}

impl<P> PredicateCount<P> {
    pub fn new(predicate: P) -> Self {
        Self { count: 0, predicate }
    }
}

impl<T, P> Aggregate<T> for PredicateCount<P>
where
    P: Fn(&T) -> bool,
{
    fn admit(&mut self, item: &T) {
        if (self.predicate)(item) {
            self.count += 1;
        }
    }

    fn evict(&mut self, item: &T) {
        if (self.predicate)(item) {
            self.count -= 1;
        }
    }
}

/// Value -> occurrence count for the window, plus its running sum.
///
/// A key is removed as soon as its count drops to zero, so `distinct()` is
/// the number of different values currently inside the window.
#[derive(Debug, Clone)]
pub struct FrequencySum<T> {
    counts: FxHashMap<T, usize>,
    pub sum: i64,
}

impl<T: Eq + Hash> FrequencySum<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            sum: 0,
        }
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn count_of(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }
}

impl<T: Copy + Eq + Hash + Into<i64>> Aggregate<T> for FrequencySum<T> {
    fn admit(&mut self, item: &T) {
        *self.counts.entry(*item).or_insert(0) += 1;
        self.sum += (*item).into();
    }

    fn evict(&mut self, item: &T) {
        if let Some(count) = self.counts.get_mut(item) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(item);
            }
        }
        self.sum -= (*item).into();
    }
}

// =============================================================================
// The fold itself
// =============================================================================

/// Folds every length-`k` window of `seq` into an accumulator.
///
/// `combine` sees the aggregate once per full window, left to right, and may
/// return `ControlFlow::Break` to stop the scan with its current value.
/// Fails with [`WindowError::InvalidWindow`] unless `1 <= k <= seq.len()`.
pub fn fold_windows<T, A, B, F>(
    seq: &[T],
    k: usize,
    mut aggregate: A,
    init: B,
    mut combine: F,
) -> Result<B, WindowError>
where
    A: Aggregate<T>,
    F: FnMut(B, &A) -> ControlFlow<B, B>,
{
    check_window(k, seq.len())?;

    let mut acc = init;
    for (i, item) in seq.iter().enumerate() {
        aggregate.admit(item);
        if i + 1 < k {
            continue;
        }

        let left = i + 1 - k;
        trace!(window_start = left, window_end = i, "window full");
        acc = match combine(acc, &aggregate) {
            ControlFlow::Continue(acc) => acc,
            ControlFlow::Break(acc) => {
                trace!(window_start = left, "window fold stopped early");
                return Ok(acc);
            }
        };
        aggregate.evict(&seq[left]);
    }

    Ok(acc)
}
