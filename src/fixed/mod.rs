//! Fixed-size window exercises, one file per problem.
//!
//! Each one is a thin configuration of [`crate::window::fold_windows`]:
//! an aggregate, a starting accumulator, and a per-window combine step.

pub mod card_points;
pub mod distinct_sum;
pub mod max_average;
pub mod recolor;
pub mod threshold;
pub mod vowels;

pub use card_points::max_score;
pub use distinct_sum::maximum_subarray_sum;
pub use max_average::find_max_average;
pub use recolor::minimum_recolors;
pub use threshold::num_of_subarrays;
pub use vowels::{is_vowel, max_vowels};
