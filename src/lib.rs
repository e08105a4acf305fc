//! Fixed-Size Sliding Window Exercises
//!
//! Solutions to a set of interview problems that all scan a sequence with a
//! window of exactly `k` elements, plus two variable-size companions.
//!
//! ## Layout
//!
//! 1. **`window`** - the generic admit/evict fold every fixed-size exercise runs on
//! 2. **`fixed`** - one module per fixed-size problem
//! 3. **`two_pointers`** - variable-size windows with a shrinking left edge
//! 4. **`reference`** - brute-force definitions to check the fast versions against
//! 5. **`catalog`** / **`cases`** - problem metadata and TOML case files
//!
//! ## Running the case files
//!
//! ```bash
//! cargo run --bin window-cases -- cases/*.toml --verify
//! ```

pub mod cases;
pub mod catalog;
pub mod error;
pub mod fixed;
pub mod logging;
pub mod reference;
pub mod two_pointers;
pub mod window;

pub use catalog::{Answer, Exercise, ExerciseInput};
pub use error::{CaseError, WindowError};
pub use fixed::{
    find_max_average, max_score, max_vowels, maximum_subarray_sum, minimum_recolors,
    num_of_subarrays,
};
pub use two_pointers::{length_of_longest_substring, num_subarray_product_less_than_k};
pub use window::{fold_windows, Aggregate};
