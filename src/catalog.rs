use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CaseError;
use crate::{fixed, reference, two_pointers};

// =============================================================================
// Exercise catalog
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Exercise {
    MaxVowels,
    MinimumRecolors,
    ThresholdAverage,
    MaxCardPoints,
    DistinctWindowSum,
    MaxAverage,
    ProductLessThanK,
    LongestUniqueSubstring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    Fixed,
    Variable,
}

impl WindowKind {
    pub fn heading(&self) -> &'static str {
        match self {
            WindowKind::Fixed => "Fixed-size windows",
            WindowKind::Variable => "Variable-size windows",
        }
    }
}

impl Exercise {
    pub const ALL: [Exercise; 8] = [
        Exercise::MaxVowels,
        Exercise::MinimumRecolors,
        Exercise::ThresholdAverage,
        Exercise::MaxCardPoints,
        Exercise::DistinctWindowSum,
        Exercise::MaxAverage,
        Exercise::ProductLessThanK,
        Exercise::LongestUniqueSubstring,
    ];

    pub fn leetcode_id(&self) -> u32 {
        match self {
            Exercise::MaxVowels => 1456,
            Exercise::MinimumRecolors => 2379,
            Exercise::ThresholdAverage => 1343,
            Exercise::MaxCardPoints => 1423,
            Exercise::DistinctWindowSum => 2461,
            Exercise::MaxAverage => 643,
            Exercise::ProductLessThanK => 713,
            Exercise::LongestUniqueSubstring => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Exercise::MaxVowels => "Maximum Number of Vowels in a Substring of Given Length",
            Exercise::MinimumRecolors => "Minimum Recolors to Get K Consecutive Black Blocks",
            Exercise::ThresholdAverage => {
                "Number of Sub-arrays of Size K and Average Greater than or Equal to Threshold"
            }
            Exercise::MaxCardPoints => "Maximum Points You Can Obtain from Cards",
            Exercise::DistinctWindowSum => "Maximum Sum of Distinct Subarrays With Length K",
            Exercise::MaxAverage => "Maximum Average Subarray I",
            Exercise::ProductLessThanK => "Subarray Product Less Than K",
            Exercise::LongestUniqueSubstring => "Longest Substring Without Repeating Characters",
        }
    }

    pub fn kind(&self) -> WindowKind {
        match self {
            Exercise::ProductLessThanK | Exercise::LongestUniqueSubstring => WindowKind::Variable,
            _ => WindowKind::Fixed,
        }
    }

    pub fn solve(&self, input: &ExerciseInput) -> Result<Answer, CaseError> {
        self.run(input, Strategy::Incremental)
    }

    pub fn solve_reference(&self, input: &ExerciseInput) -> Result<Answer, CaseError> {
        self.run(input, Strategy::BruteForce)
    }

    fn run(&self, input: &ExerciseInput, strategy: Strategy) -> Result<Answer, CaseError> {
        let brute = strategy == Strategy::BruteForce;
        let answer = match self {
            Exercise::MaxVowels => {
                let (text, k) = (input.text()?, input.window()?);
                let n = if brute {
                    reference::max_vowels(text, k)?
                } else {
                    fixed::max_vowels(text, k)?
                };
                Answer::Count(n as u64)
            }
            Exercise::MinimumRecolors => {
                let (text, k) = (input.text()?, input.window()?);
                let n = if brute {
                    reference::minimum_recolors(text, k)?
                } else {
                    fixed::minimum_recolors(text, k)?
                };
                Answer::Count(n as u64)
            }
            Exercise::ThresholdAverage => {
                let (nums, k) = (input.i32_nums()?, input.window()?);
                let threshold = input.threshold()?;
                let n = if brute {
                    reference::num_of_subarrays(&nums, k, threshold)?
                } else {
                    fixed::num_of_subarrays(&nums, k, threshold)?
                };
                Answer::Count(n)
            }
            Exercise::MaxCardPoints => {
                let (nums, k) = (input.i32_nums()?, input.window()?);
                let sum = if brute {
                    reference::max_score(&nums, k)?
                } else {
                    fixed::max_score(&nums, k)?
                };
                Answer::Sum(sum)
            }
            Exercise::DistinctWindowSum => {
                let (nums, k) = (input.i32_nums()?, input.window()?);
                let sum = if brute {
                    reference::maximum_subarray_sum(&nums, k)?
                } else {
                    fixed::maximum_subarray_sum(&nums, k)?
                };
                Answer::Sum(sum)
            }
            Exercise::MaxAverage => {
                let (nums, k) = (input.i32_nums()?, input.window()?);
                let avg = if brute {
                    reference::find_max_average(&nums, k)?
                } else {
                    fixed::find_max_average(&nums, k)?
                };
                Answer::Average(avg)
            }
            Exercise::ProductLessThanK => {
                let nums = input.u32_nums()?;
                let k = input.k.ok_or_else(|| CaseError::missing_field("k"))?;
                let n = if brute {
                    reference::num_subarray_product_less_than_k(&nums, k)
                } else {
                    two_pointers::num_subarray_product_less_than_k(&nums, k)
                };
                Answer::Count(n)
            }
            Exercise::LongestUniqueSubstring => {
                let text = input.text()?;
                let len = if brute {
                    reference::length_of_longest_substring(text)
                } else {
                    two_pointers::length_of_longest_substring(text)
                };
                Answer::Length(len)
            }
        };
        Ok(answer)
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.leetcode_id(), self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Incremental,
    BruteForce,
}

/// Markdown listing of the catalog, grouped by window kind and sorted by
/// problem number within each group.
pub fn render_listing() -> String {
    let mut out = String::from("## Sliding windows\n");
    for kind in [WindowKind::Fixed, WindowKind::Variable] {
        let mut exercises: Vec<Exercise> =
            Exercise::ALL.iter().copied().filter(|e| e.kind() == kind).collect();
        exercises.sort_by_key(|e| e.leetcode_id());

        out.push_str(&format!("\n### {} ({})\n\n", kind.heading(), exercises.len()));
        for exercise in exercises {
            out.push_str(&format!("- {exercise}\n"));
        }
    }
    out
}

// =============================================================================
// Inputs and answers
// =============================================================================

/// Raw case input as written in a case file.
///
/// Numbers are kept as `i64` so that out-of-range values can be reported
/// instead of failing deserialization; each exercise narrows what it needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nums: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub k: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i64>,
}

impl ExerciseInput {
    pub fn from_nums(nums: &[i64], k: u64) -> Self {
        Self {
            nums: Some(nums.to_vec()),
            k: Some(k),
            ..Self::default()
        }
    }

    pub fn from_text(text: &str, k: u64) -> Self {
        Self {
            text: Some(text.to_string()),
            k: Some(k),
            ..Self::default()
        }
    }

    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    fn text(&self) -> Result<&str, CaseError> {
        self.text.as_deref().ok_or_else(|| CaseError::missing_field("text"))
    }

    fn window(&self) -> Result<usize, CaseError> {
        let k = self.k.ok_or_else(|| CaseError::missing_field("k"))?;
        usize::try_from(k).map_err(|_| CaseError::out_of_range("k", k as i128))
    }

    fn threshold(&self) -> Result<i32, CaseError> {
        let t = self.threshold.ok_or_else(|| CaseError::missing_field("threshold"))?;
        i32::try_from(t).map_err(|_| CaseError::out_of_range("threshold", t as i128))
    }

    fn i32_nums(&self) -> Result<Vec<i32>, CaseError> {
        let nums = self.nums.as_ref().ok_or_else(|| CaseError::missing_field("nums"))?;
        nums.iter()
            .map(|&x| i32::try_from(x).map_err(|_| CaseError::out_of_range("nums", x as i128)))
            .collect()
    }

    fn u32_nums(&self) -> Result<Vec<u32>, CaseError> {
        let nums = self.nums.as_ref().ok_or_else(|| CaseError::missing_field("nums"))?;
        nums.iter()
            .map(|&x| u32::try_from(x).map_err(|_| CaseError::out_of_range("nums", x as i128)))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    Count(u64),
    Sum(i64),
    Average(f64),
    Length(usize),
}

impl Answer {
    pub const TOLERANCE: f64 = 1e-5;

    pub fn as_f64(&self) -> f64 {
        match *self {
            Answer::Count(n) => n as f64,
            Answer::Sum(s) => s as f64,
            Answer::Average(a) => a,
            Answer::Length(l) => l as f64,
        }
    }

    /// Integer answers must match exactly; averages within [`Self::TOLERANCE`].
    pub fn matches(&self, expected: f64) -> bool {
        match *self {
            Answer::Average(a) => (a - expected).abs() <= Self::TOLERANCE,
            _ => self.as_f64() == expected,
        }
    }

    /// Compares two computed answers. Integer answers of the same kind are
    /// compared without going through `f64`, so values above 2^53 stay exact.
    pub fn agrees_with(&self, other: &Answer) -> bool {
        match (*self, *other) {
            (Answer::Count(a), Answer::Count(b)) => a == b,
            (Answer::Sum(a), Answer::Sum(b)) => a == b,
            (Answer::Length(a), Answer::Length(b)) => a == b,
            (Answer::Average(a), Answer::Average(b)) => (a - b).abs() <= Self::TOLERANCE,
            _ => false,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Count(n) => write!(f, "{n}"),
            Answer::Sum(s) => write!(f, "{s}"),
            Answer::Average(a) => write!(f, "{a:.5}"),
            Answer::Length(l) => write!(f, "{l}"),
        }
    }
}
