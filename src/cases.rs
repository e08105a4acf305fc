//! Case files: TOML lists of exercise inputs with their expected answers.
//!
//! ```toml
//! [[case]]
//! name = "vowels in the middle"
//! exercise = "max-vowels"
//! input = { text = "abciiidef", k = 3 }
//! expected = 3
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::{Answer, Exercise, ExerciseInput};
use crate::error::CaseError;

// =============================================================================
// Loading
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub exercise: Exercise,
    pub input: ExerciseInput,
    pub expected: f64,
}

impl Case {
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{} (#{})", self.exercise.title(), self.exercise.leetcode_id()),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct CaseFile {
    #[serde(default, rename = "case")]
    cases: Vec<Case>,
}

pub fn parse_cases(content: &str, origin: &Path) -> Result<Vec<Case>, CaseError> {
    let file: CaseFile = toml::from_str(content).map_err(|err| CaseError::Parse {
        path: origin.to_path_buf(),
        message: err.to_string(),
    })?;
    Ok(file.cases)
}

pub fn load_case_file(path: &Path) -> Result<Vec<Case>, CaseError> {
    let content = fs::read_to_string(path).map_err(|source| CaseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cases = parse_cases(&content, path)?;
    info!(path = %path.display(), cases = cases.len(), "loaded case file");
    Ok(cases)
}

/// Expands glob patterns into a sorted, de-duplicated list of files.
///
/// A pattern that matches nothing is kept as a literal path so that loading
/// it reports the missing file instead of silently running zero cases.
pub fn expand_patterns(patterns: &[String]) -> Result<Vec<PathBuf>, CaseError> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let matches = glob::glob(pattern).map_err(|err| CaseError::Pattern {
            pattern: pattern.clone(),
            message: err.to_string(),
        })?;

        let before = paths.len();
        for entry in matches {
            match entry {
                Ok(path) => paths.push(path),
                Err(err) => warn!(error = %err, "skipping unreadable path"),
            }
        }
        if paths.len() == before {
            debug!(pattern = %pattern, "pattern matched nothing, treating as a path");
            paths.push(PathBuf::from(pattern));
        }
    }
    paths.sort();
    paths.dedup();
    Ok(paths)
}

// =============================================================================
// Running
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Passed { actual: Answer },
    Failed { expected: f64, actual: Answer },
    /// The incremental and brute-force answers disagree.
    Mismatch { incremental: Answer, reference: Answer },
    Errored { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseOutcome {
    pub label: String,
    pub exercise: Exercise,
    #[serde(flatten)]
    pub outcome: Outcome,
}

pub fn run_case(case: &Case, verify: bool) -> CaseOutcome {
    let outcome = match case.exercise.solve(&case.input) {
        Err(err) => Outcome::Errored {
            message: err.to_string(),
        },
        Ok(actual) => {
            let reference = if verify {
                Some(case.exercise.solve_reference(&case.input))
            } else {
                None
            };
            match reference {
                Some(Ok(reference)) if !reference.agrees_with(&actual) => Outcome::Mismatch {
                    incremental: actual,
                    reference,
                },
                Some(Err(err)) => Outcome::Errored {
                    message: err.to_string(),
                },
                _ if actual.matches(case.expected) => Outcome::Passed { actual },
                _ => Outcome::Failed {
                    expected: case.expected,
                    actual,
                },
            }
        }
    };

    if !matches!(outcome, Outcome::Passed { .. }) {
        debug!(case = %case.label(), ?outcome, "case did not pass");
    }

    CaseOutcome {
        label: case.label(),
        exercise: case.exercise,
        outcome,
    }
}

/// Runs every case in parallel; outcomes keep the input order.
pub fn run_cases(cases: &[Case], verify: bool) -> Vec<CaseOutcome> {
    cases.par_iter().map(|case| run_case(case, verify)).collect()
}

// =============================================================================
// Reporting
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub passed: usize,
    pub failed: usize,
    pub mismatched: usize,
    pub errored: usize,
    pub outcomes: Vec<CaseOutcome>,
}

impl Report {
    pub fn from_outcomes(outcomes: Vec<CaseOutcome>) -> Self {
        let mut report = Report::default();
        for outcome in &outcomes {
            match outcome.outcome {
                Outcome::Passed { .. } => report.passed += 1,
                Outcome::Failed { .. } => report.failed += 1,
                Outcome::Mismatch { .. } => report.mismatched += 1,
                Outcome::Errored { .. } => report.errored += 1,
            }
        }
        report.outcomes = outcomes;
        report
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_success(&self) -> bool {
        self.passed == self.total()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"
[[case]]
name = "vowels"
exercise = "max-vowels"
input = { text = "abciiidef", k = 3 }
expected = 3

[[case]]
exercise = "max-average"
input = { nums = [1, 12, -5, -6, 50, 3], k = 4 }
expected = 12.75

[[case]]
name = "wrong on purpose"
exercise = "max-card-points"
input = { nums = [1, 79, 80, 1, 1, 1, 200, 1], k = 3 }
expected = 200

[[case]]
name = "window too wide"
exercise = "threshold-average"
input = { nums = [1, 2], k = 3, threshold = 1 }
expected = 0
"#;

    fn sample_cases() -> Vec<Case> {
        parse_cases(SAMPLE, Path::new("sample.toml")).unwrap()
    }

    #[test]
    fn test_parse_cases() {
        let cases = sample_cases();
        assert_eq!(cases.len(), 4);
        assert_eq!(cases[0].exercise, Exercise::MaxVowels);
        assert_eq!(cases[0].input.text.as_deref(), Some("abciiidef"));
        assert_eq!(cases[1].expected, 12.75);
        assert_eq!(cases[3].input.threshold, Some(1));
    }

    #[test]
    fn test_labels() {
        let cases = sample_cases();
        assert_eq!(cases[0].label(), "vowels");
        assert_eq!(cases[1].label(), "Maximum Average Subarray I (#643)");
    }

    #[test]
    fn test_parse_error_names_file() {
        let content = "[[case]]\nexercise = \"no-such\"";
        let err = parse_cases(content, Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, CaseError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_empty_file_has_no_cases() {
        assert!(parse_cases("", Path::new("empty.toml")).unwrap().is_empty());
    }

    #[test]
    fn test_run_cases_outcomes() {
        let outcomes = run_cases(&sample_cases(), false);
        assert_eq!(outcomes.len(), 4);
        assert_eq!(outcomes[0].outcome, Outcome::Passed { actual: Answer::Count(3) });
        assert_eq!(outcomes[1].outcome, Outcome::Passed { actual: Answer::Average(12.75) });
        assert_eq!(
            outcomes[2].outcome,
            Outcome::Failed {
                expected: 200.0,
                actual: Answer::Sum(202)
            }
        );
        assert!(matches!(outcomes[3].outcome, Outcome::Errored { .. }));
    }

    #[test]
    fn test_verify_passes_when_reference_agrees() {
        let cases = sample_cases();
        let outcome = run_case(&cases[0], true);
        assert_eq!(outcome.outcome, Outcome::Passed { actual: Answer::Count(3) });
    }

    #[test]
    fn test_oversized_window_is_recorded_not_fatal() {
        let case = Case {
            name: None,
            exercise: Exercise::DistinctWindowSum,
            input: ExerciseInput::from_nums(&[1, 2, 3], i64::MAX as u64),
            expected: 0.0,
        };
        for verify in [false, true] {
            let outcome = run_case(&case, verify);
            assert!(matches!(outcome.outcome, Outcome::Errored { .. }));
        }
    }

    #[test]
    fn test_report_counts() {
        let report = Report::from_outcomes(run_cases(&sample_cases(), true));
        assert_eq!(report.total(), 4);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.errored, 1);
        assert_eq!(report.mismatched, 0);
        assert!(!report.is_success());
    }

    #[test]
    fn test_report_json() {
        let report = Report::from_outcomes(run_cases(&sample_cases()[..1], false));
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["passed"], 1);
        assert_eq!(json["outcomes"][0]["status"], "passed");
        assert_eq!(json["outcomes"][0]["exercise"], "max-vowels");
        assert_eq!(json["outcomes"][0]["actual"]["kind"], "count");
        assert_eq!(json["outcomes"][0]["actual"]["value"], 3);
    }

    #[test]
    fn test_load_and_expand_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.toml", "a.toml"] {
            let mut file = fs::File::create(dir.path().join(name)).unwrap();
            file.write_all(SAMPLE.as_bytes()).unwrap();
        }

        let pattern = format!("{}/*.toml", dir.path().display());
        let paths = expand_patterns(&[pattern.clone(), pattern]).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with("a.toml"));

        let cases = load_case_file(&paths[0]).unwrap();
        assert_eq!(cases.len(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let paths = expand_patterns(&[missing.display().to_string()]).unwrap();
        assert_eq!(paths, vec![missing.clone()]);
        assert!(matches!(load_case_file(&missing), Err(CaseError::Io { .. })));
    }

    #[test]
    fn test_bundled_case_files_pass() {
        let pattern = format!("{}/cases/*.toml", env!("CARGO_MANIFEST_DIR"));
        let mut all = Vec::new();
        for path in expand_patterns(&[pattern]).unwrap() {
            all.extend(load_case_file(&path).unwrap());
        }
        assert!(!all.is_empty());

        let report = Report::from_outcomes(run_cases(&all, true));
        let failures: Vec<_> = report
            .outcomes
            .iter()
            .filter(|o| !matches!(o.outcome, Outcome::Passed { .. }))
            .collect();
        assert!(failures.is_empty(), "{failures:#?}");
    }

    #[test]
    fn test_bad_pattern() {
        assert!(matches!(
            expand_patterns(&["[".to_string()]),
            Err(CaseError::Pattern { .. })
        ));
    }
}
