use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Error types shared by every window exercise
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("Window size {k} is out of range for a sequence of length {len} (expected 1..={len})")]
    InvalidWindow { k: usize, len: usize },
}

impl WindowError {
    pub fn invalid_window(k: usize, len: usize) -> Self {
        Self::InvalidWindow { k, len }
    }
}

/// Checks that `k` selects at least one full window of a sequence of `len`.
pub fn check_window(k: usize, len: usize) -> Result<(), WindowError> {
    if k == 0 || k > len {
        tracing::debug!(k, len, "rejecting window size");
        return Err(WindowError::invalid_window(k, len));
    }
    Ok(())
}

// =============================================================================
// Errors raised while loading and running case files
// =============================================================================

#[derive(Error, Debug)]
pub enum CaseError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Invalid case file pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    #[error("Missing required input field: '{field}'")]
    MissingField { field: String },

    #[error("Value {value} for field '{field}' is out of range")]
    OutOfRange { field: String, value: i128 },

    #[error(transparent)]
    Window(#[from] WindowError),
}

impl CaseError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField { field: field.into() }
    }

    pub fn out_of_range(field: impl Into<String>, value: i128) -> Self {
        Self::OutOfRange {
            field: field.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_window_rejected() {
        assert_eq!(check_window(0, 5), Err(WindowError::InvalidWindow { k: 0, len: 5 }));
    }

    #[test]
    fn test_oversized_window_rejected() {
        assert!(check_window(6, 5).is_err());
        assert!(check_window(1, 0).is_err());
    }

    #[test]
    fn test_bounds_accepted() {
        assert!(check_window(1, 5).is_ok());
        assert!(check_window(5, 5).is_ok());
    }

    #[test]
    fn test_error_message_names_range() {
        let msg = WindowError::invalid_window(7, 3).to_string();
        assert!(msg.contains("Window size 7"));
        assert!(msg.contains("1..=3"));
    }

    #[test]
    fn test_window_error_converts_into_case_error() {
        fn run() -> Result<(), CaseError> {
            check_window(0, 1)?;
            Ok(())
        }
        assert!(matches!(
            run(),
            Err(CaseError::Window(WindowError::InvalidWindow { k: 0, len: 1 }))
        ));
    }

    #[test]
    fn test_case_error_messages() {
        assert_eq!(
            CaseError::missing_field("k").to_string(),
            "Missing required input field: 'k'"
        );
        assert_eq!(
            CaseError::out_of_range("nums", -1).to_string(),
            "Value -1 for field 'nums' is out of range"
        );
    }
}
