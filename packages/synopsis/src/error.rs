//! Error types for the synopsis generator.
//!
//! Uses the dual-error pattern: `SynopsisError` for library consumers
//! with detailed error context, and the wrapped source errors for internal use.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the synopsis library.
#[derive(Debug, Error)]
pub enum SynopsisError {
    /// Input dataset does not exist.
    #[error("Input dataset not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Required column missing from the CSV header.
    #[error("Missing required column '{column}' in {}", .path.display())]
    MissingColumn { column: String, path: PathBuf },

    /// Output directory does not exist or is not a directory.
    #[error("Output directory does not exist: {}", .0.display())]
    OutputDirectory(PathBuf),

    /// CSV parsing failed.
    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for synopsis operations.
pub type Result<T> = std::result::Result<T, SynopsisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = SynopsisError::MissingColumn {
            column: "DA_pos".to_string(),
            path: PathBuf::from("data/changes.csv"),
        };
        assert_eq!(
            err.to_string(),
            "Missing required column 'DA_pos' in data/changes.csv"
        );
    }

    #[test]
    fn test_input_not_found_display() {
        let err = SynopsisError::InputNotFound(PathBuf::from("missing.csv"));
        assert!(err.to_string().contains("missing.csv"));
    }
}
