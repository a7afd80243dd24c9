//! Error types for boxtablelib

use std::fmt;
use thiserror::Error;

/// Identifies which input row a cell came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRef {
    /// The label (header) row
    Labels,
    /// A data row, by its index in the input
    Data(usize),
}

impl fmt::Display for RowRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowRef::Labels => write!(f, "labels"),
            RowRef::Data(index) => write!(f, "row {}", index),
        }
    }
}

/// Errors that can occur while rendering a table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A cell's `Display` implementation reported an error
    #[error("cell in {row}, column {column} has no display form")]
    Unrepresentable { row: RowRef, column: usize },

    /// Row length differs from the column count (strict mode only)
    #[error("{row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: RowRef,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TableError::Unrepresentable {
            row: RowRef::Data(2),
            column: 1,
        };
        assert_eq!(err.to_string(), "cell in row 2, column 1 has no display form");

        let err = TableError::RaggedRow {
            row: RowRef::Labels,
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "labels has 2 cells, expected 3");
    }
}
