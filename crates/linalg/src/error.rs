//! Error types for the ergo-linalg crate.

/// Error type for all fallible operations in the ergo-linalg crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LinalgError {
    /// Returned when operand shapes are incompatible for an operation.
    #[error("dimension mismatch: cannot combine {lhs_rows}x{lhs_cols} with {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        /// Rows of the left operand.
        lhs_rows: usize,
        /// Columns of the left operand.
        lhs_cols: usize,
        /// Rows of the right operand (length, for vectors).
        rhs_rows: usize,
        /// Columns of the right operand (1 for vectors).
        rhs_cols: usize,
    },

    /// Returned when an argument is outside the operation's domain.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when elimination finds no nonzero pivot in a column.
    #[error("matrix is singular: no nonzero pivot in column {column}")]
    SingularMatrix {
        /// The elimination column with no usable pivot.
        column: usize,
    },
}
