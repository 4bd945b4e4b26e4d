//! Error types for the ergo-chain crate.

use ergo_linalg::LinalgError;

/// Error type for all fallible operations in the ergo-chain crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChainError {
    /// Returned when a transition matrix has no states.
    #[error("transition matrix is empty")]
    Empty,

    /// Returned when a transition matrix is not square.
    #[error("transition matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Returned when an entry is non-finite or outside `[0, 1]`.
    #[error("transition probability [{row}][{col}] = {value} is not in [0, 1]")]
    InvalidProbability {
        /// Row (source state) of the bad entry.
        row: usize,
        /// Column (destination state) of the bad entry.
        col: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when a row does not sum to 1 (tolerance 1e-6).
    #[error("row {row} of transition matrix sums to {sum}, expected ~1.0")]
    RowNotStochastic {
        /// The offending row.
        row: usize,
        /// The actual row sum.
        sum: f64,
    },

    /// Returned when a state index is out of range.
    #[error("state index {state} out of range for {n_states} states")]
    StateOutOfRange {
        /// The invalid state index.
        state: usize,
        /// Number of states in the chain.
        n_states: usize,
    },

    /// Wrapped error from the linear-algebra kernel. A `SingularMatrix`
    /// here usually means the chain is not irreducible.
    #[error(transparent)]
    Linalg(#[from] LinalgError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty() {
        assert_eq!(ChainError::Empty.to_string(), "transition matrix is empty");
    }

    #[test]
    fn display_not_square() {
        let e = ChainError::NotSquare { rows: 2, cols: 3 };
        assert_eq!(
            e.to_string(),
            "transition matrix must be square, got 2x3"
        );
    }

    #[test]
    fn display_invalid_probability() {
        let e = ChainError::InvalidProbability {
            row: 1,
            col: 2,
            value: 1.5,
        };
        assert_eq!(
            e.to_string(),
            "transition probability [1][2] = 1.5 is not in [0, 1]"
        );
    }

    #[test]
    fn display_row_not_stochastic() {
        let e = ChainError::RowNotStochastic { row: 0, sum: 0.9 };
        assert_eq!(
            e.to_string(),
            "row 0 of transition matrix sums to 0.9, expected ~1.0"
        );
    }

    #[test]
    fn display_state_out_of_range() {
        let e = ChainError::StateOutOfRange {
            state: 5,
            n_states: 3,
        };
        assert_eq!(e.to_string(), "state index 5 out of range for 3 states");
    }

    #[test]
    fn linalg_errors_convert() {
        let e: ChainError = LinalgError::SingularMatrix { column: 1 }.into();
        assert!(matches!(
            e,
            ChainError::Linalg(LinalgError::SingularMatrix { column: 1 })
        ));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ChainError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ChainError>();
    }
}
