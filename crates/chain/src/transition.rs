//! Row-stochastic transition matrices.

use ergo_linalg::Matrix;

use crate::error::ChainError;

/// Row-sum tolerance for stochastic validation.
const ROW_SUM_TOLERANCE: f64 = 1e-6;

/// An `n x n` row-stochastic transition matrix.
///
/// `prob(i, j)` is the probability of moving from state `i` to state `j` in
/// one step. States are identified by index `0..n_states()`. Construction
/// through [`TransitionMatrix::new`] validates that every entry is a finite
/// probability and every row sums to 1 within `1e-6`.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    probs: Matrix,
}

impl TransitionMatrix {
    /// Validates `probs` and wraps it as a transition matrix.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Empty`] or [`ChainError::NotSquare`] for shape
    /// problems, [`ChainError::InvalidProbability`] for non-finite or
    /// out-of-range entries, and [`ChainError::RowNotStochastic`] when a row
    /// sum is off by more than `1e-6`.
    pub fn new(probs: Matrix) -> Result<Self, ChainError> {
        validate(&probs)?;
        Ok(Self { probs })
    }

    /// Builds a transition matrix from nested row vectors.
    ///
    /// # Errors
    ///
    /// As for [`TransitionMatrix::new`]; ragged input surfaces as a wrapped
    /// [`ergo_linalg::LinalgError::InvalidArgument`].
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ChainError> {
        let probs = Matrix::from_rows(rows)?;
        Self::new(probs)
    }

    /// Wraps a matrix without validating it.
    ///
    /// For callers holding data already known to be row-stochastic. The
    /// analyses assume the invariant; feeding an unvalidated non-stochastic
    /// matrix through them produces meaningless (though well-defined)
    /// numbers.
    pub fn from_matrix_unchecked(probs: Matrix) -> Self {
        Self { probs }
    }

    /// Returns the number of states.
    pub fn n_states(&self) -> usize {
        self.probs.rows()
    }

    /// Returns the transition probabilities out of state `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_states()`.
    pub fn row(&self, i: usize) -> &[f64] {
        self.probs.row(i)
    }

    /// Returns the probability of moving from state `from` to state `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn prob(&self, from: usize, to: usize) -> f64 {
        self.probs[(from, to)]
    }

    /// Returns the underlying matrix.
    pub fn as_matrix(&self) -> &Matrix {
        &self.probs
    }

    /// Returns the `n`-step transition matrix `P^n`.
    ///
    /// Entry `(i, j)` of the result is the probability of being in state `j`
    /// exactly `n` steps after starting in state `i`. Computed with the
    /// naive sequential power chain.
    ///
    /// # Errors
    ///
    /// Propagates kernel errors; cannot fail for a validated matrix.
    pub fn n_step(&self, n: u32) -> Result<Matrix, ChainError> {
        Ok(self.probs.power(n)?)
    }
}

fn validate(probs: &Matrix) -> Result<(), ChainError> {
    if probs.rows() == 0 || probs.cols() == 0 {
        return Err(ChainError::Empty);
    }
    if !probs.is_square() {
        return Err(ChainError::NotSquare {
            rows: probs.rows(),
            cols: probs.cols(),
        });
    }
    for i in 0..probs.rows() {
        let mut sum = 0.0;
        for (j, &p) in probs.row(i).iter().enumerate() {
            if !p.is_finite() || !(0.0..=1.0).contains(&p) {
                return Err(ChainError::InvalidProbability {
                    row: i,
                    col: j,
                    value: p,
                });
            }
            sum += p;
        }
        if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
            return Err(ChainError::RowNotStochastic { row: i, sum });
        }
    }
    Ok(())
}
