//! Expected first-passage times between states.

use ergo_linalg::{Matrix, NullSink, TraceSink, solve_traced};
use tracing::debug;

use crate::error::ChainError;
use crate::transition::TransitionMatrix;

/// Computes the matrix of expected first-passage times.
///
/// Entry `(i, j)` of the result is `E[T_ij]`, the expected number of steps
/// to reach state `j` for the first time starting from state `i`, with
/// `E[T_jj] = 0` by construction.
///
/// For each destination `j` the first-step recurrence
/// `m_ij = 1 + Σ_{k≠j} P[i][k] m_kj` is assembled into an `n x n` linear
/// system and solved independently, yielding column `j`. That is `n` solver
/// runs of `O(n³)` each, `O(n⁴)` in total — fine for chains with tens of
/// states, the intended scale, but a ceiling for anything much larger.
///
/// # Errors
///
/// Returns a wrapped [`ergo_linalg::LinalgError::SingularMatrix`] when some
/// destination's system has no unique solution, e.g. when a state cannot be
/// reached from every other state.
#[tracing::instrument(skip(p), fields(n_states = p.n_states()))]
pub fn first_passage_matrix(p: &TransitionMatrix) -> Result<Matrix, ChainError> {
    first_passage_matrix_traced(p, &mut NullSink)
}

/// As [`first_passage_matrix`], reporting every per-destination solve to
/// `sink`.
pub fn first_passage_matrix_traced(
    p: &TransitionMatrix,
    sink: &mut impl TraceSink,
) -> Result<Matrix, ChainError> {
    let n = p.n_states();
    if n == 0 {
        return Err(ChainError::Empty);
    }
    let mut passage = Matrix::zeros(n, n);

    for j in 0..n {
        debug!(destination = j, "solving first-passage system");
        let (a, b) = passage_system(p, j);
        let column = solve_traced(&a, &b, sink)?;
        for i in 0..n {
            passage[(i, j)] = column[i];
        }
    }

    Ok(passage)
}

/// Builds the linear system whose solution is column `j` of the
/// first-passage matrix.
///
/// Row `j` pins `m_jj = 0`; every other row `i` encodes
/// `m_ij − Σ_{k≠j} P[i][k] m_kj = 1`.
fn passage_system(p: &TransitionMatrix, j: usize) -> (Matrix, Vec<f64>) {
    let n = p.n_states();
    let mut a = Matrix::zeros(n, n);
    let mut b = vec![0.0; n];

    for i in 0..n {
        if i == j {
            a[(i, j)] = 1.0;
        } else {
            for k in 0..n {
                a[(i, k)] = if k == j {
                    0.0
                } else if k == i {
                    1.0 - p.prob(i, k)
                } else {
                    -p.prob(i, k)
                };
            }
            b[i] = 1.0;
        }
    }

    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn chain(rows: Vec<Vec<f64>>) -> TransitionMatrix {
        TransitionMatrix::from_rows(rows).unwrap()
    }

    // 1. diagonal_is_zero
    #[test]
    fn diagonal_is_zero() {
        let p = chain(vec![
            vec![0.5, 0.3, 0.2],
            vec![0.1, 0.7, 0.2],
            vec![0.2, 0.3, 0.5],
        ]);
        let m = first_passage_matrix(&p).unwrap();
        for i in 0..3 {
            assert_abs_diff_eq!(m[(i, i)], 0.0, epsilon = 0.0);
        }
    }

    // 2. two_state_hand_computed
    #[test]
    fn two_state_hand_computed() {
        // m01 = 1 + 0.5*m01 => m01 = 2; m10 = 1 + 0.8*m10 => m10 = 5.
        let p = chain(vec![vec![0.5, 0.5], vec![0.2, 0.8]]);
        let m = first_passage_matrix(&p).unwrap();
        assert_abs_diff_eq!(m[(0, 1)], 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(m[(1, 0)], 5.0, epsilon = 1e-10);
    }

    // 3. cycle_passage_times
    #[test]
    fn cycle_passage_times() {
        // Deterministic cycle 0 -> 1 -> 2 -> 0: passage time is the walk
        // distance around the cycle.
        let p = chain(vec![
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![1.0, 0.0, 0.0],
        ]);
        let m = first_passage_matrix(&p).unwrap();
        assert_abs_diff_eq!(m[(0, 1)], 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(m[(0, 2)], 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(m[(1, 2)], 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(m[(1, 0)], 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(m[(2, 0)], 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(m[(2, 1)], 2.0, epsilon = 1e-10);
    }

    // 4. consistent_with_recurrence
    #[test]
    fn consistent_with_recurrence() {
        // E[T_jj] = 1 + sum_i P[j][i] * m_ij relates recurrence times to the
        // passage matrix.
        let p = chain(vec![vec![0.5, 0.5], vec![0.2, 0.8]]);
        let m = first_passage_matrix(&p).unwrap();
        let rec = crate::stationary::recurrence_times(&p).unwrap();
        for j in 0..2 {
            let mut expected = 1.0;
            for i in 0..2 {
                expected += p.prob(j, i) * m[(i, j)];
            }
            assert_abs_diff_eq!(rec.times()[j], expected, epsilon = 1e-9);
        }
    }

    // 5. unreachable_destination_is_singular
    #[test]
    fn unreachable_destination_is_singular() {
        // State 0 is never entered from state 1, so the system for
        // destination 0 has no finite solution.
        let p = chain(vec![vec![0.5, 0.5], vec![0.0, 1.0]]);
        let result = first_passage_matrix(&p);
        assert!(matches!(
            result,
            Err(ChainError::Linalg(
                ergo_linalg::LinalgError::SingularMatrix { .. }
            ))
        ));
    }
}
