//! Stationary distribution and expected recurrence times.

use ergo_linalg::{Matrix, NullSink, TraceSink, solve_traced};
use tracing::debug;

use crate::error::ChainError;
use crate::transition::TransitionMatrix;

/// Stationary distribution paired with the recurrence times derived from it.
#[derive(Debug, Clone)]
pub struct Recurrence {
    /// Stationary distribution π.
    pi: Vec<f64>,
    /// Expected return times, `1/π_i` per state (infinite where `π_i = 0`).
    times: Vec<f64>,
}

impl Recurrence {
    pub(crate) fn new(pi: Vec<f64>, times: Vec<f64>) -> Self {
        Self { pi, times }
    }

    /// Returns the stationary distribution π.
    pub fn pi(&self) -> &[f64] {
        &self.pi
    }

    /// Returns the expected recurrence time `E[T_ii]` for each state.
    ///
    /// A state with zero stationary probability has `f64::INFINITY` here;
    /// the chain started there is not expected to return.
    pub fn times(&self) -> &[f64] {
        &self.times
    }
}

/// Computes the stationary distribution π with `π = πP` and `Σπ_i = 1`.
///
/// The balance equations `Σᵢ π_i (P[i][j] − δ_ij) = 0` for the first `n−1`
/// states are combined with the normalization equation `Σπ_i = 1` (the
/// dropped balance equation is linearly dependent on the rest for an
/// irreducible chain), and the resulting system is solved by Gaussian
/// elimination.
///
/// # Errors
///
/// Returns a wrapped [`ergo_linalg::LinalgError::SingularMatrix`] when the
/// system has no unique solution — typically a reducible chain with more
/// than one stationary distribution.
#[tracing::instrument(skip(p), fields(n_states = p.n_states()))]
pub fn stationary_distribution(p: &TransitionMatrix) -> Result<Vec<f64>, ChainError> {
    stationary_distribution_traced(p, &mut NullSink)
}

/// As [`stationary_distribution`], reporting the solve steps to `sink`.
pub fn stationary_distribution_traced(
    p: &TransitionMatrix,
    sink: &mut impl TraceSink,
) -> Result<Vec<f64>, ChainError> {
    let n = p.n_states();
    if n == 0 {
        return Err(ChainError::Empty);
    }
    let (a, b) = balance_system(p);
    debug!(n, "solving balance system for stationary distribution");
    let pi = solve_traced(&a, &b, sink)?;
    debug_assert_eq!(pi.len(), n);
    Ok(pi)
}

/// Builds the `n x n` balance system `(A, b)` whose solution is π.
fn balance_system(p: &TransitionMatrix) -> (Matrix, Vec<f64>) {
    let n = p.n_states();
    let mut a = Matrix::zeros(n, n);
    let mut b = vec![0.0; n];

    // Balance equations for states 0..n-1 (the last one is redundant).
    for j in 0..n.saturating_sub(1) {
        for i in 0..n {
            let delta = if i == j { 1.0 } else { 0.0 };
            a[(j, i)] = p.prob(i, j) - delta;
        }
    }
    // Normalization replaces the dropped equation.
    for i in 0..n {
        a[(n - 1, i)] = 1.0;
    }
    b[n - 1] = 1.0;

    (a, b)
}

/// Computes π and the expected recurrence times `E[T_ii] = 1/π_i`.
///
/// States with `π_i = 0` get `f64::INFINITY` instead of failing: a state
/// the chain does not revisit under stationarity has a well-defined,
/// infinite expected return time.
///
/// # Errors
///
/// As for [`stationary_distribution`].
#[tracing::instrument(skip(p), fields(n_states = p.n_states()))]
pub fn recurrence_times(p: &TransitionMatrix) -> Result<Recurrence, ChainError> {
    recurrence_times_traced(p, &mut NullSink)
}

/// As [`recurrence_times`], reporting the solve steps to `sink`.
pub fn recurrence_times_traced(
    p: &TransitionMatrix,
    sink: &mut impl TraceSink,
) -> Result<Recurrence, ChainError> {
    let pi = stationary_distribution_traced(p, sink)?;
    let times = pi
        .iter()
        .map(|&pi_i| if pi_i > 0.0 { 1.0 / pi_i } else { f64::INFINITY })
        .collect();
    Ok(Recurrence::new(pi, times))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ergo_linalg::row_vector_multiply;

    fn chain(rows: Vec<Vec<f64>>) -> TransitionMatrix {
        TransitionMatrix::from_rows(rows).unwrap()
    }

    // 1. two_state_chain_known_pi
    #[test]
    fn two_state_chain_known_pi() {
        // 0.5*pi0 = 0.2*pi1 and pi0 + pi1 = 1 => pi = [2/7, 5/7].
        let p = chain(vec![vec![0.5, 0.5], vec![0.2, 0.8]]);
        let pi = stationary_distribution(&p).unwrap();
        assert_abs_diff_eq!(pi[0], 2.0 / 7.0, epsilon = 1e-10);
        assert_abs_diff_eq!(pi[1], 5.0 / 7.0, epsilon = 1e-10);
    }

    // 2. pi_is_fixed_point
    #[test]
    fn pi_is_fixed_point() {
        let p = chain(vec![
            vec![0.5, 0.3, 0.2],
            vec![0.1, 0.7, 0.2],
            vec![0.2, 0.3, 0.5],
        ]);
        let pi = stationary_distribution(&p).unwrap();

        let sum: f64 = pi.iter().sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-6);

        let next = row_vector_multiply(&pi, p.as_matrix()).unwrap();
        for (a, b) in pi.iter().zip(next.iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-6);
        }
    }

    // 3. cycle_has_uniform_pi
    #[test]
    fn cycle_has_uniform_pi() {
        let p = chain(vec![
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![1.0, 0.0, 0.0],
        ]);
        let pi = stationary_distribution(&p).unwrap();
        for &pi_i in &pi {
            assert_abs_diff_eq!(pi_i, 1.0 / 3.0, epsilon = 1e-10);
        }
    }

    // 4. single_state_chain
    #[test]
    fn single_state_chain() {
        let p = chain(vec![vec![1.0]]);
        let pi = stationary_distribution(&p).unwrap();
        assert_eq!(pi.len(), 1);
        assert_abs_diff_eq!(pi[0], 1.0, epsilon = 0.0);
    }

    // 5. reducible_chain_fails_as_singular
    #[test]
    fn reducible_chain_fails_as_singular() {
        // Two absorbing states: every convex combination of [1,0] and [0,1]
        // is stationary, so the system has no unique solution.
        let p = chain(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        let result = stationary_distribution(&p);
        assert!(matches!(
            result,
            Err(ChainError::Linalg(
                ergo_linalg::LinalgError::SingularMatrix { .. }
            ))
        ));
    }

    // 6. recurrence_times_two_state
    #[test]
    fn recurrence_times_two_state() {
        let p = chain(vec![vec![0.5, 0.5], vec![0.2, 0.8]]);
        let rec = recurrence_times(&p).unwrap();
        assert_abs_diff_eq!(rec.times()[0], 3.5, epsilon = 1e-9);
        assert_abs_diff_eq!(rec.times()[1], 1.4, epsilon = 1e-9);
    }

    // 7. recurrence_times_cycle
    #[test]
    fn recurrence_times_cycle() {
        let p = chain(vec![
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![1.0, 0.0, 0.0],
        ]);
        let rec = recurrence_times(&p).unwrap();
        for &t in rec.times() {
            assert_abs_diff_eq!(t, 3.0, epsilon = 1e-9);
        }
    }

    // 8. recurrence_keeps_pi
    #[test]
    fn recurrence_keeps_pi() {
        let p = chain(vec![vec![0.5, 0.5], vec![0.2, 0.8]]);
        let rec = recurrence_times(&p).unwrap();
        let pi = stationary_distribution(&p).unwrap();
        assert_eq!(rec.pi(), pi.as_slice());
    }

    // 9. zero_pi_component_gives_infinite_time
    #[test]
    fn zero_pi_component_gives_infinite_time() {
        // State 0 leaks into the absorbing state 1 and is never revisited
        // under stationarity: pi = [0, 1].
        let p = chain(vec![vec![0.5, 0.5], vec![0.0, 1.0]]);
        let rec = recurrence_times(&p).unwrap();
        assert_abs_diff_eq!(rec.pi()[1], 1.0, epsilon = 1e-10);
        assert!(rec.times()[0].is_infinite());
        assert_abs_diff_eq!(rec.times()[1], 1.0, epsilon = 1e-10);
    }
}
