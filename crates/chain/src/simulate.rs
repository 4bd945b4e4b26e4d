//! State path simulation.

use crate::error::ChainError;
use crate::transition::TransitionMatrix;

/// Samples the next state given the current state, using cumulative CDF.
///
/// Draws a uniform random number and walks through the row's cumulative
/// distribution, returning the first state whose cumulative probability
/// meets or exceeds the draw. Falls back to the last state if rounding
/// prevents a match.
///
/// # Panics
///
/// Panics if `from >= p.n_states()`.
pub fn sample_next(p: &TransitionMatrix, from: usize, rng: &mut impl rand::Rng) -> usize {
    let u: f64 = rng.random();
    let row = p.row(from);
    let mut cumulative = 0.0;
    for (state, &prob) in row.iter().enumerate() {
        cumulative += prob;
        if cumulative >= u {
            return state;
        }
    }
    row.len() - 1
}

/// Simulates a sequence of states starting from `initial`.
///
/// Returns the `steps` states visited after `initial` (which is not
/// included in the output).
///
/// # Errors
///
/// Returns [`ChainError::StateOutOfRange`] if `initial` is not a valid
/// state index.
pub fn simulate_path(
    p: &TransitionMatrix,
    initial: usize,
    steps: usize,
    rng: &mut impl rand::Rng,
) -> Result<Vec<usize>, ChainError> {
    if initial >= p.n_states() {
        return Err(ChainError::StateOutOfRange {
            state: initial,
            n_states: p.n_states(),
        });
    }
    let mut out = Vec::with_capacity(steps);
    let mut current = initial;
    for _ in 0..steps {
        current = sample_next(p, current, rng);
        out.push(current);
    }
    Ok(out)
}
