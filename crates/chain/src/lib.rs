//! Analysis of finite discrete-time Markov chains.
//!
//! Given a validated row-stochastic [`TransitionMatrix`], this crate
//! computes the classical long-run quantities by reducing each one to a
//! linear system and delegating to the `ergo-linalg` Gaussian-elimination
//! solver:
//!
//! ```text
//!  ┌──────────────────┐     ┌─────────────────────┐     ┌───────────────┐
//!  │ TransitionMatrix  │────▶│  balance / passage  │────▶│  solve (Gauss) │
//!  │ (validated P)     │     │  system assembly    │     │  ergo-linalg   │
//!  └──────────────────┘     └─────────────────────┘     └───────────────┘
//! ```
//!
//! * [`stationary_distribution`] — the probability vector π with `π = πP`.
//! * [`recurrence_times`] — expected return times `E[T_ii] = 1/π_i`.
//! * [`first_passage_matrix`] — expected steps `E[T_ij]` to first reach `j`
//!   from `i`, one linear system per destination.
//! * [`simulate_path`] — sampled state sequences for empirical cross-checks.
//!
//! Every analysis has a `_traced` variant that reports the solver's pivot
//! and elimination steps to an [`ergo_linalg::TraceSink`].
//!
//! # Quick start
//!
//! ```rust
//! use ergo_chain::{TransitionMatrix, recurrence_times};
//!
//! let p = TransitionMatrix::from_rows(vec![
//!     vec![0.5, 0.5],
//!     vec![0.2, 0.8],
//! ]).unwrap();
//!
//! let rec = recurrence_times(&p).unwrap();
//! assert!((rec.pi()[0] - 2.0 / 7.0).abs() < 1e-9);
//! assert!((rec.times()[0] - 3.5).abs() < 1e-9);
//! ```

pub mod error;
pub mod passage;
pub mod simulate;
pub mod stationary;
pub mod transition;

pub use error::ChainError;
pub use passage::{first_passage_matrix, first_passage_matrix_traced};
pub use simulate::{sample_next, simulate_path};
pub use stationary::{
    Recurrence, recurrence_times, recurrence_times_traced, stationary_distribution,
    stationary_distribution_traced,
};
pub use transition::TransitionMatrix;
