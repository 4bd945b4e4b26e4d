//! Dense matrix primitives and a traced Gaussian-elimination solver.
//!
//! This crate provides the numerical kernel for finite Markov-chain
//! analysis: a row-major [`Matrix`] with the classic dense operations
//! (multiply, identity, integer powers, row-vector products) and a linear
//! system solver using Gaussian elimination with partial pivoting.
//!
//! The solver can report every pivot selection, row swap, elimination step,
//! and back-substitution to a [`TraceSink`], so a presentation layer can
//! replay the full worked derivation without the solver doing any printing
//! of its own.
//!
//! # Quick start
//!
//! ```rust
//! use ergo_linalg::{Matrix, solve};
//!
//! // 2x + y = 5
//! //  x + 3y = 10
//! let a = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 3.0]]).unwrap();
//! let x = solve(&a, &[5.0, 10.0]).unwrap();
//!
//! assert!((x[0] - 1.0).abs() < 1e-12);
//! assert!((x[1] - 3.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod matrix;
pub mod solve;
pub mod trace;

pub use error::LinalgError;
pub use matrix::{Matrix, row_vector_multiply};
pub use solve::{solve, solve_traced};
pub use trace::{NullSink, TraceEvent, TraceSink};
