//! Linear system solving via Gaussian elimination with partial pivoting.

use tracing::debug;

use crate::error::LinalgError;
use crate::matrix::Matrix;
use crate::trace::{NullSink, TraceEvent, TraceSink};

/// Solves `A x = b` for a square, non-singular `A`.
///
/// See [`solve_traced`] for the algorithm; this variant discards the trace.
pub fn solve(a: &Matrix, b: &[f64]) -> Result<Vec<f64>, LinalgError> {
    solve_traced(a, b, &mut NullSink)
}

/// Solves `A x = b`, reporting every elimination step to `sink`.
///
/// Gaussian elimination with partial pivoting: for each column the remaining
/// row with the largest absolute entry is swapped into pivot position, rows
/// below are reduced by their elimination factor, and the resulting upper
/// triangular system is back-substituted. The inputs are copied up front;
/// neither `a` nor `b` is mutated.
///
/// Singularity is detected by an exact-zero pivot check only. A system that
/// is nearly singular (pivot small but nonzero) is solved as-is and may lose
/// precision silently; callers working with ill-conditioned systems should
/// check the residual themselves.
///
/// # Errors
///
/// * [`LinalgError::InvalidArgument`] if `a` is not square or is empty.
/// * [`LinalgError::DimensionMismatch`] if `b.len() != a.rows()`.
/// * [`LinalgError::SingularMatrix`] if some column has no nonzero pivot.
#[tracing::instrument(skip_all, fields(n = a.rows()))]
pub fn solve_traced(
    a: &Matrix,
    b: &[f64],
    sink: &mut impl TraceSink,
) -> Result<Vec<f64>, LinalgError> {
    if !a.is_square() {
        return Err(LinalgError::InvalidArgument {
            reason: format!(
                "coefficient matrix must be square, got {}x{}",
                a.rows(),
                a.cols()
            ),
        });
    }
    let n = a.rows();
    if n == 0 {
        return Err(LinalgError::InvalidArgument {
            reason: "system is empty".to_string(),
        });
    }
    if b.len() != n {
        return Err(LinalgError::DimensionMismatch {
            lhs_rows: n,
            lhs_cols: n,
            rhs_rows: b.len(),
            rhs_cols: 1,
        });
    }

    // Work on copies; callers keep their A and b untouched.
    let mut m = a.clone();
    let mut v = b.to_vec();

    // Forward elimination.
    for k in 0..n {
        let mut pivot_row = k;
        let mut pivot_mag = m[(k, k)].abs();
        for i in (k + 1)..n {
            if m[(i, k)].abs() > pivot_mag {
                pivot_mag = m[(i, k)].abs();
                pivot_row = i;
            }
        }
        if pivot_mag == 0.0 {
            return Err(LinalgError::SingularMatrix { column: k });
        }
        sink.record(TraceEvent::PivotSelected {
            column: k,
            row: pivot_row,
            value: m[(pivot_row, k)],
        });

        if pivot_row != k {
            m.swap_rows(k, pivot_row);
            v.swap(k, pivot_row);
            sink.record(TraceEvent::RowSwapped {
                column: k,
                pivot_row: k,
                selected_row: pivot_row,
            });
        }

        let pivot = m[(k, k)];
        for i in (k + 1)..n {
            let factor = m[(i, k)] / pivot;
            if factor != 0.0 {
                sink.record(TraceEvent::RowEliminated {
                    column: k,
                    row: i,
                    factor,
                });
            }
            for j in k..n {
                let pivot_entry = m[(k, j)];
                m[(i, j)] -= factor * pivot_entry;
            }
            v[i] -= factor * v[k];
        }
        sink.record(TraceEvent::ColumnCleared {
            column: k,
            matrix: m.clone(),
            rhs: v.clone(),
        });
    }

    debug!("forward elimination complete, back-substituting");

    // Back-substitution on the upper triangular system.
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut acc = 0.0;
        for j in (i + 1)..n {
            acc += m[(i, j)] * x[j];
        }
        x[i] = (v[i] - acc) / m[(i, i)];
        sink.record(TraceEvent::BackSubstituted {
            row: i,
            value: x[i],
        });
    }

    Ok(x)
}
