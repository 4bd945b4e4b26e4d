//! Passive observation of solver steps.
//!
//! The solver reports each pivot decision, row operation, and
//! back-substitution as a [`TraceEvent`] to a [`TraceSink`]. Sinks are
//! write-only consumers: recording events never changes what the solver
//! returns.

use crate::matrix::Matrix;

/// A single step taken by the Gaussian-elimination solver.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// The row with the largest absolute value in `column` was chosen as
    /// the pivot.
    PivotSelected {
        /// Elimination column.
        column: usize,
        /// Row holding the pivot (before any swap).
        row: usize,
        /// The pivot entry's value.
        value: f64,
    },

    /// The selected pivot row was swapped into pivot position. Only emitted
    /// when the pivot was not already in place.
    RowSwapped {
        /// Elimination column.
        column: usize,
        /// The pivot position the row was swapped into.
        pivot_row: usize,
        /// The row that held the largest pivot candidate.
        selected_row: usize,
    },

    /// A row below the pivot was reduced by `factor` times the pivot row.
    /// Rows whose elimination factor is already zero are skipped.
    RowEliminated {
        /// Elimination column.
        column: usize,
        /// The row that was reduced.
        row: usize,
        /// The elimination factor `A[row][column] / A[column][column]`.
        factor: f64,
    },

    /// State of the augmented system `[A|b]` after `column` was cleared.
    ColumnCleared {
        /// The column that was just cleared.
        column: usize,
        /// The partially reduced coefficient matrix.
        matrix: Matrix,
        /// The partially reduced right-hand side.
        rhs: Vec<f64>,
    },

    /// A solution component was computed during back-substitution.
    BackSubstituted {
        /// The row (and solution index) that was resolved.
        row: usize,
        /// The computed value of `x[row]`.
        value: f64,
    },
}

/// Passive observer for solver steps.
pub trait TraceSink {
    /// Records one solver step.
    fn record(&mut self, event: TraceEvent);
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&mut self, _event: TraceEvent) {}
}

/// Collecting sink: events are appended in the order the solver took them.
impl TraceSink for Vec<TraceEvent> {
    fn record(&mut self, event: TraceEvent) {
        self.push(event);
    }
}
