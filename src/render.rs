//! Fixed-precision rendering of matrices, vectors, and solver traces.
//!
//! Pure formatting over computed results and recorded [`TraceEvent`]s;
//! nothing here feeds back into the numerics.

use std::fmt::Write;

use ergo_linalg::{Matrix, TraceEvent};

/// Formats a matrix with a caption, four decimals per entry.
pub fn format_matrix(m: &Matrix, name: &str) -> String {
    let mut out = String::new();
    writeln!(out, "{name} ({} x {}):", m.rows(), m.cols()).unwrap();
    for i in 0..m.rows() {
        let entries: Vec<String> = m.row(i).iter().map(|v| format!("{v:.4}")).collect();
        writeln!(out, "  row {i}: [{}]", entries.join(", ")).unwrap();
    }
    out
}

/// Formats a vector with a caption, four decimals per entry.
pub fn format_vector(v: &[f64], name: &str) -> String {
    let entries: Vec<String> = v.iter().map(|x| format!("{x:.4}")).collect();
    format!("{name} (length {}):\n  [{}]\n", v.len(), entries.join(", "))
}

/// Renders a recorded elimination trace as a step-by-step derivation.
pub fn format_trace(events: &[TraceEvent]) -> String {
    let mut out = String::new();
    let mut back_substituting = false;
    for event in events {
        match event {
            TraceEvent::PivotSelected { column, row, value } => {
                // A fresh solve within the same trace restarts at column 0.
                if *column == 0 {
                    writeln!(out, "[gauss] forward elimination").unwrap();
                    back_substituting = false;
                }
                writeln!(
                    out,
                    "[gauss] column {column}: pivot in row {row} (value {value:.6})"
                )
                .unwrap();
            }
            TraceEvent::RowSwapped {
                pivot_row,
                selected_row,
                ..
            } => {
                writeln!(out, "  swap row {pivot_row} <-> row {selected_row}").unwrap();
            }
            TraceEvent::RowEliminated {
                column,
                row,
                factor,
            } => {
                writeln!(out, "  row {row} -= {factor:.6} x row {column}").unwrap();
            }
            TraceEvent::ColumnCleared {
                column,
                matrix,
                rhs,
            } => {
                writeln!(out, "  [A|b] after clearing column {column}:").unwrap();
                out.push_str(&format_augmented(matrix, rhs));
            }
            TraceEvent::BackSubstituted { row, value } => {
                if !back_substituting {
                    writeln!(out, "[gauss] back-substitution").unwrap();
                    back_substituting = true;
                }
                writeln!(out, "  x[{row}] = {value:.6}").unwrap();
            }
        }
    }
    out
}

/// Formats the augmented system `[A|b]`, six decimals per entry.
fn format_augmented(m: &Matrix, rhs: &[f64]) -> String {
    let mut out = String::new();
    for i in 0..m.rows() {
        let entries: Vec<String> = m.row(i).iter().map(|v| format!("{v: >10.6}")).collect();
        writeln!(out, "    [ {} | {: >10.6} ]", entries.join(" "), rhs[i]).unwrap();
    }
    out
}
