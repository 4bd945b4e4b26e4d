//! Transition matrix input parsing.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use ergo_chain::TransitionMatrix;

/// Reads a transition matrix from a file, or from stdin when `path` is `-`.
pub fn read_transition_matrix(path: &Path) -> Result<TransitionMatrix> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading matrix from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("reading matrix file {}", path.display()))?
    };
    parse_transition_matrix(&text)
}

/// Parses a transition matrix from text.
///
/// One row per line, entries separated by whitespace. Blank lines and `#`
/// comments are ignored. The parsed matrix is validated as row-stochastic.
pub fn parse_transition_matrix(text: &str) -> Result<TransitionMatrix> {
    let mut rows = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>()
                    .with_context(|| format!("line {}: invalid number {tok:?}", idx + 1))
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    if rows.is_empty() {
        bail!("matrix input contains no rows");
    }
    TransitionMatrix::from_rows(rows).context("validating transition matrix")
}
