//! Dense row-major matrices and vector products.

use std::ops::{Index, IndexMut};

use crate::error::LinalgError;

/// A dense matrix of `f64` values in row-major order.
///
/// Dimensions are fixed at construction. Entries are plain double-precision
/// floats with no sparsity assumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a `rows x cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Builds a matrix from nested row vectors.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidArgument`] if `rows` is empty, the first
    /// row is empty, or any row has a different length than the first.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, LinalgError> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(LinalgError::InvalidArgument {
                reason: "matrix must have at least one row and one column".to_string(),
            });
        }
        let cols = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(LinalgError::InvalidArgument {
                    reason: format!("row {i} has length {}, expected {cols}", row.len()),
                });
            }
        }
        let n_rows = rows.len();
        let data = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: n_rows,
            cols,
            data,
        })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if the matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()`.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.rows, "row index {i} out of range for {} rows", self.rows);
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Swaps rows `a` and `b` in place.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(a < self.rows && b < self.rows);
        if a == b {
            return;
        }
        let (a, b) = (a.min(b), a.max(b));
        let (head, tail) = self.data.split_at_mut(b * self.cols);
        head[a * self.cols..(a + 1) * self.cols].swap_with_slice(&mut tail[..self.cols]);
    }

    /// Multiplies `self` by `other` with the classic triple loop.
    ///
    /// The result has dimensions `self.rows() x other.cols()`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::DimensionMismatch`] if
    /// `self.cols() != other.rows()`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, LinalgError> {
        if self.cols != other.rows {
            return Err(LinalgError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: other.rows,
                rhs_cols: other.cols,
            });
        }
        let mut out = Matrix::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    acc += self[(i, k)] * other[(k, j)];
                }
                out[(i, j)] = acc;
            }
        }
        Ok(out)
    }

    /// Raises a square matrix to a non-negative integer power by repeated
    /// multiplication.
    ///
    /// The chain is the sequential `P, P², P³, …` one, so each intermediate
    /// power is exactly the matrix a by-hand computation would produce at
    /// that step. `n = 0` returns the identity. For large exponents see
    /// [`Matrix::power_fast`].
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidArgument`] if the matrix is not square.
    pub fn power(&self, n: u32) -> Result<Matrix, LinalgError> {
        self.require_square("power")?;
        if n == 0 {
            return Ok(Matrix::identity(self.rows));
        }
        let mut out = self.clone();
        for _ in 1..n {
            out = out.multiply(self)?;
        }
        Ok(out)
    }

    /// Raises a square matrix to a non-negative integer power by
    /// square-and-multiply.
    ///
    /// Produces the same result as [`Matrix::power`] in `O(log n)`
    /// multiplications instead of `O(n)`, at the cost of not materialising
    /// the intermediate powers.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::InvalidArgument`] if the matrix is not square.
    pub fn power_fast(&self, mut n: u32) -> Result<Matrix, LinalgError> {
        self.require_square("power_fast")?;
        let mut out = Matrix::identity(self.rows);
        let mut base = self.clone();
        while n > 0 {
            if n & 1 == 1 {
                out = out.multiply(&base)?;
            }
            n >>= 1;
            if n > 0 {
                base = base.multiply(&base)?;
            }
        }
        Ok(out)
    }

    fn require_square(&self, op: &str) -> Result<(), LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::InvalidArgument {
                reason: format!("{op} requires a square matrix, got {}x{}", self.rows, self.cols),
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        debug_assert!(i < self.rows && j < self.cols);
        &self.data[i * self.cols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        debug_assert!(i < self.rows && j < self.cols);
        &mut self.data[i * self.cols + j]
    }
}

/// Multiplies a row vector by a matrix: `out[j] = Σᵢ v[i] × m[i][j]`.
///
/// # Errors
///
/// Returns [`LinalgError::DimensionMismatch`] if `v.len() != m.rows()`.
pub fn row_vector_multiply(v: &[f64], m: &Matrix) -> Result<Vec<f64>, LinalgError> {
    if v.len() != m.rows() {
        return Err(LinalgError::DimensionMismatch {
            lhs_rows: 1,
            lhs_cols: v.len(),
            rhs_rows: m.rows(),
            rhs_cols: m.cols(),
        });
    }
    let mut out = vec![0.0; m.cols()];
    for (i, &vi) in v.iter().enumerate() {
        for (j, o) in out.iter_mut().enumerate() {
            *o += vi * m[(i, j)];
        }
    }
    Ok(out)
}
