//! Compressed Sparse Row (CSR) matrix format

use std::fmt;

use num_traits::Num;

use crate::matrix::compressed::{self, MajorAxis};

/// A sparse matrix in Compressed Sparse Row (CSR) format
///
/// Stores only the non-zero entries of an `n_rows × n_cols` matrix, in
/// row-major order, using three arrays:
/// - `row_ptr`: size `n_rows + 1`; row `i` occupies the half-open range
///   `[row_ptr[i], row_ptr[i + 1])` of the other two arrays, and
///   `row_ptr[n_rows]` equals nnz
/// - `col_indices`: size nnz; the column of each stored value, strictly
///   increasing within each row
/// - `values`: size nnz; the non-zero values
///
/// Rows are cheap to traverse directly, which makes CSR the natural left
/// operand of a multiplication.
#[derive(Clone, Debug)]
pub struct CsrMatrix<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Row pointers (size: n_rows + 1)
    pub row_ptr: Vec<usize>,

    /// Column indices of the stored values (size: nnz)
    pub col_indices: Vec<usize>,

    /// Non-zero values (size: nnz)
    pub values: Vec<T>,
}

impl<T> CsrMatrix<T>
where
    T: Copy + Num,
{
    /// Creates a new CSR matrix from its raw parts
    ///
    /// # Arguments
    ///
    /// * `n_rows` - Number of rows
    /// * `n_cols` - Number of columns
    /// * `row_ptr` - Row pointers
    /// * `col_indices` - Column indices
    /// * `values` - Non-zero values
    ///
    /// # Panics
    ///
    /// Panics if the arrays do not form a valid layout:
    /// - `row_ptr.len()` must be `n_rows + 1`
    /// - `col_indices.len()` must equal `values.len()`
    /// - `row_ptr` must start at 0, be non-decreasing, and end at
    ///   `values.len()`
    /// - every column index must be below `n_cols`, strictly increasing
    ///   within its row
    ///
    /// The values themselves are trusted; callers populating known
    /// non-zero entries should prefer [`CsrMatrix::from_triplets`], which
    /// guarantees no explicit zeros are stored.
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        row_ptr: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        compressed::validate_layout(
            MajorAxis::Row,
            n_rows,
            n_cols,
            &row_ptr,
            &col_indices,
            values.len(),
        );

        Self {
            n_rows,
            n_cols,
            row_ptr,
            col_indices,
            values,
        }
    }

    /// Creates a CSR matrix from `(row, col, value)` triplets
    ///
    /// Triplets may arrive in any order; duplicate coordinates are summed
    /// and entries that sum to zero are dropped, so the matrix stores true
    /// non-zeros only.
    ///
    /// # Panics
    ///
    /// Panics if a coordinate lies outside `n_rows × n_cols`.
    pub fn from_triplets(n_rows: usize, n_cols: usize, triplets: &[(usize, usize, T)]) -> Self {
        let (row_ptr, col_indices, values) =
            compressed::compress_triplets(MajorAxis::Row, n_rows, n_cols, triplets.to_vec());

        Self::new(n_rows, n_cols, row_ptr, col_indices, values)
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            row_ptr: vec![0; n_rows + 1],
            col_indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        Self {
            n_rows: n,
            n_cols: n,
            row_ptr: (0..=n).collect(),
            col_indices: (0..n).collect(),
            values: vec![T::one(); n],
        }
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over the non-zero elements in row `i`
    ///
    /// Each item is a `(col, value)` pair, in increasing column order.
    pub fn row_iter(&self, i: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(i < self.n_rows, "Row index out of bounds");

        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];

        self.col_indices[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&col, val)| (col, val))
    }
}

impl<T: fmt::Display + Copy + Num> fmt::Display for CsrMatrix<T> {
    /// Renders the full dense form: one row per line, space-separated,
    /// with explicit zeros for absent entries
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n_rows {
            let mut cursor = self.row_ptr[i];
            let end = self.row_ptr[i + 1];

            for j in 0..self.n_cols {
                if cursor < end && self.col_indices[cursor] == j {
                    write!(f, "{} ", self.values[cursor])?;
                    cursor += 1;
                } else {
                    write!(f, "{} ", T::zero())?;
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
