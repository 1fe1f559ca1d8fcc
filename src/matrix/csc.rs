//! Compressed Sparse Column (CSC) matrix format

use std::fmt;

use num_traits::Num;

use crate::matrix::compressed::{self, MajorAxis};

/// A sparse matrix in Compressed Sparse Column (CSC) format
///
/// The column-major mirror of [`CsrMatrix`](crate::matrix::CsrMatrix):
/// - `col_ptr`: size `n_cols + 1`; column `j` occupies the half-open range
///   `[col_ptr[j], col_ptr[j + 1])` of the other two arrays, and
///   `col_ptr[n_cols]` equals nnz
/// - `row_indices`: size nnz; the row of each stored value, strictly
///   increasing within each column
/// - `values`: size nnz; the non-zero values
///
/// Columns are cheap to traverse directly, which makes CSC the natural
/// right operand of a multiplication.
#[derive(Clone, Debug)]
pub struct CscMatrix<T> {
    /// Number of rows in the matrix
    pub n_rows: usize,

    /// Number of columns in the matrix
    pub n_cols: usize,

    /// Column pointers (size: n_cols + 1)
    pub col_ptr: Vec<usize>,

    /// Row indices of the stored values (size: nnz)
    pub row_indices: Vec<usize>,

    /// Non-zero values (size: nnz)
    pub values: Vec<T>,
}

impl<T> CscMatrix<T>
where
    T: Copy + Num,
{
    /// Creates a new CSC matrix from its raw parts
    ///
    /// # Arguments
    ///
    /// * `n_rows` - Number of rows
    /// * `n_cols` - Number of columns
    /// * `col_ptr` - Column pointers
    /// * `row_indices` - Row indices
    /// * `values` - Non-zero values
    ///
    /// # Panics
    ///
    /// Panics if the arrays do not form a valid layout:
    /// - `col_ptr.len()` must be `n_cols + 1`
    /// - `row_indices.len()` must equal `values.len()`
    /// - `col_ptr` must start at 0, be non-decreasing, and end at
    ///   `values.len()`
    /// - every row index must be below `n_rows`, strictly increasing
    ///   within its column
    ///
    /// The values themselves are trusted; callers populating known
    /// non-zero entries should prefer [`CscMatrix::from_triplets`], which
    /// guarantees no explicit zeros are stored.
    pub fn new(
        n_rows: usize,
        n_cols: usize,
        col_ptr: Vec<usize>,
        row_indices: Vec<usize>,
        values: Vec<T>,
    ) -> Self {
        compressed::validate_layout(
            MajorAxis::Col,
            n_cols,
            n_rows,
            &col_ptr,
            &row_indices,
            values.len(),
        );

        Self {
            n_rows,
            n_cols,
            col_ptr,
            row_indices,
            values,
        }
    }

    /// Creates a CSC matrix from `(row, col, value)` triplets
    ///
    /// Triplets may arrive in any order; duplicate coordinates are summed
    /// and entries that sum to zero are dropped, so the matrix stores true
    /// non-zeros only.
    ///
    /// # Panics
    ///
    /// Panics if a coordinate lies outside `n_rows × n_cols`.
    pub fn from_triplets(n_rows: usize, n_cols: usize, triplets: &[(usize, usize, T)]) -> Self {
        let entries = triplets.iter().map(|&(row, col, v)| (col, row, v)).collect();
        let (col_ptr, row_indices, values) =
            compressed::compress_triplets(MajorAxis::Col, n_cols, n_rows, entries);

        Self::new(n_rows, n_cols, col_ptr, row_indices, values)
    }

    /// Creates an empty matrix with the given dimensions
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            col_ptr: vec![0; n_cols + 1],
            row_indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        Self {
            n_rows: n,
            n_cols: n,
            col_ptr: (0..=n).collect(),
            row_indices: (0..n).collect(),
            values: vec![T::one(); n],
        }
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Returns an iterator over the non-zero elements in column `j`
    ///
    /// Each item is a `(row, value)` pair, in increasing row order.
    pub fn col_iter(&self, j: usize) -> impl Iterator<Item = (usize, &T)> {
        assert!(j < self.n_cols, "Column index out of bounds");

        let start = self.col_ptr[j];
        let end = self.col_ptr[j + 1];

        self.row_indices[start..end]
            .iter()
            .zip(&self.values[start..end])
            .map(|(&row, val)| (row, val))
    }
}

impl<T: fmt::Display + Copy + Num> fmt::Display for CscMatrix<T> {
    /// Renders the full dense form: one row per line, space-separated,
    /// with explicit zeros for absent entries
    ///
    /// Scans the column slice once per cell, so this is quadratic-ish; it
    /// exists for dumping the small matrices the demos and tests use.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n_rows {
            for j in 0..self.n_cols {
                let mut value = T::zero();

                for pos in self.col_ptr[j]..self.col_ptr[j + 1] {
                    if self.row_indices[pos] > i {
                        break;
                    }
                    if self.row_indices[pos] == i {
                        value = self.values[pos];
                        break;
                    }
                }

                write!(f, "{} ", value)?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}
