//! Conversions between the compressed formats and dense arrays

use ndarray::Array2;
use num_traits::Num;

use crate::matrix::compressed;
use crate::matrix::{CscMatrix, CsrMatrix};

impl<T: Copy + Num> CsrMatrix<T> {
    /// Converts this CSR matrix to CSC format
    pub fn to_csc(&self) -> CscMatrix<T> {
        let (col_ptr, row_indices, values) = compressed::transpose_layout(
            self.n_rows,
            self.n_cols,
            &self.row_ptr,
            &self.col_indices,
            &self.values,
        );

        CscMatrix::new(self.n_rows, self.n_cols, col_ptr, row_indices, values)
    }

    /// Expands this matrix to a dense array, with explicit zeros
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::zeros((self.n_rows, self.n_cols));

        for i in 0..self.n_rows {
            for (j, &value) in self.row_iter(i) {
                dense[[i, j]] = value;
            }
        }

        dense
    }

    /// Compresses a dense array, dropping its zero entries
    pub fn from_dense(dense: &Array2<T>) -> Self {
        let (n_rows, n_cols) = dense.dim();

        let mut row_ptr = Vec::with_capacity(n_rows + 1);
        let mut col_indices = Vec::new();
        let mut values = Vec::new();

        row_ptr.push(0);

        for i in 0..n_rows {
            for j in 0..n_cols {
                let value = dense[[i, j]];

                if !value.is_zero() {
                    col_indices.push(j);
                    values.push(value);
                }
            }

            row_ptr.push(values.len());
        }

        Self::new(n_rows, n_cols, row_ptr, col_indices, values)
    }
}

impl<T: Copy + Num> CscMatrix<T> {
    /// Converts this CSC matrix to CSR format
    pub fn to_csr(&self) -> CsrMatrix<T> {
        let (row_ptr, col_indices, values) = compressed::transpose_layout(
            self.n_cols,
            self.n_rows,
            &self.col_ptr,
            &self.row_indices,
            &self.values,
        );

        CsrMatrix::new(self.n_rows, self.n_cols, row_ptr, col_indices, values)
    }

    /// Expands this matrix to a dense array, with explicit zeros
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::zeros((self.n_rows, self.n_cols));

        for j in 0..self.n_cols {
            for (i, &value) in self.col_iter(j) {
                dense[[i, j]] = value;
            }
        }

        dense
    }

    /// Compresses a dense array, dropping its zero entries
    pub fn from_dense(dense: &Array2<T>) -> Self {
        let (n_rows, n_cols) = dense.dim();

        let mut col_ptr = Vec::with_capacity(n_cols + 1);
        let mut row_indices = Vec::new();
        let mut values = Vec::new();

        col_ptr.push(0);

        for j in 0..n_cols {
            for i in 0..n_rows {
                let value = dense[[i, j]];

                if !value.is_zero() {
                    row_indices.push(i);
                    values.push(value);
                }
            }

            col_ptr.push(values.len());
        }

        Self::new(n_rows, n_cols, col_ptr, row_indices, values)
    }
}
