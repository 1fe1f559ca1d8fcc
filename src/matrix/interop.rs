//! Conversions to and from `sprs` matrices
//!
//! The integration tests lean on these to cross-validate the multiply
//! engine against an independent sparse implementation.

use num_traits::Num;
use sprs::CsMat;

use crate::matrix::{CscMatrix, CsrMatrix};

impl<T> CsrMatrix<T>
where
    T: Copy + Num + Default,
{
    /// Converts this matrix to a `sprs` matrix in CSR storage
    pub fn to_sprs(&self) -> CsMat<T> {
        CsMat::new(
            (self.n_rows, self.n_cols),
            self.row_ptr.clone(),
            self.col_indices.clone(),
            self.values.clone(),
        )
    }

    /// Converts a `sprs` matrix into this format
    ///
    /// The input is re-stored as CSR first if it arrives in CSC storage.
    pub fn from_sprs(matrix: CsMat<T>) -> Self {
        let matrix = if matrix.is_csr() {
            matrix
        } else {
            matrix.to_csr()
        };

        let shape = matrix.shape();
        let (indptr, indices, data) = matrix.into_raw_storage();

        Self::new(shape.0, shape.1, indptr, indices, data)
    }
}

impl<T> CscMatrix<T>
where
    T: Copy + Num + Default,
{
    /// Converts this matrix to a `sprs` matrix in CSC storage
    pub fn to_sprs(&self) -> CsMat<T> {
        CsMat::new_csc(
            (self.n_rows, self.n_cols),
            self.col_ptr.clone(),
            self.row_indices.clone(),
            self.values.clone(),
        )
    }

    /// Converts a `sprs` matrix into this format
    ///
    /// The input is re-stored as CSC first if it arrives in CSR storage.
    pub fn from_sprs(matrix: CsMat<T>) -> Self {
        let matrix = if matrix.is_csc() {
            matrix
        } else {
            matrix.to_csc()
        };

        let shape = matrix.shape();
        let (indptr, indices, data) = matrix.into_raw_storage();

        Self::new(shape.0, shape.1, indptr, indices, data)
    }
}
