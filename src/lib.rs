//! # spmm: sparse matrix multiplication over compressed storage
//!
//! Multiplies a matrix in Compressed Sparse Row (CSR) format by a matrix
//! in Compressed Sparse Column (CSC) format, producing a CSR matrix. The
//! format pairing is deliberate: CSR is fast at directly traversing rows
//! and CSC is fast at directly traversing columns, which are exactly the
//! two walks a row-by-column product performs.
//!
//! ## Overview
//!
//! The crate provides:
//!
//! - [`CsrMatrix`] and [`CscMatrix`], the two compressed formats, with
//!   validated constructors, triplet builders, dense conversions, and
//!   `sprs` interop
//! - [`sparse_multiply`], the multiply engine: a merge-style co-traversal
//!   of row and column slices that skips sparsity gaps and stores no
//!   explicit zeros in its output
//! - [`dense_multiply`], a triple-loop baseline over `ndarray` arrays
//!   used to verify the engine on small cases
//! - [`random`] generators for test and benchmark data
//!
//! ## Usage
//!
//! ```
//! use spmm::{sparse_multiply, CscMatrix, CsrMatrix};
//!
//! // [2 0 0]   [0 4]   [0 8]
//! // [0 0 3] × [0 0] = [15 0]
//! //           [5 0]
//! let x = CsrMatrix::from_triplets(2, 3, &[(0, 0, 2), (1, 2, 3)]);
//! let y = CscMatrix::from_triplets(3, 2, &[(0, 1, 4), (2, 0, 5)]);
//!
//! let z = sparse_multiply(&x, &y).unwrap();
//!
//! assert_eq!(z.row_ptr, vec![0, 1, 2]);
//! assert_eq!(z.col_indices, vec![1, 0]);
//! assert_eq!(z.values, vec![8, 15]);
//! ```

pub mod dense;
pub mod error;
pub mod matrix;
pub mod multiply;
pub mod random;

// Re-export primary components
pub use dense::dense_multiply;
pub use error::{Result, SpmmError};
pub use matrix::{CscMatrix, CsrMatrix};
pub use multiply::sparse_multiply;

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_through_public_surface() {
        let x = CsrMatrix::<i64>::identity(3);
        let y = CscMatrix::from_triplets(3, 3, &[(0, 1, 5), (2, 0, 7)]);

        let z = sparse_multiply(&x, &y).unwrap();

        assert_eq!(z.to_dense(), y.to_dense());
    }
}
