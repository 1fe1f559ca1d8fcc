//! The sparse matrix multiply engine
//!
//! Multiplies a CSR matrix by a CSC matrix, producing a CSR matrix. The
//! format pairing is what makes the algorithm work: CSR walks rows
//! directly and CSC walks columns directly, which are exactly the two
//! traversals a row-by-column product needs.

use num_traits::Num;

use crate::error::{Result, SpmmError};
use crate::matrix::{CscMatrix, CsrMatrix};

/// Multiplies a CSR matrix by a CSC matrix
///
/// Computes `z[i][j] = Σ_k x[i][k] · y[k][j]` cell by cell. Each dot
/// product walks X's row slice against Y's column slice in lock-step: a
/// single cursor into the column slice skips forward past row indices
/// below the current X column index, accumulates on a match, and ends the
/// dot product early once the column slice is exhausted. Cells whose dot
/// product comes out zero are not stored, so the result holds true
/// non-zeros only.
///
/// The operation reads its operands without mutating them; the returned
/// matrix is freshly allocated and owned by the caller.
///
/// # Arguments
///
/// * `x` - Left operand in CSR format
/// * `y` - Right operand in CSC format; `y.n_rows` must equal `x.n_cols`
///
/// # Errors
///
/// Returns [`SpmmError::DimensionMismatch`] when the inner dimensions
/// disagree. Nothing is computed or allocated in that case.
///
/// # Examples
///
/// ```
/// use spmm::{sparse_multiply, CscMatrix, CsrMatrix};
///
/// let x = CsrMatrix::<i64>::identity(3);
/// let y = CscMatrix::from_triplets(3, 2, &[(0, 0, 5), (2, 1, 7)]);
///
/// let z = sparse_multiply(&x, &y).unwrap();
/// assert_eq!(z.n_rows, 3);
/// assert_eq!(z.n_cols, 2);
/// assert_eq!(z.nnz(), 2);
/// ```
pub fn sparse_multiply<T>(x: &CsrMatrix<T>, y: &CscMatrix<T>) -> Result<CsrMatrix<T>>
where
    T: Copy + Num,
{
    if x.n_cols != y.n_rows {
        return Err(SpmmError::DimensionMismatch {
            left: (x.n_rows, x.n_cols),
            right: (y.n_rows, y.n_cols),
        });
    }

    let z_rows = x.n_rows;
    let z_cols = y.n_cols;

    // The product's nnz is unknown until computed, so the output buffers
    // grow as cells are emitted; row_ptr records the cumulative count
    // after each row.
    let mut row_ptr = Vec::with_capacity(z_rows + 1);
    let mut col_indices = Vec::new();
    let mut values = Vec::new();

    row_ptr.push(0);

    for i in 0..z_rows {
        let row_start = x.row_ptr[i];
        let row_end = x.row_ptr[i + 1];

        for j in 0..z_cols {
            let col_end = y.col_ptr[j + 1];

            // Cursor into column j of Y, shared across every X entry of
            // this dot product. X's column indices rise through the row
            // slice and Y's row indices rise through the column slice, so
            // the cursor only ever moves forward; it is never reset
            // between X entries.
            let mut y_pos = y.col_ptr[j];

            let mut dot = T::zero();

            for x_pos in row_start..row_end {
                let x_col = x.col_indices[x_pos];

                // Skip Y entries whose row index is below the current X
                // column index, checking the slice bound first
                while y_pos < col_end && y.row_indices[y_pos] < x_col {
                    y_pos += 1;
                }

                // The column has no entries left; later X entries sit at
                // still-higher column indices, so no match remains
                if y_pos == col_end {
                    break;
                }

                if y.row_indices[y_pos] == x_col {
                    dot = dot + x.values[x_pos] * y.values[y_pos];
                }
            }

            if !dot.is_zero() {
                col_indices.push(j);
                values.push(dot);
            }
        }

        row_ptr.push(values.len());
    }

    Ok(CsrMatrix::new(z_rows, z_cols, row_ptr, col_indices, values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_product() {
        // X = [1 2; 0 3], Y = [4 5; 6 7], so X*Y = [16 19; 18 21]
        let x = CsrMatrix::new(2, 2, vec![0, 2, 3], vec![0, 1, 1], vec![1, 2, 3]);
        let y = CscMatrix::new(2, 2, vec![0, 2, 4], vec![0, 1, 0, 1], vec![4, 6, 5, 7]);

        let z = sparse_multiply(&x, &y).unwrap();

        assert_eq!(z.n_rows, 2);
        assert_eq!(z.n_cols, 2);
        assert_eq!(z.nnz(), 4);

        assert_eq!(z.row_ptr, vec![0, 2, 4]);
        assert_eq!(z.col_indices, vec![0, 1, 0, 1]);
        assert_eq!(z.values, vec![16, 19, 18, 21]);
    }

    #[test]
    fn test_identity_product() {
        let identity = CsrMatrix::<i64>::identity(3);
        let y = CscMatrix::from_triplets(3, 3, &[(0, 1, 5), (1, 0, 2), (2, 2, 7)]);

        let z = sparse_multiply(&identity, &y).unwrap();

        assert_eq!(z.to_dense(), y.to_dense());
    }

    #[test]
    fn test_dimension_mismatch() {
        let x = CsrMatrix::<i64>::zeros(2, 3);
        let y = CscMatrix::<i64>::zeros(4, 2);

        let err = sparse_multiply(&x, &y).unwrap_err();

        assert_eq!(
            err,
            SpmmError::DimensionMismatch {
                left: (2, 3),
                right: (4, 2),
            }
        );
    }

    #[test]
    fn test_empty_rows_and_columns_emit_nothing() {
        // X row 1 and Y column 0 are empty
        let x = CsrMatrix::from_triplets(3, 2, &[(0, 0, 2), (2, 1, 3)]);
        let y = CscMatrix::from_triplets(2, 2, &[(0, 1, 4)]);

        let z = sparse_multiply(&x, &y).unwrap();

        assert_eq!(z.row_ptr, vec![0, 1, 1, 1]);
        assert_eq!(z.col_indices, vec![1]);
        assert_eq!(z.values, vec![8]);
    }

    #[test]
    fn test_column_exhausted_before_row() {
        // X row 0 holds entries at columns 0 and 2; Y column 0 ends after
        // row 0, so the dot product must stop at the slice boundary
        let x = CsrMatrix::new(1, 3, vec![0, 2], vec![0, 2], vec![5, 9]);
        let y = CscMatrix::new(3, 1, vec![0, 1], vec![0], vec![4]);

        let z = sparse_multiply(&x, &y).unwrap();

        assert_eq!(z.row_ptr, vec![0, 1]);
        assert_eq!(z.col_indices, vec![0]);
        assert_eq!(z.values, vec![20]);
    }

    #[test]
    fn test_cancelled_dot_product_is_not_stored() {
        // Row [1 -1] against column [5 5] sums to zero and must not land
        // in the output
        let x = CsrMatrix::new(1, 2, vec![0, 2], vec![0, 1], vec![1, -1]);
        let y = CscMatrix::new(2, 1, vec![0, 2], vec![0, 1], vec![5, 5]);

        let z = sparse_multiply(&x, &y).unwrap();

        assert_eq!(z.nnz(), 0);
        assert_eq!(z.row_ptr, vec![0, 0]);
    }

    #[test]
    fn test_disjoint_sparsity_gives_empty_product() {
        // X's only entries sit at inner indices Y's columns never occupy
        let x = CsrMatrix::from_triplets(2, 3, &[(0, 0, 5), (1, 2, 7)]);
        let y = CscMatrix::from_triplets(3, 2, &[(1, 0, 4), (1, 1, 9)]);

        let z = sparse_multiply(&x, &y).unwrap();

        assert_eq!(z.n_rows, 2);
        assert_eq!(z.n_cols, 2);
        assert_eq!(z.nnz(), 0);
        assert_eq!(z.row_ptr, vec![0, 0, 0]);
    }

    #[test]
    fn test_zero_dimension_operands() {
        let x = CsrMatrix::<i64>::zeros(0, 4);
        let y = CscMatrix::<i64>::zeros(4, 3);

        let z = sparse_multiply(&x, &y).unwrap();

        assert_eq!(z.n_rows, 0);
        assert_eq!(z.n_cols, 3);
        assert_eq!(z.row_ptr, vec![0]);
    }
}
