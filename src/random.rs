//! Random matrix generation for tests, demos, and benchmarks
//!
//! All generators draw from a caller-supplied RNG; tests seed a
//! `ChaCha8Rng` so every run sees the same matrices.

use ndarray::Array2;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::matrix::{CscMatrix, CsrMatrix};

/// Fills a dense matrix with values uniform in `[0, max_value)`
///
/// # Panics
///
/// Panics if `max_value` is not positive.
pub fn random_dense<R: Rng>(
    n_rows: usize,
    n_cols: usize,
    max_value: i64,
    rng: &mut R,
) -> Array2<i64> {
    let dist = Uniform::from(0..max_value);

    Array2::from_shape_fn((n_rows, n_cols), |_| dist.sample(rng))
}

/// Generates a CSR matrix by flipping a biased coin per cell
///
/// Each cell is non-zero with probability `density`; stored values are
/// uniform in `[1, 10)`, so no explicit zeros can land in the matrix.
/// Column indices come out sorted because cells are visited in order.
///
/// # Panics
///
/// Panics if `density` lies outside `[0, 1]`.
pub fn random_csr<R: Rng>(
    n_rows: usize,
    n_cols: usize,
    density: f64,
    rng: &mut R,
) -> CsrMatrix<i64> {
    let val_dist = Uniform::from(1..10);

    let mut row_ptr = Vec::with_capacity(n_rows + 1);
    let mut col_indices = Vec::new();
    let mut values = Vec::new();

    row_ptr.push(0);

    for _ in 0..n_rows {
        for j in 0..n_cols {
            if rng.gen_bool(density) {
                col_indices.push(j);
                values.push(val_dist.sample(rng));
            }
        }

        row_ptr.push(values.len());
    }

    CsrMatrix::new(n_rows, n_cols, row_ptr, col_indices, values)
}

/// Generates a CSC matrix by flipping a biased coin per cell
///
/// The column-major mirror of [`random_csr`]: same per-cell fill, row
/// indices sorted within each column by construction.
///
/// # Panics
///
/// Panics if `density` lies outside `[0, 1]`.
pub fn random_csc<R: Rng>(
    n_rows: usize,
    n_cols: usize,
    density: f64,
    rng: &mut R,
) -> CscMatrix<i64> {
    let val_dist = Uniform::from(1..10);

    let mut col_ptr = Vec::with_capacity(n_cols + 1);
    let mut row_indices = Vec::new();
    let mut values = Vec::new();

    col_ptr.push(0);

    for _ in 0..n_cols {
        for i in 0..n_rows {
            if rng.gen_bool(density) {
                row_indices.push(i);
                values.push(val_dist.sample(rng));
            }
        }

        col_ptr.push(values.len());
    }

    CscMatrix::new(n_rows, n_cols, col_ptr, row_indices, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_dense_values_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let matrix = random_dense(6, 4, 10, &mut rng);

        assert_eq!(matrix.dim(), (6, 4));
        for &value in matrix.iter() {
            assert!((0..10).contains(&value));
        }
    }

    #[test]
    fn test_random_csr_stores_no_zeros() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let matrix = random_csr(10, 10, 0.5, &mut rng);

        assert!(matrix.nnz() > 0);
        assert!(matrix.nnz() <= 100);
        for &value in &matrix.values {
            assert!((1..10).contains(&value));
        }
    }

    #[test]
    fn test_density_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let empty = random_csr(5, 5, 0.0, &mut rng);
        assert_eq!(empty.nnz(), 0);
        assert_eq!(empty.row_ptr, vec![0; 6]);

        let full = random_csc(5, 5, 1.0, &mut rng);
        assert_eq!(full.nnz(), 25);
    }

    #[test]
    fn test_same_seed_reproduces_matrices() {
        let mut first = ChaCha8Rng::seed_from_u64(7);
        let mut second = ChaCha8Rng::seed_from_u64(7);

        let a = random_csr(8, 8, 0.3, &mut first);
        let b = random_csr(8, 8, 0.3, &mut second);

        assert_eq!(a.row_ptr, b.row_ptr);
        assert_eq!(a.col_indices, b.col_indices);
        assert_eq!(a.values, b.values);
    }
}
