//! Dense matrix collaborator
//!
//! A plain triple-loop product over rectangular arrays. It shares no data
//! structures with the sparse engine; tests use it as the baseline the
//! engine's output must reproduce on small cases.

use std::fmt;

use ndarray::Array2;
use num_traits::Num;

use crate::error::{Result, SpmmError};

/// Multiplies two dense matrices with the textbook triple loop
///
/// # Arguments
///
/// * `x` - Left operand
/// * `y` - Right operand; its row count must equal `x`'s column count
///
/// # Errors
///
/// Returns [`SpmmError::DimensionMismatch`] when the inner dimensions
/// disagree. Nothing is computed or allocated in that case.
pub fn dense_multiply<T>(x: &Array2<T>, y: &Array2<T>) -> Result<Array2<T>>
where
    T: Copy + Num,
{
    let (x_rows, x_cols) = x.dim();
    let (y_rows, y_cols) = y.dim();

    if x_cols != y_rows {
        return Err(SpmmError::DimensionMismatch {
            left: (x_rows, x_cols),
            right: (y_rows, y_cols),
        });
    }

    let mut z = Array2::zeros((x_rows, y_cols));

    for i in 0..x_rows {
        for j in 0..y_cols {
            let mut dot = T::zero();

            for k in 0..x_cols {
                dot = dot + x[[i, k]] * y[[k, j]];
            }

            z[[i, j]] = dot;
        }
    }

    Ok(z)
}

/// Renders a dense array the way the compressed formats render
/// themselves: one row per line, space-separated, zeros explicit
pub fn render<T: fmt::Display>(matrix: &Array2<T>) -> String {
    let (n_rows, n_cols) = matrix.dim();
    let mut out = String::new();

    for i in 0..n_rows {
        for j in 0..n_cols {
            out.push_str(&format!("{} ", matrix[[i, j]]));
        }

        out.push('\n');
    }

    out
}
