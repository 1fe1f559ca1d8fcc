//! Fixed-example demonstration of the sparse multiply engine
//!
//! Builds one 7×5 CSR matrix and one 5×6 CSC matrix, multiplies them, and
//! dumps all three in dense form under labeled banners. Exits non-zero
//! with a diagnostic on stderr if the multiplication fails.

use std::process;

use spmm::{sparse_multiply, CscMatrix, CsrMatrix};

fn main() {
    // X =          Y =
    // [2 0 0 4 0]  [3  0 0 4 0 0]
    // [0 0 0 0 0]  [0  2 3 0 2 0]
    // [0 0 3 0 0]  [0  0 0 0 6 0]
    // [1 0 0 0 0]  [0  0 5 0 0 0]
    // [0 0 0 0 0]  [11 0 0 0 0 5]
    // [0 6 0 0 0]
    // [0 0 0 0 2]
    let x = CsrMatrix::<i64>::new(
        7,
        5,
        vec![0, 2, 2, 3, 4, 4, 5, 6],
        vec![0, 3, 2, 0, 1, 4],
        vec![2, 4, 3, 1, 6, 2],
    );

    let y = CscMatrix::new(
        5,
        6,
        vec![0, 2, 3, 5, 6, 8, 9],
        vec![0, 4, 1, 1, 3, 0, 1, 2, 4],
        vec![3, 11, 2, 3, 5, 4, 2, 6, 5],
    );

    let z = match sparse_multiply(&x, &y) {
        Ok(z) => z,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    println!("---X---");
    print!("{}", x);
    println!("---Y---");
    print!("{}", y);
    println!("---Z---");
    print!("{}", z);
}
