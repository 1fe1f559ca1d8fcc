//! Random dense-multiply demonstration
//!
//! Fills a 4×5 and a 5×3 matrix with small random integers, multiplies
//! them with the triple-loop baseline, and dumps all three under labeled
//! banners. The RNG is seeded from entropy, so every run prints different
//! matrices.

use std::process;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use spmm::dense::{dense_multiply, render};
use spmm::random::random_dense;

fn main() {
    let mut rng = ChaCha8Rng::from_entropy();

    let x = random_dense(4, 5, 10, &mut rng);
    let y = random_dense(5, 3, 10, &mut rng);

    let z = match dense_multiply(&x, &y) {
        Ok(z) => z,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    println!("---X---");
    print!("{}", render(&x));
    println!("---Y---");
    print!("{}", render(&y));
    println!("---Z---");
    print!("{}", render(&z));
}
