// Matrix data structures and format conversions

mod compressed;

pub mod conversion;
pub mod csc;
pub mod csr;
pub mod interop;

pub use csc::CscMatrix;
pub use csr::CsrMatrix;
