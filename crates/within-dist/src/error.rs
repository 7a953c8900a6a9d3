//! Errors raised while filtering a distance matrix.

/// Error type for all fallible operations in the `within-dist` crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WithinDistError {
    /// A query row position falls outside the rows of the matrix.
    #[error("query index {index} is out of range for a matrix with {nrows} rows")]
    IndexOutOfRange {
        /// The offending query index, in the caller's convention.
        index: f64,
        /// Number of rows in the matrix.
        nrows: usize,
    },

    /// Rows were queried from a matrix that has no rows.
    #[error("cannot query rows of a {nrows}x{ncols} matrix")]
    InvalidDimensions {
        /// Number of rows in the matrix.
        nrows: usize,
        /// Number of columns in the matrix.
        ncols: usize,
    },

    /// A 1-based query index is NaN, infinite or has a fractional part.
    #[error("query index {index} is not an integer")]
    NonIntegralIndex {
        /// The offending query index.
        index: f64,
    },

    /// The matrix has more columns than a 1-based `i32` position can name.
    #[error("{ncols} columns cannot be indexed with 32-bit positions")]
    TooManyColumns {
        /// Number of columns in the matrix.
        ncols: usize,
    },
}
