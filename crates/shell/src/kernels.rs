//! Scan kernels selectable from the command line.

use ndarray::ArrayView2;
use within_dist::{query, Strategy, WithinDistError};

/// The available scan kernels.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    #[clap(name = "marker")]
    Marker,
    #[clap(name = "row-mask")]
    RowMask,
    #[clap(name = "column-any")]
    ColumnAny,
}

impl Kernel {
    /// Get the library `Strategy` for the kernel.
    pub const fn strategy(self) -> Strategy {
        match self {
            Self::Marker => Strategy::Marker,
            Self::RowMask => Strategy::RowMask,
            Self::ColumnAny => Strategy::ColumnAny,
        }
    }
}

/// Runs the chosen strategy on 1-based query rows and returns 1-based columns.
pub fn run(
    strategy: Strategy,
    distmat: ArrayView2<f64>,
    idx: &[f64],
    dist: f64,
) -> Result<Vec<i32>, WithinDistError> {
    if strategy == Strategy::Marker {
        return within_dist::which_within_dist(distmat, idx, dist);
    }

    let rows = query::to_rows(idx, distmat.dim())?;
    let ncols = distmat.ncols();
    query::check_columns(ncols)?;
    let cols = within_dist::which_within_rows_with(strategy, distmat, &rows, dist)?;
    query::to_one_based(&cols, ncols)
}
