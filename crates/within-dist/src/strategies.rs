//! Scan kernels over already-validated 0-based rows.
//!
//! Every kernel returns the 0-based positions of the columns within `dist` of
//! at least one query row, ascending and without duplicates. They differ only
//! in how they traverse the matrix, so they can be benchmarked against one
//! another without changing what a caller sees.
//!
//! # Panics
//!
//! The kernels index the matrix directly. Passing a row that is not below
//! `distmat.nrows()` panics; the checked entry points in [`crate::filter`]
//! validate rows before reaching here.

use distances::Number;
use ndarray::{s, Array1, ArrayView2};
use rayon::prelude::*;

/// Smallest block of columns handed to a single rayon task.
pub const MIN_PAR_BLOCK: usize = 1024;

/// The available scan kernels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// One boolean marker per column, set while walking each query row.
    #[default]
    Marker,
    /// Compares whole query rows against the threshold and ORs the masks.
    RowMask,
    /// Walks columns, stopping at the first query row that qualifies.
    ColumnAny,
}

impl Strategy {
    /// All strategies, in declaration order.
    #[must_use]
    pub const fn variants() -> &'static [Self] {
        &[Self::Marker, Self::RowMask, Self::ColumnAny]
    }

    /// A short name for logs and benchmark ids.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Marker => "marker",
            Self::RowMask => "row-mask",
            Self::ColumnAny => "column-any",
        }
    }

    /// Runs the kernel this strategy names.
    #[must_use]
    pub fn scan<T: Number>(&self, distmat: ArrayView2<T>, rows: &[usize], dist: T) -> Vec<usize> {
        match self {
            Self::Marker => marker_scan(distmat, rows, dist),
            Self::RowMask => row_mask_scan(distmat, rows, dist),
            Self::ColumnAny => column_any_scan(distmat, rows, dist),
        }
    }
}

/// Marks qualifying columns row by row, then collects the marks.
///
/// # Arguments
///
/// * `distmat`: the distance matrix, in any memory layout.
/// * `rows`: 0-based query rows. Repeats are harmless.
/// * `dist`: inclusive threshold.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use within_dist::strategies::marker_scan;
///
/// let distmat = array![[0.0, 5.0, 10.0], [5.0, 0.0, 3.0]];
/// assert_eq!(marker_scan(distmat.view(), &[0, 1], 5.0), vec![0, 1, 2]);
/// ```
#[must_use]
pub fn marker_scan<T: Number>(distmat: ArrayView2<T>, rows: &[usize], dist: T) -> Vec<usize> {
    let mut marker = vec![false; distmat.ncols()];
    for &i in rows {
        for (m, &d) in marker.iter_mut().zip(distmat.row(i)) {
            if d <= dist {
                *m = true;
            }
        }
    }
    marked(&marker)
}

/// Builds a boolean mask for each query row and ORs it into the marker.
#[must_use]
pub fn row_mask_scan<T: Number>(distmat: ArrayView2<T>, rows: &[usize], dist: T) -> Vec<usize> {
    let mut marker = Array1::from_elem(distmat.ncols(), false);
    for &i in rows {
        let mask = distmat.row(i).mapv(|d| d <= dist);
        marker.zip_mut_with(&mask, |m, &q| *m |= q);
    }
    marker
        .iter()
        .enumerate()
        .filter_map(|(j, &m)| m.then_some(j))
        .collect()
}

/// Emits each column once, as soon as any query row is within `dist` of it.
#[must_use]
pub fn column_any_scan<T: Number>(distmat: ArrayView2<T>, rows: &[usize], dist: T) -> Vec<usize> {
    (0..distmat.ncols())
        .filter(|&j| rows.iter().any(|&i| distmat[[i, j]] <= dist))
        .collect()
}

/// Parallel version of [`marker_scan`].
///
/// The columns are split into contiguous blocks. Each block is scanned with its
/// own marker against the shared matrix and the per-block results are
/// concatenated in block order, so the output is identical to the sequential
/// scan.
#[must_use]
pub fn par_marker_scan<T: Number>(distmat: ArrayView2<T>, rows: &[usize], dist: T) -> Vec<usize> {
    let ncols = distmat.ncols();
    if ncols == 0 || rows.is_empty() {
        return Vec::new();
    }

    let block = ncols.div_ceil(rayon::current_num_threads()).max(MIN_PAR_BLOCK);
    let starts = (0..ncols).step_by(block).collect::<Vec<_>>();

    starts
        .into_par_iter()
        .map(|start| {
            let end = (start + block).min(ncols);
            let view = distmat.slice(s![.., start..end]);
            marker_scan(view, rows, dist)
                .into_iter()
                .map(|j| j + start)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>()
        .concat()
}

/// Positions of the `true` entries.
fn marked(marker: &[bool]) -> Vec<usize> {
    marker
        .iter()
        .enumerate()
        .filter_map(|(j, &m)| m.then_some(j))
        .collect()
}
