//! Finding the columns of a distance matrix within a threshold of some rows.

use distances::Number;
use ndarray::ArrayView2;

use crate::{query, strategies::par_marker_scan, Strategy, WithinDistError};

/// Returns the 1-based columns within `dist` of any of the 1-based rows in `idx`.
///
/// A column is selected when at least one query row has a distance to it that
/// is less than or equal to `dist`. NaN distances never qualify. The result is
/// ascending and holds each column at most once, however many query rows
/// select it.
///
/// # Arguments
///
/// * `distmat`: the distance matrix, in row-major or column-major layout.
/// * `idx`: 1-based query rows, given as floating-point integers.
/// * `dist`: inclusive threshold.
///
/// # Errors
///
/// * `InvalidDimensions` if `idx` is non-empty and `distmat` has no rows.
/// * `NonIntegralIndex` if an entry of `idx` is not an integer.
/// * `IndexOutOfRange` if an entry of `idx` does not name a row of `distmat`.
/// * `TooManyColumns` if `distmat` has more than `i32::MAX` columns.
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use within_dist::which_within_dist;
///
/// let distmat = array![[0.0, 5.0, 10.0], [5.0, 0.0, 3.0]];
///
/// assert_eq!(which_within_dist(distmat.view(), &[1.0], 5.0), Ok(vec![1, 2]));
/// assert_eq!(which_within_dist(distmat.view(), &[1.0, 2.0], 5.0), Ok(vec![1, 2, 3]));
/// assert!(which_within_dist(distmat.view(), &[3.0], 5.0).is_err());
/// ```
pub fn which_within_dist<T: Number>(distmat: ArrayView2<T>, idx: &[f64], dist: T) -> Result<Vec<i32>, WithinDistError> {
    let rows = query::to_rows(idx, distmat.dim())?;
    let ncols = distmat.ncols();
    query::check_columns(ncols)?;
    let cols = scan(Strategy::Marker, distmat, &rows, dist);
    query::to_one_based(&cols, ncols)
}

/// Parallel version of [`which_within_dist`].
///
/// # Errors
///
/// See [`which_within_dist`].
pub fn par_which_within_dist<T: Number>(
    distmat: ArrayView2<T>,
    idx: &[f64],
    dist: T,
) -> Result<Vec<i32>, WithinDistError> {
    let rows = query::to_rows(idx, distmat.dim())?;
    let ncols = distmat.ncols();
    query::check_columns(ncols)?;
    let cols = par_scan(distmat, &rows, dist);
    query::to_one_based(&cols, ncols)
}

/// Returns the 0-based columns within `dist` of any of the 0-based `rows`.
///
/// # Errors
///
/// * `InvalidDimensions` if `rows` is non-empty and `distmat` has no rows.
/// * `IndexOutOfRange` if a row is not below `distmat.nrows()`.
pub fn which_within_rows<T: Number>(
    distmat: ArrayView2<T>,
    rows: &[usize],
    dist: T,
) -> Result<Vec<usize>, WithinDistError> {
    which_within_rows_with(Strategy::Marker, distmat, rows, dist)
}

/// Like [`which_within_rows`], with an explicit choice of scan kernel.
///
/// All strategies return the same columns.
///
/// # Errors
///
/// See [`which_within_rows`].
pub fn which_within_rows_with<T: Number>(
    strategy: Strategy,
    distmat: ArrayView2<T>,
    rows: &[usize],
    dist: T,
) -> Result<Vec<usize>, WithinDistError> {
    query::check_rows(rows, distmat.dim())?;
    Ok(scan(strategy, distmat, rows, dist))
}

/// Parallel version of [`which_within_rows`].
///
/// # Errors
///
/// See [`which_within_rows`].
pub fn par_which_within_rows<T: Number>(
    distmat: ArrayView2<T>,
    rows: &[usize],
    dist: T,
) -> Result<Vec<usize>, WithinDistError> {
    query::check_rows(rows, distmat.dim())?;
    Ok(par_scan(distmat, rows, dist))
}

/// Runs a kernel over validated rows.
fn scan<T: Number>(strategy: Strategy, distmat: ArrayView2<T>, rows: &[usize], dist: T) -> Vec<usize> {
    let (nrows, ncols) = distmat.dim();
    ftlog::debug!(
        "Scanning {} query rows of a {nrows}x{ncols} matrix with {} kernel at threshold {dist}",
        rows.len(),
        strategy.name()
    );

    let cols = strategy.scan(distmat, rows, dist);
    ftlog::debug!("Found {} of {ncols} columns within {dist}", cols.len());
    cols
}

/// Runs the parallel kernel over validated rows.
fn par_scan<T: Number>(distmat: ArrayView2<T>, rows: &[usize], dist: T) -> Vec<usize> {
    let (nrows, ncols) = distmat.dim();
    ftlog::debug!(
        "Scanning {} query rows of a {nrows}x{ncols} matrix in parallel at threshold {dist}",
        rows.len()
    );

    let cols = par_marker_scan(distmat, rows, dist);
    ftlog::debug!("Found {} of {ncols} columns within {dist}", cols.len());
    cols
}
