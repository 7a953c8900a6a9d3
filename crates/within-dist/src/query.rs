//! Conversions between the 1-based positions seen by callers and the 0-based
//! positions used to index the matrix.

use crate::WithinDistError;

/// Converts 1-based query indices into 0-based row positions.
///
/// The indices arrive as floating-point values, the way a statistical host
/// hands over integer vectors. Every index is checked before any row is read.
///
/// # Arguments
///
/// * `idx`: 1-based row positions. Duplicates and any ordering are allowed.
/// * `dim`: the `(rows, columns)` shape of the matrix being queried.
///
/// # Errors
///
/// * `InvalidDimensions` if `idx` is non-empty and the matrix has no rows.
/// * `NonIntegralIndex` if an index is NaN, infinite or fractional.
/// * `IndexOutOfRange` if an index is below 1 or above the number of rows.
///
/// # Examples
///
/// ```
/// use within_dist::query::to_rows;
///
/// assert_eq!(to_rows(&[2.0, 1.0, 2.0], (2, 3)), Ok(vec![1, 0, 1]));
/// assert!(to_rows(&[3.0], (2, 3)).is_err());
/// ```
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn to_rows(idx: &[f64], (nrows, ncols): (usize, usize)) -> Result<Vec<usize>, WithinDistError> {
    if nrows == 0 && !idx.is_empty() {
        return Err(WithinDistError::InvalidDimensions { nrows, ncols });
    }

    idx.iter()
        .map(|&index| {
            if !index.is_finite() || index.fract() != 0.0 {
                Err(WithinDistError::NonIntegralIndex { index })
            } else if index < 1.0 || index > nrows as f64 {
                Err(WithinDistError::IndexOutOfRange { index, nrows })
            } else {
                Ok(index as usize - 1)
            }
        })
        .collect()
}

/// Checks that 0-based row positions all name rows of the matrix.
///
/// # Errors
///
/// * `InvalidDimensions` if `rows` is non-empty and the matrix has no rows.
/// * `IndexOutOfRange` if a row is not below the number of rows. The reported
///   index is the 0-based position that was supplied.
#[allow(clippy::cast_precision_loss)]
pub fn check_rows(rows: &[usize], (nrows, ncols): (usize, usize)) -> Result<(), WithinDistError> {
    if nrows == 0 && !rows.is_empty() {
        return Err(WithinDistError::InvalidDimensions { nrows, ncols });
    }

    match rows.iter().find(|&&r| r >= nrows) {
        Some(&r) => Err(WithinDistError::IndexOutOfRange {
            index: r as f64,
            nrows,
        }),
        None => Ok(()),
    }
}

/// Checks that every column of the matrix has a 1-based `i32` position.
///
/// # Errors
///
/// * `TooManyColumns` if `ncols` exceeds `i32::MAX`.
pub fn check_columns(ncols: usize) -> Result<(), WithinDistError> {
    i32::try_from(ncols)
        .map(|_| ())
        .map_err(|_| WithinDistError::TooManyColumns { ncols })
}

/// Converts 0-based column positions into 1-based `i32` positions.
///
/// # Errors
///
/// * `TooManyColumns` if `ncols` exceeds `i32::MAX`, regardless of which
///   columns were selected.
pub fn to_one_based(cols: &[usize], ncols: usize) -> Result<Vec<i32>, WithinDistError> {
    check_columns(ncols)?;

    cols.iter()
        .map(|&j| i32::try_from(j + 1).map_err(|_| WithinDistError::TooManyColumns { ncols }))
        .collect()
}
