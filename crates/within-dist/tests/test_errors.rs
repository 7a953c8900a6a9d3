//! Tests for the errors raised by the public entry points.

use ndarray::{array, Array2};
use test_case::test_case;
use within_dist::{
    par_which_within_dist, par_which_within_rows, which_within_dist, which_within_rows, which_within_rows_with,
    Strategy, WithinDistError,
};

#[test]
fn row_past_the_end() {
    let distmat = array![[0.0, 5.0, 10.0], [5.0, 0.0, 3.0]];
    let expected = Err(WithinDistError::IndexOutOfRange { index: 3.0, nrows: 2 });

    assert_eq!(which_within_dist(distmat.view(), &[3.0], 5.0), expected);
    assert_eq!(par_which_within_dist(distmat.view(), &[3.0], 5.0), expected);
}

#[test_case(0.0 ; "zero")]
#[test_case(-2.0 ; "negative")]
#[test_case(1e12 ; "far past the end")]
fn out_of_range(index: f64) {
    let distmat = array![[0.0, 1.0], [1.0, 0.0]];
    assert_eq!(
        which_within_dist(distmat.view(), &[1.0, index], 1.0),
        Err(WithinDistError::IndexOutOfRange { index, nrows: 2 })
    );
}

#[test_case(1.5 ; "fraction")]
#[test_case(f64::INFINITY ; "infinity")]
#[test_case(f64::NEG_INFINITY ; "negative infinity")]
fn non_integral(index: f64) {
    let distmat = array![[0.0, 1.0], [1.0, 0.0]];
    assert_eq!(
        which_within_dist(distmat.view(), &[index], 1.0),
        Err(WithinDistError::NonIntegralIndex { index })
    );
}

#[test]
fn nan_index() {
    let distmat = array![[0.0, 1.0], [1.0, 0.0]];
    assert!(matches!(
        which_within_dist(distmat.view(), &[f64::NAN], 1.0),
        Err(WithinDistError::NonIntegralIndex { index }) if index.is_nan()
    ));
}

#[test]
fn first_bad_index_is_reported() {
    let distmat = array![[0.0, 1.0], [1.0, 0.0]];
    assert_eq!(
        which_within_dist(distmat.view(), &[1.0, 4.0, 0.5], 1.0),
        Err(WithinDistError::IndexOutOfRange { index: 4.0, nrows: 2 })
    );
}

#[test]
fn matrix_without_rows() {
    let distmat = Array2::<f64>::zeros((0, 4));
    let expected = WithinDistError::InvalidDimensions { nrows: 0, ncols: 4 };

    assert_eq!(which_within_dist(distmat.view(), &[1.0], 1.0), Err(expected.clone()));
    assert_eq!(which_within_rows(distmat.view(), &[0], 1.0), Err(expected.clone()));
    assert_eq!(par_which_within_rows(distmat.view(), &[0], 1.0), Err(expected));
}

#[test]
fn zero_based_row_past_the_end() {
    let distmat = array![[0.0, 1.0], [1.0, 0.0]];
    for &strategy in Strategy::variants() {
        assert_eq!(
            which_within_rows_with(strategy, distmat.view(), &[1, 2], 1.0),
            Err(WithinDistError::IndexOutOfRange { index: 2.0, nrows: 2 })
        );
    }
}
