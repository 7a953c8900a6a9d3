#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

mod error;
pub mod filter;
pub mod query;
pub mod strategies;

pub use error::WithinDistError;
pub use filter::{
    par_which_within_dist, par_which_within_rows, which_within_dist, which_within_rows, which_within_rows_with,
};
pub use strategies::Strategy;

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
