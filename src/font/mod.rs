//! Binary font-container decoding.
//!
//! Structural parsing and validation of font container headers. Decoding is
//! all-or-nothing: any inconsistency between the header, the table
//! directory, and the actual buffer aborts with a descriptive
//! [`Error`](crate::Error).

mod woff2;

pub use woff2::{Woff2, Woff2Table, parse_woff2};
