//! Scaffolding for the algorithm exercise binaries.
//!
//! Each binary is a set of small exercises: a banner, fixed input data, and
//! a `// Implementation here` stub where a one-to-few-line solution using
//! iterator and slice algorithms belongs. This library holds the pieces the
//! binaries share: the generic printer, the banner helper, and the example
//! `Product` record.

pub mod exercise;
pub mod printer;
pub mod product;

pub use exercise::{exercise, section};
pub use printer::{print, print_all, print_table, Printable};
pub use product::Product;
