#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items
)]
#![doc = include_str!("../README.md")]

pub mod random_data;
pub mod random_edits;

pub use random_data::{random_string, random_strings};
pub use random_edits::{mutate, mutate_n};

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
