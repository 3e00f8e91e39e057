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

pub mod cost;
mod error;
pub mod needleman_wunsch;

pub use cost::Cost;
pub use error::AlignError;
pub use needleman_wunsch::{Aligner, FillStrategy, PenaltyModel};

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
