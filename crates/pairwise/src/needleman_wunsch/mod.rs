//! Needleman-Wunsch algorithm for minimum-penalty global sequence alignment.

mod aligner;
mod penalties;
mod table;

pub use aligner::{Aligner, FillStrategy};
pub use penalties::PenaltyModel;
