//! Errors returned by the alignment API.

/// An input or penalty-model error encountered while aligning.
///
/// All failures here are caller input errors; none are transient, and a
/// failed call leaves no partially built state behind.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// One of the input sequences was empty.
    #[error("input sequences must be non-empty")]
    EmptySequence,

    /// The gap penalty was negative.
    #[error("gap penalty must be non-negative")]
    NegativeGapPenalty,

    /// A symbol pair encountered during the solve had no penalty in the model.
    #[error("no penalty defined for symbol pair ({x:?}, {y:?})")]
    UndefinedPenalty {
        /// The symbol from the first sequence.
        x: char,
        /// The symbol from the second sequence.
        y: char,
    },
}
