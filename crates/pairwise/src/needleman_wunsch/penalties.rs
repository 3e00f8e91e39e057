//! Substitution penalties for the aligner.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{AlignError, Cost};

/// Substitution penalties keyed by ordered symbol pair.
///
/// The model is a flat map from a combined `(u8, u8)` key to the penalty for
/// aligning those two symbols against each other, plus an optional default
/// for pairs not listed explicitly. Looking up a pair that is neither listed
/// nor covered by a default is an error, surfaced at the point of lookup.
///
/// Penalties are expected to be non-negative; for unsigned `T` this holds by
/// construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PenaltyModel<T: Cost> {
    /// Penalty for each explicitly listed ordered pair of symbols.
    pairs: HashMap<(u8, u8), T>,
    /// Penalty for any pair not listed in `pairs`.
    default: Option<T>,
}

impl<T: Cost> Default for PenaltyModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Cost> PenaltyModel<T> {
    /// Create an empty model with no default penalty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pairs: HashMap::new(),
            default: None,
        }
    }

    /// Create a model defined for every ordered pair over `alphabet`, with
    /// `match_penalty` on the diagonal and `mismatch_penalty` elsewhere.
    #[must_use]
    pub fn uniform(alphabet: &[u8], match_penalty: T, mismatch_penalty: T) -> Self {
        let mut pairs = HashMap::with_capacity(alphabet.len() * alphabet.len());
        for &a in alphabet {
            for &b in alphabet {
                let penalty = if a == b { match_penalty } else { mismatch_penalty };
                pairs.insert((a, b), penalty);
            }
        }
        Self { pairs, default: None }
    }

    /// Set the penalty for aligning symbol `x` against symbol `y`.
    #[must_use]
    pub fn with_pair(mut self, x: u8, y: u8, penalty: T) -> Self {
        self.pairs.insert((x, y), penalty);
        self
    }

    /// Set the penalty for any pair not listed explicitly.
    #[must_use]
    pub const fn with_default(mut self, penalty: T) -> Self {
        self.default = Some(penalty);
        self
    }

    /// Look up the penalty for aligning symbol `x` against symbol `y`.
    ///
    /// # Errors
    ///
    /// * `AlignError::UndefinedPenalty` if the pair is neither listed nor
    ///   covered by a default.
    pub fn penalty(&self, x: u8, y: u8) -> Result<T, AlignError> {
        self.pairs
            .get(&(x, y))
            .copied()
            .or(self.default)
            .ok_or(AlignError::UndefinedPenalty {
                x: char::from(x),
                y: char::from(y),
            })
    }
}
