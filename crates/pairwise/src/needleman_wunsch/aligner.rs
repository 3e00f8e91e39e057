//! The global pairwise aligner.

use mt_logger::{mt_log, Level};
use serde::{Deserialize, Serialize};

use crate::{AlignError, Cost};

use super::table::{self, Table};
use super::PenaltyModel;

/// The order in which the subproblem table is solved.
///
/// Both strategies produce identical tables, total penalties, and alignments;
/// the choice is about traversal order, not about the recurrence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillStrategy {
    /// Row-major iteration starting from the empty prefixes.
    #[default]
    BottomUp,
    /// Memoized recursion starting from the full-length subproblem.
    TopDown,
}

/// A minimum-penalty global aligner over a borrowed penalty model.
///
/// The aligner charges `model` penalties for aligning two symbols against
/// each other and `gap_penalty` per inserted gap. Each call to [`align`]
/// allocates its own `(m + 1) x (n + 1)` subproblem table, reads it back
/// during reconstruction, and discards it; nothing is cached across calls.
///
/// When several alignments share the minimum penalty, ties are broken in a
/// fixed order: diagonal match/substitution, then consuming a symbol of the
/// first sequence against a gap, then consuming a symbol of the second
/// sequence against a gap.
///
/// [`align`]: Aligner::align
#[derive(Clone)]
pub struct Aligner<'a, T: Cost> {
    /// Substitution penalties.
    model: &'a PenaltyModel<T>,
    /// Penalty per inserted gap.
    gap_penalty: T,
    /// Marker byte emitted for gaps.
    gap: u8,
    /// How the subproblem table is filled.
    strategy: FillStrategy,
}

impl<'a, T: Cost> Aligner<'a, T> {
    /// Create an aligner with the `-` gap marker and bottom-up table fill.
    pub const fn new(model: &'a PenaltyModel<T>, gap_penalty: T) -> Self {
        Self {
            model,
            gap_penalty,
            gap: b'-',
            strategy: FillStrategy::BottomUp,
        }
    }

    /// Set the marker byte emitted for gaps.
    #[must_use]
    pub const fn with_gap_marker(mut self, gap: u8) -> Self {
        self.gap = gap;
        self
    }

    /// Set the table fill strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: FillStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Get the gap marker byte.
    #[must_use]
    pub const fn gap(&self) -> u8 {
        self.gap
    }

    /// Align two sequences, returning the minimum total penalty and one
    /// optimal alignment.
    ///
    /// The aligned sequences have equal length, stripping the gap marker from
    /// either recovers the corresponding input, and no position holds a gap
    /// on both sides. The total penalty is unique; the returned alignment is
    /// one of possibly several optima, chosen by the documented tie-break
    /// order.
    ///
    /// # Errors
    ///
    /// * `AlignError::EmptySequence` if `x` or `y` is empty.
    /// * `AlignError::NegativeGapPenalty` if the gap penalty is below zero.
    /// * `AlignError::UndefinedPenalty` if a symbol pair of `x` and `y` has
    ///   no penalty in the model.
    ///
    /// The first two are detected before the subproblem table is allocated.
    pub fn align<S: AsRef<[u8]>>(&self, x: &S, y: &S) -> Result<(T, [Vec<u8>; 2]), AlignError> {
        let (x, y) = (x.as_ref(), y.as_ref());

        if x.is_empty() || y.is_empty() {
            return Err(AlignError::EmptySequence);
        }
        if self.gap_penalty.is_negative() {
            return Err(AlignError::NegativeGapPenalty);
        }

        mt_log!(
            Level::Debug,
            "Aligning sequences of lengths {} and {} with {:?} fill...",
            x.len(),
            y.len(),
            self.strategy
        );

        let table = match self.strategy {
            FillStrategy::BottomUp => table::fill_bottom_up(x, y, self.gap_penalty, self.model)?,
            FillStrategy::TopDown => table::fill_top_down(x, y, self.gap_penalty, self.model)?,
        };
        let penalty = table[x.len()][y.len()];

        let [aligned_x, aligned_y] = self.trace_back(x, y, &table)?;
        mt_log!(Level::Debug, "Alignment finished with total penalty {}.", penalty);

        Ok((penalty, [aligned_x, aligned_y]))
    }

    /// Align two strings, returning the minimum total penalty and one optimal
    /// alignment as strings.
    ///
    /// # Errors
    ///
    /// See [`align`](Aligner::align).
    pub fn align_str<S: AsRef<str>>(&self, x: &S, y: &S) -> Result<(T, [String; 2]), AlignError> {
        let (penalty, [aligned_x, aligned_y]) = self.align(&x.as_ref(), &y.as_ref())?;
        Ok((
            penalty,
            [
                String::from_utf8(aligned_x).unwrap_or_else(|e| unreachable!("We only added gaps: {e}")),
                String::from_utf8(aligned_y).unwrap_or_else(|e| unreachable!("We only added gaps: {e}")),
            ],
        ))
    }

    /// Walk backward from `(m, n)`, re-deriving the winning transition at
    /// each cell in the tie-break order and emitting symbol/gap pairs into
    /// growable buffers that are reversed once at the end.
    fn trace_back(&self, x: &[u8], y: &[u8], table: &Table<T>) -> Result<[Vec<u8>; 2], AlignError> {
        let (mut i, mut j) = (x.len(), y.len());
        let (mut aligned_x, mut aligned_y) = (
            Vec::with_capacity(x.len() + y.len()),
            Vec::with_capacity(x.len() + y.len()),
        );

        while i > 0 && j > 0 {
            let cost = table[i][j];
            if cost == table[i - 1][j - 1] + self.model.penalty(x[i - 1], y[j - 1])? {
                aligned_x.push(x[i - 1]);
                aligned_y.push(y[j - 1]);
                i -= 1;
                j -= 1;
            } else if cost == table[i - 1][j] + self.gap_penalty {
                aligned_x.push(x[i - 1]);
                aligned_y.push(self.gap);
                i -= 1;
            } else {
                aligned_x.push(self.gap);
                aligned_y.push(y[j - 1]);
                j -= 1;
            }
        }

        // One sequence is exhausted; the remainder of the other aligns
        // entirely against gaps.
        while i > 0 {
            aligned_x.push(x[i - 1]);
            aligned_y.push(self.gap);
            i -= 1;
        }
        while j > 0 {
            aligned_x.push(self.gap);
            aligned_y.push(y[j - 1]);
            j -= 1;
        }

        aligned_x.reverse();
        aligned_y.reverse();

        Ok([aligned_x, aligned_y])
    }
}
