//! Subproblem tables for the alignment recurrence.

use crate::{AlignError, Cost, PenaltyModel};

/// A table of minimal penalties between prefixes of two sequences.
///
/// The table has `(m + 1) x (n + 1)` cells for sequences of lengths `m` and
/// `n`. Rows are indexed by the prefix length `i` of the first sequence and
/// columns by the prefix length `j` of the second, so cell `(i, j)` holds the
/// minimal total penalty of aligning `x[..i]` with `y[..j]`.
pub(crate) type Table<T> = Vec<Vec<T>>;

/// Fill the table bottom-up, row by row.
///
/// The base row and column are pure gap insertions. Each interior cell only
/// depends on its upper, left, and upper-left neighbors, so a row-major pass
/// visits no cell before its dependencies.
///
/// # Errors
///
/// * `AlignError::UndefinedPenalty` if a symbol pair of `x` and `y` has no
///   penalty in `model`.
pub(crate) fn fill_bottom_up<T: Cost>(
    x: &[u8],
    y: &[u8],
    gap: T,
    model: &PenaltyModel<T>,
) -> Result<Table<T>, AlignError> {
    let mut table = vec![vec![T::ZERO; y.len() + 1]; x.len() + 1];

    for (i, row) in table.iter_mut().enumerate().skip(1) {
        row[0] = T::from_usize(i) * gap;
    }
    for (j, cell) in table[0].iter_mut().enumerate().skip(1) {
        *cell = T::from_usize(j) * gap;
    }

    for (i, &xc) in x.iter().enumerate() {
        for (j, &yc) in y.iter().enumerate() {
            let diag = table[i][j] + model.penalty(xc, yc)?;
            let up = table[i][j + 1] + gap;
            let left = table[i + 1][j] + gap;
            table[i + 1][j + 1] = diag.min(up).min(left);
        }
    }

    Ok(table)
}

/// Fill the table top-down by memoized recursion from the full-length
/// subproblem.
///
/// Every prefix pair is reachable from `(m, n)`, so the finished table is
/// identical to the one `fill_bottom_up` produces. The recursion depth is
/// bounded by `m + n`.
///
/// # Errors
///
/// * `AlignError::UndefinedPenalty` if a symbol pair of `x` and `y` has no
///   penalty in `model`.
pub(crate) fn fill_top_down<T: Cost>(
    x: &[u8],
    y: &[u8],
    gap: T,
    model: &PenaltyModel<T>,
) -> Result<Table<T>, AlignError> {
    let mut memo = vec![vec![None; y.len() + 1]; x.len() + 1];
    solve_prefix(x, y, gap, model, &mut memo, x.len(), y.len())?;

    Ok(memo
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.unwrap_or_else(|| unreachable!("every cell is visited from (m, n)")))
                .collect()
        })
        .collect())
}

/// Solve the subproblem for the first `i` symbols of `x` against the first
/// `j` symbols of `y`, caching the answer in `memo`.
fn solve_prefix<T: Cost>(
    x: &[u8],
    y: &[u8],
    gap: T,
    model: &PenaltyModel<T>,
    memo: &mut [Vec<Option<T>>],
    i: usize,
    j: usize,
) -> Result<T, AlignError> {
    if let Some(cost) = memo[i][j] {
        return Ok(cost);
    }

    let cost = if i == 0 || j == 0 {
        // Aligning a prefix against an empty sequence is pure gap insertion.
        T::from_usize(i.max(j)) * gap
    } else {
        let sub = model.penalty(x[i - 1], y[j - 1])?;
        let diag = solve_prefix(x, y, gap, model, memo, i - 1, j - 1)? + sub;
        let up = solve_prefix(x, y, gap, model, memo, i - 1, j)? + gap;
        let left = solve_prefix(x, y, gap, model, memo, i, j - 1)? + gap;
        diag.min(up).min(left)
    };

    memo[i][j] = Some(cost);
    Ok(cost)
}
