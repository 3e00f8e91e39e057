//! Random single-character mutations of sequences.

use rand::rngs::StdRng;
use rand::Rng;

/// Applies one random edit (insertion, deletion, or substitution) to the
/// given string, choosing any needed character from the given alphabet.
///
/// Deletion is skipped for an empty input, since there is nothing to delete.
///
/// # Arguments
///
/// * `string`: The string to mutate.
/// * `alphabet`: The alphabet to choose characters from.
/// * `rng`: The random number generator to use.
pub fn mutate(string: &str, alphabet: &str, rng: &mut StdRng) -> String {
    let mut chars = string.chars().collect::<Vec<_>>();
    let alphabet = alphabet.chars().collect::<Vec<_>>();
    let c = alphabet[rng.gen_range(0..alphabet.len())];

    let edit_type = if chars.is_empty() { 0 } else { rng.gen_range(0..3) };
    match edit_type {
        0 => chars.insert(rng.gen_range(0..=chars.len()), c),
        1 => {
            chars.remove(rng.gen_range(0..chars.len()));
        }
        _ => {
            let index = rng.gen_range(0..chars.len());
            chars[index] = c;
        }
    }

    chars.into_iter().collect()
}

/// Applies `n` random edits to the given string, one after another.
///
/// # Arguments
///
/// * `string`: The string to mutate.
/// * `alphabet`: The alphabet to choose characters from.
/// * `n`: The number of edits to apply.
/// * `rng`: The random number generator to use.
pub fn mutate_n(string: &str, alphabet: &str, n: usize, rng: &mut StdRng) -> String {
    (0..n).fold(string.to_string(), |s, _| mutate(&s, alphabet, rng))
}
