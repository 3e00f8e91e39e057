//! Seeded random sequence generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a random string of length `len` over the given alphabet.
///
/// # Arguments
///
/// * `len`: The length of the string to generate.
/// * `alphabet`: The alphabet to choose characters from.
/// * `rng`: The random number generator to use.
pub fn random_string(len: usize, alphabet: &str, rng: &mut StdRng) -> String {
    let alphabet = alphabet.chars().collect::<Vec<_>>();
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

/// Generates a batch of random strings with lengths drawn uniformly from
/// `min_len..=max_len`, over the given alphabet, from the given seed.
///
/// # Arguments
///
/// * `cardinality`: The number of strings to generate.
/// * `min_len`: The minimum length of a generated string.
/// * `max_len`: The maximum length of a generated string.
/// * `alphabet`: The alphabet to choose characters from.
/// * `seed`: The seed for the random number generator.
#[must_use]
pub fn random_strings(cardinality: usize, min_len: usize, max_len: usize, alphabet: &str, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..cardinality)
        .map(|_| {
            let len = rng.gen_range(min_len..=max_len);
            random_string(len, alphabet, &mut rng)
        })
        .collect()
}
