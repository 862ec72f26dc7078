//! Random redirect-path generation for transit domains.

use rand::{Rng, distr::Alphanumeric};

const MIN_LEN: usize = 5;
const MAX_LEN: usize = 8;

/// Generates a random alphanumeric path of the given length (clamped to
/// 5..=8), with a leading slash.
pub fn generate_random_path(length: usize) -> String {
    let length = length.clamp(MIN_LEN, MAX_LEN);

    let path: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect();

    format!("/{path}")
}

/// A random length in the supported 5..=8 range.
pub fn random_path_length() -> usize {
    rand::rng().random_range(MIN_LEN..=MAX_LEN)
}
