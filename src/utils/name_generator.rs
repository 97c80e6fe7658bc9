//! Short name generation and validation.

use rand::Rng;

/// Length of server-generated names.
pub const GENERATED_NAME_LENGTH: usize = 6;

/// Generated names draw from lowercase base-36.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random 6-character lowercase-alphanumeric name.
///
/// Uniqueness is not guaranteed here; callers check the store and regenerate
/// on collision.
pub fn generate_name() -> String {
    let mut rng = rand::rng();

    (0..GENERATED_NAME_LENGTH)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `name` is a valid short name.
///
/// Valid names are non-empty and contain only lowercase letters, digits, and
/// hyphens.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}
