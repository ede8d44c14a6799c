//! Random short path generation.

/// Alphabet used for generated paths: 26 lower + 26 upper + 10 digits.
const ALPHANUMERIC: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a random alphanumeric path of the given length.
///
/// Draws cryptographically strong random bytes and maps each byte into the
/// 62-character alphabet via modulo.
///
/// # Panics
///
/// Panics if the system random source fails. Continuing without entropy
/// would risk predictable or empty identifiers, so this is treated as a
/// fatal condition rather than a per-request error.
pub fn generate_link_path(length: usize) -> String {
    let mut buffer = vec![0u8; length];
    getrandom::fill(&mut buffer).expect("system random source exhausted");

    buffer
        .iter()
        .map(|byte| ALPHANUMERIC[*byte as usize % ALPHANUMERIC.len()] as char)
        .collect()
}
