//! Short code generation.
//!
//! Codes are drawn uniformly from a 36-symbol alphabet. They identify links
//! but are not secrets, so the thread-local non-cryptographic generator from
//! `rand` is enough.

use rand::Rng;

/// Symbols a code is drawn from: lowercase ASCII letters and digits.
pub const ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Code length used when none is configured.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates a random code of `length` symbols.
///
/// Each symbol is drawn independently and uniformly from [`ALPHABET`].
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.bytes().all(|b| ALPHABET.contains(&b)));
/// ```
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns true if `code` only contains symbols from [`ALPHABET`].
pub fn is_code_shaped(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| ALPHABET.contains(&b))
}
