//! The fixed uppercase alphabet shared by plaintext, ciphertext, and keys.
//!
//! Every symbol has a unique position index 0-25; that index is the sole
//! unit of arithmetic in the cipher transform. Anything outside the
//! alphabet (spaces, punctuation, digits, lowercase letters) is a
//! pass-through character for the transform.

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// The alphabet itself, in its natural (lexicographic) order.
pub const ALPHABET: &[u8; ALPHABET_LEN] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Returns the position index (0-25) of an alphabet symbol, or `None`
/// for any character outside the alphabet.
pub fn position(c: char) -> Option<u8> {
    if c.is_ascii_uppercase() {
        Some(c as u8 - b'A')
    } else {
        None
    }
}

/// Returns the alphabet symbol at a position index.
///
/// The index must be in `0..26`.
pub fn symbol(idx: u8) -> char {
    debug_assert!((idx as usize) < ALPHABET_LEN);
    (b'A' + idx) as char
}
