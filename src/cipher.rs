//! The Vigenère cipher transform.
//!
//! A pure function over (text, key, direction): alphabet characters are
//! shifted modulo 26 by the key symbol under the key cursor, everything
//! else passes through unchanged without advancing the cursor. No shared
//! state, so the transform is safe to call from any number of threads.
//!
//! Input text is expected to be upper-cased by the caller; lowercase
//! letters are treated as pass-through characters like punctuation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::alphabet::{position, symbol, ALPHABET_LEN};

/// Errors produced while validating a cipher key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The key contains no characters.
    #[error("Key must contain at least one character")]
    EmptyKey,

    /// The key contains a character outside the alphabet.
    #[error("Key contains non-alphabet character '{0}'")]
    InvalidKeySymbol(char),
}

/// Shift direction: addition (encrypt) or subtraction (decrypt) modulo 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// A validated, non-empty Vigenère key.
///
/// Stored as shift values (alphabet position indices), which is what the
/// transform actually consumes. Lowercase input is upper-cased during
/// construction; any other non-alphabet character is rejected, so a `Key`
/// can never put the transform in an undefined state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    shifts: Vec<u8>,
}

impl Key {
    /// Validates and builds a key from its text form.
    pub fn new(key: &str) -> Result<Self, CipherError> {
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }

        let mut shifts = Vec::with_capacity(key.len());
        for c in key.chars() {
            match position(c.to_ascii_uppercase()) {
                Some(idx) => shifts.push(idx),
                None => return Err(CipherError::InvalidKeySymbol(c)),
            }
        }

        Ok(Self { shifts })
    }

    /// Builds a key directly from shift values. Used by the keyspace
    /// enumerator, which generates digits that are valid by construction.
    pub(crate) fn from_shifts(shifts: Vec<u8>) -> Self {
        debug_assert!(!shifts.is_empty());
        debug_assert!(shifts.iter().all(|&s| (s as usize) < ALPHABET_LEN));
        Self { shifts }
    }

    /// Number of symbols in the key.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Always false: emptiness is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Shift value for the given key cursor position (cyclic).
    fn shift_at(&self, cursor: usize) -> u8 {
        self.shifts[cursor % self.shifts.len()]
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &s in &self.shifts {
            write!(f, "{}", symbol(s))?;
        }
        Ok(())
    }
}

impl FromStr for Key {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::new(s)
    }
}

/// Applies the Vigenère transform to `text`.
///
/// For each alphabet character, the shift under the current key cursor is
/// added (encrypt) or subtracted (decrypt) modulo 26 and the cursor
/// advances. Non-alphabet characters are copied through and do NOT advance
/// the cursor, so punctuation never changes which key symbol lines up with
/// which letter.
///
/// Round-trip law: `transform(transform(t, k, Encrypt), k, Decrypt) == t`
/// for any text and any valid key.
pub fn transform(text: &str, key: &Key, direction: Direction) -> String {
    let base = ALPHABET_LEN as u8;
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0usize;

    for c in text.chars() {
        match position(c) {
            Some(idx) => {
                let shift = key.shift_at(cursor);
                let new_idx = match direction {
                    Direction::Encrypt => (idx + shift) % base,
                    // +26 keeps the subtraction non-negative
                    Direction::Decrypt => (idx + base - shift) % base,
                };
                out.push(symbol(new_idx));
                cursor += 1;
            }
            None => out.push(c),
        }
    }

    out
}

/// Encrypts `text` with `key`.
pub fn encrypt(text: &str, key: &Key) -> String {
    transform(text, key, Direction::Encrypt)
}

/// Decrypts `text` with `key`.
pub fn decrypt(text: &str, key: &Key) -> String {
    transform(text, key, Direction::Decrypt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector_encrypt() {
        let key = Key::new("KEY").unwrap();
        assert_eq!(encrypt("HELLO", &key), "RIJVS");
    }

    #[test]
    fn test_known_vector_decrypt() {
        let key = Key::new("KEY").unwrap();
        assert_eq!(decrypt("RIJVS", &key), "HELLO");
    }

    #[test]
    fn test_roundtrip() {
        let key = Key::new("SECRETKEY").unwrap();
        let text = "ATTACK AT DAWN, BRING 3 HORSES!";
        assert_eq!(decrypt(&encrypt(text, &key), &key), text);
    }

    #[test]
    fn test_empty_text() {
        let key = Key::new("KEY").unwrap();
        assert_eq!(encrypt("", &key), "");
    }

    #[test]
    fn test_pass_through_only() {
        let key = Key::new("KEY").unwrap();
        let text = "123 ,.! -- 456";
        assert_eq!(encrypt(text, &key), text);
        assert_eq!(decrypt(text, &key), text);
    }

    #[test]
    fn test_punctuation_does_not_advance_cursor() {
        let key = Key::new("KEY").unwrap();
        // Inserting punctuation must not change the shifts applied to
        // the letters around it.
        let plain = encrypt("HELLO", &key);
        let spaced = encrypt("HE, L LO!", &key);
        let letters: String = spaced.chars().filter(|c| c.is_ascii_uppercase()).collect();
        assert_eq!(letters, plain);
    }

    #[test]
    fn test_lowercase_passes_through() {
        let key = Key::new("KEY").unwrap();
        // The caller upper-cases input; anything that slips through in
        // lowercase is treated like punctuation.
        assert_eq!(encrypt("Hx", &key), "Rx");
    }

    #[test]
    fn test_single_symbol_key_is_caesar() {
        let key = Key::new("B").unwrap();
        assert_eq!(encrypt("ABCXYZ", &key), "BCDYZA");
    }

    #[test]
    fn test_empty_key_rejected() {
        assert_eq!(Key::new(""), Err(CipherError::EmptyKey));
    }

    #[test]
    fn test_invalid_key_symbol_rejected() {
        assert_eq!(Key::new("K Y"), Err(CipherError::InvalidKeySymbol(' ')));
        assert_eq!(Key::new("K3Y"), Err(CipherError::InvalidKeySymbol('3')));
    }

    #[test]
    fn test_lowercase_key_normalized() {
        assert_eq!(Key::new("key").unwrap(), Key::new("KEY").unwrap());
    }

    #[test]
    fn test_key_display_roundtrip() {
        let key = Key::new("LEMON").unwrap();
        assert_eq!(key.to_string(), "LEMON");
        assert_eq!("LEMON".parse::<Key>().unwrap(), key);
    }

    #[test]
    fn test_determinism() {
        let key = Key::new("CIPHER").unwrap();
        let text = "THE SAME INPUT EVERY TIME";
        assert_eq!(encrypt(text, &key), encrypt(text, &key));
    }
}
