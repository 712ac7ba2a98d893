//! ROT13 substitution over the lowercase Latin alphabet.
//!
//! The whole input is folded to lowercase first. Anything that is not one of
//! the 26 letters afterwards is dropped from the output rather than copied
//! through, so spaces, digits and punctuation never appear in the result.

/// Lookup table for the substitution.
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

const SHIFT: usize = 13;

/// Apply ROT13 to `text`, keeping only alphabet letters.
pub fn rot13(text: &str) -> String {
    let table = ALPHABET.as_bytes();
    let lowered = text.to_lowercase();

    let mut encoded = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        if let Some(position) = ALPHABET.find(c) {
            encoded.push(table[(position + SHIFT) % table.len()] as char);
        }
    }
    encoded
}
