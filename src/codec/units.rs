//! Unit Naming Table
//!
//! | index | 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | n >= 8 |
//! |-------|---|---|---|---|---|---|---|---|--------|
//! | name  |   | i | j | k | L | I | J | K | `e<n>` |
//!
//! Index 0 is the real term and has no name. `i`/`I`, `j`/`J` and `k`/`K`
//! name different units, so letter case is significant.

use std::borrow::Cow;

/// Names of the first eight basis elements
pub const UNIT_LETTERS: [&str; 8] = ["", "i", "j", "k", "L", "I", "J", "K"];

/// Prefix of generated names for index 8 and up
pub const GENERATED_PREFIX: char = 'e';

/// Name of basis element `index`
pub fn unit_name(index: usize) -> Cow<'static, str> {
    match UNIT_LETTERS.get(index) {
        Some(&letter) => Cow::Borrowed(letter),
        None => Cow::Owned(format!("{GENERATED_PREFIX}{index}")),
    }
}

/// True when `index` is written with a generated name
pub fn is_generated(index: usize) -> bool {
    index >= UNIT_LETTERS.len()
}

/// Index of a unit name; generated names are accepted for any index >= 1
pub fn unit_index(name: &str) -> Option<usize> {
    if let Some(pos) = UNIT_LETTERS.iter().skip(1).position(|&letter| letter == name) {
        return Some(pos + 1);
    }
    let digits = name.strip_prefix(GENERATED_PREFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().filter(|&index| index >= 1)
}
