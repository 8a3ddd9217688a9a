// File:    cipher.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: The cipher engine. Stateless Caesar, Vigenere and Rail Fence transforms over normalized text.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the cipher engine.
//!
//! The transforms take text that is already normalized and keys that have
//! already been validated (see [`crate::key::validate`]). They do not check
//! either again. Every transform maps A-Z text to A-Z text of the same
//! length, and `decrypt` undoes `encrypt` for the same key.

use crate::ALPHABET_SIZE;
use crate::text::NormalizedText;
use log::trace;
use serde::Serialize;

// ALPHABET_SIZE is 26, which always fits a u8.
#[allow(clippy::cast_possible_truncation)]
const RING: u8 = ALPHABET_SIZE as u8;

/// A reversible text transform.
pub trait Cipher {
    /// Transforms plaintext into ciphertext.
    fn encrypt(&self, text: &NormalizedText) -> NormalizedText;

    /// Transforms ciphertext back into plaintext.
    fn decrypt(&self, text: &NormalizedText) -> NormalizedText;
}

/// Offset of a letter from `A`.
const fn offset(b: u8) -> u8 {
    b - b'A'
}

/// The letter `n` places after `A`, wrapping around the ring.
fn letter(n: u8) -> char {
    char::from(b'A' + n % RING)
}

/// Caesar cipher: rotates every letter by a fixed shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Caesar {
    shift: u8,
}

impl Caesar {
    /// Creates a Caesar cipher. The shift is reduced modulo 26.
    #[must_use]
    pub const fn new(shift: u8) -> Self {
        Self { shift: shift % RING }
    }

    /// The shift, in `0..26`.
    #[must_use]
    pub const fn shift(&self) -> u8 {
        self.shift
    }

    fn rotate(text: &NormalizedText, by: u8) -> NormalizedText {
        let rotated = text
            .as_bytes()
            .iter()
            .map(|&b| letter(offset(b) + by))
            .collect();
        NormalizedText::from_letters(rotated)
    }
}

impl Cipher for Caesar {
    fn encrypt(&self, text: &NormalizedText) -> NormalizedText {
        Self::rotate(text, self.shift)
    }

    fn decrypt(&self, text: &NormalizedText) -> NormalizedText {
        Self::rotate(text, RING - self.shift)
    }
}

/// Vigenère cipher: adds a repeating letter key, position by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vigenere {
    key: NormalizedText,
}

impl Vigenere {
    /// Creates a Vigenère cipher from a letter key.
    ///
    /// The key repeats to cover the text; its length is never changed. An
    /// empty key adds nothing, which makes both directions the identity.
    #[must_use]
    pub const fn new(key: NormalizedText) -> Self {
        Self { key }
    }

    /// The letter key.
    #[must_use]
    pub const fn key(&self) -> &NormalizedText {
        &self.key
    }

    fn combine(&self, text: &NormalizedText, key_offset: impl Fn(u8) -> u8) -> NormalizedText {
        if self.key.is_empty() {
            return text.clone();
        }
        let combined = text
            .as_bytes()
            .iter()
            .zip(self.key.as_bytes().iter().cycle())
            .map(|(&t, &k)| letter(offset(t) + key_offset(offset(k))))
            .collect();
        NormalizedText::from_letters(combined)
    }
}

impl Cipher for Vigenere {
    fn encrypt(&self, text: &NormalizedText) -> NormalizedText {
        self.combine(text, |k| k)
    }

    fn decrypt(&self, text: &NormalizedText) -> NormalizedText {
        self.combine(text, |k| RING - k)
    }
}

/// Rail Fence cipher: writes the text in a zig-zag over `rails` rows and
/// reads it back row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RailFence {
    rails: usize,
}

impl RailFence {
    /// Creates a Rail Fence cipher over `rails` rows.
    ///
    /// Fewer than two rails make both directions the identity. Validation
    /// restricts real keys to 2-10 rails and fewer rails than letters.
    #[must_use]
    pub const fn new(rails: usize) -> Self {
        Self { rails }
    }

    /// The number of rails.
    #[must_use]
    pub const fn rails(&self) -> usize {
        self.rails
    }

    /// Rails that can actually hold a letter of a text of length `len`.
    ///
    /// Past `len` rails the zig-zag never turns, so the pattern is the same.
    fn effective_rails(&self, len: usize) -> usize {
        self.rails.min(len)
    }
}

impl Cipher for RailFence {
    fn encrypt(&self, text: &NormalizedText) -> NormalizedText {
        let rails = self.effective_rails(text.len());
        if rails <= 1 {
            return text.clone();
        }
        let pattern = rail_pattern(text.len(), rails);
        trace!("Rail Fence encrypt over {rails} rails, pattern {pattern:?}");

        let bytes = text.as_bytes();
        let mut out = String::with_capacity(text.len());
        for rail in 0..rails {
            out.extend(
                pattern
                    .iter()
                    .zip(bytes)
                    .filter(|&(&r, _)| r == rail)
                    .map(|(_, &b)| char::from(b)),
            );
        }
        NormalizedText::from_letters(out)
    }

    fn decrypt(&self, text: &NormalizedText) -> NormalizedText {
        let rails = self.effective_rails(text.len());
        if rails <= 1 {
            return text.clone();
        }
        let pattern = rail_pattern(text.len(), rails);
        trace!("Rail Fence decrypt over {rails} rails, pattern {pattern:?}");

        let mut rail_lengths = vec![0usize; rails];
        for &rail in &pattern {
            rail_lengths[rail] += 1;
        }
        // Next unread position of each rail's slice in the ciphertext.
        let mut cursor: Vec<usize> = rail_lengths
            .iter()
            .scan(0, |start, &len| {
                let this = *start;
                *start += len;
                Some(this)
            })
            .collect();

        let bytes = text.as_bytes();
        let mut out = String::with_capacity(text.len());
        for &rail in &pattern {
            out.push(char::from(bytes[cursor[rail]]));
            cursor[rail] += 1;
        }
        NormalizedText::from_letters(out)
    }
}

/// Rail index of every position in a text of length `len`.
///
/// Starts on rail 0, walks down to `rails - 1`, then bounces back and forth
/// between the outer rails.
fn rail_pattern(len: usize, rails: usize) -> Vec<usize> {
    if rails <= 1 {
        return vec![0; len];
    }
    let mut pattern = Vec::with_capacity(len);
    let mut rail = 0;
    let mut down = true;
    for _ in 0..len {
        pattern.push(rail);
        if rail == rails - 1 {
            down = false;
        } else if rail == 0 {
            down = true;
        }
        if down {
            rail += 1;
        } else {
            rail -= 1;
        }
    }
    pattern
}
