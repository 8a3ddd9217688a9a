// File:    key.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Cipher selection, validated key values and the per-cipher key validation rules.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Key validation.
//!
//! Raw key text from a caller is checked against the selected cipher and,
//! for Rail Fence, against the normalized plaintext length. A successful
//! check produces a [`CipherKey`], the only key shape the engine accepts.
//!
//! Rail Fence validity depends on the text, so validation has to be re-run
//! whenever the cipher, the key text or the plaintext changes.

use crate::cipher::{Caesar, Cipher, RailFence, Vigenere};
use crate::error::{ParseNameError, ValidationError};
use crate::text::{NormalizedText, normalize};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Accepted Caesar shifts.
pub const CAESAR_SHIFTS: RangeInclusive<usize> = 0..=25;

/// Accepted Rail Fence rail counts.
pub const RAIL_COUNTS: RangeInclusive<usize> = 2..=10;

/// Minimum normalized plaintext length for Rail Fence.
pub const MIN_RAIL_FENCE_LENGTH: usize = 2;

/// The ciphers supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    /// Fixed alphabet rotation.
    Caesar,
    /// Polyalphabetic substitution with a repeating letter key.
    Vigenere,
    /// Zig-zag transposition over a number of rails.
    #[serde(rename = "railfence")]
    RailFence,
}

impl CipherKind {
    /// Every supported cipher, in display order.
    pub const ALL: [Self; 3] = [Self::Caesar, Self::Vigenere, Self::RailFence];

    /// The identifier used to select this cipher (`caesar`, `vigenere`, `railfence`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Caesar => "caesar",
            Self::Vigenere => "vigenere",
            Self::RailFence => "railfence",
        }
    }

    /// Upper-case label for status lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Caesar => "CAESAR",
            Self::Vigenere => "VIGENERE",
            Self::RailFence => "RAILFENCE",
        }
    }

    /// An example key, suitable as an input placeholder.
    #[must_use]
    pub const fn key_hint(self) -> &'static str {
        match self {
            Self::Caesar => "e.g. 3 (shift 0-25)",
            Self::Vigenere => "e.g. KRYPTO (letters only)",
            Self::RailFence => "e.g. 3 (number of rails, min 2)",
        }
    }

    /// The key rule, phrased as the message shown when a key breaks it.
    #[must_use]
    pub const fn key_rule(self) -> &'static str {
        match self {
            Self::Caesar => "Caesar key must be an integer between 0 and 25.",
            Self::Vigenere => "Vigenère key must contain only the letters A-Z.",
            Self::RailFence => "Rail Fence key (rails) must be an integer between 2 and 10.",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseNameError::UnknownCipher {
                name: s.to_string(),
            })
    }
}

/// A key that has passed validation, tagged with its cipher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "cipher", rename_all = "lowercase")]
pub enum CipherKey {
    /// A Caesar shift.
    Caesar(Caesar),
    /// A Vigenère letter key.
    Vigenere(Vigenere),
    /// A Rail Fence rail count.
    #[serde(rename = "railfence")]
    RailFence(RailFence),
}

impl CipherKey {
    /// The cipher this key belongs to.
    #[must_use]
    pub const fn kind(&self) -> CipherKind {
        match self {
            Self::Caesar(_) => CipherKind::Caesar,
            Self::Vigenere(_) => CipherKind::Vigenere,
            Self::RailFence(_) => CipherKind::RailFence,
        }
    }
}

impl Cipher for CipherKey {
    fn encrypt(&self, text: &NormalizedText) -> NormalizedText {
        match self {
            Self::Caesar(c) => c.encrypt(text),
            Self::Vigenere(c) => c.encrypt(text),
            Self::RailFence(c) => c.encrypt(text),
        }
    }

    fn decrypt(&self, text: &NormalizedText) -> NormalizedText {
        match self {
            Self::Caesar(c) => c.decrypt(text),
            Self::Vigenere(c) => c.decrypt(text),
            Self::RailFence(c) => c.decrypt(text),
        }
    }
}

/// Checks `raw_key` against the rules of `cipher`.
///
/// `plaintext_len` is the length of the already normalized text; only Rail
/// Fence looks at it. Never panics, so it is safe to call on every keystroke.
///
/// # Errors
///
/// - [`ValidationError::InvalidKeyFormat`] when the key text breaks the
///   cipher's syntax or range rule.
/// - [`ValidationError::InputTooShort`] when Rail Fence gets fewer than
///   [`MIN_RAIL_FENCE_LENGTH`] letters.
/// - [`ValidationError::RailCountTooLarge`] when the rail count is not
///   strictly below `plaintext_len`.
pub fn validate(
    cipher: CipherKind,
    raw_key: &str,
    plaintext_len: usize,
) -> Result<CipherKey, ValidationError> {
    let result = match cipher {
        CipherKind::Caesar => validate_caesar(raw_key),
        CipherKind::Vigenere => validate_vigenere(raw_key),
        CipherKind::RailFence => validate_rail_fence(raw_key, plaintext_len),
    };
    match &result {
        Ok(_) => debug!("Accepted {cipher} key {raw_key:?}"),
        Err(e) => debug!("Rejected {cipher} key {raw_key:?}: {e}"),
    }
    result
}

fn validate_caesar(raw_key: &str) -> Result<CipherKey, ValidationError> {
    let shift = parse_exact_int(raw_key)
        .filter(|n| CAESAR_SHIFTS.contains(n))
        .and_then(|n| u8::try_from(n).ok())
        .ok_or(ValidationError::InvalidKeyFormat {
            cipher: CipherKind::Caesar,
        })?;
    Ok(CipherKey::Caesar(Caesar::new(shift)))
}

fn validate_vigenere(raw_key: &str) -> Result<CipherKey, ValidationError> {
    let letters = normalize(raw_key);
    if letters.is_empty() || raw_key.to_uppercase() != letters.as_str() {
        return Err(ValidationError::InvalidKeyFormat {
            cipher: CipherKind::Vigenere,
        });
    }
    Ok(CipherKey::Vigenere(Vigenere::new(letters)))
}

fn validate_rail_fence(raw_key: &str, plaintext_len: usize) -> Result<CipherKey, ValidationError> {
    let rails = parse_exact_int(raw_key)
        .filter(|n| RAIL_COUNTS.contains(n))
        .ok_or(ValidationError::InvalidKeyFormat {
            cipher: CipherKind::RailFence,
        })?;
    if plaintext_len < MIN_RAIL_FENCE_LENGTH {
        return Err(ValidationError::InputTooShort {
            length: plaintext_len,
            minimum: MIN_RAIL_FENCE_LENGTH,
        });
    }
    if plaintext_len <= rails {
        return Err(ValidationError::RailCountTooLarge {
            rails,
            length: plaintext_len,
        });
    }
    Ok(CipherKey::RailFence(RailFence::new(rails)))
}

/// Parses a trimmed, canonical decimal literal.
///
/// Signs, leading zeros, fractions and trailing garbage are all rejected, so
/// the value prints back as exactly the trimmed input.
fn parse_exact_int(raw: &str) -> Option<usize> {
    // U+FEFF is not `char::is_whitespace`, but pasted keys often carry one.
    let digits = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse().ok()
}
