// File:    text.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Canonicalizes raw input into the uppercase A-Z alphabet used by every cipher and analysis tool.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Text normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sequence of uppercase letters `A`-`Z`.
///
/// The only way to build one is through [`normalize`] (or the cipher engine,
/// which maps normalized text to normalized text), so every byte is known to
/// be an ASCII uppercase letter. The empty sequence is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Wraps letters produced inside the crate. Callers must uphold the A-Z invariant.
    pub(crate) fn from_letters(letters: String) -> Self {
        debug_assert!(letters.bytes().all(|b| b.is_ascii_uppercase()));
        Self(letters)
    }

    /// Returns the letters as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the letters as bytes, each in `b'A'..=b'Z'`.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the text and returns the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Upper-cases `raw` and drops every character outside `A`-`Z`.
///
/// Never fails. Case mapping runs before filtering, so a character whose
/// uppercase form is ASCII survives (`ß` becomes `SS`).
#[must_use]
pub fn normalize(raw: &str) -> NormalizedText {
    let letters = raw
        .chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .collect();
    NormalizedText::from_letters(letters)
}

/// Like [`normalize`], but a missing input yields empty text.
#[must_use]
pub fn normalize_optional(raw: Option<&str>) -> NormalizedText {
    raw.map(normalize).unwrap_or_default()
}

/// Raw and normalized character counts of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharCounts {
    /// Characters in the raw input.
    pub raw: usize,
    /// Letters left after normalization.
    pub normalized: usize,
}

/// Counts characters before and after normalization.
#[must_use]
pub fn char_counts(raw: &str) -> CharCounts {
    CharCounts {
        raw: raw.chars().count(),
        normalized: normalize(raw).len(),
    }
}
