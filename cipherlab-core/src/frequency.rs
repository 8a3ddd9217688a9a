// File:    frequency.rs
// Author:  apezoo
// Date:    2026-10-16
//
// Description: Letter frequency analysis over normalized text.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::text::NormalizedText;
use serde::Serialize;

/// Occurrence count and share of a single letter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LetterFrequency {
    /// The letter, `A`-`Z`.
    pub letter: char,
    /// How often the letter occurs.
    pub count: usize,
    /// `count / total`, or 0 when the text is empty.
    pub proportion: f64,
}

impl LetterFrequency {
    /// The proportion as a percentage (0-100).
    #[must_use]
    pub fn percentage(&self) -> f64 {
        self.proportion * 100.0
    }
}

/// Counts and proportions for all 26 letters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    total: usize,
    letters: Vec<LetterFrequency>,
}

impl FrequencyTable {
    /// Length of the analyzed text.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// All 26 entries in alphabetical order, including absent letters.
    #[must_use]
    pub fn letters(&self) -> &[LetterFrequency] {
        &self.letters
    }

    /// The entry for `letter`, case-insensitive. `None` for non-letters.
    #[must_use]
    pub fn get(&self, letter: char) -> Option<&LetterFrequency> {
        let upper = letter.to_ascii_uppercase();
        self.letters.iter().find(|f| f.letter == upper)
    }

    /// Letters that occur at least once, most frequent first.
    ///
    /// Ties keep alphabetical order.
    #[must_use]
    pub fn ranked(&self) -> Vec<&LetterFrequency> {
        let mut present: Vec<_> = self.letters.iter().filter(|f| f.count > 0).collect();
        present.sort_by(|a, b| b.count.cmp(&a.count));
        present
    }
}

/// Counts every letter of `text`.
///
/// An empty text yields 26 zero entries.
#[must_use]
pub fn analyze(text: &NormalizedText) -> FrequencyTable {
    let mut counts = [0usize; crate::ALPHABET_SIZE];
    for &b in text.as_bytes() {
        counts[usize::from(b - b'A')] += 1;
    }

    let total = text.len();
    #[allow(clippy::cast_precision_loss)]
    let letters = ('A'..='Z')
        .zip(counts)
        .map(|(letter, count)| LetterFrequency {
            letter,
            count,
            proportion: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            },
        })
        .collect();

    FrequencyTable { total, letters }
}
